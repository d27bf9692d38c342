//! Error types for the fruit lookup client.
//!
//! # Design
//! Four kinds, all terminal for an invocation. `Unreachable` wraps the
//! `TransportError` so the connect and timeout cases keep distinct messages
//! while callers match on a single kind. A 2xx response whose body cannot be
//! decoded is reported as `ApiError` with `detail` set: the API answered, but
//! not with something usable.

use std::fmt;

use crate::http::TransportError;

/// Exit status for every handled lookup failure.
pub const EXIT_FAILURE: i32 = 2;

/// Errors returned by `FruitClient`.
#[derive(Debug)]
pub enum FruitError {
    /// The fruit name was empty or whitespace, or the request could not be
    /// composed from it.
    InvalidInput(String),

    /// No response was obtained from the API.
    Unreachable(TransportError),

    /// The API returned 404 for the fruit, named as the caller gave it.
    NotFound { name: String },

    /// Any other non-2xx status, or a 2xx with an undecodable body.
    ApiError { status: u16, detail: Option<String> },
}

impl FruitError {
    /// Return the CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_)
            | Self::Unreachable(_)
            | Self::NotFound { .. }
            | Self::ApiError { .. } => EXIT_FAILURE,
        }
    }
}

impl fmt::Display for FruitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FruitError::InvalidInput(msg) => write!(f, "{msg}"),
            FruitError::Unreachable(TransportError::Connect(_)) => write!(
                f,
                "Could not reach the FruityVice API. Please check your internet connection."
            ),
            FruitError::Unreachable(TransportError::Timeout) => {
                write!(f, "Request timed out. FruityVice API may not be available.")
            }
            FruitError::NotFound { name } => write!(f, "Fruit '{name}' not found"),
            FruitError::ApiError { status, detail: None } => {
                write!(f, "FruityVice API returned HTTP {status}")
            }
            FruitError::ApiError {
                status,
                detail: Some(detail),
            } => write!(
                f,
                "FruityVice API returned HTTP {status}: unreadable response body ({detail})"
            ),
        }
    }
}

impl std::error::Error for FruitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FruitError::Unreachable(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<TransportError> for FruitError {
    fn from(err: TransportError) -> Self {
        FruitError::Unreachable(err)
    }
}
