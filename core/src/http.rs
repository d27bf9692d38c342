//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. `FruitClient` builds an
//! `HttpRequest` and parses an `HttpResponse`; the only network access goes
//! through the `Transport` seam, which the binary implements with a blocking
//! HTTP agent and tests implement with in-memory fakes.
//!
//! Non-2xx statuses are returned as ordinary `HttpResponse` values. A
//! `TransportError` means no status line was obtained at all; once a status
//! is known, the response is data and the body is left undecoded.

use std::fmt;
use std::time::Duration;

/// A GET request described as plain data.
///
/// Built by `FruitClient::build_get_fruit`. `timeout` bounds the whole
/// round trip, connect through body read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
}

/// An HTTP response described as plain data.
///
/// `body` holds the raw bytes. A body that could not be read in full is
/// left empty; the status still decides the outcome.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Why a request produced no response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// DNS failure, refused connection, TLS failure, reset before the status.
    Connect(String),

    /// The request did not complete within `HttpRequest::timeout`.
    Timeout,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Connect(detail) => write!(f, "connection failed: {detail}"),
            TransportError::Timeout => write!(f, "request timed out"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Executes one `HttpRequest`.
///
/// Implementations must not retry and must report every received status,
/// 4xx and 5xx included, as `Ok`, whatever happens while reading the body.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}
