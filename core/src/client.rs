//! Request builder, response parser, and one-shot fetch for the fruit API.
//!
//! # Design
//! `FruitClient` holds only the endpoint URL and the request timeout. A
//! lookup is split into `build_get_fruit`, which validates and normalizes the
//! name into an `HttpRequest`, and `parse_get_fruit`, which maps an
//! `HttpResponse` onto a `FruitRecord` or a `FruitError`. `fetch` runs the
//! two around a caller-supplied `Transport`. Nothing is cached or retried.

use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::error::FruitError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{FruitRecord, FruitResponse};

/// Public FruityVice endpoint for single-fruit lookups.
pub const DEFAULT_BASE_URL: &str = "https://www.fruityvice.com/api/fruit";

/// Upper bound on one lookup round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Synchronous, stateless client for the fruit API.
#[derive(Debug, Clone)]
pub struct FruitClient {
    base_url: Url,
    timeout: Duration,
}

impl FruitClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build the GET request for `name`.
    ///
    /// The name is trimmed, lowercased, and appended to the base URL as a
    /// single percent-encoded path segment.
    pub fn build_get_fruit(&self, name: &str) -> Result<HttpRequest, FruitError> {
        let normalized = normalize_name(name)?;

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                FruitError::InvalidInput(format!("'{}' cannot be used as a base URL", self.base_url))
            })?
            .pop_if_empty()
            .push(&normalized);

        Ok(HttpRequest {
            url: url.into(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
            timeout: self.timeout,
        })
    }

    /// Interpret the response to a lookup of `name`.
    ///
    /// `name` is only used to label a `NotFound` error and is reported as the
    /// caller passed it, before normalization.
    pub fn parse_get_fruit(&self, name: &str, response: HttpResponse) -> Result<FruitRecord, FruitError> {
        check_status(name, &response)?;
        let raw: FruitResponse = serde_json::from_slice(&response.body).map_err(|e| FruitError::ApiError {
            status: response.status,
            detail: Some(e.to_string()),
        })?;
        Ok(raw.into())
    }

    /// Look up `name` with a single round trip through `transport`.
    ///
    /// An invalid name fails before the transport is touched.
    pub fn fetch<T: Transport + ?Sized>(&self, name: &str, transport: &T) -> Result<FruitRecord, FruitError> {
        let request = self.build_get_fruit(name)?;
        debug!(url = %request.url, timeout = ?request.timeout, "requesting fruit");

        let response = transport.execute(&request).inspect_err(|e| debug!(error = %e, "transport failed"))?;
        debug!(status = response.status, bytes = response.body.len(), "received response");

        self.parse_get_fruit(name, response)
    }
}

/// Trim and lowercase a fruit name, rejecting names that end up empty.
pub fn normalize_name(name: &str) -> Result<String, FruitError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FruitError::InvalidInput("Fruit name can't be empty".to_string()));
    }
    Ok(trimmed.to_lowercase())
}

/// Map non-success status codes to the appropriate `FruitError` variant.
fn check_status(name: &str, response: &HttpResponse) -> Result<(), FruitError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(FruitError::NotFound { name: name.to_string() });
    }
    Err(FruitError::ApiError {
        status: response.status,
        detail: None,
    })
}
