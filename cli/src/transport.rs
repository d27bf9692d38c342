//! Blocking `Transport` backed by ureq.

use std::io;

use fruit_core::{HttpRequest, HttpResponse, Transport, TransportError};
use tracing::{debug, trace};

/// Executes each request on a fresh agent configured from the request.
///
/// Status-code-as-error is disabled so every received status reaches the
/// client as data. The request timeout is applied globally, covering
/// resolve, connect, send, and body read. Failures after the status line
/// leave the body empty instead of failing the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct UreqTransport;

impl Transport for UreqTransport {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(req.timeout))
            .build()
            .new_agent();

        let mut builder = agent.get(&req.url);
        for (name, value) in &req.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder.call().map_err(classify)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_string())))
            .collect();
        let body = response.body_mut().read_to_vec().unwrap_or_else(|e| {
            debug!(status, error = %e, "discarding unreadable response body");
            Vec::new()
        });
        trace!(status, body = %String::from_utf8_lossy(&body), "response body");

        Ok(HttpResponse { status, headers, body })
    }
}

/// Split ureq failures into timeouts and everything else.
pub fn classify(err: ureq::Error) -> TransportError {
    match err {
        ureq::Error::Timeout(_) => TransportError::Timeout,
        ureq::Error::Io(e) if e.kind() == io::ErrorKind::TimedOut => TransportError::Timeout,
        other => TransportError::Connect(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_timeout_is_timeout() {
        let err = ureq::Error::Io(io::Error::new(io::ErrorKind::TimedOut, "slow"));
        assert_eq!(classify(err), TransportError::Timeout);
    }

    #[test]
    fn refused_connection_is_connect() {
        let err = ureq::Error::Io(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"));
        assert!(matches!(classify(err), TransportError::Connect(_)));
    }

    #[test]
    fn host_not_found_is_connect() {
        assert!(matches!(classify(ureq::Error::HostNotFound), TransportError::Connect(_)));
    }
}
