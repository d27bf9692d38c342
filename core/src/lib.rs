//! Synchronous lookup client core for the FruityVice fruit API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! owning any I/O (host-does-IO pattern). The one network round trip goes
//! through the `Transport` trait, so the core stays deterministic and the
//! binary chooses the HTTP stack.
//!
//! # Design
//! - `FruitClient` is stateless: it holds only the base URL and timeout.
//! - A lookup is `build_get_fruit` + `Transport::execute` +
//!   `parse_get_fruit`; `fetch` chains the three.
//! - Wire DTOs (`FruitResponse`) are all-optional; `FruitRecord` is the
//!   flattened result both formatters consume.
//! - Failures are one of four `FruitError` kinds and never retried.

pub mod client;
pub mod error;
pub mod format;
pub mod http;
pub mod types;

pub use client::{normalize_name, FruitClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{FruitError, EXIT_FAILURE};
pub use format::{human, machine, OutputFormat};
pub use http::{HttpRequest, HttpResponse, Transport, TransportError};
pub use types::{FruitRecord, FruitResponse, Nutritions};
pub use url::Url;
