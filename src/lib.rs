//! One-shot fluent HTTP request builder.
//!
//! This library assembles the parameters of a single HTTP request (method,
//! URL, body, headers, timeout) through chained configuration calls, then
//! performs exactly one blocking network call through [`reqwest`] and
//! collects the status and body into a plain [`Response`]. All transport
//! concerns - connection establishment, TLS, redirects, chunked decoding -
//! belong to the transport layer, not to this crate.
//!
//! There is no connection reuse across requests, no retry logic, no
//! streaming, and no caching: each [`Request`] owns its own transport
//! session for the scope of one [`send`](Request::send) call.
//!
//! # Example
//!
//! ```no_run
//! # fn example() -> Result<(), onereq::TransportError> {
//! let response = onereq::get("https://example.com")?;
//! if response.status == 200 {
//!     println!("{}", response.text);
//! }
//! # Ok(())
//! # }
//! ```

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod request;
pub mod response;

pub use error::TransportError;
pub use request::Request;
pub use response::Response;

/// Issues a GET request to `url` and finalizes it immediately.
///
/// # Errors
///
/// Returns [`TransportError`] on any transport-level failure; see
/// [`Request::send`].
pub fn get(url: impl Into<String>) -> Result<Response, TransportError> {
    Request::new(url).send()
}

/// Returns a builder preconfigured with the POST method, so body, headers,
/// and timeout can still be attached before [`send`](Request::send).
#[must_use]
pub fn post(url: impl Into<String>) -> Request {
    Request::new(url).method("POST")
}

/// Returns a builder preconfigured with the PUT method.
#[must_use]
pub fn put(url: impl Into<String>) -> Request {
    Request::new(url).method("PUT")
}

/// Returns a builder preconfigured with the PATCH method.
#[must_use]
pub fn patch(url: impl Into<String>) -> Request {
    Request::new(url).method("PATCH")
}

/// Returns a builder preconfigured with the DELETE method.
#[must_use]
pub fn delete(url: impl Into<String>) -> Request {
    Request::new(url).method("DELETE")
}
