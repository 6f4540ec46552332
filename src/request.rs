//! Fluent request builder and one-shot execution.
//!
//! A [`Request`] accumulates method, URL, body, headers, and timeout through
//! chained by-value calls, then performs exactly one blocking network call
//! when finalized with [`send`](Request::send). The builder is consumed on
//! finalization, so a request cannot be reused after it has run.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, instrument};

use crate::error::TransportError;
use crate::response::Response;

/// A single HTTP request under construction.
///
/// Defaults: method `GET`, empty body, no headers, no explicit time limit.
/// Configuration calls take and return the builder by value for chaining.
///
/// # Example
///
/// ```no_run
/// # fn example() -> Result<(), onereq::TransportError> {
/// let response = onereq::post("https://example.com/api")
///     .header("Content-Type", "application/json")
///     .body(r#"{"name":"test"}"#)
///     .timeout(10)
///     .send()?;
/// println!("{}: {}", response.status, response.text);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Request {
    url: String,
    method: String,
    body: String,
    headers: BTreeMap<String, String>,
    timeout_secs: u64,
}

impl Request {
    /// Creates a builder targeting `url`.
    ///
    /// The URL is not validated locally; a malformed URL surfaces as a
    /// [`TransportError`] when the request is sent.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: String::from("GET"),
            body: String::new(),
            headers: BTreeMap::new(),
            timeout_secs: 0,
        }
    }

    /// Sets the request method.
    ///
    /// Any token is accepted, including non-standard verbs; the method is
    /// always transmitted explicitly, even with an empty body.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Sets the request body, transmitted as-is with no content-type
    /// inference. Set a `Content-Type` header explicitly if one is needed.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Inserts or overwrites a header. The last value set for a given key
    /// is the one transmitted.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets a time limit in seconds for the whole call.
    ///
    /// Zero (the default) imposes no explicit limit: the call may block
    /// until the operating system gives up on the connection.
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    /// Executes the configured request exactly once, blocking the calling
    /// thread for the duration of the round trip.
    ///
    /// A fresh transport session is built for this call and released when
    /// it returns, on every exit path. Nothing is shared across requests,
    /// so concurrent `send` calls need no coordination.
    ///
    /// Must not be called from inside an async runtime; the blocking
    /// transport refuses to run there.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the session cannot be constructed, the
    /// method or a header is not a valid token, or the transport fails
    /// during the call (connection refused, DNS failure, TLS failure,
    /// timeout, malformed URL). An HTTP error status is not an error: the
    /// response comes back `Ok` with that status code.
    #[instrument(level = "debug", skip(self), fields(url = %self.url, method = %self.method))]
    pub fn send(self) -> Result<Response, TransportError> {
        let timeout = (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs));
        let session = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::transport(self.url.as_str(), e))?;

        let method = Method::from_bytes(self.method.as_bytes())
            .map_err(|e| TransportError::diagnostic(self.url.as_str(), e.to_string()))?;

        let mut headers = HeaderMap::new();
        for (key, value) in &self.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| TransportError::diagnostic(self.url.as_str(), e.to_string()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| TransportError::diagnostic(self.url.as_str(), e.to_string()))?;
            headers.insert(name, value);
        }

        debug!(headers = self.headers.len(), body_bytes = self.body.len(), "sending request");

        let mut request = session.request(method, self.url.as_str()).headers(headers);
        if !self.body.is_empty() {
            request = request.body(self.body);
        }

        let response = request
            .send()
            .map_err(|e| TransportError::transport(self.url.as_str(), e))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .map_err(|e| TransportError::transport(self.url.as_str(), e))?;
        let text = String::from_utf8_lossy(&bytes).into_owned();

        debug!(status, body_bytes = text.len(), "request complete");

        Ok(Response { status, text })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_request_defaults_to_get_with_empty_state() {
        let request = Request::new("http://example.com");
        assert_eq!(request.method, "GET");
        assert!(request.body.is_empty());
        assert!(request.headers.is_empty());
        assert_eq!(request.timeout_secs, 0);
    }

    #[test]
    fn last_header_value_wins_for_same_key() {
        let request = Request::new("http://example.com")
            .header("X-Token", "1")
            .header("X-Token", "2");
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.headers.get("X-Token").unwrap(), "2");
    }

    #[test]
    fn distinct_header_keys_are_all_kept() {
        let request = Request::new("http://example.com")
            .header("A", "1")
            .header("B", "2");
        assert_eq!(request.headers.len(), 2);
        assert_eq!(request.headers.get("A").unwrap(), "1");
        assert_eq!(request.headers.get("B").unwrap(), "2");
    }

    #[test]
    fn chained_configuration_accumulates() {
        let request = Request::new("http://example.com")
            .method("PUT")
            .body("payload")
            .timeout(5);
        assert_eq!(request.method, "PUT");
        assert_eq!(request.body, "payload");
        assert_eq!(request.timeout_secs, 5);
    }

    #[test]
    fn arbitrary_method_token_is_accepted_by_the_builder() {
        let request = Request::new("http://example.com").method("PROPFIND");
        assert_eq!(request.method, "PROPFIND");
    }
}
