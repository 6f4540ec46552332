//! The single error type for one-shot requests.
//!
//! Everything that can go wrong - session construction, an invalid method or
//! header token, and any failure during the network call (connect, DNS, TLS,
//! timeout, malformed URL) - surfaces as [`TransportError`]. The display
//! message carries the transport's diagnostic text verbatim; there is no
//! retryable-vs-fatal taxonomy and no structured error codes.
//!
//! HTTP error statuses (4xx/5xx) are not errors here: they come back as
//! ordinary [`Response`](crate::Response) values whose `status` field the
//! caller must check.

use thiserror::Error;

/// Failure to complete a one-shot request.
#[derive(Debug, Error)]
#[error("transport failure for {url}: {message}")]
pub struct TransportError {
    /// The URL the failed request targeted.
    url: String,
    /// The transport's human-readable diagnostic, passed through verbatim.
    message: String,
    /// The underlying transport error, when one exists.
    #[source]
    source: Option<reqwest::Error>,
}

impl TransportError {
    /// Creates an error from a transport-level failure.
    pub(crate) fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self {
            url: url.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Creates an error from a local diagnostic with no transport source
    /// (e.g. an invalid method token or header name).
    pub(crate) fn diagnostic(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            message: message.into(),
            source: None,
        }
    }

    /// The URL the failed request targeted.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The transport's diagnostic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the failure was the configured time limit expiring.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.source.as_ref().is_some_and(reqwest::Error::is_timeout)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_url_and_diagnostic() {
        let error = TransportError::diagnostic("http://example.com", "name resolution failed");
        let msg = error.to_string();
        assert!(msg.contains("http://example.com"), "Expected URL in: {msg}");
        assert!(
            msg.contains("name resolution failed"),
            "Expected diagnostic in: {msg}"
        );
    }

    #[test]
    fn diagnostic_error_has_no_source_and_is_not_timeout() {
        let error = TransportError::diagnostic("http://example.com", "bad header");
        assert!(std::error::Error::source(&error).is_none());
        assert!(!error.is_timeout());
    }
}
