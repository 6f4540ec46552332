//! The response value produced by a finalized request.

/// Outcome of one completed request/response exchange.
///
/// Produced exactly once per finalized [`Request`](crate::Request). Any HTTP
/// status is a valid `Response` - 4xx and 5xx are not failures at this layer,
/// so callers must inspect [`status`](Self::status) themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Final numeric HTTP status code.
    pub status: u16,
    /// Full response body as text. Non-UTF-8 bytes are decoded lossily.
    pub text: String,
}
