//! Typed failures for prediction requests.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by the classification request in `net::api`.
///
/// Every variant funnels to the same user-visible failure line; the specific
/// variant is what gets written to the diagnostic log.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the connection dropped mid-flight.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success HTTP status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The response body did not match the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}
