use crate::config::ConfigError;
use thiserror::Error;

/// Errors returned by [`FeedlyClient`](crate::FeedlyClient) requests.
///
/// These cover the full lifecycle of a call: building the URL, encoding the
/// payload, the HTTP exchange, and decoding the response.
#[derive(Debug, Error)]
pub enum FeedlyError {
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,
    /// Response body was not the expected JSON shape, including malformed timestamps
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
    /// Request payload could not be serialized
    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),
    /// Reading a cover image stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Response body exceeded the size limit
    #[error("Response too large (exceeds {0} bytes)")]
    ResponseTooLarge(usize),
    /// Endpoint URL could not be built from the configured base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FeedlyError {
    /// True for errors caused by the server rejecting the request.
    pub fn is_http_status(&self) -> bool {
        matches!(self, FeedlyError::HttpStatus(_))
    }

    /// Returns the HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            FeedlyError::HttpStatus(status) => Some(*status),
            FeedlyError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
