//! Generation client error types.

/// Errors from the generation backend client.
///
/// Transport failures (DNS, connection refused, timeout) are kept distinct
/// from HTTP-level failures: a `Transport` error means no usable HTTP
/// response arrived, while `Api` means the server answered with a non-2xx
/// status.
#[derive(Debug, Clone, derive_more::Display)]
pub enum ClientError {
    /// Endpoint URL construction failed (client misconfiguration).
    #[display("Invalid URL: {}", _0)]
    InvalidUrl(String),

    /// Server answered with a non-2xx status.
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Response body or payload did not match the expected shape.
    #[display("Decoding failed: {}", _0)]
    Decoding(String),

    /// Transport-level failure: connectivity, DNS, or timeout.
    #[display("Transport error: {}", message)]
    Transport {
        /// Underlying error message
        message: String,
        /// Whether the failure was a timeout
        timeout: bool,
    },
}

impl ClientError {
    /// True when the error was a transport-level timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Transport { timeout: true, .. })
    }
}

impl std::error::Error for ClientError {}
