//! Error types for the Missive assistant library.
//!
//! Each concern gets its own error type; `MissiveError` combines them for
//! callers that cross crate boundaries.

mod client;
mod config;

pub use client::ClientError;
pub use config::{ConfigError, ConfigErrorKind};

/// Combined error type for Missive operations.
#[derive(Debug, Clone, derive_more::Display, derive_more::From)]
pub enum MissiveError {
    /// Generation client error
    #[display("{}", _0)]
    Client(ClientError),
    /// Configuration error
    #[display("{}", _0)]
    Config(ConfigError),
}

impl std::error::Error for MissiveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MissiveError::Client(e) => Some(e),
            MissiveError::Config(e) => Some(e),
        }
    }
}

/// Result alias for Missive operations.
pub type MissiveResult<T> = Result<T, MissiveError>;
