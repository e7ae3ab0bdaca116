//! Configuration error types.

use std::path::PathBuf;

/// What went wrong while building a runnable configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// Config file could not be read
    Read {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying I/O error message
        message: String,
    },
    /// Config file was not valid TOML
    Parse(String),
    /// HTTP client construction from the configuration failed
    HttpClient(String),
}

impl std::fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigErrorKind::Read { path, message } => {
                write!(f, "Failed to read config file {}: {}", path.display(), message)
            }
            ConfigErrorKind::Parse(msg) => write!(f, "Failed to parse config: {}", msg),
            ConfigErrorKind::HttpClient(msg) => {
                write!(f, "Failed to build HTTP client: {}", msg)
            }
        }
    }
}

/// Configuration error with source location.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// What failed
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given kind at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use missive_error::{ConfigError, ConfigErrorKind};
    ///
    /// let err = ConfigError::parse("expected a table");
    /// assert!(matches!(err.kind, ConfigErrorKind::Parse(_)));
    /// assert!(err.to_string().contains("expected a table"));
    /// ```
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// A config file could not be read.
    #[track_caller]
    pub fn read(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Read {
            path: path.into(),
            message: message.into(),
        })
    }

    /// A config file did not parse as TOML.
    #[track_caller]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Parse(message.into()))
    }

    /// The HTTP client could not be built from the configuration.
    #[track_caller]
    pub fn http_client(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::HttpClient(message.into()))
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ConfigError {}
