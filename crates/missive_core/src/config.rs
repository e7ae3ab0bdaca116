//! Client configuration.

use derive_getters::Getters;
use missive_error::{ConfigError, MissiveResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

fn default_request_timeout() -> u64 {
    60
}

fn default_resource_timeout() -> u64 {
    120
}

/// Configuration for the generation client.
///
/// The base URL is deployment configuration, never hard-coded logic.
///
/// # Examples
///
/// ```
/// use missive_core::ClientConfig;
///
/// let config: ClientConfig = toml::from_str(
///     "base_url = \"https://api.example.com/api\"",
/// ).unwrap();
/// assert_eq!(*config.request_timeout_secs(), 60);
/// assert_eq!(*config.resource_timeout_secs(), 120);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct ClientConfig {
    /// Base URL of the generation backend
    base_url: String,
    /// Per-request timeout (seconds)
    #[serde(default = "default_request_timeout")]
    request_timeout_secs: u64,
    /// Hard ceiling per resource fetch (seconds)
    #[serde(default = "default_resource_timeout")]
    resource_timeout_secs: u64,
    /// Anonymous device-scoped user identifier
    #[serde(default)]
    user_id: Option<String>,
}

impl ClientConfig {
    /// Creates a configuration with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout_secs: default_request_timeout(),
            resource_timeout_secs: default_resource_timeout(),
            user_id: None,
        }
    }

    /// Load client configuration from a TOML file.
    #[tracing::instrument(skip(path))]
    pub fn from_file(path: impl AsRef<Path>) -> MissiveResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::read(path.as_ref(), e.to_string()))?;

        Ok(toml::from_str(&content).map_err(|e| ConfigError::parse(e.to_string()))?)
    }

    /// Sets the user identifier.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Per-request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resource-fetch ceiling as a [`Duration`].
    pub fn resource_timeout(&self) -> Duration {
        Duration::from_secs(self.resource_timeout_secs)
    }
}

/// Generates a fresh anonymous user identifier.
///
/// Stand-in for a device-scoped vendor identifier; callers are expected to
/// persist the value and reuse it across sessions.
pub fn anonymous_user_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
