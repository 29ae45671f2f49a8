use std::time::Duration;

use crate::error::ClientError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_USER_AGENT: &str = concat!("botman-client/", env!("CARGO_PKG_VERSION"));

const ENV_BASE_URL: &str = "BOTMAN_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "BOTMAN_TIMEOUT_SECS";
const ENV_USER_AGENT: &str = "BOTMAN_USER_AGENT";

/// Configuration for [`BotmanClient`](crate::BotmanClient)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Create configuration from environment variables
    ///
    /// Expects:
    /// - `BOTMAN_BASE_URL`: API host base URL (required)
    /// - `BOTMAN_TIMEOUT_SECS`: request timeout in seconds (default: 30)
    /// - `BOTMAN_USER_AGENT`: User-Agent header (default: `botman-client/<version>`)
    ///
    /// # Errors
    /// Returns [`ClientError::Config`] when the base URL is missing or the
    /// timeout is not a positive integer.
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = std::env::var(ENV_BASE_URL)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ClientError::Config(format!("{ENV_BASE_URL} not set")))?;

        let mut config = Self::new(base_url);

        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| {
                    ClientError::Config(format!(
                        "{ENV_TIMEOUT_SECS} must be a positive integer, got {raw:?}"
                    ))
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Ok(user_agent) = std::env::var(ENV_USER_AGENT)
            && !user_agent.is_empty()
        {
            config.user_agent = user_agent;
        }

        Ok(config)
    }
}
