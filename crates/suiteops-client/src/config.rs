//! PMS client configuration.
//!
//! Configures the service base URL and request timeout. Defaults match the
//! development deployment the dashboard pages were written against.
//! Override via environment variables or explicit construction for
//! staging/testing.

use url::Url;
use zeroize::Zeroizing;

/// Configuration for connecting to the PMS service.
///
/// Custom `Debug` implementation redacts the session token to prevent
/// credential leakage in log output.
#[derive(Clone)]
pub struct PmsApiConfig {
    /// Base URL of the PMS REST service.
    /// Default: `http://localhost:3333`
    pub base_url: Url,
    /// Session token issued by `/signIn`, attached as a bearer header.
    /// `None` for unauthenticated calls (sign-in and registration).
    pub session_token: Option<Zeroizing<String>>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for PmsApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PmsApiConfig")
            .field("base_url", &self.base_url)
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl PmsApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `SUITEOPS_API_URL` (default: `http://localhost:3333`)
    /// - `SUITEOPS_TIMEOUT_SECS` (default: 30)
    ///
    /// The session token is never read from the environment; callers
    /// attach it with [`PmsApiConfig::with_session_token`] after loading
    /// a stored session.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env_url("SUITEOPS_API_URL", "http://localhost:3333")?,
            session_token: None,
            timeout_secs: std::env::var("SUITEOPS_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Attach a session token to an existing configuration.
    pub fn with_session_token(mut self, token: String) -> Self {
        self.session_token = Some(Zeroizing::new(token));
        self
    }

    /// Create a configuration pointing at a local mock server (for
    /// testing). Short timeout, no session token.
    pub fn local_mock(base_url: Url) -> Self {
        Self {
            base_url,
            session_token: None,
            timeout_secs: 5,
        }
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A base URL could not be parsed.
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    /// The session token contains bytes that cannot form a header value.
    #[error("session token is not a valid header value")]
    InvalidToken,
}
