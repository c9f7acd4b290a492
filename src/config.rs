// src/config.rs
use crate::GeocodeError;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_USER_AGENT: &str = "rust-quick-geocode-client";
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ENV_SERVER: &str = "QUICK_GEOCODE_SERVER";
pub const ENV_USER_AGENT: &str = "QUICK_GEOCODE_USER_AGENT";
pub const ENV_TIMEOUT_SECS: &str = "QUICK_GEOCODE_TIMEOUT_SECS";

/// Connection settings for a [`GeocodeClient`](crate::GeocodeClient).
///
/// The configuration is fixed once the client is built; every request reuses
/// the same base URL and identification header.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Whole-request timeout. `None` leaves the transport defaults in place.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("{}/{}", DEFAULT_USER_AGENT, CLIENT_VERSION),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Reads the configuration from the process environment, loading a `.env`
    /// file first if one is present.
    ///
    /// Unset variables fall back to the defaults. A timeout that is not a
    /// whole number of seconds is rejected.
    pub fn from_env() -> Result<Self, GeocodeError> {
        // A missing .env file is not an error.
        let _ = dotenvy::dotenv();

        let mut config = Self::default();
        if let Ok(server) = std::env::var(ENV_SERVER) {
            config.base_url = server;
        }
        if let Ok(agent) = std::env::var(ENV_USER_AGENT) {
            config.user_agent = agent;
        }
        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                GeocodeError::InvalidConfig(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    ENV_TIMEOUT_SECS, raw
                ))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

/// Normalizes a user-supplied server URL: adds `http://` when no scheme is
/// given, rejects URLs that cannot act as a base and trims trailing slashes.
pub(crate) fn normalize_base_url(server_url: &str) -> Result<String, GeocodeError> {
    let trimmed = server_url.trim();
    if trimmed.is_empty() {
        return Err(GeocodeError::InvalidConfig(
            "server URL must not be empty".to_string(),
        ));
    }

    let mut with_scheme = trimmed.to_string();
    if !with_scheme.starts_with("http://") && !with_scheme.starts_with("https://") {
        with_scheme = format!("http://{}", with_scheme);
    }

    let parsed = Url::parse(&with_scheme)?;
    if parsed.cannot_be_a_base() {
        return Err(GeocodeError::InvalidUrl(format!(
            "'{}' cannot be used as a base URL",
            server_url
        )));
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
