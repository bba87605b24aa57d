//! Client configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Parse { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin, without a trailing slash.
    pub base_url: String,
    /// Key of the logged-in user, required to create games.
    pub user_key: Option<String>,
    pub timeouts: Timeouts,
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `ESCAPE3DS_BASE_URL`: default `http://127.0.0.1:8080`
    /// - `ESCAPE3DS_USER_KEY`: unset by default
    /// - `ESCAPE3DS_REQUEST_TIMEOUT_SECS`: default 30
    /// - `ESCAPE3DS_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when a timeout is not a whole number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("ESCAPE3DS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let user_key = std::env::var("ESCAPE3DS_USER_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let timeouts = Timeouts {
            request_secs: env_parse_u64("ESCAPE3DS_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
            connect_secs: env_parse_u64("ESCAPE3DS_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?,
        };
        Ok(Self::new(&base_url, user_key, timeouts))
    }

    #[must_use]
    pub fn new(base_url: &str, user_key: Option<String>, timeouts: Timeouts) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), user_key, timeouts }
    }

    /// Absolute URL for a backend path such as `/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn env_parse_u64(var: &'static str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::Parse { var, value }),
        Err(_) => Ok(default),
    }
}
