//! Client configuration loaded from environment variables.
//!
//! The API base URL is resolved once at startup from the build mode; an
//! explicit override is honoured for staging backends and tests.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Base URL used in development builds.
pub const DEV_API_BASE_URL: &str = "http://localhost:3000/api/v1";
/// Base URL used in production builds.
pub const PROD_API_BASE_URL: &str = "https://api.mma-universe.com/api/v1";
/// Default per-request timeout (30 seconds).
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Which backend the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// Mode implied by how this binary was compiled.
    pub fn from_build() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }

    pub fn api_base_url(self) -> &'static str {
        match self {
            BuildMode::Development => DEV_API_BASE_URL,
            BuildMode::Production => PROD_API_BASE_URL,
        }
    }
}

impl std::str::FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(BuildMode::Development),
            "production" | "prod" => Ok(BuildMode::Production),
            other => Err(ConfigError::Invalid("MMA_BUILD_MODE", other.to_string())),
        }
    }
}

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub build_mode: BuildMode,
    /// Base URL including the `/api/v1` prefix, without trailing slash
    pub api_base_url: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Directory holding persisted client state
    pub state_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let build_mode = match env::var("MMA_BUILD_MODE") {
            Ok(v) => v.parse()?,
            Err(_) => BuildMode::from_build(),
        };

        let api_base_url = env::var("MMA_API_BASE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|_| build_mode.api_base_url().to_string());

        let request_timeout = match env::var("MMA_REQUEST_TIMEOUT_MS") {
            Ok(v) => Duration::from_millis(
                v.trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid("MMA_REQUEST_TIMEOUT_MS", v.clone()))?,
            ),
            Err(_) => Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        };

        Ok(Self {
            build_mode,
            api_base_url,
            request_timeout,
            state_dir: env::var("MMA_STATE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".mma-universe")),
        })
    }

    /// Config pointing at an arbitrary base URL, for tests.
    pub fn test_default(api_base_url: &str) -> Self {
        Self {
            build_mode: BuildMode::Development,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            state_dir: env::temp_dir().join("mma-universe-test"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_mode_parse() {
        assert_eq!("production".parse::<BuildMode>().unwrap(), BuildMode::Production);
        assert_eq!(" Dev ".parse::<BuildMode>().unwrap(), BuildMode::Development);
        assert!("staging".parse::<BuildMode>().is_err());
    }

    #[test]
    fn test_config_from_env() {
        env::set_var("MMA_BUILD_MODE", "production");
        env::set_var("MMA_REQUEST_TIMEOUT_MS", "5000");
        env::remove_var("MMA_API_BASE_URL");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.build_mode, BuildMode::Production);
        assert_eq!(config.api_base_url, PROD_API_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(5));

        env::remove_var("MMA_BUILD_MODE");
        env::remove_var("MMA_REQUEST_TIMEOUT_MS");
    }

    #[test]
    fn test_test_default_strips_trailing_slash() {
        let config = Config::test_default("http://127.0.0.1:9999/api/v1/");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9999/api/v1");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
