//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional; command-line flags take precedence.
//! - `BOWLERIA_API_BASE` - shop API base URL (default: `http://127.0.0.1:8000/api`)
//! - `BOWLERIA_CART_PATH` - cart storage slot path (default: `~/.local/share/bowleria/cart.json`)
//! - `BOWLERIA_HTTP_TIMEOUT_SECS` - API request timeout in seconds (default: 10)
//! - `RUST_LOG` - tracing filter (default: `bowleria=info`)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api";
const DEFAULT_TIMEOUT_SECS: &str = "10";

/// File name of the cart storage slot.
const CART_FILE: &str = "cart.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Invalid API base URL '{0}': {1}")]
    InvalidApiBase(String, url::ParseError),
}

/// Values from the command line that override the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_base: Option<String>,
    pub cart_path: Option<PathBuf>,
}

/// Resolved storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the shop API.
    pub api_base: Url,
    /// Path of the cart storage slot.
    pub cart_path: PathBuf,
    /// Timeout applied to every API request.
    pub http_timeout: Duration,
}

impl StorefrontConfig {
    /// Load configuration from the environment, applying CLI overrides.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the API base URL or a variable fails to
    /// parse. Configuration is the only startup-fatal error path.
    pub fn load(overrides: &Overrides) -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw_base = overrides
            .api_base
            .clone()
            .or_else(|| get_optional_env("BOWLERIA_API_BASE"))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let api_base =
            Url::parse(&raw_base).map_err(|e| ConfigError::InvalidApiBase(raw_base, e))?;

        let cart_path = overrides
            .cart_path
            .clone()
            .or_else(|| get_optional_env("BOWLERIA_CART_PATH").map(PathBuf::from))
            .unwrap_or_else(default_cart_path);

        let timeout_secs = get_env_or_default("BOWLERIA_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("BOWLERIA_HTTP_TIMEOUT_SECS".to_string(), e.to_string())
            })?;

        Ok(Self {
            api_base,
            cart_path,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Default slot under the user's data directory, or the working directory
/// when no home is known.
fn default_cart_path() -> PathBuf {
    std::env::var_os("HOME").map_or_else(
        || PathBuf::from(CART_FILE),
        |home| {
            PathBuf::from(home)
                .join(".local/share/bowleria")
                .join(CART_FILE)
        },
    )
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn override_api_base_wins() {
        let overrides = Overrides {
            api_base: Some("http://10.0.0.5:9000/api".to_string()),
            cart_path: Some(PathBuf::from("/tmp/cart.json")),
        };

        let config = StorefrontConfig::load(&overrides).unwrap();

        assert_eq!(config.api_base.as_str(), "http://10.0.0.5:9000/api");
        assert_eq!(config.cart_path, PathBuf::from("/tmp/cart.json"));
    }

    #[test]
    fn invalid_api_base_is_rejected() {
        let overrides = Overrides {
            api_base: Some("not a url".to_string()),
            cart_path: None,
        };

        let result = StorefrontConfig::load(&overrides);

        assert!(matches!(result, Err(ConfigError::InvalidApiBase(_, _))));
    }

    #[test]
    fn default_cart_path_ends_with_slot_file() {
        assert!(default_cart_path().ends_with(CART_FILE));
    }
}
