//! Frontend Configuration
//!
//! Resolved once at startup from compile-time environment and the page origin.
//!
//! - `FRAMESTORE_API_BASE` - absolute base URL of the backend (default: page origin)
//! - `FRAMESTORE_LOG` - log level: error, warn, info, debug, trace (default: info)

use std::str::FromStr;

use log::LevelFilter;
use reqwest::Url;

use crate::error::ConfigError;

/// Used when neither an override nor a page origin is available.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base every `/api/...` path is joined onto
    pub base_url: Url,
    pub log_level: LevelFilter,
}

impl ApiConfig {
    /// Load configuration for the running page.
    ///
    /// Invalid values never abort startup: the default is used and the
    /// error is returned alongside so it can be logged once logging is up.
    pub fn load() -> (Self, Vec<ConfigError>) {
        Self::resolve(
            option_env!("FRAMESTORE_API_BASE"),
            page_origin().as_deref(),
            option_env!("FRAMESTORE_LOG"),
        )
    }

    fn resolve(
        base_override: Option<&str>,
        origin: Option<&str>,
        log_level: Option<&str>,
    ) -> (Self, Vec<ConfigError>) {
        let mut errors = Vec::new();

        let base_url = base_override
            .or(origin)
            .and_then(|raw| match parse_base_url(raw) {
                Ok(url) => Some(url),
                Err(e) => {
                    errors.push(e);
                    None
                }
            })
            .unwrap_or_else(default_base_url);

        let log_level = match log_level.map(parse_log_level) {
            Some(Ok(level)) => level,
            Some(Err(e)) => {
                errors.push(e);
                DEFAULT_LOG_LEVEL
            }
            None => DEFAULT_LOG_LEVEL,
        };

        (Self { base_url, log_level }, errors)
    }

    /// Absolute URL for an `/api/...` path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidBaseUrl(raw.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidBaseUrl(raw.to_string(), "not a base URL".into()));
    }
    Ok(url)
}

fn parse_log_level(raw: &str) -> Result<LevelFilter, ConfigError> {
    LevelFilter::from_str(raw.trim()).map_err(|_| ConfigError::InvalidLogLevel(raw.to_string()))
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL")
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_beats_origin() {
        let (config, errors) = ApiConfig::resolve(
            Some("https://api.framestore.test"),
            Some("https://shop.framestore.test"),
            None,
        );
        assert!(errors.is_empty());
        assert_eq!(config.endpoint("/api/cart"), "https://api.framestore.test/api/cart");
    }

    #[test]
    fn test_origin_used_without_override() {
        let (config, _) = ApiConfig::resolve(None, Some("http://127.0.0.1:3000"), Some("debug"));
        assert_eq!(config.endpoint("/api/products"), "http://127.0.0.1:3000/api/products");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let (config, errors) = ApiConfig::resolve(Some("not a url"), None, Some("loud"));
        assert_eq!(config, ApiConfig::default());
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ConfigError::InvalidBaseUrl(..)));
        assert_eq!(errors[1], ConfigError::InvalidLogLevel("loud".into()));
    }

    #[test]
    fn test_endpoint_does_not_double_slash() {
        let (config, _) = ApiConfig::resolve(Some("https://shop.test/"), None, None);
        assert_eq!(config.endpoint("/api/login"), "https://shop.test/api/login");
    }
}
