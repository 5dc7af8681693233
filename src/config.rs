//! Runtime configuration read from the environment

use anyhow::{Context, Result};

/// Maximum number of items requested per Giphy call.
pub const PAGE_SIZE: usize = 25;

/// How close to the end of the list the selection must get before more items are requested.
pub const LOAD_MORE_THRESHOLD: usize = 2;

const DEFAULT_API_BASE: &str = "https://api.giphy.com";
const DEFAULT_RATING: &str = "g";
const DEFAULT_SHORTENER_ENDPOINT: &str = "https://tinyurl.com/api-create.php";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_key: String,
    pub api_base: String,
    pub rating: String,
    pub shortener_endpoint: String,
}

impl AppConfig {
    /// Build the configuration from `GIPHY_API_KEY` and the optional
    /// `GIPHY_API_BASE`, `GIPHY_RATING` and `SHORTENER_ENDPOINT` overrides.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GIPHY_API_KEY")
            .context("GIPHY_API_KEY is not set; get a key at https://developers.giphy.com")?;

        Ok(Self::with_overrides(
            api_key,
            std::env::var("GIPHY_API_BASE").ok(),
            std::env::var("GIPHY_RATING").ok(),
            std::env::var("SHORTENER_ENDPOINT").ok(),
        ))
    }

    fn with_overrides(
        api_key: String,
        api_base: Option<String>,
        rating: Option<String>,
        shortener_endpoint: Option<String>,
    ) -> Self {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        Self {
            api_key,
            api_base: non_empty(api_base)
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            rating: non_empty(rating).unwrap_or_else(|| DEFAULT_RATING.to_string()),
            shortener_endpoint: non_empty(shortener_endpoint)
                .unwrap_or_else(|| DEFAULT_SHORTENER_ENDPOINT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_overrides_are_missing_or_blank() {
        let config = AppConfig::with_overrides("key".to_string(), None, Some("  ".to_string()), None);

        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.rating, "g");
        assert_eq!(config.shortener_endpoint, DEFAULT_SHORTENER_ENDPOINT);
    }

    #[test]
    fn api_base_override_drops_trailing_slash() {
        let config = AppConfig::with_overrides(
            "key".to_string(),
            Some("http://127.0.0.1:9000/".to_string()),
            Some("pg".to_string()),
            Some("http://short.test/create".to_string()),
        );

        assert_eq!(config.api_base, "http://127.0.0.1:9000");
        assert_eq!(config.rating, "pg");
        assert_eq!(config.shortener_endpoint, "http://short.test/create");
    }
}
