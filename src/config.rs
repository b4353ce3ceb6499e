use anyhow::{Context, Result};
use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_YOUTUBE_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config::from_env().unwrap_or_else(|e| panic!("Invalid configuration: {e:#}"))
});

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub youtube_api_base_url: String,
    /// No timeout is applied to upstream calls when unset.
    pub upstream_timeout: Option<Duration>,
    pub log_level: tracing::Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source; `from_env` passes the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let upstream_timeout = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("UPSTREAM_TIMEOUT_SECS must be a number, got {raw:?}"))?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let log_level = get_or_default("LOG_LEVEL", "info");
        let log_level = log_level
            .parse::<tracing::Level>()
            .with_context(|| format!("LOG_LEVEL is not a valid level: {log_level:?}"))?;

        Ok(Config {
            listen_addr: get_or_default("LISTEN_ADDR", DEFAULT_LISTEN_ADDR),
            youtube_api_base_url: get_or_default(
                "YOUTUBE_API_BASE_URL",
                DEFAULT_YOUTUBE_API_BASE_URL,
            ),
            upstream_timeout,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(config.youtube_api_base_url, DEFAULT_YOUTUBE_API_BASE_URL);
        assert_eq!(config.upstream_timeout, None);
        assert_eq!(config.log_level, tracing::Level::INFO);
    }

    #[test]
    fn test_values_are_read() {
        let config = config_from(&[
            ("LISTEN_ADDR", "127.0.0.1:8080"),
            ("YOUTUBE_API_BASE_URL", "http://localhost:9000/v3"),
            ("UPSTREAM_TIMEOUT_SECS", " 15 "),
            ("LOG_LEVEL", "debug"),
        ])
        .unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.youtube_api_base_url, "http://localhost:9000/v3");
        assert_eq!(config.upstream_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_bad_timeout_is_rejected() {
        let err = config_from(&[("UPSTREAM_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(format!("{err:#}").contains("UPSTREAM_TIMEOUT_SECS"));
    }

    #[test]
    fn test_bad_log_level_is_rejected() {
        let err = config_from(&[("LOG_LEVEL", "loud")]).unwrap_err();
        assert!(format!("{err:#}").contains("LOG_LEVEL"));
    }
}
