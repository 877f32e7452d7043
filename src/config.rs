//! Configuration management for the Hunter MCP Server
//!
//! Handles environment variables, the API credential and server defaults.

use std::fmt;
use std::time::Duration;

use crate::error::{ConfigError, HunterMcpError, Result};

/// Hunter API key. Never printed: `Debug` is redacted and there is no `Display`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Raw key, for the outbound query string only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Timing of the SSE handshake and keep-alive loop
#[derive(Debug, Clone, Copy)]
pub struct SseConfig {
    /// Pause after each handshake event
    pub handshake_delay: Duration,

    /// Pause before each ping
    pub ping_interval: Duration,
}

impl Default for SseConfig {
    fn default() -> Self {
        Self {
            handshake_delay: Duration::from_millis(server::HANDSHAKE_DELAY_MS),
            ping_interval: Duration::from_secs(server::PING_INTERVAL_SECS),
        }
    }
}

/// Configuration for the Hunter MCP Server
#[derive(Debug, Clone)]
pub struct Config {
    /// Hunter API credential
    pub api_key: ApiKey,

    /// Hunter API base URL
    pub api_base_url: String,

    /// Address to bind
    pub host: String,

    /// Port to bind (`port + 1` is tried once if this one is taken)
    pub port: u16,

    /// SSE timing
    pub sse: SseConfig,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("HUNTER_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                HunterMcpError::Config(ConfigError::MissingEnvVar {
                    var: "HUNTER_API_KEY".to_string(),
                })
            })?;

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                HunterMcpError::Config(ConfigError::InvalidConfig {
                    message: format!("PORT must be a port number, got '{}'", raw),
                })
            })?,
            None => server::DEFAULT_PORT,
        };

        let host = lookup("HOST").unwrap_or_else(|| server::DEFAULT_HOST.to_string());

        let api_base_url = lookup("HUNTER_API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| hunter::API_BASE_URL.to_string());

        Ok(Self {
            api_key: ApiKey::new(api_key),
            api_base_url,
            host,
            port,
            sse: SseConfig::default(),
        })
    }
}

/// Hunter API constants
pub mod hunter {
    /// Base URL for the Hunter API
    pub const API_BASE_URL: &str = "https://api.hunter.io/v2";

    /// Query parameter carrying the credential
    pub const API_KEY_PARAM: &str = "api_key";

    /// Result limit for domain searches when the caller gives none
    pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

    pub mod endpoints {
        pub const EMAIL_FINDER: &str = "email-finder";
        pub const EMAIL_VERIFIER: &str = "email-verifier";
        pub const DOMAIN_SEARCH: &str = "domain-search";
    }
}

/// Gateway server constants
pub mod server {
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8088;
    pub const HANDSHAKE_DELAY_MS: u64 = 100;
    pub const PING_INTERVAL_SECS: u64 = 10;
    pub const CORS_MAX_AGE_SECS: u64 = 600;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[("HUNTER_API_KEY", "secret")])).unwrap();
        assert_eq!(config.api_key.expose(), "secret");
        assert_eq!(config.port, 8088);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.api_base_url, "https://api.hunter.io/v2");
        assert_eq!(config.sse.ping_interval, Duration::from_secs(10));
    }

    #[test]
    fn test_missing_api_key() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "9000")])).unwrap_err();
        assert!(err.to_string().contains("HUNTER_API_KEY"));

        let blank = Config::from_lookup(lookup_from(&[("HUNTER_API_KEY", "  ")]));
        assert!(blank.is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HUNTER_API_KEY", "secret"),
            ("PORT", "9000"),
            ("HOST", "127.0.0.1"),
            ("HUNTER_API_BASE_URL", "http://localhost:1234/v2/"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.api_base_url, "http://localhost:1234/v2");
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[
            ("HUNTER_API_KEY", "secret"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("eighty"));
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let config = Config::from_lookup(lookup_from(&[("HUNTER_API_KEY", "super-secret")])).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("ApiKey(***)"));
    }
}
