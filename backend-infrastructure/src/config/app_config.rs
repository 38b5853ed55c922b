use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::RuntimeConfig;

use crate::config::validate_base_url;
use crate::utils::{non_blank, parse_env_list, trim_trailing_slash};

pub const OFFICIAL_API_BASE_URL: &str = "https://api.brawlstars.com/v1";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_base_url: String,
    pub api_key: Option<String>,
    pub strategies_url: Option<String>,
    pub rate_limit_delay_ms: u64,
    /// Resolved by [`AppConfig::normalize`] when left unset.
    pub use_mock_data: Option<bool>,
    pub mock_ttl_seconds: u64,
    pub upstream_timeout_seconds: u64,
    pub request_timeout_seconds: u64,
    pub cache_sweep_interval_seconds: u64,
    pub cors_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5001".to_string(),
            api_base_url: OFFICIAL_API_BASE_URL.to_string(),
            api_key: None,
            strategies_url: None,
            rate_limit_delay_ms: 100,
            use_mock_data: None,
            mock_ttl_seconds: 300,
            upstream_timeout_seconds: 10,
            request_timeout_seconds: 15,
            cache_sweep_interval_seconds: 60,
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:5174".to_string(),
                "http://localhost:3000".to_string(),
            ],
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("BRAWLBUDDY_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            toml::from_str(&content).map_err(|err| anyhow!("invalid {}: {}", path, err))?
        } else {
            warn!("{} not found, using defaults", path);
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        self.bind_addr = self.bind_addr.trim().to_string();
        self.api_base_url = trim_trailing_slash(&self.api_base_url);
        self.api_key = non_blank(self.api_key.take());
        self.strategies_url =
            non_blank(self.strategies_url.take()).map(|url| trim_trailing_slash(&url));
        self.cors_origins = std::mem::take(&mut self.cors_origins)
            .into_iter()
            .map(|origin| trim_trailing_slash(&origin))
            .filter(|origin| !origin.is_empty())
            .collect();
        self.cors_origins.dedup();
        if self.use_mock_data.is_none() {
            self.use_mock_data = Some(self.default_mock_mode());
        }
    }

    /// Without a key the official API rejects every call, so placeholders are served instead.
    fn default_mock_mode(&self) -> bool {
        self.api_key.is_none() && self.api_base_url == OFFICIAL_API_BASE_URL
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        validate_base_url("api_base_url", &self.api_base_url)?;
        if let Some(url) = &self.strategies_url {
            validate_base_url("strategies_url", url)?;
        }
        if self.upstream_timeout_seconds == 0 || self.request_timeout_seconds == 0 {
            return Err(anyhow!("timeouts must be greater than 0"));
        }
        if self.mock_ttl_seconds == 0 {
            return Err(anyhow!("mock_ttl_seconds must be greater than 0"));
        }
        if self.cache_sweep_interval_seconds == 0 {
            return Err(anyhow!("cache_sweep_interval_seconds must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_base_url: self.api_base_url.clone(),
            api_key: self.api_key.clone(),
            strategies_url: self.strategies_url.clone(),
            rate_limit_delay_ms: self.rate_limit_delay_ms,
            use_mock_data: self
                .use_mock_data
                .unwrap_or_else(|| self.default_mock_mode()),
            mock_ttl_seconds: self.mock_ttl_seconds,
            upstream_timeout_seconds: self.upstream_timeout_seconds,
            request_timeout_seconds: self.request_timeout_seconds,
            cache_sweep_interval_seconds: self.cache_sweep_interval_seconds,
            cors_origins: self.cors_origins.clone(),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("BRAWLBUDDY_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("BRAWLBUDDY_API_BASE_URL") {
            self.api_base_url = value;
        }
        if let Ok(value) = env::var("BRAWLBUDDY_API_KEY") {
            self.api_key = Some(value);
        }
        if let Ok(value) = env::var("BRAWLBUDDY_STRATEGIES_URL") {
            self.strategies_url = Some(value);
        }
        if let Ok(value) = env::var("BRAWLBUDDY_RATE_LIMIT_DELAY_MS") {
            self.rate_limit_delay_ms = value.parse().unwrap_or(self.rate_limit_delay_ms);
        }
        if let Ok(value) = env::var("BRAWLBUDDY_USE_MOCK_DATA") {
            self.use_mock_data = value.parse().ok().or(self.use_mock_data);
        }
        if let Ok(value) = env::var("BRAWLBUDDY_MOCK_TTL_SECONDS") {
            self.mock_ttl_seconds = value.parse().unwrap_or(self.mock_ttl_seconds);
        }
        if let Ok(value) = env::var("BRAWLBUDDY_UPSTREAM_TIMEOUT_SECONDS") {
            self.upstream_timeout_seconds = value.parse().unwrap_or(self.upstream_timeout_seconds);
        }
        if let Ok(value) = env::var("BRAWLBUDDY_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Ok(value) = env::var("BRAWLBUDDY_CACHE_SWEEP_INTERVAL_SECONDS") {
            self.cache_sweep_interval_seconds =
                value.parse().unwrap_or(self.cache_sweep_interval_seconds);
        }
        if let Ok(value) = env::var("BRAWLBUDDY_CORS_ORIGINS") {
            self.cors_origins = parse_env_list(&value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fall_back_to_mock_mode_without_a_key() {
        let mut config = AppConfig::default();
        config.normalize();
        assert_eq!(config.use_mock_data, Some(true));
        assert!(config.validate().is_ok());
        let runtime = config.to_runtime_config();
        assert_eq!(runtime.bind_addr, "127.0.0.1:5001");
        assert_eq!(runtime.rate_limit_delay_ms, 100);
        assert!(runtime.use_mock_data);
    }

    #[test]
    fn key_or_custom_mirror_disables_mock_mode() {
        let mut keyed: AppConfig = toml::from_str(r#"api_key = "secret""#).expect("toml");
        keyed.normalize();
        assert_eq!(keyed.use_mock_data, Some(false));

        let mut mirror: AppConfig =
            toml::from_str(r#"api_base_url = "https://mirror.example.com/v1/""#).expect("toml");
        mirror.normalize();
        assert_eq!(mirror.api_base_url, "https://mirror.example.com/v1");
        assert_eq!(mirror.use_mock_data, Some(false));
    }

    #[test]
    fn explicit_mock_switch_wins() {
        let mut config: AppConfig =
            toml::from_str("api_key = \"secret\"\nuse_mock_data = true").expect("toml");
        config.normalize();
        assert!(config.to_runtime_config().use_mock_data);
    }

    #[test]
    fn blank_optional_values_are_dropped() {
        let mut config: AppConfig =
            toml::from_str("api_key = \"  \"\nstrategies_url = \"\"").expect("toml");
        config.normalize();
        assert_eq!(config.api_key, None);
        assert_eq!(config.strategies_url, None);
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut config = AppConfig {
            bind_addr: "not-an-addr".to_string(),
            ..AppConfig::default()
        };
        config.normalize();
        assert!(config.validate().is_err());

        let mut config = AppConfig {
            upstream_timeout_seconds: 0,
            ..AppConfig::default()
        };
        config.normalize();
        assert!(config.validate().is_err());
    }
}
