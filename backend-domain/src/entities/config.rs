// Runtime configuration shared by every layer

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_base_url: String,
    pub api_key: Option<String>,
    pub strategies_url: Option<String>,
    pub rate_limit_delay_ms: u64,
    pub use_mock_data: bool,
    pub mock_ttl_seconds: u64,
    pub upstream_timeout_seconds: u64,
    pub request_timeout_seconds: u64,
    pub cache_sweep_interval_seconds: u64,
    pub cors_origins: Vec<String>,
}
