use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use backend_application::{AppState, Metrics};
use backend_domain::RuntimeConfig;
use backend_infrastructure::{AppConfig, BrawlApiClient, MemoryCache};

pub struct AppContext {
    pub state: AppState,
    /// Shared with the client so the sweeper can purge it.
    pub cache: Arc<MemoryCache>,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        Self::from_runtime_config(config.to_runtime_config())
    }

    pub fn from_runtime_config(runtime_config: RuntimeConfig) -> Result<Self> {
        let cache = Arc::new(MemoryCache::new());
        let metrics = Arc::new(Metrics::default());
        let client = BrawlApiClient::new(&runtime_config, cache.clone(), metrics.clone())?;
        info!(
            "upstream {} (mock mode: {}, api key: {})",
            runtime_config.api_base_url,
            runtime_config.use_mock_data,
            if runtime_config.api_key.is_some() { "set" } else { "unset" }
        );

        let state = AppState {
            config: runtime_config,
            data_source: Arc::new(client),
            metrics,
        };

        Ok(Self { state, cache })
    }
}
