use std::sync::Arc;

use async_trait::async_trait;

use backend_domain::{
    BattleLog, BrawlDataSource, Brawler, EventRotation, Fetched, MapStrategy, Player, PlayerTag,
    RuntimeConfig, SourceHealth,
};

use crate::{AppState, Metrics};

/// Data source returning canned outcomes, one per resource.
pub(crate) struct StubSource {
    pub player: Fetched<Player>,
    pub battle_log: Fetched<BattleLog>,
    pub brawlers: Fetched<Vec<Brawler>>,
    pub rotation: Fetched<EventRotation>,
    pub strategies: Fetched<Vec<MapStrategy>>,
}

impl Default for StubSource {
    fn default() -> Self {
        Self {
            player: Fetched::NotFound,
            battle_log: Fetched::NotFound,
            brawlers: Fetched::NotFound,
            rotation: Fetched::NotFound,
            strategies: Fetched::NotFound,
        }
    }
}

#[async_trait]
impl BrawlDataSource for StubSource {
    async fn player(&self, _tag: &PlayerTag) -> Fetched<Player> {
        self.player.clone()
    }

    async fn battle_log(&self, _tag: &PlayerTag) -> Fetched<BattleLog> {
        self.battle_log.clone()
    }

    async fn brawlers(&self) -> Fetched<Vec<Brawler>> {
        self.brawlers.clone()
    }

    async fn event_rotation(&self) -> Fetched<EventRotation> {
        self.rotation.clone()
    }

    async fn map_strategies(&self, _map_id: &str) -> Fetched<Vec<MapStrategy>> {
        self.strategies.clone()
    }

    fn health(&self) -> SourceHealth {
        SourceHealth {
            cache_entries: 0,
            mock_mode: false,
        }
    }
}

pub(crate) fn test_state(source: StubSource) -> AppState {
    AppState {
        config: RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            api_base_url: "http://127.0.0.1:9".to_string(),
            api_key: None,
            strategies_url: None,
            rate_limit_delay_ms: 0,
            use_mock_data: false,
            mock_ttl_seconds: 300,
            upstream_timeout_seconds: 1,
            request_timeout_seconds: 5,
            cache_sweep_interval_seconds: 60,
            cors_origins: Vec::new(),
        },
        data_source: Arc::new(source),
        metrics: Arc::new(Metrics::default()),
    }
}
