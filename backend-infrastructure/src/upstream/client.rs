use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use backend_application::Metrics;
use backend_domain::{
    mock_battle_log, mock_brawlers, mock_event_rotation, mock_map_strategies, mock_player,
    BattleLog, BrawlDataSource, Brawler, EventRotation, Fetched, MapStrategy, Player, PlayerTag,
    RuntimeConfig, SourceHealth, UpstreamError,
};

use crate::cache::MemoryCache;
use crate::upstream::wire::{into_rotation, BrawlersEnvelope, RotationSlot};

const BATTLE_LOG_TTL: Duration = Duration::from_secs(2 * 60);
const BRAWLERS_TTL: Duration = Duration::from_secs(60 * 60);
const EVENT_ROTATION_TTL: Duration = Duration::from_secs(15 * 60);
const MAP_STRATEGIES_TTL: Duration = Duration::from_secs(30 * 60);

/// Cache envelope; placeholders stay marked as mock after a round trip.
#[derive(Serialize, Deserialize)]
struct Stored<T> {
    mock: bool,
    value: T,
}

/// Cached, rate-paced access to the stats API with mock fallbacks.
pub struct BrawlApiClient {
    http: Client,
    cache: Arc<MemoryCache>,
    metrics: Arc<Metrics>,
    base_url: Url,
    strategies_url: Option<Url>,
    api_key: Option<String>,
    rate_limit_delay: Duration,
    mock_ttl: Duration,
    use_mock_data: bool,
}

impl BrawlApiClient {
    pub fn new(
        config: &RuntimeConfig,
        cache: Arc<MemoryCache>,
        metrics: Arc<Metrics>,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_seconds.max(1)))
            .build()?;
        let base_url = Url::parse(&config.api_base_url)
            .map_err(|err| anyhow!("invalid api_base_url: {}", err))?;
        let strategies_url = config
            .strategies_url
            .as_deref()
            .map(Url::parse)
            .transpose()
            .map_err(|err| anyhow!("invalid strategies_url: {}", err))?;
        if config.use_mock_data {
            info!("upstream client running in mock mode");
        }
        Ok(Self {
            http,
            cache,
            metrics,
            base_url,
            strategies_url,
            api_key: config.api_key.clone(),
            rate_limit_delay: Duration::from_millis(config.rate_limit_delay_ms),
            mock_ttl: Duration::from_secs(config.mock_ttl_seconds),
            use_mock_data: config.use_mock_data,
        })
    }

    fn cached<T: DeserializeOwned>(&self, key: &str) -> Option<Fetched<T>> {
        match self.cache.get::<Stored<T>>(key) {
            Some(stored) => {
                self.metrics.record_cache_hit();
                Some(if stored.mock {
                    Fetched::Mock(stored.value)
                } else {
                    Fetched::Cached(stored.value)
                })
            }
            None => {
                self.metrics.record_cache_miss();
                None
            }
        }
    }

    fn store_mock<T: Serialize>(&self, key: &str, value: T) -> Fetched<T> {
        let stored = Stored {
            mock: true,
            value: &value,
        };
        self.cache.set(key, &stored, Some(self.mock_ttl));
        self.metrics.record_mock_response();
        Fetched::Mock(value)
    }

    fn store_live<T: Serialize>(&self, key: &str, value: T, ttl: Option<Duration>) -> Fetched<T> {
        let stored = Stored {
            mock: false,
            value: &value,
        };
        self.cache.set(key, &stored, ttl);
        Fetched::Live(value)
    }

    /// Performs one GET and waits out the rate-limit delay afterwards,
    /// whatever the result.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, UpstreamError> {
        self.metrics.record_upstream_request();
        let result = self.send(&url).await;
        if !self.rate_limit_delay.is_zero() {
            tokio::time::sleep(self.rate_limit_delay).await;
        }
        if let Err(err) = &result {
            self.metrics.record_upstream_failure();
            warn!("GET {} failed: {}", url.path(), err);
        }
        result
    }

    async fn send<T: DeserializeOwned>(&self, url: &Url) -> Result<T, UpstreamError> {
        let mut request = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/json");
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let response = request
            .send()
            .await
            .map_err(|err| UpstreamError::Transport(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }
        let body = response
            .bytes()
            .await
            .map_err(|err| UpstreamError::Transport(err.to_string()))?;
        serde_json::from_slice(&body).map_err(|err| UpstreamError::Decode(err.to_string()))
    }

    /// Player lookups never fall back to mock data outside mock mode.
    fn classify<T>(err: UpstreamError) -> Fetched<T> {
        if err.is_not_found() {
            Fetched::NotFound
        } else {
            Fetched::Failed(err)
        }
    }

    fn catalog_strategies(&self, key: &str, map_id: &str) -> Fetched<Vec<MapStrategy>> {
        match mock_map_strategies(map_id) {
            Some(strategies) => self.store_mock(key, strategies),
            None => {
                debug!("no strategies known for map {}", map_id);
                Fetched::NotFound
            }
        }
    }
}

/// Appends path segments, percent-encoding each one (`#` becomes `%23`).
fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

#[async_trait]
impl BrawlDataSource for BrawlApiClient {
    async fn player(&self, tag: &PlayerTag) -> Fetched<Player> {
        let key = format!("player_{}", tag);
        if let Some(hit) = self.cached(&key) {
            return hit;
        }
        if self.use_mock_data {
            return self.store_mock(&key, mock_player(tag));
        }
        let url = endpoint(&self.base_url, &["players", tag.as_str()]);
        match self.get_json::<Player>(url).await {
            Ok(player) => self.store_live(&key, player, None),
            Err(err) => Self::classify(err),
        }
    }

    async fn battle_log(&self, tag: &PlayerTag) -> Fetched<BattleLog> {
        let key = format!("battlelog_{}", tag);
        if let Some(hit) = self.cached(&key) {
            return hit;
        }
        if self.use_mock_data {
            return self.store_mock(&key, mock_battle_log(tag, Utc::now()));
        }
        let url = endpoint(&self.base_url, &["players", tag.as_str(), "battlelog"]);
        match self.get_json::<BattleLog>(url).await {
            Ok(log) => self.store_live(&key, log, Some(BATTLE_LOG_TTL)),
            Err(err) => Self::classify(err),
        }
    }

    async fn brawlers(&self) -> Fetched<Vec<Brawler>> {
        let key = "all_brawlers";
        if let Some(hit) = self.cached(key) {
            return hit;
        }
        if self.use_mock_data {
            return self.store_mock(key, mock_brawlers());
        }
        let url = endpoint(&self.base_url, &["brawlers"]);
        match self.get_json::<BrawlersEnvelope>(url).await {
            Ok(envelope) => self.store_live(key, envelope.into_brawlers(), Some(BRAWLERS_TTL)),
            Err(_) => {
                warn!("serving mock roster after upstream failure");
                self.store_mock(key, mock_brawlers())
            }
        }
    }

    async fn event_rotation(&self) -> Fetched<EventRotation> {
        let key = "event_rotation";
        if let Some(hit) = self.cached(key) {
            return hit;
        }
        if self.use_mock_data {
            return self.store_mock(key, mock_event_rotation(Utc::now()));
        }
        let url = endpoint(&self.base_url, &["events", "rotation"]);
        match self.get_json::<Vec<RotationSlot>>(url).await {
            Ok(slots) => self.store_live(key, into_rotation(slots), Some(EVENT_ROTATION_TTL)),
            Err(_) => {
                warn!("serving mock event rotation after upstream failure");
                self.store_mock(key, mock_event_rotation(Utc::now()))
            }
        }
    }

    async fn map_strategies(&self, map_id: &str) -> Fetched<Vec<MapStrategy>> {
        let key = format!("map_strategies_{}", map_id);
        if let Some(hit) = self.cached(&key) {
            return hit;
        }
        let Some(strategies_url) = self.strategies_url.as_ref().filter(|_| !self.use_mock_data)
        else {
            return self.catalog_strategies(&key, map_id);
        };
        let url = endpoint(strategies_url, &["maps", map_id, "strategies"]);
        match self.get_json::<Vec<MapStrategy>>(url).await {
            Ok(strategies) => self.store_live(&key, strategies, Some(MAP_STRATEGIES_TTL)),
            Err(_) => self.catalog_strategies(&key, map_id),
        }
    }

    fn health(&self) -> SourceHealth {
        SourceHealth {
            cache_entries: self.cache.len(),
            mock_mode: self.use_mock_data,
        }
    }
}
