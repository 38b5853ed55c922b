use async_trait::async_trait;

use crate::entities::{BattleLog, Brawler, EventRotation, MapStrategy, Player};
use crate::outcome::Fetched;
use crate::value_objects::PlayerTag;

/// Source of every resource the handlers serve.
///
/// Implementations own caching and fallback decisions. Lookups never return
/// an error: transport and decode failures are folded into the [`Fetched`]
/// variant.
#[async_trait]
pub trait BrawlDataSource: Send + Sync {
    async fn player(&self, tag: &PlayerTag) -> Fetched<Player>;
    async fn battle_log(&self, tag: &PlayerTag) -> Fetched<BattleLog>;
    async fn brawlers(&self) -> Fetched<Vec<Brawler>>;
    async fn event_rotation(&self) -> Fetched<EventRotation>;
    async fn map_strategies(&self, map_id: &str) -> Fetched<Vec<MapStrategy>>;
    fn health(&self) -> SourceHealth;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceHealth {
    pub cache_entries: usize,
    pub mock_mode: bool,
}
