use tracing::info;

use backend_domain::MapStrategy;

use crate::{AppError, AppState};

/// Strategies for one map, best rated first.
/// An empty list counts as not found; the error echoes `raw_map_id` as requested.
pub async fn map_strategies(
    state: &AppState,
    raw_map_id: &str,
) -> Result<Vec<MapStrategy>, AppError> {
    let map_id = raw_map_id.trim();
    if map_id.is_empty() {
        return Err(AppError::BadRequest("map id must not be empty".to_string()));
    }
    let mut strategies = state
        .data_source
        .map_strategies(map_id)
        .await
        .into_option()
        .filter(|strategies| !strategies.is_empty())
        .ok_or_else(|| AppError::not_found_with("Map strategies not found", "mapId", raw_map_id))?;
    strategies.sort_by(|a, b| b.score().cmp(&a.score()).then(a.id.cmp(&b.id)));
    info!("retrieved {} strategies for map {}", strategies.len(), map_id);
    Ok(strategies)
}
