use axum::extract::{Path, State};
use axum::Json;

use backend_application::queries::strategy_queries;
use backend_application::AppState;
use backend_domain::MapStrategy;

use crate::error::HttpError;

pub async fn map_strategies(
    State(state): State<AppState>,
    Path(map_id): Path<String>,
) -> Result<Json<Vec<MapStrategy>>, HttpError> {
    let strategies = strategy_queries::map_strategies(&state, &map_id).await?;
    Ok(Json(strategies))
}
