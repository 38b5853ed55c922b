use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;

use backend_application::dtos::BackendStatus;
use backend_application::queries::{ops_queries, player_queries};
use backend_application::AppState;
use backend_domain::{BattleLog, Player};

use crate::error::HttpError;

pub async fn backend_test() -> Json<BackendStatus> {
    Json(ops_queries::backend_status(Utc::now()))
}

pub async fn get_player(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<Player>, HttpError> {
    let player = player_queries::get_player(&state, &tag).await?;
    Ok(Json(player))
}

pub async fn get_battle_log(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<BattleLog>, HttpError> {
    let log = player_queries::get_battle_log(&state, &tag).await?;
    Ok(Json(log))
}
