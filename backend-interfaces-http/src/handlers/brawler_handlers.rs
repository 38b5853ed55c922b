use axum::extract::{Path, State};
use axum::Json;

use backend_application::dtos::BrawlerListResponse;
use backend_application::queries::brawler_queries;
use backend_application::AppState;
use backend_domain::Brawler;

use crate::error::HttpError;

pub async fn list_brawlers(
    State(state): State<AppState>,
) -> Result<Json<BrawlerListResponse>, HttpError> {
    let brawlers = brawler_queries::list_brawlers(&state).await?;
    let count = brawlers.len();
    Ok(Json(BrawlerListResponse { brawlers, count }))
}

pub async fn get_brawler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Brawler>, HttpError> {
    let id = id
        .trim()
        .parse::<i64>()
        .map_err(|_| HttpError::BadRequest(format!("brawler id must be numeric, got {}", id)))?;
    let brawler = brawler_queries::get_brawler(&state, id).await?;
    Ok(Json(brawler))
}
