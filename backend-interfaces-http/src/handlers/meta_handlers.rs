use axum::extract::{Query, State};
use axum::Json;

use backend_application::dtos::{TierListQuery, TierListResponse};
use backend_application::queries::meta_queries;
use backend_application::AppState;
use backend_domain::{EnhancedMetaStats, MetaStats};

use crate::error::HttpError;

pub async fn tier_list(
    State(state): State<AppState>,
    Query(query): Query<TierListQuery>,
) -> Result<Json<TierListResponse>, HttpError> {
    let response = meta_queries::tier_list(&state, query).await?;
    Ok(Json(response))
}

pub async fn meta_stats(State(state): State<AppState>) -> Result<Json<MetaStats>, HttpError> {
    let stats = meta_queries::meta_stats(&state).await?;
    Ok(Json(stats))
}

pub async fn enhanced_stats(
    State(state): State<AppState>,
) -> Result<Json<EnhancedMetaStats>, HttpError> {
    let stats = meta_queries::enhanced_stats(&state).await?;
    Ok(Json(stats))
}
