use axum::extract::State;
use axum::Json;

use backend_application::queries::event_queries;
use backend_application::AppState;
use backend_domain::EventRotation;

use crate::error::HttpError;

pub async fn event_rotation(
    State(state): State<AppState>,
) -> Result<Json<EventRotation>, HttpError> {
    let rotation = event_queries::event_rotation(&state).await?;
    Ok(Json(rotation))
}
