use chrono::Utc;
use tracing::warn;

use backend_domain::{mock_event_rotation, EventRotation, Fetched};

use crate::{AppError, AppState};

/// Never reports not-found: an absent rotation is replaced by the mock schedule.
pub async fn event_rotation(state: &AppState) -> Result<EventRotation, AppError> {
    let outcome = state.data_source.event_rotation().await;
    if let Fetched::Failed(err) = &outcome {
        warn!("event rotation unavailable upstream: {}", err);
    }
    Ok(outcome.into_option().unwrap_or_else(|| {
        warn!("event rotation not found, returning mock data");
        state.metrics.record_mock_response();
        mock_event_rotation(Utc::now())
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_state, StubSource};
    use backend_domain::DataSource;

    #[tokio::test]
    async fn missing_rotation_falls_back_to_mock() {
        let state = test_state(StubSource::default());
        let rotation = event_rotation(&state).await.expect("rotation");
        assert_eq!(rotation.data_source, DataSource::Mock);
        assert!(!rotation.schedule.is_empty());
        assert_eq!(state.metrics.snapshot().mock_responses, 1);
    }
}
