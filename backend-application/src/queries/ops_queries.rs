use chrono::{DateTime, Utc};

use backend_domain::format_utc;

use crate::dtos::{BackendStatus, ReadinessReport};
use crate::AppState;

pub fn backend_status(now: DateTime<Utc>) -> BackendStatus {
    BackendStatus {
        message: "Backend is working!".to_string(),
        timestamp: format_utc(now),
    }
}

pub fn readiness(state: &AppState) -> ReadinessReport {
    let health = state.data_source.health();
    ReadinessReport {
        status: "ok".to_string(),
        cache_entries: health.cache_entries,
        mock_mode: health.mock_mode,
    }
}
