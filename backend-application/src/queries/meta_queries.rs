use chrono::Utc;
use tracing::{info, warn};

use backend_domain::{
    build_enhanced_stats, build_meta_stats, build_tier_list, format_utc, Brawler, DataSource,
    EnhancedMetaStats, MetaStats,
};

use crate::dtos::{TierListQuery, TierListResponse};
use crate::queries::brawler_queries::load_roster;
use crate::{AppError, AppState};

pub async fn tier_list(state: &AppState, query: TierListQuery) -> Result<TierListResponse, AppError> {
    let mode = query
        .mode
        .map(|mode| mode.trim().to_string())
        .filter(|mode| !mode.is_empty())
        .unwrap_or_else(|| "all".to_string());
    let (brawlers, _) = roster_for_meta(state).await?;
    let tier_list = build_tier_list(&brawlers);
    info!("generated tier list for mode {}", mode);
    Ok(TierListResponse {
        mode,
        tier_list,
        last_updated: format_utc(Utc::now()),
        total_brawlers: brawlers.len(),
    })
}

pub async fn meta_stats(state: &AppState) -> Result<MetaStats, AppError> {
    let (brawlers, _) = roster_for_meta(state).await?;
    Ok(build_meta_stats(&brawlers, Utc::now()))
}

pub async fn enhanced_stats(state: &AppState) -> Result<EnhancedMetaStats, AppError> {
    let (brawlers, source) = roster_for_meta(state).await?;
    Ok(build_enhanced_stats(&brawlers, Utc::now(), source))
}

async fn roster_for_meta(state: &AppState) -> Result<(Vec<Brawler>, DataSource), AppError> {
    let (brawlers, source) = load_roster(state).await?;
    if brawlers.is_empty() {
        warn!("no brawlers data available for meta");
        return Err(AppError::not_found("Brawlers data not available"));
    }
    Ok((brawlers, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_state, StubSource};
    use backend_domain::{mock_brawlers, Fetched};

    #[tokio::test]
    async fn tier_list_defaults_mode_to_all() {
        let roster = mock_brawlers();
        let source = StubSource {
            brawlers: Fetched::Mock(roster.clone()),
            ..StubSource::default()
        };
        let state = test_state(source);
        let response = tier_list(&state, TierListQuery { mode: Some("  ".to_string()) })
            .await
            .expect("tier list");
        assert_eq!(response.mode, "all");
        assert_eq!(response.total_brawlers, roster.len());
        assert_eq!(response.tier_list.total(), roster.len());
    }

    #[tokio::test]
    async fn enhanced_stats_mark_mock_rosters() {
        let source = StubSource {
            brawlers: Fetched::Mock(mock_brawlers()),
            ..StubSource::default()
        };
        let state = test_state(source);
        let stats = enhanced_stats(&state).await.expect("stats");
        assert_eq!(stats.data_source, DataSource::Mock);
    }

    #[tokio::test]
    async fn meta_without_roster_is_not_found() {
        let state = test_state(StubSource::default());
        assert!(matches!(
            meta_stats(&state).await,
            Err(AppError::NotFound { .. })
        ));
    }
}
