use anyhow::anyhow;
use tracing::{info, warn};

use backend_domain::{find_brawler, Brawler, DataSource, Fetched};

use crate::{AppError, AppState};

pub async fn list_brawlers(state: &AppState) -> Result<Vec<Brawler>, AppError> {
    let (brawlers, _) = load_roster(state).await?;
    if brawlers.is_empty() {
        warn!("no brawlers data found");
        return Err(AppError::not_found("No brawlers data available"));
    }
    info!("retrieved {} brawlers", brawlers.len());
    Ok(brawlers)
}

pub async fn get_brawler(state: &AppState, id: i64) -> Result<Brawler, AppError> {
    let (brawlers, _) = load_roster(state).await?;
    if brawlers.is_empty() {
        return Err(AppError::not_found("Brawlers data not available"));
    }
    find_brawler(&brawlers, id)
        .cloned()
        .ok_or_else(|| AppError::not_found_with("Brawler not found", "id", id))
}

/// The roster plus where it came from. An empty roster is not an error here;
/// each caller decides which message to report.
pub(crate) async fn load_roster(state: &AppState) -> Result<(Vec<Brawler>, DataSource), AppError> {
    let outcome = state.data_source.brawlers().await;
    let source = if outcome.is_mock() || state.config.use_mock_data {
        DataSource::Mock
    } else {
        DataSource::Live
    };
    match outcome {
        Fetched::Failed(err) => Err(AppError::Internal(anyhow!(
            "brawler roster unavailable: {}",
            err
        ))),
        outcome => Ok((outcome.into_option().unwrap_or_default(), source)),
    }
}
