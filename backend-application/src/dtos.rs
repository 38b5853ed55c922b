use serde::{Deserialize, Serialize};

use backend_domain::{Brawler, TierList};

#[derive(Debug, Serialize)]
pub struct BrawlerListResponse {
    pub brawlers: Vec<Brawler>,
    pub count: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct TierListQuery {
    pub mode: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierListResponse {
    pub mode: String,
    pub tier_list: TierList,
    pub last_updated: String,
    pub total_brawlers: usize,
}

#[derive(Debug, Serialize)]
pub struct BackendStatus {
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessReport {
    pub status: String,
    pub cache_entries: usize,
    pub mock_mode: bool,
}
