// Event rotation entity

use serde::{Deserialize, Serialize};

use crate::value_objects::DataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRotation {
    pub schedule: Vec<ScheduledEvent>,
    pub data_source: DataSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEvent {
    pub id: i64,
    pub mode: String,
    pub map: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_id: Option<i64>,
    #[serde(default)]
    pub top_brawlers: Vec<EventBrawlerStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBrawlerStat {
    pub brawler_id: i64,
    pub name: String,
    pub win_rate: f64,
    pub use_rate: f64,
}
