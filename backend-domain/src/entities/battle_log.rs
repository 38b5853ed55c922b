// Battle log entity
// Closed historical matches; team modes fill `teams`, showdown modes fill `players`
// Upstream entries vary by mode, so every descriptive field tolerates absence and null

use serde::{Deserialize, Serialize};

use crate::utils::null_as_default;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleLog {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<BattleLogEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleLogEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub battle_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub event: BattleEvent,
    #[serde(default, deserialize_with = "null_as_default")]
    pub battle: Battle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mode: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub map: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battle {
    #[serde(default, deserialize_with = "null_as_default")]
    pub mode: String,
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub battle_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trophy_change: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub star_tokens_gained: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub teams: Vec<Vec<BattlePlayer>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<BattlePlayer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star_player: Option<BattlePlayer>,
}

/// Duels entries list every brawler played in `brawlers` instead of a single `brawler`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattlePlayer {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tag: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brawler: Option<BattleBrawler>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub brawlers: Vec<BattleBrawler>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleBrawler {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub power: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trophies: i64,
}

impl Battle {
    pub fn is_showdown(&self) -> bool {
        self.teams.is_empty() && !self.players.is_empty()
    }
}

impl BattlePlayer {
    /// The single brawler, or the first one played in a duels match.
    pub fn primary_brawler(&self) -> Option<&BattleBrawler> {
        self.brawler.as_ref().or_else(|| self.brawlers.first())
    }
}
