// Player entity
// Mirrors the upstream /players/{tag} payload

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub name_color: String,
    #[serde(default)]
    pub icon: PlayerIcon,
    #[serde(default)]
    pub trophies: i64,
    #[serde(default)]
    pub highest_trophies: i64,
    #[serde(default)]
    pub exp_level: i64,
    #[serde(default)]
    pub exp_points: i64,
    #[serde(default)]
    pub is_qualified_from_championship_challenge: bool,
    #[serde(default, rename = "3vs3Victories")]
    pub three_vs_three_victories: i64,
    #[serde(default)]
    pub solo_victories: i64,
    #[serde(default)]
    pub duo_victories: i64,
    #[serde(default)]
    pub best_robo_rumble_time: i64,
    #[serde(default)]
    pub best_time_as_big_brawler: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club: Option<PlayerClub>,
    #[serde(default)]
    pub brawlers: Vec<PlayerBrawler>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIcon {
    #[serde(default)]
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerClub {
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBrawler {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub power: i64,
    #[serde(default)]
    pub rank: i64,
    #[serde(default)]
    pub trophies: i64,
    #[serde(default)]
    pub highest_trophies: i64,
    #[serde(default)]
    pub gadgets: Vec<OwnedAccessory>,
    #[serde(default)]
    pub star_powers: Vec<OwnedAccessory>,
    #[serde(default)]
    pub gears: Vec<OwnedGear>,
}

/// Gadget or star power unlocked by a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedAccessory {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedGear {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: i64,
}

impl Player {
    pub fn brawler_count(&self) -> usize {
        self.brawlers.len()
    }
}
