// Meta entities
// Synthesized placeholders; none of these numbers come from real match data

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value_objects::{DataSource, Tier};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierList {
    #[serde(rename = "S")]
    pub s: Vec<TierEntry>,
    #[serde(rename = "A")]
    pub a: Vec<TierEntry>,
    #[serde(rename = "B")]
    pub b: Vec<TierEntry>,
    #[serde(rename = "C")]
    pub c: Vec<TierEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierEntry {
    pub id: i64,
    pub name: String,
    pub win_rate: f64,
    pub pick_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaStats {
    pub total_matches: u64,
    pub last_updated: String,
    pub top_brawlers: Vec<MetaBrawlerStat>,
    pub game_mode_meta: BTreeMap<String, GameModeMeta>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaBrawlerStat {
    pub id: i64,
    pub name: String,
    pub pick_rate: f64,
    pub win_rate: f64,
    pub ban_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameModeMeta {
    pub avg_match_length: String,
    pub most_picked: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedMetaStats {
    #[serde(flatten)]
    pub stats: MetaStats,
    pub tier_distribution: BTreeMap<String, usize>,
    pub rarity_breakdown: BTreeMap<String, usize>,
    pub class_breakdown: BTreeMap<String, usize>,
    pub data_source: DataSource,
}

impl TierList {
    pub fn tier(&self, tier: Tier) -> &[TierEntry] {
        match tier {
            Tier::S => &self.s,
            Tier::A => &self.a,
            Tier::B => &self.b,
            Tier::C => &self.c,
        }
    }

    pub fn tier_mut(&mut self, tier: Tier) -> &mut Vec<TierEntry> {
        match tier {
            Tier::S => &mut self.s,
            Tier::A => &mut self.a,
            Tier::B => &mut self.b,
            Tier::C => &mut self.c,
        }
    }

    pub fn total(&self) -> usize {
        Tier::ALL.iter().map(|tier| self.tier(*tier).len()).sum()
    }
}
