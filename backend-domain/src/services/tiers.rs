// Tier list and meta stats builders
// Placeholder ranking: a fixed-seed partition of the roster, not derived from win-rate data

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::entities::{
    Brawler, EnhancedMetaStats, GameModeMeta, MetaBrawlerStat, MetaStats, TierEntry, TierList,
};
use crate::utils::{format_utc, round1};
use crate::value_objects::{DataSource, Tier};

pub const TIER_SEED: u64 = 42;
const TOTAL_MATCHES: u64 = 1_250_000;
const TOP_BRAWLERS: usize = 10;

const GAME_MODE_META: &[(&str, &str, &str)] = &[
    ("gemGrab", "2:45", "Poco"),
    ("brawlBall", "1:30", "Mortis"),
    ("heist", "2:15", "Colt"),
    ("bounty", "3:20", "Piper"),
    ("siege", "4:10", "Jessie"),
    ("hotZone", "2:55", "Rosa"),
    ("knockout", "1:45", "Edgar"),
];

/// Splits the roster in order: S takes 6, A 10, B 12, C the rest.
pub fn build_tier_list(brawlers: &[Brawler]) -> TierList {
    let mut rng = StdRng::seed_from_u64(TIER_SEED);
    let mut remaining = brawlers.iter();
    let mut list = TierList::default();

    for tier in Tier::ALL {
        let ((win_base, win_spread), (pick_base, pick_spread)) = tier.rate_bands();
        let take = tier.capacity().unwrap_or(usize::MAX);
        let entries = remaining
            .by_ref()
            .take(take)
            .map(|brawler| TierEntry {
                id: brawler.id,
                name: brawler.name.clone(),
                win_rate: round1(win_base + rng.random::<f64>() * win_spread),
                pick_rate: round1(pick_base + rng.random::<f64>() * pick_spread),
            })
            .collect();
        *list.tier_mut(tier) = entries;
    }
    list
}

pub fn build_meta_stats(brawlers: &[Brawler], now: DateTime<Utc>) -> MetaStats {
    let mut rng = StdRng::seed_from_u64(TIER_SEED);
    let top_brawlers = brawlers
        .iter()
        .take(TOP_BRAWLERS)
        .map(|brawler| MetaBrawlerStat {
            id: brawler.id,
            name: brawler.name.clone(),
            pick_rate: round1(5.0 + rng.random::<f64>() * 15.0),
            win_rate: round1(45.0 + rng.random::<f64>() * 25.0),
            ban_rate: round1(rng.random::<f64>() * 10.0),
        })
        .collect();

    let game_mode_meta = GAME_MODE_META
        .iter()
        .map(|(mode, avg_match_length, most_picked)| {
            (
                mode.to_string(),
                GameModeMeta {
                    avg_match_length: avg_match_length.to_string(),
                    most_picked: most_picked.to_string(),
                },
            )
        })
        .collect();

    MetaStats {
        total_matches: TOTAL_MATCHES,
        last_updated: format_utc(now - Duration::hours(2)),
        top_brawlers,
        game_mode_meta,
    }
}

pub fn build_enhanced_stats(
    brawlers: &[Brawler],
    now: DateTime<Utc>,
    data_source: DataSource,
) -> EnhancedMetaStats {
    let tiers = build_tier_list(brawlers);
    let tier_distribution = Tier::ALL
        .iter()
        .map(|tier| (tier.as_str().to_string(), tiers.tier(*tier).len()))
        .collect();

    EnhancedMetaStats {
        stats: build_meta_stats(brawlers, now),
        tier_distribution,
        rarity_breakdown: count_by(brawlers, |b| b.rarity.as_deref()),
        class_breakdown: count_by(brawlers, |b| b.class.as_deref()),
        data_source,
    }
}

fn count_by(brawlers: &[Brawler], key: impl Fn(&Brawler) -> Option<&str>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for brawler in brawlers {
        let label = key(brawler).unwrap_or("Unknown").to_string();
        *counts.entry(label).or_insert(0) += 1;
    }
    counts
}
