// Mock data generators
// Pure functions: the same seed always yields the same payload

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

use crate::entities::{
    Battle, BattleBrawler, BattleEvent, BattleLog, BattleLogEntry, BattlePlayer, Brawler,
    BrawlerAbility, EventBrawlerStat, EventRotation, MapStrategy, OwnedAccessory, OwnedGear,
    Player, PlayerBrawler, PlayerClub, PlayerIcon, ScheduledEvent,
};
use crate::utils::format_utc;
use crate::value_objects::{DataSource, PlayerTag};

const STAR_POWER_ID_BASE: i64 = 23_000_000;
const GADGET_ID_BASE: i64 = 23_000_500;
const BATTLE_LOG_SALT: u64 = 0x0BA7_71E5;
const BATTLE_LOG_LEN: usize = 10;

struct RosterSeed {
    id: i64,
    name: &'static str,
    rarity: &'static str,
    class: &'static str,
    star_powers: [&'static str; 2],
    gadgets: [&'static str; 2],
}

const ROSTER: &[RosterSeed] = &[
    RosterSeed { id: 16_000_000, name: "Shelly", rarity: "Starting Brawler", class: "Damage Dealer", star_powers: ["Shell Shock", "Band-Aid"], gadgets: ["Fast Forward", "Clay Pigeons"] },
    RosterSeed { id: 16_000_001, name: "Colt", rarity: "Rare", class: "Damage Dealer", star_powers: ["Slick Boots", "Magnum Special"], gadgets: ["Speedloader", "Silver Bullet"] },
    RosterSeed { id: 16_000_002, name: "Bull", rarity: "Rare", class: "Tank", star_powers: ["Berserker", "Tough Guy"], gadgets: ["T-Bone Injector", "Stomper"] },
    RosterSeed { id: 16_000_003, name: "Brock", rarity: "Rare", class: "Damage Dealer", star_powers: ["More Rockets!", "Rocket No. 4"], gadgets: ["Rocket Laces", "Rocket Fuel"] },
    RosterSeed { id: 16_000_004, name: "Rico", rarity: "Super Rare", class: "Damage Dealer", star_powers: ["Super Bouncy", "Robo Retreat"], gadgets: ["Multiball Launcher", "Bouncy Castle"] },
    RosterSeed { id: 16_000_005, name: "Spike", rarity: "Legendary", class: "Damage Dealer", star_powers: ["Fertilize", "Curveball"], gadgets: ["Popping Pincushion", "Life Plant"] },
    RosterSeed { id: 16_000_006, name: "Barley", rarity: "Rare", class: "Artillery", star_powers: ["Medical Use", "Extra Noxious"], gadgets: ["Sticky Syrup Mixer", "Herbal Tonic"] },
    RosterSeed { id: 16_000_007, name: "Jessie", rarity: "Super Rare", class: "Controller", star_powers: ["Energize", "Shocky"], gadgets: ["Spark Plug", "Recoil Spring"] },
    RosterSeed { id: 16_000_008, name: "Nita", rarity: "Rare", class: "Damage Dealer", star_powers: ["Bear With Me", "Hyper Bear"], gadgets: ["Bear Paws", "Faux Fur"] },
    RosterSeed { id: 16_000_009, name: "Dynamike", rarity: "Super Rare", class: "Artillery", star_powers: ["Dyna-Jump", "Demolition"], gadgets: ["Fidget Spinner", "Satchel Charge"] },
    RosterSeed { id: 16_000_010, name: "El Primo", rarity: "Rare", class: "Tank", star_powers: ["El Fuego", "Meteor Rush"], gadgets: ["Suplex Supplement", "Asteroid Belt"] },
    RosterSeed { id: 16_000_011, name: "Mortis", rarity: "Mythic", class: "Assassin", star_powers: ["Creepy Harvest", "Coiled Snake"], gadgets: ["Combo Spinner", "Survival Shovel"] },
    RosterSeed { id: 16_000_012, name: "Crow", rarity: "Legendary", class: "Assassin", star_powers: ["Extra Toxic", "Carrion Crow"], gadgets: ["Defense Booster", "Slowing Toxin"] },
    RosterSeed { id: 16_000_013, name: "Poco", rarity: "Rare", class: "Support", star_powers: ["Da Capo!", "Screeching Solo"], gadgets: ["Tuning Fork", "Protective Tunes"] },
    RosterSeed { id: 16_000_014, name: "Bo", rarity: "Epic", class: "Controller", star_powers: ["Circling Eagle", "Snare a Bear"], gadgets: ["Super Totem", "Tripwire"] },
    RosterSeed { id: 16_000_015, name: "Piper", rarity: "Epic", class: "Marksman", star_powers: ["Ambush", "Snappy Sniping"], gadgets: ["Auto Aimer", "Homemade Recipe"] },
    RosterSeed { id: 16_000_016, name: "Pam", rarity: "Epic", class: "Support", star_powers: ["Mama's Hug", "Mama's Squeeze"], gadgets: ["Pulse Modulator", "Scrapsucker"] },
    RosterSeed { id: 16_000_017, name: "Tara", rarity: "Mythic", class: "Controller", star_powers: ["Black Portal", "Healing Shade"], gadgets: ["Psychic Enhancer", "Support from Beyond"] },
    RosterSeed { id: 16_000_018, name: "Darryl", rarity: "Super Rare", class: "Tank", star_powers: ["Steel Hoops", "Rolling Reload"], gadgets: ["Recoiling Rotator", "Tar Barrel"] },
    RosterSeed { id: 16_000_019, name: "Penny", rarity: "Super Rare", class: "Artillery", star_powers: ["Last Blast", "Balls of Fire"], gadgets: ["Pocket Detonator", "Captain's Compass"] },
    RosterSeed { id: 16_000_020, name: "Frank", rarity: "Epic", class: "Tank", star_powers: ["Power Grab", "Sponge"], gadgets: ["Active Noise Canceling", "Irresistible Attraction"] },
    RosterSeed { id: 16_000_021, name: "Gene", rarity: "Mythic", class: "Support", star_powers: ["Magic Puffs", "Spirit Slap"], gadgets: ["Lamp Blowout", "Vengeful Spirits"] },
    RosterSeed { id: 16_000_022, name: "Tick", rarity: "Super Rare", class: "Artillery", star_powers: ["Well Oiled", "Automa-Tick Reload"], gadgets: ["Backup Mine", "Last Hurrah"] },
    RosterSeed { id: 16_000_023, name: "Leon", rarity: "Legendary", class: "Assassin", star_powers: ["Smoke Trails", "Invisiheal"], gadgets: ["Clone Projector", "Lollipop Drop"] },
    RosterSeed { id: 16_000_024, name: "Rosa", rarity: "Rare", class: "Tank", star_powers: ["Plant Life", "Thorny Gloves"], gadgets: ["Grow Light", "Unfriendly Bushes"] },
    RosterSeed { id: 16_000_025, name: "Carl", rarity: "Super Rare", class: "Damage Dealer", star_powers: ["Power Throw", "Protective Pirouette"], gadgets: ["Heat Ejector", "Flying Hook"] },
    RosterSeed { id: 16_000_026, name: "Bibi", rarity: "Epic", class: "Tank", star_powers: ["Home Run", "Batting Stance"], gadgets: ["Vitamin Booster", "Extra Sticky"] },
    RosterSeed { id: 16_000_027, name: "8-Bit", rarity: "Super Rare", class: "Damage Dealer", star_powers: ["Boosted Booster", "Plugged In"], gadgets: ["Cheat Cartridge", "Extra Credits"] },
    RosterSeed { id: 16_000_028, name: "Sandy", rarity: "Legendary", class: "Controller", star_powers: ["Rude Sands", "Healing Winds"], gadgets: ["Sleep Stimulator", "Sweet Dreams"] },
    RosterSeed { id: 16_000_029, name: "Bea", rarity: "Epic", class: "Marksman", star_powers: ["Insta Beaload", "Honey Coat"], gadgets: ["Honey Molasses", "Rattled Hive"] },
    RosterSeed { id: 16_000_030, name: "Emz", rarity: "Epic", class: "Controller", star_powers: ["Bad Karma", "Hype"], gadgets: ["Friendzoner", "Acid Spray"] },
    RosterSeed { id: 16_000_031, name: "Mr. P", rarity: "Mythic", class: "Controller", star_powers: ["Handle With Care", "Revolving Door"], gadgets: ["Service Bell", "Porter Reinforcements"] },
    RosterSeed { id: 16_000_032, name: "Max", rarity: "Mythic", class: "Support", star_powers: ["Super Charged", "Run n' Gun"], gadgets: ["Phase Shifter", "Sneaky Sneakers"] },
    RosterSeed { id: 16_000_034, name: "Jacky", rarity: "Super Rare", class: "Tank", star_powers: ["Counter Crush", "Hardy Hard Hat"], gadgets: ["Pneumatic Booster", "Rebuild"] },
];

const PLAYER_NAMES: &[&str] = &[
    "Shadow", "Nova", "Blaze", "Rogue", "Echo", "Viper", "Comet", "Pixel", "Raven", "Frost",
    "Ember", "Bolt",
];

const CLUB_NAMES: &[&str] = &["Brawl Kings", "Gem Hunters", "Star Squad", "Night Owls", "Bush Campers"];

struct ModeSeed {
    event_id: i64,
    mode: &'static str,
    map: &'static str,
    showdown: bool,
}

const BATTLE_MODES: &[ModeSeed] = &[
    ModeSeed { event_id: 15_000_005, mode: "gemGrab", map: "Hard Rock Mine", showdown: false },
    ModeSeed { event_id: 15_000_051, mode: "brawlBall", map: "Spiraling Out", showdown: false },
    ModeSeed { event_id: 15_000_010, mode: "soloShowdown", map: "Acid Lakes", showdown: true },
    ModeSeed { event_id: 15_000_018, mode: "heist", map: "Safe Zone", showdown: false },
    ModeSeed { event_id: 15_000_083, mode: "bounty", map: "Shooting Star", showdown: false },
    ModeSeed { event_id: 15_000_300, mode: "gemGrab", map: "On A Roll", showdown: false },
];

struct MapTips {
    id: i64,
    slug: &'static str,
    tips: &'static [(&'static str, &'static str, &'static str, i64, i64)],
}

const STRATEGY_CATALOG: &[MapTips] = &[
    MapTips {
        id: 15_000_005,
        slug: "hard-rock-mine",
        tips: &[
            ("Hold the mine", "Keep a controller on the gem mine and let the flanks trade.", "GemMaster", 42, 3),
            ("Throwers in the back", "Barley and Dynamike punish the walls around the mine.", "LobLord", 27, 5),
        ],
    },
    MapTips {
        id: 15_000_051,
        slug: "spiraling-out",
        tips: &[
            ("Break the center", "Open the middle walls early so tanks can rush the goal.", "BallHog", 35, 4),
            ("Assassins win here", "Mortis and Darryl get free picks in the spiral lanes.", "DashKing", 51, 9),
        ],
    },
    MapTips {
        id: 15_000_010,
        slug: "acid-lakes",
        tips: &[("Play the bushes", "Edgar and Leon thrive around the centre grass.", "Lurker", 18, 2)],
    },
    MapTips {
        id: 15_000_300,
        slug: "on-a-roll",
        tips: &[
            ("Long range wins", "Piper and Belle control the open middle lane.", "Sniper", 22, 6),
            ("Heal the carrier", "Poco or Gene keep the gem carrier alive.", "SupportMain", 14, 1),
        ],
    },
    MapTips {
        id: 15_000_018,
        slug: "safe-zone",
        tips: &[("Race the safe", "Colt and Bull melt the safe faster than any defense can trade.", "Vaultbreaker", 30, 7)],
    },
    MapTips {
        id: 15_000_083,
        slug: "shooting-star",
        tips: &[("Stay at range", "Piper and Brock hold stars without stepping into the open.", "StarCollector", 25, 2)],
    },
];

/// Seed derived from the first eight bytes of SHA-256 over the normalized tag.
pub fn seed_from_tag(tag: &PlayerTag) -> u64 {
    let digest = Sha256::digest(tag.as_str().as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

pub fn mock_brawlers() -> Vec<Brawler> {
    ROSTER
        .iter()
        .enumerate()
        .map(|(index, seed)| Brawler {
            id: seed.id,
            name: seed.name.to_string(),
            description: Some(format!("{} {} brawler.", seed.rarity, seed.class)),
            image_url: Some(format!(
                "https://cdn.brawlify.com/brawlers/borderless/{}.png",
                seed.id
            )),
            rarity: Some(seed.rarity.to_string()),
            class: Some(seed.class.to_string()),
            star_powers: abilities(STAR_POWER_ID_BASE, index, &seed.star_powers),
            gadgets: abilities(GADGET_ID_BASE, index, &seed.gadgets),
        })
        .collect()
}

fn abilities(base: i64, index: usize, names: &[&str; 2]) -> Vec<BrawlerAbility> {
    names
        .iter()
        .enumerate()
        .map(|(slot, name)| BrawlerAbility {
            id: base + (index * 2 + slot) as i64,
            name: name.to_string(),
            description: None,
            image_url: None,
        })
        .collect()
}

pub fn mock_player(tag: &PlayerTag) -> Player {
    let mut rng = StdRng::seed_from_u64(seed_from_tag(tag));
    let roster = mock_brawlers();
    let owned = rng.random_range(8..=roster.len());

    let brawlers = roster
        .iter()
        .take(owned)
        .map(|brawler| {
            let power = rng.random_range(1..=11);
            let trophies = rng.random_range(0..=1000);
            let highest_trophies = trophies + rng.random_range(0..=250);
            PlayerBrawler {
                id: brawler.id,
                name: brawler.name.to_uppercase(),
                power,
                rank: (highest_trophies / 50 + 1).min(35),
                trophies,
                highest_trophies,
                gadgets: if power >= 7 {
                    owned_accessory(&brawler.gadgets)
                } else {
                    Vec::new()
                },
                star_powers: if power >= 9 {
                    owned_accessory(&brawler.star_powers)
                } else {
                    Vec::new()
                },
                gears: if power >= 8 {
                    vec![OwnedGear {
                        id: 62_000_000,
                        name: "DAMAGE".to_string(),
                        level: 3,
                    }]
                } else {
                    Vec::new()
                },
            }
        })
        .collect::<Vec<_>>();

    let trophies = brawlers.iter().map(|b| b.trophies).sum::<i64>();
    let highest_trophies = brawlers.iter().map(|b| b.highest_trophies).sum::<i64>();
    let exp_level = rng.random_range(20..=250);
    let name = format!(
        "{}{}",
        PLAYER_NAMES[rng.random_range(0..PLAYER_NAMES.len())],
        rng.random_range(1..1000)
    );
    let club = if rng.random_bool(0.6) {
        Some(PlayerClub {
            tag: format!("#{:X}", rng.random_range(0x10_0000u32..0xFF_FFFF)),
            name: CLUB_NAMES[rng.random_range(0..CLUB_NAMES.len())].to_string(),
        })
    } else {
        None
    };

    Player {
        tag: tag.to_string(),
        name,
        name_color: "0xffffffff".to_string(),
        icon: PlayerIcon {
            id: 28_000_000 + rng.random_range(0..60),
        },
        trophies,
        highest_trophies,
        exp_level,
        exp_points: exp_level * 120 + rng.random_range(0..120),
        is_qualified_from_championship_challenge: rng.random_bool(0.05),
        three_vs_three_victories: rng.random_range(100..12_000),
        solo_victories: rng.random_range(10..2_000),
        duo_victories: rng.random_range(10..2_000),
        best_robo_rumble_time: rng.random_range(0..15),
        best_time_as_big_brawler: rng.random_range(0..300),
        club,
        brawlers,
    }
}

fn owned_accessory(abilities: &[BrawlerAbility]) -> Vec<OwnedAccessory> {
    abilities
        .first()
        .map(|ability| OwnedAccessory {
            id: ability.id,
            name: ability.name.to_uppercase(),
        })
        .into_iter()
        .collect()
}

pub fn mock_battle_log(tag: &PlayerTag, now: DateTime<Utc>) -> BattleLog {
    let mut rng = StdRng::seed_from_u64(seed_from_tag(tag) ^ BATTLE_LOG_SALT);
    let roster = mock_brawlers();
    let mut played_at = now;

    let items = (0..BATTLE_LOG_LEN)
        .map(|_| {
            played_at -= Duration::minutes(rng.random_range(4..30));
            let mode = &BATTLE_MODES[rng.random_range(0..BATTLE_MODES.len())];
            let own = battle_player(&mut rng, &roster, Some(tag));
            let battle = if mode.showdown {
                let rank = rng.random_range(1..=10);
                let mut players = vec![own];
                players.extend((0..9).map(|_| battle_player(&mut rng, &roster, None)));
                Battle {
                    mode: mode.mode.to_string(),
                    battle_type: "ranked".to_string(),
                    result: None,
                    rank: Some(rank),
                    duration: 0,
                    trophy_change: 10 - 2 * rank,
                    star_tokens_gained: 0,
                    teams: Vec::new(),
                    players,
                    star_player: None,
                }
            } else {
                let (result, trophy_change) = match rng.random_range(0..10) {
                    0..=5 => ("victory", 8),
                    6..=8 => ("defeat", -6),
                    _ => ("draw", 0),
                };
                let mut ours = vec![own];
                ours.extend((0..2).map(|_| battle_player(&mut rng, &roster, None)));
                let theirs = (0..3)
                    .map(|_| battle_player(&mut rng, &roster, None))
                    .collect::<Vec<_>>();
                let star_player = if result == "victory" {
                    ours.first().cloned()
                } else {
                    None
                };
                Battle {
                    mode: mode.mode.to_string(),
                    battle_type: "ranked".to_string(),
                    result: Some(result.to_string()),
                    rank: None,
                    duration: rng.random_range(60..=180),
                    trophy_change,
                    star_tokens_gained: i64::from(result == "victory"),
                    teams: vec![ours, theirs],
                    players: Vec::new(),
                    star_player,
                }
            };
            BattleLogEntry {
                battle_time: played_at.format("%Y%m%dT%H%M%S.000Z").to_string(),
                event: BattleEvent {
                    id: mode.event_id,
                    mode: mode.mode.to_string(),
                    map: mode.map.to_string(),
                },
                battle,
            }
        })
        .collect();

    BattleLog { items }
}

fn battle_player(rng: &mut StdRng, roster: &[Brawler], tag: Option<&PlayerTag>) -> BattlePlayer {
    let brawler = &roster[rng.random_range(0..roster.len())];
    let tag = match tag {
        Some(tag) => tag.to_string(),
        None => format!("#{:X}", rng.random_range(0x1000_0000u32..0xFFFF_FFFF)),
    };
    BattlePlayer {
        tag,
        name: format!(
            "{}{}",
            PLAYER_NAMES[rng.random_range(0..PLAYER_NAMES.len())],
            rng.random_range(1..1000)
        ),
        brawler: Some(BattleBrawler {
            id: brawler.id,
            name: brawler.name.to_uppercase(),
            power: rng.random_range(1..=11),
            trophies: rng.random_range(0..=1000),
        }),
        brawlers: Vec::new(),
    }
}

pub fn mock_event_rotation(now: DateTime<Utc>) -> EventRotation {
    let slots: [(i64, &str, &str, i64, [(i64, &str, f64, f64); 5]); 3] = [
        (
            15_000_010,
            "soloShowdown",
            "Acid Lakes",
            617,
            [
                (16_000_023, "Leon", 55.0, 0.7),
                (16_000_000, "Shelly", 55.0, 1.0),
                (16_000_012, "Crow", 55.0, 0.4),
                (16_000_002, "Bull", 52.0, 0.5),
                (16_000_024, "Rosa", 50.0, 6.7),
            ],
        ),
        (
            15_000_051,
            "brawlBall",
            "Spiraling Out",
            1337,
            [
                (16_000_011, "Mortis", 73.0, 0.1),
                (16_000_020, "Frank", 69.0, 0.1),
                (16_000_010, "El Primo", 63.0, 0.1),
                (16_000_018, "Darryl", 61.0, 0.1),
                (16_000_026, "Bibi", 61.0, 0.6),
            ],
        ),
        (
            15_000_300,
            "gemGrab",
            "On A Roll",
            977,
            [
                (16_000_017, "Tara", 58.0, 0.3),
                (16_000_021, "Gene", 57.0, 1.9),
                (16_000_013, "Poco", 56.0, 3.1),
                (16_000_016, "Pam", 55.0, 1.1),
                (16_000_032, "Max", 54.0, 1.2),
            ],
        ),
    ];

    let schedule = slots
        .iter()
        .enumerate()
        .map(|(slot, (id, mode, map, minutes_left, top))| ScheduledEvent {
            id: *id,
            mode: mode.to_string(),
            map: map.to_string(),
            start_time: format_utc(now - Duration::hours(2)),
            end_time: format_utc(now + Duration::minutes(*minutes_left)),
            slot_id: Some(slot as i64 + 1),
            top_brawlers: top
                .iter()
                .map(|(brawler_id, name, win_rate, use_rate)| EventBrawlerStat {
                    brawler_id: *brawler_id,
                    name: name.to_string(),
                    win_rate: *win_rate,
                    use_rate: *use_rate,
                })
                .collect(),
        })
        .collect();

    EventRotation {
        schedule,
        data_source: DataSource::Mock,
    }
}

/// Built-in community tips, looked up by numeric map id or slug.
/// Returns `None` for maps the catalog does not know.
pub fn mock_map_strategies(map_id: &str) -> Option<Vec<MapStrategy>> {
    let wanted = map_id.trim().to_lowercase().replace(' ', "-");
    let (catalog_index, entry) = STRATEGY_CATALOG
        .iter()
        .enumerate()
        .find(|(_, entry)| entry.slug == wanted || entry.id.to_string() == wanted)?;

    let strategies = entry
        .tips
        .iter()
        .enumerate()
        .map(|(index, (title, description, author, upvotes, downvotes))| MapStrategy {
            id: (catalog_index * 100 + index + 1) as i64,
            title: title.to_string(),
            description: description.to_string(),
            author: author.to_string(),
            upvotes: *upvotes,
            downvotes: *downvotes,
        })
        .collect();
    Some(strategies)
}
