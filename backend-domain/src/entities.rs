// Domain entities
// Plain records mirroring the upstream stats API payloads

pub mod battle_log;
pub mod brawler;
pub mod config;
pub mod event_rotation;
pub mod meta;
pub mod player;
pub mod strategy;

pub use battle_log::*;
pub use brawler::*;
pub use config::*;
pub use event_rotation::*;
pub use meta::*;
pub use player::*;
pub use strategy::*;
