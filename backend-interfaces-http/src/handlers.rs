pub mod brawler_handlers;
pub mod event_handlers;
pub mod meta_handlers;
pub mod ops_handlers;
pub mod player_handlers;
pub mod strategy_handlers;
