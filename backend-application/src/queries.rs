pub mod brawler_queries;
pub mod event_queries;
pub mod meta_queries;
pub mod ops_queries;
pub mod player_queries;
pub mod strategy_queries;
