use axum::routing::get;
use axum::Router;

use backend_application::AppState;

use crate::handlers::{
    brawler_handlers, event_handlers, meta_handlers, ops_handlers, player_handlers,
    strategy_handlers,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/brawler", get(brawler_handlers::list_brawlers))
        .route("/api/brawler/:id", get(brawler_handlers::get_brawler))
        .route("/api/player/test", get(player_handlers::backend_test))
        .route("/api/player/:tag", get(player_handlers::get_player))
        .route(
            "/api/player/:tag/battles",
            get(player_handlers::get_battle_log),
        )
        .route("/api/meta/tiers", get(meta_handlers::tier_list))
        .route("/api/meta/stats", get(meta_handlers::meta_stats))
        .route(
            "/api/meta/enhanced-stats",
            get(meta_handlers::enhanced_stats),
        )
        .route("/api/events", get(event_handlers::event_rotation))
        .route(
            "/api/maps/:map_id/strategies",
            get(strategy_handlers::map_strategies),
        )
        .route("/api/ops/health/live", get(ops_handlers::health_live))
        .route("/api/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/api/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
