mod common;

use axum::http::{header, StatusCode};
use common::{body_bytes, body_json, failing_upstream_app, get, mock_app};

#[tokio::test]
async fn backend_test_endpoint_reports_alive() {
    let app = mock_app();
    let response = get(&app, "/api/player/test").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Backend is working!");
    assert!(json["timestamp"].as_str().is_some_and(|ts| ts.ends_with('Z')));
}

#[tokio::test]
async fn brawler_list_is_served_from_cache_on_repeat() {
    let app = mock_app();
    let first = body_json(get(&app, "/api/brawler").await).await;
    let second = body_json(get(&app, "/api/brawler").await).await;

    assert!(first["count"].as_u64().is_some_and(|count| count > 0));
    assert_eq!(first["count"], second["count"]);
    assert_eq!(
        first["brawlers"].as_array().map(Vec::len),
        first["count"].as_u64().map(|count| count as usize)
    );

    let snapshot = app.metrics.snapshot();
    assert_eq!(snapshot.cache_misses, 1);
    assert_eq!(snapshot.cache_hits, 1);
    assert_eq!(snapshot.upstream_requests, 0);
}

#[tokio::test]
async fn brawler_lookup_by_id() {
    let app = mock_app();
    let response = get(&app, "/api/brawler/16000000").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Shelly");

    let missing = get(&app, "/api/brawler/42").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let json = body_json(missing).await;
    assert_eq!(json["message"], "Brawler not found");
    assert_eq!(json["id"], 42);

    let invalid = get(&app, "/api/brawler/shelly").await;
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn player_tag_with_or_without_hash_is_the_same_player() {
    let app = mock_app();
    let bare = get(&app, "/api/player/ABC123").await;
    assert_eq!(bare.status(), StatusCode::OK);
    let bare = body_json(bare).await;
    let hashed = body_json(get(&app, "/api/player/%23ABC123").await).await;
    assert_eq!(bare, hashed);
    assert_eq!(bare["tag"], "#ABC123");
}

#[tokio::test]
async fn mock_players_differ_between_tags() {
    let app = mock_app();
    let first = body_json(get(&app, "/api/player/ABC123").await).await;
    let second = body_json(get(&app, "/api/player/XYZ789").await).await;
    assert_ne!(first["trophies"], second["trophies"]);
}

#[tokio::test]
async fn battle_log_has_entries_in_mock_mode() {
    let app = mock_app();
    let response = get(&app, "/api/player/ABC123/battles").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["items"].as_array().is_some_and(|items| !items.is_empty()));
}

#[tokio::test]
async fn failing_upstream_player_is_not_found_with_tag() {
    let app = failing_upstream_app().await;
    let response = get(&app, "/api/player/ABC123").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Player not found");
    assert_eq!(json["tag"], "ABC123");

    let battles = get(&app, "/api/player/ABC123/battles").await;
    assert_eq!(battles.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(battles).await["message"], "Battle log not found");
}

#[tokio::test]
async fn failing_upstream_roster_and_events_fall_back_to_mock() {
    let app = failing_upstream_app().await;
    let brawlers = get(&app, "/api/brawler").await;
    assert_eq!(brawlers.status(), StatusCode::OK);
    assert!(body_json(brawlers).await["count"]
        .as_u64()
        .is_some_and(|count| count > 0));

    let events = get(&app, "/api/events").await;
    assert_eq!(events.status(), StatusCode::OK);
    assert_eq!(body_json(events).await["dataSource"], "mock");

    let stats = get(&app, "/api/meta/enhanced-stats").await;
    assert_eq!(stats.status(), StatusCode::OK);
    assert_eq!(body_json(stats).await["dataSource"], "mock");
}

#[tokio::test]
async fn tier_list_partitions_the_roster() {
    let app = mock_app();
    let response = get(&app, "/api/meta/tiers?mode=gemGrab").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["mode"], "gemGrab");
    assert_eq!(json["tierList"]["S"].as_array().map(Vec::len), Some(6));
    assert_eq!(json["tierList"]["A"].as_array().map(Vec::len), Some(10));
    assert_eq!(json["tierList"]["B"].as_array().map(Vec::len), Some(12));

    let default_mode = body_json(get(&app, "/api/meta/tiers").await).await;
    assert_eq!(default_mode["mode"], "all");
}

#[tokio::test]
async fn meta_stats_are_available() {
    let app = mock_app();
    let response = get(&app, "/api/meta/stats").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["totalMatches"], 1_250_000);
    assert!(json["gameModeMeta"].is_object());
}

#[tokio::test]
async fn unknown_map_strategies_are_not_found() {
    let app = mock_app();
    let response = get(&app, "/api/maps/unknownmap/strategies").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Map strategies not found");
    assert_eq!(json["mapId"], "unknownmap");
}

#[tokio::test]
async fn known_map_strategies_are_listed() {
    let app = mock_app();
    let response = get(&app, "/api/maps/hard-rock-mine/strategies").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json.as_array().is_some_and(|list| !list.is_empty()));
}

#[tokio::test]
async fn ops_endpoints_report_state() {
    let app = mock_app();
    assert_eq!(get(&app, "/api/ops/health/live").await.status(), StatusCode::OK);

    get(&app, "/api/brawler").await;
    let ready = body_json(get(&app, "/api/ops/health/ready").await).await;
    assert_eq!(ready["status"], "ok");
    assert_eq!(ready["mockMode"], true);
    assert_eq!(ready["cacheEntries"], 1);

    let metrics = get(&app, "/api/ops/metrics/prometheus").await;
    assert!(metrics
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("text/plain")));
    let text = String::from_utf8(body_bytes(metrics).await).expect("utf8");
    assert!(text.contains("brawlbuddy_cache_misses_total 1\n"));
}
