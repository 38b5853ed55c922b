use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use backend_application::{AppState, Metrics};
use backend_domain::RuntimeConfig;
use backend_infrastructure::{BrawlApiClient, MemoryCache};
use backend_interfaces_http::build_router;

pub struct TestApp {
    pub router: Router,
    pub metrics: Arc<Metrics>,
}

pub fn test_config(api_base_url: &str, use_mock_data: bool) -> RuntimeConfig {
    RuntimeConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        api_base_url: api_base_url.to_string(),
        api_key: None,
        strategies_url: None,
        rate_limit_delay_ms: 0,
        use_mock_data,
        mock_ttl_seconds: 300,
        upstream_timeout_seconds: 5,
        request_timeout_seconds: 5,
        cache_sweep_interval_seconds: 60,
        cors_origins: vec!["http://localhost:5173".to_string()],
    }
}

pub fn build_test_app(config: RuntimeConfig) -> TestApp {
    let cache = Arc::new(MemoryCache::new());
    let metrics = Arc::new(Metrics::default());
    let client = BrawlApiClient::new(&config, cache, metrics.clone()).expect("client");
    let state = AppState {
        config,
        data_source: Arc::new(client),
        metrics: metrics.clone(),
    };
    TestApp {
        router: build_router(state),
        metrics,
    }
}

/// App whose client never leaves the process.
pub fn mock_app() -> TestApp {
    build_test_app(test_config("https://api.brawlstars.com/v1", true))
}

/// App backed by an upstream that answers every request with 500.
pub async fn failing_upstream_app() -> TestApp {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub upstream");
    let addr = listener.local_addr().expect("stub addr");
    let stub = Router::new().fallback(|| async { StatusCode::INTERNAL_SERVER_ERROR });
    tokio::spawn(async move {
        let _ = axum::serve(listener, stub).await;
    });
    build_test_app(test_config(&format!("http://{}/v1", addr), false))
}

pub async fn get(app: &TestApp, uri: &str) -> Response {
    app.router
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response")
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("json body")
}
