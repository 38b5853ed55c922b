use std::time::Duration;

use anyhow::Result;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use backend_application::AppState;
use backend_infrastructure::schedule_cache_sweeps;
use backend_interfaces_http::build_router;

use crate::context::AppContext;

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("ignoring invalid cors origin {}: {}", origin, err);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

fn build_router_with_layers(state: AppState) -> Router {
    build_router(state.clone())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            state.config.request_timeout_seconds,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config.cors_origins))
}

pub async fn run_standalone() -> Result<()> {
    let context = AppContext::new().await?;
    let state = context.state;

    tokio::spawn(schedule_cache_sweeps(
        context.cache,
        Duration::from_secs(state.config.cache_sweep_interval_seconds),
    ));

    let app = build_router_with_layers(state.clone());
    let addr: std::net::SocketAddr = state.config.bind_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("sigterm handler unavailable: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use backend_domain::RuntimeConfig;
    use tower::ServiceExt;

    fn mock_state() -> AppState {
        let config = RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            api_base_url: "https://api.brawlstars.com/v1".to_string(),
            api_key: None,
            strategies_url: None,
            rate_limit_delay_ms: 0,
            use_mock_data: true,
            mock_ttl_seconds: 300,
            upstream_timeout_seconds: 5,
            request_timeout_seconds: 5,
            cache_sweep_interval_seconds: 60,
            cors_origins: vec!["http://localhost:5173".to_string()],
        };
        AppContext::from_runtime_config(config)
            .expect("context")
            .state
    }

    #[tokio::test]
    async fn allowed_origin_gets_cors_headers() {
        let app = build_router_with_layers(mock_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/player/test")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some("http://localhost:5173")
        );
    }

    #[tokio::test]
    async fn unknown_origin_is_not_echoed() {
        let app = build_router_with_layers(mock_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/player/test")
                    .header(header::ORIGIN, "http://evil.example.com")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
