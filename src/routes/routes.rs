//! Defines the two public routes.
//!
//! - `GET  /`       — the configured image, streamed from disk
//! - `HEAD /`       — headers for the image without a body
//! - `GET  /health` — liveness probe for the load balancer
//!
//! Every other path falls through to axum's default 404.

use crate::{
    handlers::{
        asset_handlers::{get_asset, head_asset},
        health_handlers::health,
    },
    services::asset_service::AssetService,
};
use axum::{
    Router,
    http::{HeaderValue, header::CACHE_CONTROL},
    routing::get,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

/// Clients revalidate on every load so a replaced asset shows up immediately.
const CACHE_CONTROL_ASSET: &str = "public, max-age=0";

/// Probes must never be answered from a cache.
const CACHE_CONTROL_HEALTH: &str = "no-store";

/// Build the router for all routes.
///
/// The router carries shared state (`AssetService`) to the asset handlers.
pub fn routes() -> Router<AssetService> {
    let asset_routes = Router::new()
        .route("/", get(get_asset).head(head_asset))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_ASSET),
        ));

    let health_routes = Router::new()
        .route("/health", get(health))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Router::new()
        .merge(asset_routes)
        .merge(health_routes)
        .layer(TraceLayer::new_for_http())
}

/// Router with state attached, ready to serve.
pub fn app(service: AssetService) -> Router {
    routes().with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::{StatusCode, header};
    use std::{net::SocketAddr, path::Path};
    use tokio::net::TcpListener;

    const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    async fn spawn_server(asset: &Path) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = app(AssetService::new(asset));
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let dir = tempfile::tempdir().unwrap();
        let addr = spawn_server(&dir.path().join("logo.png")).await;

        let resp = reqwest::get(format!("http://{addr}/health")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CACHE_CONTROL).unwrap(),
            CACHE_CONTROL_HEALTH
        );
        assert_eq!(resp.text().await.unwrap(), "OK");
    }

    #[tokio::test]
    async fn root_serves_asset_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let asset = dir.path().join("logoswayatt.png");
        std::fs::write(&asset, PNG_BYTES).unwrap();
        let addr = spawn_server(&asset).await;

        let resp = reqwest::get(format!("http://{addr}/")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "image/png");
        assert_eq!(
            resp.headers().get(header::CACHE_CONTROL).unwrap(),
            CACHE_CONTROL_ASSET
        );
        assert!(resp.headers().contains_key(header::LAST_MODIFIED));
        assert_eq!(resp.bytes().await.unwrap().as_ref(), PNG_BYTES);
    }

    #[tokio::test]
    async fn root_is_404_when_asset_missing() {
        let dir = tempfile::tempdir().unwrap();
        let addr = spawn_server(&dir.path().join("logoswayatt.png")).await;

        let resp = reqwest::get(format!("http://{addr}/")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = resp.text().await.unwrap();
        assert!(body.contains("\"status\":404"));
    }

    #[tokio::test]
    async fn root_is_500_when_asset_unreadable() {
        let addr = spawn_server(Path::new("logo\0.png")).await;

        let resp = reqwest::get(format!("http://{addr}/")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body = resp.text().await.unwrap();
        assert!(body.contains("\"status\":500"));
    }

    #[tokio::test]
    async fn root_is_404_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let parent = dir.path().join("plain-file");
        std::fs::write(&parent, PNG_BYTES).unwrap();
        let addr = spawn_server(&parent.join("logoswayatt.png")).await;

        let resp = reqwest::get(format!("http://{addr}/")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn health_stays_up_when_asset_missing() {
        let dir = tempfile::tempdir().unwrap();
        let addr = spawn_server(&dir.path().join("gone.png")).await;

        let resp = reqwest::get(format!("http://{addr}/health")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn head_root_has_no_body() {
        let dir = tempfile::tempdir().unwrap();
        let asset = dir.path().join("logo.png");
        std::fs::write(&asset, PNG_BYTES).unwrap();
        let addr = spawn_server(&asset).await;

        let resp = reqwest::Client::new()
            .head(format!("http://{addr}/"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "image/png");
        assert!(resp.bytes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_path_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let asset = dir.path().join("logo.png");
        std::fs::write(&asset, PNG_BYTES).unwrap();
        let addr = spawn_server(&asset).await;

        let resp = reqwest::get(format!("http://{addr}/logo.png")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
