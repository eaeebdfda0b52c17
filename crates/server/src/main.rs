//! Challenge feed web server.
//!
//! Serves the Trunk-built frontend, falling back to `index.html` so
//! client-side routes resolve.

mod config;
mod routes;

use anyhow::Context;
use axum::{Router, routing::get};
use clap::Parser;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use routes::healthz;

/// Build the application router serving `dist`.
fn build_router(dist: &Path) -> Router {
    let static_files = ServeDir::new(dist)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(dist.join("index.html")));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    if !config.index_html().is_file() {
        warn!(
            dist = %config.dist.display(),
            "no index.html in dist, run `trunk build` in crates/frontend first"
        );
    }

    let app = build_router(&config.dist);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    info!(addr = %config.addr, dist = %config.dist.display(), "server listening");

    axum::serve(listener, app).await.context("server terminated")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    const INDEX: &str = "<title>BackstagePass - Challenge Feed</title>";

    fn dist_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::write(dir.path().join("avatar.svg"), "<svg/>").unwrap();
        dir
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_healthz() {
        let dist = dist_dir();

        let (status, body) = get_body(build_router(dist.path()), "/healthz").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_serves_root_index() {
        let dist = dist_dir();

        let (status, body) = get_body(build_router(dist.path()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_serves_static_asset() {
        let dist = dist_dir();

        let (status, body) = get_body(build_router(dist.path()), "/avatar.svg").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<svg/>");
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let dist = dist_dir();

        let (status, body) = get_body(build_router(dist.path()), "/challenge/day/3").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }
}
