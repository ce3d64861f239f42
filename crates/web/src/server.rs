//! Router assembly and the serve loop

use crate::config::Settings;
use crate::error::{Result, WebError};
use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use tillpoint_http::middleware::{path_filter_middleware, trace_middleware};
use tillpoint_http::routes::health_check;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

/// Health route plus the static bundle, with unknown paths falling back to
/// the index so the client router can take over.
pub fn router(settings: &Settings) -> Router {
    let routes = Arc::new(settings.routes.clone());
    let static_files =
        ServeDir::new(&settings.server.static_dir).fallback(ServeFile::new(settings.index_path()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(static_files)
        .layer(middleware::from_fn_with_state(routes, path_filter_middleware))
        .layer(middleware::from_fn(trace_middleware))
}

pub async fn serve(settings: Settings) -> Result<()> {
    if !settings.server.static_dir.is_dir() {
        return Err(WebError::MissingStaticDir(settings.server.static_dir));
    }

    let listener = TcpListener::bind(settings.server.bind_addr).await?;
    info!(
        addr = %settings.server.bind_addr,
        static_dir = %settings.server.static_dir.display(),
        "Serving Tillpoint front-end"
    );

    axum::serve(listener, router(&settings))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Failed to listen for shutdown signal");
    }
}
