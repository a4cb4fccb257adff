//! HTTP server
//!
//! Wires the [`SitemapDetector`] into an axum router. The detector is built
//! once at startup and handed to every request through [`AppState`].

mod routes;

pub use routes::{detect_sitemap, ApiError, DetectResponse, ErrorResponse};

use crate::config::ServerConfig;
use crate::detector::SitemapDetector;
use crate::DetectorError;
use axum::routing::get;
use axum::Router;
use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub detector: Arc<SitemapDetector>,
}

impl AppState {
    pub fn new(detector: SitemapDetector) -> Self {
        Self {
            detector: Arc::new(detector),
        }
    }
}

/// Builds the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/detect_sitemap", get(detect_sitemap))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the listener described by `config`
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, DetectorError> {
    let ip: IpAddr = config
        .host
        .parse()
        .map_err(|e: std::net::AddrParseError| DetectorError::ListenAddress {
            address: config.bind_address(),
            message: e.to_string(),
        })?;

    Ok(TcpListener::bind(SocketAddr::new(ip, config.port)).await?)
}

/// Serves `router` on `listener` until `shutdown` resolves
pub async fn serve<F>(
    listener: TcpListener,
    router: Router,
    shutdown: F,
) -> Result<(), DetectorError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Listening on http://{}", addr);
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
