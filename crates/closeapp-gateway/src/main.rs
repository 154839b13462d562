//! CloseApp Gateway — HTTP surface for close-response and outreach copy.
//! Listens on 0.0.0.0:$PORT (default 8000); CORS open to every origin.

mod api_error;
mod config;
mod diagnostics;
mod extract;
mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::GatewayConfig;

pub struct AppState {
    pub config: GatewayConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("[closeapp-gateway] .env not loaded: {} (using system environment)", e);
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GatewayConfig::load()?;
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(
        "CloseApp gateway listening on {} (core {})",
        listener.local_addr()?,
        closeapp_core::version()
    );

    let app = build_app(Arc::new(AppState { config }));
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn build_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/api/close-response", post(handlers::close_response))
        .route("/api/outreach", post(handlers::outreach))
        .route("/test", get(handlers::diagnostics))
        .with_state(state)
        .layer(axum::middleware::from_fn(log_request))
        .layer(cors)
}

async fn log_request(request: Request, next: Next) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    tracing::info!("{} {} from {}", request.method(), request.uri().path(), peer);
    next.run(request).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Ctrl+C handler unavailable: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown initiated (Ctrl+C received)");
}
