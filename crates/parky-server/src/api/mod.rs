pub mod response;

use crate::config::Config;
use crate::db;
use crate::features::{self, FeatureState};
use crate::middleware;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use sqlx::PgPool;
use std::{future::IntoFuture, net::SocketAddr, sync::Arc, time::Duration};
use tokio::{signal, sync::Notify};

/// Everything the HTTP layer needs to answer requests
#[derive(Clone)]
pub struct AppState {
    /// Pool used by the health check
    pub db: PgPool,
    pub features: FeatureState,
}

/// Routes without middleware
///
/// - `GET /` - Service information
/// - `GET /health` - Database connectivity check
/// - `/api/...` - Feature routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(state.db)
        .nest("/api", features::router(state.features))
}

/// Routes wrapped in the configured middleware stack
pub fn create_router(state: AppState, config: &Config) -> Router {
    middleware::apply(routes(state), &config.cors)
}

/// Bind and serve until Ctrl+C or SIGTERM
///
/// In-flight requests get `shutdown_timeout_secs` to finish once a signal
/// arrives.
pub async fn serve(config: Config, state: AppState) -> anyhow::Result<()> {
    let app = create_router(state, &config);

    let addr: SocketAddr = config.bind_address().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    let drain = Arc::new(Notify::new());
    let server = axum::serve(listener, app)
        .with_graceful_shutdown({
            let drain = drain.clone();
            async move { drain.notified().await }
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return result.map_err(Into::into),
        _ = shutdown_signal() => {},
    }

    drain.notify_one();
    let timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    tracing::info!("Waiting up to {:?} for connections to close", timeout);

    match tokio::time::timeout(timeout, server).await {
        Ok(result) => result?,
        Err(_) => tracing::warn!("Shutdown timeout elapsed, dropping remaining connections"),
    }

    tracing::info!("Server shut down gracefully");
    Ok(())
}

async fn root() -> impl IntoResponse {
    Json(json!({
        "name": "Parky API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

async fn health(State(pool): State<PgPool>) -> Response {
    match db::health_check(&pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "database": "connected"
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Database health check failed: {:?}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "database": "disconnected"
                })),
            )
                .into_response()
        },
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, starting graceful shutdown"),
        _ = terminate => tracing::info!("Received terminate signal, starting graceful shutdown"),
    }
}
