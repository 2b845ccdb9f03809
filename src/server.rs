// ABOUTME: HTTP server assembly: shared state, middleware layers, graceful shutdown
// ABOUTME: The catalog is shared read-only; per-user state goes through the SQLite pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep

//! Server wiring: builds the router, applies CORS/trace layers, and serves
//! with graceful shutdown on SIGINT/SIGTERM.

use crate::{
    catalog::CatalogStore,
    config::ServerConfig,
    errors::{AppError, AppResult},
    health::HealthChecker,
    routes,
};
use axum::{
    http::{header::CONTENT_TYPE, Method},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Shared per-process resources handed to every route handler
pub struct AppState {
    /// Read-only recipe catalog, safely shared without locking
    pub catalog: Arc<CatalogStore>,
    /// SQLite pool for per-user mutable state
    pub pool: SqlitePool,
    /// Health checker over both
    pub health: HealthChecker,
}

impl AppState {
    /// Bundle the catalog and pool into shared state
    #[must_use]
    pub fn new(catalog: Arc<CatalogStore>, pool: SqlitePool) -> Arc<Self> {
        Arc::new(Self {
            health: HealthChecker::new(catalog.clone(), pool.clone()),
            catalog,
            pool,
        })
    }
}

/// Build the full application: API routes plus the middleware stack.
///
/// Layer order, outermost first: CORS, request-id generation, trace (so every
/// trace carries the id), request-id propagation into the response.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    routes::api_router(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(cors)
}

/// Run the HTTP server until a shutdown signal arrives
pub async fn run(config: &ServerConfig, state: Arc<AppState>) -> AppResult<()> {
    let app = app(state);

    let address = format!("0.0.0.0:{}", config.http_port);
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {address}: {e}")))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
