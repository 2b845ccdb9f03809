// ABOUTME: Route module wiring: per-resource routers merged into one API router
// ABOUTME: Each resource exposes a `routes(state)` constructor in its own module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep

//! HTTP routes, one module per resource.

pub mod bar_shelf;
pub mod cocktails;
pub mod shopping_list;

use crate::server::AppState;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

/// Assemble the full API router
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .with_state(state.clone())
        .merge(cocktails::CocktailRoutes::routes(state.clone()))
        .merge(bar_shelf::BarShelfRoutes::routes(state.clone()))
        .merge(shopping_list::ShoppingListRoutes::routes(state))
}

/// Handle GET /health
async fn handle_health(State(state): State<Arc<AppState>>) -> Json<crate::health::HealthResponse> {
    Json(state.health.check().await)
}
