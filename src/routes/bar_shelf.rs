// ABOUTME: Route handlers for a user's bar-shelf inventory and match views
// ABOUTME: Mutations return the updated resource; makeable sets are recomputed per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep

//! Bar-shelf routes.
//!
//! Every operation takes the user id as an explicit path parameter. Adding an
//! already-owned ingredient is idempotent and returns the existing entry with
//! 200 instead of 201.

use crate::{
    curated,
    database::inventory::{AddEntryRequest, InventoryManager},
    errors::AppError,
    matching,
    models::Recipe,
    server::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

/// Request body for adding an ingredient to the shelf
#[derive(Debug, Deserialize)]
pub struct AddEntryBody {
    /// Ingredient display name
    pub ingredient_name: String,
    /// Optional free-form quantity
    pub quantity: Option<String>,
}

/// Bar-shelf routes handler
pub struct BarShelfRoutes;

impl BarShelfRoutes {
    /// Create all bar-shelf routes
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/api/users/:user_id/bar-shelf", get(Self::handle_list))
            .route("/api/users/:user_id/bar-shelf", post(Self::handle_add))
            .route(
                "/api/users/:user_id/bar-shelf/:entry_id",
                delete(Self::handle_remove),
            )
            .route("/api/users/:user_id/makeable", get(Self::handle_makeable))
            .route("/api/users/:user_id/matches", get(Self::handle_matches))
            .route("/api/users/:user_id/favorites", get(Self::handle_favorites))
            .route(
                "/api/users/:user_id/cocktails",
                get(Self::handle_user_cocktails),
            )
            .with_state(state)
    }

    fn manager(state: &AppState) -> InventoryManager {
        InventoryManager::new(state.pool.clone())
    }

    /// Handle GET /api/users/:user_id/bar-shelf - list owned ingredients
    async fn handle_list(
        State(state): State<Arc<AppState>>,
        Path(user_id): Path<i64>,
    ) -> Result<Response, AppError> {
        let entries = Self::manager(&state).list(user_id).await?;
        Ok((StatusCode::OK, Json(entries)).into_response())
    }

    /// Handle POST /api/users/:user_id/bar-shelf - add an ingredient
    async fn handle_add(
        State(state): State<Arc<AppState>>,
        Path(user_id): Path<i64>,
        Json(body): Json<AddEntryBody>,
    ) -> Result<Response, AppError> {
        if body.ingredient_name.trim().is_empty() {
            return Err(AppError::missing_field("ingredient_name").with_user_id(user_id));
        }

        let request = AddEntryRequest {
            normalized_name: state.catalog.normalizer().normalize(&body.ingredient_name),
            ingredient_name: body.ingredient_name,
            quantity: body.quantity.filter(|q| !q.trim().is_empty()),
        };

        let (entry, created) = Self::manager(&state).add(user_id, &request).await?;
        let status = if created {
            StatusCode::CREATED
        } else {
            StatusCode::OK
        };
        Ok((status, Json(entry)).into_response())
    }

    /// Handle DELETE /api/users/:user_id/bar-shelf/:entry_id - remove an entry
    async fn handle_remove(
        State(state): State<Arc<AppState>>,
        Path((user_id, entry_id)): Path<(i64, Uuid)>,
    ) -> Result<Response, AppError> {
        let removed = Self::manager(&state).remove(user_id, entry_id).await?;
        if !removed {
            return Err(AppError::not_found(format!("Inventory entry {entry_id}"))
                .with_user_id(user_id));
        }
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }

    /// Handle GET /api/users/:user_id/makeable - fully makeable recipes
    async fn handle_makeable(
        State(state): State<Arc<AppState>>,
        Path(user_id): Path<i64>,
    ) -> Result<Response, AppError> {
        let owned = Self::manager(&state).owned_keys(user_id).await?;
        let makeable: Vec<Recipe> = matching::makeable_recipes(&state.catalog, &owned)
            .into_iter()
            .cloned()
            .collect();
        Ok((StatusCode::OK, Json(makeable)).into_response())
    }

    /// Handle GET /api/users/:user_id/matches - per-recipe missing deltas
    async fn handle_matches(
        State(state): State<Arc<AppState>>,
        Path(user_id): Path<i64>,
    ) -> Result<Response, AppError> {
        let owned = Self::manager(&state).owned_keys(user_id).await?;
        let results = matching::compute_matches(&state.catalog, &owned);
        Ok((StatusCode::OK, Json(results)).into_response())
    }

    /// Handle GET /api/users/:user_id/favorites - curated, opaque view
    async fn handle_favorites(Path(user_id): Path<i64>) -> Json<Vec<Recipe>> {
        Json(curated::favorites(user_id).to_vec())
    }

    /// Handle GET /api/users/:user_id/cocktails - curated house menu
    async fn handle_user_cocktails(Path(_user_id): Path<i64>) -> Json<Vec<Recipe>> {
        Json(curated::house_menu().to_vec())
    }
}
