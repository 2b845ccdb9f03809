// ABOUTME: Route handlers for per-user shopping lists
// ABOUTME: Covers add/toggle/remove/clear plus atomic promotion into the bar shelf
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep

//! Shopping-list routes.
//!
//! Pending items are deduplicated per user by normalized ingredient name, so
//! re-adding an item already on the list returns the existing row with 200.
//! Promotion moves an item into the bar shelf atomically.

use crate::{
    database::shopping_list::ShoppingListManager,
    errors::AppError,
    server::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

/// Request body for adding a shopping-list item
#[derive(Debug, Deserialize)]
pub struct AddItemBody {
    /// Ingredient display name
    pub ingredient_name: String,
}

/// Shopping-list routes handler
pub struct ShoppingListRoutes;

impl ShoppingListRoutes {
    /// Create all shopping-list routes
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/api/users/:user_id/shopping-list", get(Self::handle_list))
            .route("/api/users/:user_id/shopping-list", post(Self::handle_add))
            .route(
                "/api/users/:user_id/shopping-list/clear-purchased",
                delete(Self::handle_clear_purchased),
            )
            .route(
                "/api/users/:user_id/shopping-list/:item_id",
                put(Self::handle_toggle),
            )
            .route(
                "/api/users/:user_id/shopping-list/:item_id",
                delete(Self::handle_remove),
            )
            .route(
                "/api/users/:user_id/shopping-list/:item_id/promote",
                post(Self::handle_promote),
            )
            .with_state(state)
    }

    fn manager(state: &AppState) -> ShoppingListManager {
        ShoppingListManager::new(state.pool.clone())
    }

    /// Handle GET /api/users/:user_id/shopping-list - list items
    async fn handle_list(
        State(state): State<Arc<AppState>>,
        Path(user_id): Path<i64>,
    ) -> Result<Response, AppError> {
        let items = Self::manager(&state).list(user_id).await?;
        Ok((StatusCode::OK, Json(items)).into_response())
    }

    /// Handle POST /api/users/:user_id/shopping-list - add an item
    async fn handle_add(
        State(state): State<Arc<AppState>>,
        Path(user_id): Path<i64>,
        Json(body): Json<AddItemBody>,
    ) -> Result<Response, AppError> {
        let normalized = state.catalog.normalizer().normalize(&body.ingredient_name);
        let (item, created) = Self::manager(&state)
            .add_item(user_id, &body.ingredient_name, &normalized)
            .await?;
        let status = if created {
            StatusCode::CREATED
        } else {
            StatusCode::OK
        };
        Ok((status, Json(item)).into_response())
    }

    /// Handle PUT /api/users/:user_id/shopping-list/:item_id - toggle purchased
    async fn handle_toggle(
        State(state): State<Arc<AppState>>,
        Path((user_id, item_id)): Path<(i64, Uuid)>,
    ) -> Result<Response, AppError> {
        let item = Self::manager(&state)
            .toggle_purchased(user_id, item_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Shopping list item {item_id}"))
                    .with_user_id(user_id)
            })?;
        Ok((StatusCode::OK, Json(item)).into_response())
    }

    /// Handle DELETE /api/users/:user_id/shopping-list/:item_id - remove item
    async fn handle_remove(
        State(state): State<Arc<AppState>>,
        Path((user_id, item_id)): Path<(i64, Uuid)>,
    ) -> Result<Response, AppError> {
        let removed = Self::manager(&state).remove_item(user_id, item_id).await?;
        if !removed {
            return Err(AppError::not_found(format!("Shopping list item {item_id}"))
                .with_user_id(user_id));
        }
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }

    /// Handle DELETE /api/users/:user_id/shopping-list/clear-purchased
    async fn handle_clear_purchased(
        State(state): State<Arc<AppState>>,
        Path(user_id): Path<i64>,
    ) -> Result<Response, AppError> {
        let removed = Self::manager(&state).clear_purchased(user_id).await?;
        Ok((StatusCode::OK, Json(json!({ "removed": removed }))).into_response())
    }

    /// Handle POST /api/users/:user_id/shopping-list/:item_id/promote
    ///
    /// Moves the item into the bar shelf and deletes it in one transaction.
    async fn handle_promote(
        State(state): State<Arc<AppState>>,
        Path((user_id, item_id)): Path<(i64, Uuid)>,
    ) -> Result<Response, AppError> {
        let entry = Self::manager(&state)
            .promote_to_inventory(user_id, item_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Shopping list item {item_id}"))
                    .with_user_id(user_id)
            })?;
        Ok((StatusCode::OK, Json(entry)).into_response())
    }
}
