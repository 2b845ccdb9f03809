// ABOUTME: Route handlers for the cocktail catalog: search, detail, curated filters
// ABOUTME: All catalog reads are lock-free; results are deterministic per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep

//! Catalog routes.
//!
//! These endpoints are read-only views over the catalog store and the
//! search/filter pipeline. Ordering is stable catalog order throughout.

use crate::{
    catalog::{CatalogFilter, CatalogMetadata},
    errors::AppError,
    models::{Ingredient, Recipe},
    search::{self, SearchParams},
    server::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for the catalog search endpoint
#[derive(Debug, Deserialize, Default)]
pub struct CocktailsQuery {
    /// Free-text search over names and ingredient names
    pub search: Option<String>,
    /// Exact-match category filter
    pub category: Option<String>,
    /// Page size
    pub per_page: Option<usize>,
    /// 1-based page number
    pub page: Option<usize>,
}

/// Catalog routes handler
pub struct CocktailRoutes;

impl CocktailRoutes {
    /// Create all catalog routes
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/api/cocktails", get(Self::handle_search))
            .route("/api/cocktails/random", get(Self::handle_random))
            .route("/api/cocktails/featured", get(Self::handle_featured))
            .route("/api/cocktails/seasonal", get(Self::handle_seasonal))
            .route("/api/cocktails/:id", get(Self::handle_get))
            .route("/api/metadata", get(Self::handle_metadata))
            .route("/api/ingredients", get(Self::handle_ingredients))
            .with_state(state)
    }

    /// Handle GET /api/cocktails - search with filters and pagination
    async fn handle_search(
        State(state): State<Arc<AppState>>,
        Query(query): Query<CocktailsQuery>,
    ) -> Response {
        let params = SearchParams {
            query: query.search,
            category: query.category,
            per_page: query.per_page,
            page: query.page,
        };
        let page = search::search(&state.catalog, &params);
        (StatusCode::OK, Json(page)).into_response()
    }

    /// Handle GET /api/cocktails/random - one random catalog recipe
    async fn handle_random(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
        let recipe = state
            .catalog
            .random()
            .ok_or_else(|| AppError::not_found("Random cocktail"))?;
        Ok((StatusCode::OK, Json(recipe.clone())).into_response())
    }

    /// Handle GET /api/cocktails/featured - signature and IBA recipes
    async fn handle_featured(State(state): State<Arc<AppState>>) -> Response {
        let filter = CatalogFilter {
            featured: Some(true),
            ..Default::default()
        };
        Self::listing(&state, &filter)
    }

    /// Handle GET /api/cocktails/seasonal - seasonally tagged recipes
    async fn handle_seasonal(State(state): State<Arc<AppState>>) -> Response {
        let filter = CatalogFilter {
            seasonal: Some(true),
            ..Default::default()
        };
        Self::listing(&state, &filter)
    }

    fn listing(state: &AppState, filter: &CatalogFilter) -> Response {
        let recipes: Vec<Recipe> = state.catalog.list(filter).into_iter().cloned().collect();
        (StatusCode::OK, Json(recipes)).into_response()
    }

    /// Handle GET /api/cocktails/:id - a specific recipe
    async fn handle_get(
        State(state): State<Arc<AppState>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let recipe = state
            .catalog
            .get_by_id(id)
            .ok_or_else(|| AppError::not_found(format!("Cocktail {id}")))?;
        Ok((StatusCode::OK, Json(recipe.clone())).into_response())
    }

    /// Handle GET /api/metadata - categories, glasses, ingredients
    async fn handle_metadata(State(state): State<Arc<AppState>>) -> Json<CatalogMetadata> {
        Json(state.catalog.metadata().clone())
    }

    /// Handle GET /api/ingredients - the full ingredient taxonomy
    async fn handle_ingredients(State(state): State<Arc<AppState>>) -> Json<Vec<Ingredient>> {
        Json(state.catalog.taxonomy().to_vec())
    }
}
