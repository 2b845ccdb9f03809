// ABOUTME: Text search, category filter, and pagination over the catalog store
// ABOUTME: Deterministic: identical filters on an unchanged catalog return identical pages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep

//! Search/filter pipeline.
//!
//! Starts from the full catalog (or a category-filtered subset), keeps
//! recipes whose name or any ingredient display name contains the normalized
//! query as a substring, then paginates. `total` reflects the filtered count,
//! not the page size.

use crate::{
    catalog::{CatalogFilter, CatalogStore},
    models::Recipe,
    normalize::canonical,
};
use serde::Serialize;

/// Maximum page size accepted from callers
pub const MAX_PAGE_SIZE: usize = 200;

/// Default page size when the caller does not specify one
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Caller-supplied search parameters
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Free-text query; empty means no text filtering
    pub query: Option<String>,
    /// Exact-match category filter
    pub category: Option<String>,
    /// Page size; clamped to [1, `MAX_PAGE_SIZE`]
    pub per_page: Option<usize>,
    /// 1-based page number
    pub page: Option<usize>,
}

/// One page of search results
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage {
    /// Recipes on this page, in stable catalog order
    pub cocktails: Vec<Recipe>,
    /// Count of all recipes matching the filters
    pub total: usize,
    /// Echo of the 1-based page number served
    pub page: usize,
    /// Echo of the effective page size
    pub per_page: usize,
    /// Total page count for the filtered set
    pub pages: usize,
}

fn matches_query(recipe: &Recipe, needle: &str) -> bool {
    if canonical(&recipe.name).contains(needle) {
        return true;
    }
    recipe
        .ingredients
        .iter()
        .any(|ing| canonical(&ing.name).contains(needle))
}

/// Run a search over the catalog.
///
/// Empty or missing query returns the (possibly category-filtered) full set.
#[must_use]
pub fn search(catalog: &CatalogStore, params: &SearchParams) -> SearchPage {
    let filter = CatalogFilter {
        category: params.category.clone().filter(|c| !c.is_empty()),
        ..Default::default()
    };
    let mut matched = catalog.list(&filter);

    let needle = params
        .query
        .as_deref()
        .map(canonical)
        .filter(|q| !q.is_empty());
    if let Some(needle) = needle {
        matched.retain(|r| matches_query(r, &needle));
    }

    let total = matched.len();
    let per_page = params.per_page.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let page = params.page.unwrap_or(1).max(1);
    let offset = (page - 1).saturating_mul(per_page);

    let cocktails = matched
        .into_iter()
        .skip(offset)
        .take(per_page)
        .cloned()
        .collect();

    SearchPage {
        cocktails,
        total,
        page,
        per_page,
        pages: total.div_ceil(per_page),
    }
}
