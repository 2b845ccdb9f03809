// ABOUTME: Match engine computing makeable recipes and missing-ingredient deltas
// ABOUTME: Pure functions over the catalog and a set of normalized owned-ingredient keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep

//! Recipe matching against a user's inventory.
//!
//! The inventory is small and the catalog bounded, so every call recomputes
//! from scratch: O(recipes × average ingredients per recipe). Match results
//! are ordered by ascending missing-count, then recipe id, so "closest to
//! makeable" suggestions are stable for identical input.

use crate::{catalog::CatalogStore, models::MatchResult, models::Recipe};
use std::collections::HashSet;

/// Compute the match result for every catalog recipe.
///
/// `owned` holds normalized ingredient keys, produced by the catalog's
/// normalizer from the user's inventory entries. A recipe is makeable iff the
/// set difference (required − owned) is empty. Missing ingredients keep their
/// display names, in recipe order.
#[must_use]
pub fn compute_matches(catalog: &CatalogStore, owned: &HashSet<String>) -> Vec<MatchResult> {
    let normalizer = catalog.normalizer();

    let mut results: Vec<MatchResult> = catalog
        .recipes()
        .iter()
        .map(|recipe| {
            let missing: Vec<String> = recipe
                .ingredients
                .iter()
                .filter(|ing| !owned.contains(&normalizer.normalize(&ing.name)))
                .map(|ing| ing.name.clone())
                .collect();
            MatchResult {
                recipe_id: recipe.id,
                recipe_name: recipe.name.clone(),
                is_makeable: missing.is_empty(),
                missing_ingredients: missing,
            }
        })
        .collect();

    results.sort_by_key(|r| (r.missing_ingredients.len(), r.recipe_id));
    results
}

/// The makeable subset of the catalog, in stable catalog order
#[must_use]
pub fn makeable_recipes<'a>(
    catalog: &'a CatalogStore,
    owned: &HashSet<String>,
) -> Vec<&'a Recipe> {
    let normalizer = catalog.normalizer();
    catalog
        .recipes()
        .iter()
        .filter(|recipe| {
            recipe
                .ingredients
                .iter()
                .all(|ing| owned.contains(&normalizer.normalize(&ing.name)))
        })
        .collect()
}
