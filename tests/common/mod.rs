// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides a fixture catalog and an in-memory database with schema applied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep
#![allow(dead_code)]

//! Shared test utilities for `barkeep`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use barkeep::{
    catalog::CatalogStore,
    database,
    models::{Ingredient, Recipe, RecipeIngredient},
};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

/// Create an in-memory database with the schema applied.
///
/// Capped at one connection: each connection to `sqlite::memory:` is its own
/// isolated database, so a larger pool would lose the schema.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    database::init_schema(&pool).await.expect("schema init");
    pool
}

/// File-backed pool with several connections, for contention tests.
///
/// The returned `TempDir` must stay alive for the pool's lifetime.
///
/// The schema is applied on a throwaway pool that is closed before the real
/// pool opens. A pooled connection opened before the schema existed keeps a
/// stale in-memory schema, and SQLite fails to resolve the partial-index
/// upsert target against it at prepare time without retrying, so the returned
/// pool must only ever hold post-schema connections.
pub async fn contended_pool() -> (tempfile::TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite:{}?mode=rwc", dir.path().join("test.db").display());
    let setup = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .expect("schema setup pool");
    database::init_schema(&setup).await.expect("schema init");
    setup.close().await;
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("file-backed pool");
    (dir, pool)
}

fn recipe(id: i64, name: &str, ingredients: &[&str]) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        category: "Cocktail".to_string(),
        glass: "Cocktail glass".to_string(),
        alcoholic: true,
        iba: false,
        instructions: format!("Mix a {name}."),
        image: None,
        video: None,
        garnish: None,
        tags: Vec::new(),
        ingredients: ingredients
            .iter()
            .map(|name| RecipeIngredient {
                name: (*name).to_string(),
                measure: "1 oz".to_string(),
            })
            .collect(),
    }
}

/// Fixture catalog with a handful of recipes sharing some ingredients
pub fn test_catalog() -> CatalogStore {
    let recipes = vec![
        recipe(1, "Margarita", &["Tequila", "Triple Sec", "Lime Juice"]),
        recipe(
            2,
            "Mojito",
            &["White Rum", "Lime Juice", "Sugar", "Mint", "Soda Water"],
        ),
        recipe(3, "Daiquiri", &["White Rum", "Lime Juice", "Simple Syrup"]),
        recipe(4, "Gin and Tonic", &["Gin", "Tonic Water"]),
    ];
    let taxonomy = vec![
        Ingredient {
            name: "Angostura Bitters".to_string(),
            category: Some("Bitters".to_string()),
        },
        Ingredient {
            name: "Olive".to_string(),
            category: Some("Garnish".to_string()),
        },
    ];
    CatalogStore::new(recipes, taxonomy)
}
