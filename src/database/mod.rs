// ABOUTME: Per-user storage layer over SQLite: schema bootstrap and managers
// ABOUTME: The catalog never lives here; only mutable per-user state does
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep

//! SQLite-backed storage for per-user state.
//!
//! Multi-statement mutations run inside one transaction; together with
//! SQLite's single-writer model this serializes mutations on the same user's
//! rows, which is what upholds the per-user uniqueness invariants.

pub mod inventory;
pub mod shopping_list;

use crate::errors::AppResult;
use sqlx::SqlitePool;

/// Create the per-user tables if they do not exist.
///
/// Uniqueness invariants live in the schema: one bar-shelf row per
/// `(user, normalized ingredient)`, one pending shopping-list row per
/// `(user, normalized ingredient)`.
pub async fn init_schema(pool: &SqlitePool) -> AppResult<()> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS bar_shelf (
            id TEXT PRIMARY KEY,
            user_id INTEGER NOT NULL,
            ingredient_name TEXT NOT NULL,
            normalized_name TEXT NOT NULL,
            quantity TEXT,
            date_added TEXT NOT NULL,
            UNIQUE (user_id, normalized_name)
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS shopping_list (
            id TEXT PRIMARY KEY,
            user_id INTEGER NOT NULL,
            ingredient_name TEXT NOT NULL,
            normalized_name TEXT NOT NULL,
            purchased INTEGER NOT NULL DEFAULT 0,
            date_added TEXT NOT NULL,
            date_purchased TEXT
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_shopping_list_pending
        ON shopping_list (user_id, normalized_name)
        WHERE purchased = 0
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}
