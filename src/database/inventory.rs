// ABOUTME: Database operations for a user's bar-shelf inventory
// ABOUTME: Idempotent adds keyed on normalized ingredient names, scoped to one user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep

use crate::errors::{AppError, AppResult};
use crate::models::InventoryEntry;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::collections::HashSet;
use uuid::Uuid;

/// Request to add an ingredient to the bar shelf.
///
/// `normalized_name` is produced by the catalog's normalizer; the display
/// name is preserved verbatim for output.
#[derive(Debug, Clone)]
pub struct AddEntryRequest {
    pub ingredient_name: String,
    pub normalized_name: String,
    pub quantity: Option<String>,
}

/// Bar-shelf database operations manager
pub struct InventoryManager {
    pool: SqlitePool,
}

impl InventoryManager {
    /// Create a new inventory manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List a user's inventory, ordered by date added ascending
    pub async fn list(&self, user_id: i64) -> AppResult<Vec<InventoryEntry>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, ingredient_name, quantity, date_added
            FROM bar_shelf
            WHERE user_id = $1
            ORDER BY date_added ASC, id ASC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list bar shelf: {e}")))?;

        rows.iter().map(row_to_entry).collect()
    }

    /// Normalized keys of every owned ingredient, for the match engine
    pub async fn owned_keys(&self, user_id: i64) -> AppResult<HashSet<String>> {
        let rows = sqlx::query(
            r"
            SELECT normalized_name FROM bar_shelf WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to load owned keys: {e}")))?;

        rows.iter()
            .map(|r| {
                r.try_get::<String, _>("normalized_name")
                    .map_err(|e| AppError::database(e.to_string()))
            })
            .collect()
    }

    /// Add an ingredient to the shelf.
    ///
    /// Idempotent: if an entry with the same normalized name already exists,
    /// the existing entry is returned unchanged — quantity is not overwritten
    /// and `date_added` is not reset. The boolean is true on a real insert.
    ///
    /// Insert and read-back share one transaction, so a concurrent remove
    /// cannot slip between them; the insert comes first, which makes the
    /// transaction a writer from its opening statement.
    pub async fn add(
        &self,
        user_id: i64,
        request: &AddEntryRequest,
    ) -> AppResult<(InventoryEntry, bool)> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to open transaction: {e}")))?;

        let result = sqlx::query(
            r"
            INSERT INTO bar_shelf (id, user_id, ingredient_name, normalized_name, quantity, date_added)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id, normalized_name) DO NOTHING
            ",
        )
        .bind(id.to_string())
        .bind(user_id)
        .bind(&request.ingredient_name)
        .bind(&request.normalized_name)
        .bind(&request.quantity)
        .bind(now.to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to add inventory entry: {e}")))?;

        let created = result.rows_affected() == 1;

        let row = sqlx::query(
            r"
            SELECT id, user_id, ingredient_name, quantity, date_added
            FROM bar_shelf
            WHERE user_id = $1 AND normalized_name = $2
            ",
        )
        .bind(user_id)
        .bind(&request.normalized_name)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to read back inventory entry: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit: {e}")))?;

        Ok((row_to_entry(&row)?, created))
    }

    /// Get one entry by id, scoped to the user
    pub async fn get(&self, user_id: i64, entry_id: Uuid) -> AppResult<Option<InventoryEntry>> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, ingredient_name, quantity, date_added
            FROM bar_shelf
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(entry_id.to_string())
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get inventory entry: {e}")))?;

        row.as_ref().map(row_to_entry).transpose()
    }

    /// Remove an entry. Returns false when no such entry exists; the caller
    /// surfaces that as `NotFound` rather than silent success.
    pub async fn remove(&self, user_id: i64, entry_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM bar_shelf WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(entry_id.to_string())
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to remove inventory entry: {e}")))?;

        Ok(result.rows_affected() > 0)
    }
}

pub(crate) fn row_to_entry(row: &SqliteRow) -> AppResult<InventoryEntry> {
    let id: String = row
        .try_get("id")
        .map_err(|e| AppError::database(e.to_string()))?;
    let date_added: String = row
        .try_get("date_added")
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(InventoryEntry {
        id: Uuid::parse_str(&id)
            .map_err(|e| AppError::database(format!("Invalid entry id {id}: {e}")))?,
        user_id: row
            .try_get("user_id")
            .map_err(|e| AppError::database(e.to_string()))?,
        ingredient_name: row
            .try_get("ingredient_name")
            .map_err(|e| AppError::database(e.to_string()))?,
        quantity: row
            .try_get("quantity")
            .map_err(|e| AppError::database(e.to_string()))?,
        date_added: parse_timestamp(&date_added)?,
    })
}

pub(crate) fn parse_timestamp(raw: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::database(format!("Invalid timestamp {raw}: {e}")))
}
