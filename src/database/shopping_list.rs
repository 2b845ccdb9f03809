// ABOUTME: Database operations for a user's shopping list and its reconciliation
// ABOUTME: Promotion to the bar shelf is one transaction: both effects or neither
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep

use crate::database::inventory::{parse_timestamp, row_to_entry};
use crate::errors::{AppError, AppResult};
use crate::models::{InventoryEntry, ShoppingListItem};
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

/// Shopping-list database operations manager
pub struct ShoppingListManager {
    pool: SqlitePool,
}

impl ShoppingListManager {
    /// Create a new shopping-list manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List a user's shopping list, ordered by date added ascending
    pub async fn list(&self, user_id: i64) -> AppResult<Vec<ShoppingListItem>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, ingredient_name, purchased, date_added, date_purchased
            FROM shopping_list
            WHERE user_id = $1
            ORDER BY date_added ASC, id ASC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list shopping list: {e}")))?;

        rows.iter().map(row_to_item).collect()
    }

    /// Add an item to the shopping list.
    ///
    /// Rejects empty or whitespace-only names. Idempotent on the pending set:
    /// if a not-yet-purchased item with the same normalized name exists, it is
    /// returned unchanged. The boolean is true on a real insert.
    ///
    /// The insert comes first so the transaction holds the write lock from its
    /// opening statement; concurrent duplicate adds queue on the lock instead
    /// of failing a read-to-write upgrade.
    pub async fn add_item(
        &self,
        user_id: i64,
        ingredient_name: &str,
        normalized_name: &str,
    ) -> AppResult<(ShoppingListItem, bool)> {
        if ingredient_name.trim().is_empty() {
            return Err(AppError::missing_field("ingredient_name").with_user_id(user_id));
        }

        let id = Uuid::new_v4();
        let now = Utc::now();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to open transaction: {e}")))?;

        let result = sqlx::query(
            r"
            INSERT INTO shopping_list (id, user_id, ingredient_name, normalized_name, purchased, date_added, date_purchased)
            VALUES ($1, $2, $3, $4, 0, $5, NULL)
            ON CONFLICT (user_id, normalized_name) WHERE purchased = 0 DO NOTHING
            ",
        )
        .bind(id.to_string())
        .bind(user_id)
        .bind(ingredient_name)
        .bind(normalized_name)
        .bind(now.to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to add shopping-list item: {e}")))?;

        if result.rows_affected() == 1 {
            tx.commit()
                .await
                .map_err(|e| AppError::database(format!("Failed to commit: {e}")))?;
            return Ok((
                ShoppingListItem {
                    id,
                    user_id,
                    ingredient_name: ingredient_name.to_owned(),
                    purchased: false,
                    date_added: now,
                    date_purchased: None,
                },
                true,
            ));
        }

        let row = sqlx::query(
            r"
            SELECT id, user_id, ingredient_name, purchased, date_added, date_purchased
            FROM shopping_list
            WHERE user_id = $1 AND normalized_name = $2 AND purchased = 0
            ",
        )
        .bind(user_id)
        .bind(normalized_name)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to read back pending item: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit: {e}")))?;

        Ok((row_to_item(&row)?, false))
    }

    /// Get one item by id, scoped to the user
    pub async fn get(&self, user_id: i64, item_id: Uuid) -> AppResult<Option<ShoppingListItem>> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, ingredient_name, purchased, date_added, date_purchased
            FROM shopping_list
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(item_id.to_string())
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get shopping-list item: {e}")))?;

        row.as_ref().map(row_to_item).transpose()
    }

    /// Remove an item. Returns false when no such item exists.
    pub async fn remove_item(&self, user_id: i64, item_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM shopping_list WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(item_id.to_string())
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to remove shopping-list item: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// Flip an item's purchased flag, stamping or clearing `date_purchased`.
    ///
    /// Returns `None` when the item does not exist. The update runs first so
    /// the transaction is a writer from its opening statement; the SET
    /// expressions read the pre-update `purchased` value.
    pub async fn toggle_purchased(
        &self,
        user_id: i64,
        item_id: Uuid,
    ) -> AppResult<Option<ShoppingListItem>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to open transaction: {e}")))?;

        let result = sqlx::query(
            r"
            UPDATE shopping_list
            SET purchased = 1 - purchased,
                date_purchased = CASE WHEN purchased = 0 THEN $1 ELSE NULL END
            WHERE id = $2 AND user_id = $3
            ",
        )
        .bind(Utc::now().to_rfc3339())
        .bind(item_id.to_string())
        .bind(user_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to update shopping-list item: {e}")))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let row = sqlx::query(
            r"
            SELECT id, user_id, ingredient_name, purchased, date_added, date_purchased
            FROM shopping_list
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(item_id.to_string())
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to read back shopping-list item: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit: {e}")))?;

        Ok(Some(row_to_item(&row)?))
    }

    /// Remove every purchased item for the user; returns the count removed.
    /// Pending items are untouched.
    pub async fn clear_purchased(&self, user_id: i64) -> AppResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM shopping_list WHERE user_id = $1 AND purchased = 1
            ",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to clear purchased items: {e}")))?;

        Ok(result.rows_affected())
    }

    /// Move an item from the shopping list to the bar shelf.
    ///
    /// The item removal and the inventory add run in one transaction: both
    /// happen or neither does, so a failed inventory insert rolls the removal
    /// back and the item stays on the list. The inventory add keeps the bar
    /// shelf's idempotency: an already-owned ingredient is left unchanged and
    /// the existing entry is returned. Returns `None` when the item does not
    /// exist. Name fields are immutable after creation, so they are read
    /// outside the transaction; the delete inside it re-checks existence and
    /// makes the transaction a writer from its opening statement.
    pub async fn promote_to_inventory(
        &self,
        user_id: i64,
        item_id: Uuid,
    ) -> AppResult<Option<InventoryEntry>> {
        let item_row = sqlx::query(
            r"
            SELECT id, ingredient_name, normalized_name
            FROM shopping_list
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(item_id.to_string())
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get shopping-list item: {e}")))?;

        let Some(item_row) = item_row else {
            return Ok(None);
        };
        let ingredient_name: String = item_row
            .try_get("ingredient_name")
            .map_err(|e| AppError::database(e.to_string()))?;
        let normalized_name: String = item_row
            .try_get("normalized_name")
            .map_err(|e| AppError::database(e.to_string()))?;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to open transaction: {e}")))?;

        let removed = sqlx::query(
            r"
            DELETE FROM shopping_list WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(item_id.to_string())
        .bind(user_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to remove shopping-list item: {e}")))?;

        if removed.rows_affected() == 0 {
            return Ok(None);
        }

        sqlx::query(
            r"
            INSERT INTO bar_shelf (id, user_id, ingredient_name, normalized_name, quantity, date_added)
            VALUES ($1, $2, $3, $4, NULL, $5)
            ON CONFLICT (user_id, normalized_name) DO NOTHING
            ",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(user_id)
        .bind(&ingredient_name)
        .bind(&normalized_name)
        .bind(Utc::now().to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to add inventory entry: {e}")))?;

        let entry_row = sqlx::query(
            r"
            SELECT id, user_id, ingredient_name, quantity, date_added
            FROM bar_shelf
            WHERE user_id = $1 AND normalized_name = $2
            ",
        )
        .bind(user_id)
        .bind(&normalized_name)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to read back inventory entry: {e}")))?;
        let entry = row_to_entry(&entry_row)?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit promotion: {e}")))?;

        Ok(Some(entry))
    }
}

fn row_to_item(row: &SqliteRow) -> AppResult<ShoppingListItem> {
    let id: String = row
        .try_get("id")
        .map_err(|e| AppError::database(e.to_string()))?;
    let purchased: i64 = row
        .try_get("purchased")
        .map_err(|e| AppError::database(e.to_string()))?;
    let date_added: String = row
        .try_get("date_added")
        .map_err(|e| AppError::database(e.to_string()))?;
    let date_purchased: Option<String> = row
        .try_get("date_purchased")
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(ShoppingListItem {
        id: Uuid::parse_str(&id)
            .map_err(|e| AppError::database(format!("Invalid item id {id}: {e}")))?,
        user_id: row
            .try_get("user_id")
            .map_err(|e| AppError::database(e.to_string()))?,
        ingredient_name: row
            .try_get("ingredient_name")
            .map_err(|e| AppError::database(e.to_string()))?,
        purchased: purchased != 0,
        date_added: parse_timestamp(&date_added)?,
        date_purchased: date_purchased.as_deref().map(parse_timestamp).transpose()?,
    })
}
