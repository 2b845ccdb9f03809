// ABOUTME: Integration tests for shopping-list database operations
// ABOUTME: Covers pending dedup, purchase toggling, clearing, and promotion atomicity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep

mod common;

use barkeep::{
    database::{inventory::InventoryManager, shopping_list::ShoppingListManager},
    errors::ErrorCode,
};
use uuid::Uuid;

#[tokio::test]
async fn test_add_item_rejects_empty_name() {
    let pool = common::test_pool().await;
    let manager = ShoppingListManager::new(pool);

    let err = manager
        .add_item(1, "   ", "")
        .await
        .expect_err("empty name must fail");
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
}

#[tokio::test]
async fn test_add_item_dedupes_pending() {
    let pool = common::test_pool().await;
    let manager = ShoppingListManager::new(pool);

    let (first, created) = manager
        .add_item(1, "Campari", "campari")
        .await
        .expect("first add");
    assert!(created);
    assert!(!first.purchased);

    let (second, created) = manager
        .add_item(1, "CAMPARI", "campari")
        .await
        .expect("duplicate add");
    assert!(!created);
    assert_eq!(second.id, first.id);
    assert_eq!(second.ingredient_name, "Campari");
}

#[tokio::test]
async fn test_purchased_item_does_not_block_new_pending() {
    let pool = common::test_pool().await;
    let manager = ShoppingListManager::new(pool);

    let (item, _) = manager
        .add_item(1, "Campari", "campari")
        .await
        .expect("add");
    manager
        .toggle_purchased(1, item.id)
        .await
        .expect("toggle")
        .expect("item exists");

    // A purchased row no longer counts as a pending duplicate.
    let (fresh, created) = manager
        .add_item(1, "Campari", "campari")
        .await
        .expect("re-add");
    assert!(created);
    assert_ne!(fresh.id, item.id);
}

#[tokio::test]
async fn test_toggle_purchased_stamps_and_clears_date() {
    let pool = common::test_pool().await;
    let manager = ShoppingListManager::new(pool);

    let (item, _) = manager
        .add_item(1, "Vermouth", "vermouth")
        .await
        .expect("add");
    assert!(item.date_purchased.is_none());

    let purchased = manager
        .toggle_purchased(1, item.id)
        .await
        .expect("toggle")
        .expect("item exists");
    assert!(purchased.purchased);
    assert!(purchased.date_purchased.is_some());

    let unpurchased = manager
        .toggle_purchased(1, item.id)
        .await
        .expect("toggle back")
        .expect("item exists");
    assert!(!unpurchased.purchased);
    assert!(unpurchased.date_purchased.is_none());
}

#[tokio::test]
async fn test_toggle_missing_item_returns_none() {
    let pool = common::test_pool().await;
    let manager = ShoppingListManager::new(pool);

    let result = manager
        .toggle_purchased(1, Uuid::new_v4())
        .await
        .expect("toggle");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_clear_purchased_removes_only_purchased() {
    let pool = common::test_pool().await;
    let manager = ShoppingListManager::new(pool);

    let (bought, _) = manager.add_item(1, "Gin", "gin").await.expect("add");
    manager
        .add_item(1, "Tonic Water", "tonic water")
        .await
        .expect("add");
    manager
        .toggle_purchased(1, bought.id)
        .await
        .expect("toggle")
        .expect("item exists");

    let removed = manager.clear_purchased(1).await.expect("clear");
    assert_eq!(removed, 1);

    let remaining = manager.list(1).await.expect("list");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].ingredient_name, "Tonic Water");
}

#[tokio::test]
async fn test_promote_moves_item_into_shelf() {
    let pool = common::test_pool().await;
    let shopping = ShoppingListManager::new(pool.clone());
    let inventory = InventoryManager::new(pool);

    let (item, _) = shopping
        .add_item(1, "Campari", "campari")
        .await
        .expect("add");

    let entry = shopping
        .promote_to_inventory(1, item.id)
        .await
        .expect("promote")
        .expect("item exists");
    assert_eq!(entry.ingredient_name, "Campari");

    // Item is gone from the list and present on the shelf.
    assert!(shopping.list(1).await.expect("list").is_empty());
    let owned = inventory.owned_keys(1).await.expect("owned");
    assert!(owned.contains("campari"));
}

#[tokio::test]
async fn test_promote_when_ingredient_already_owned() {
    let pool = common::test_pool().await;
    let shopping = ShoppingListManager::new(pool.clone());
    let inventory = InventoryManager::new(pool);

    let (existing, _) = inventory
        .add(
            1,
            &barkeep::database::inventory::AddEntryRequest {
                ingredient_name: "Campari".to_string(),
                normalized_name: "campari".to_string(),
                quantity: Some("1L".to_string()),
            },
        )
        .await
        .expect("seed shelf");

    let (item, _) = shopping
        .add_item(1, "Campari", "campari")
        .await
        .expect("add");

    let entry = shopping
        .promote_to_inventory(1, item.id)
        .await
        .expect("promote")
        .expect("item exists");

    // Existing shelf entry is kept untouched; the list item is still consumed.
    assert_eq!(entry.id, existing.id);
    assert_eq!(entry.quantity.as_deref(), Some("1L"));
    assert!(shopping.list(1).await.expect("list").is_empty());
    assert_eq!(inventory.list(1).await.expect("list").len(), 1);
}

#[tokio::test]
async fn test_concurrent_duplicate_adds_return_existing_item() {
    let (_dir, pool) = common::contended_pool().await;

    let mut handles = Vec::new();
    for _ in 0..4 {
        let manager = ShoppingListManager::new(pool.clone());
        handles.push(tokio::spawn(async move {
            manager.add_item(1, "Campari", "campari").await
        }));
    }

    // Every racer gets a success: one real insert, the rest the existing item.
    let mut created_count = 0;
    let mut ids = Vec::new();
    for handle in handles {
        let (item, created) = handle.await.expect("join").expect("add must succeed");
        assert_eq!(item.ingredient_name, "Campari");
        ids.push(item.id);
        if created {
            created_count += 1;
        }
    }
    assert_eq!(created_count, 1);
    assert!(ids.iter().all(|id| *id == ids[0]));

    let manager = ShoppingListManager::new(pool);
    assert_eq!(manager.list(1).await.expect("list").len(), 1);
}

#[tokio::test]
async fn test_promote_failure_leaves_item_on_list() {
    let pool = common::test_pool().await;
    let shopping = ShoppingListManager::new(pool.clone());

    let (item, _) = shopping
        .add_item(1, "Campari", "campari")
        .await
        .expect("add");

    // Make the inventory insert fail mid-promotion.
    sqlx::query("DROP TABLE bar_shelf")
        .execute(&pool)
        .await
        .expect("drop table");

    let result = shopping.promote_to_inventory(1, item.id).await;
    assert!(result.is_err());

    // The removal rolled back with the failed insert.
    let remaining = shopping.list(1).await.expect("list");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, item.id);
}

#[tokio::test]
async fn test_promote_missing_item_changes_nothing() {
    let pool = common::test_pool().await;
    let shopping = ShoppingListManager::new(pool.clone());
    let inventory = InventoryManager::new(pool);

    let result = shopping
        .promote_to_inventory(1, Uuid::new_v4())
        .await
        .expect("promote");
    assert!(result.is_none());
    assert!(inventory.list(1).await.expect("list").is_empty());
}

#[tokio::test]
async fn test_remove_item_respects_user_scope() {
    let pool = common::test_pool().await;
    let manager = ShoppingListManager::new(pool);

    let (item, _) = manager.add_item(1, "Gin", "gin").await.expect("add");
    assert!(!manager.remove_item(2, item.id).await.expect("cross-user"));
    assert!(manager.remove_item(1, item.id).await.expect("remove"));
}
