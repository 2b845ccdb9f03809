// ABOUTME: Core data structures for the cocktail catalog and per-user bar state
// ABOUTME: Recipes are read-only catalog data; inventory and shopping list are per-user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep

//! Data model shared across the catalog, match engine, and storage managers.
//!
//! `Recipe` and `Ingredient` describe immutable catalog data. `InventoryEntry`
//! and `ShoppingListItem` are per-user mutable rows. `MatchResult` is derived
//! on demand and never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One required ingredient of a recipe, with its free-form measure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Display name, preserved verbatim for output
    pub name: String,
    /// Free-form measure string, e.g. "1.5 oz"
    #[serde(default)]
    pub measure: String,
}

/// A cocktail recipe from the read-only catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Numeric catalog id; catalog order is id order
    pub id: i64,
    /// Display name
    pub name: String,
    /// Category, e.g. "Cocktail" or "Shot"
    #[serde(default)]
    pub category: String,
    /// Glass type, e.g. "Coupe"
    #[serde(default)]
    pub glass: String,
    /// Whether the recipe contains alcohol
    #[serde(default)]
    pub alcoholic: bool,
    /// Whether the recipe is on the IBA official list
    #[serde(default)]
    pub iba: bool,
    /// Preparation instructions
    #[serde(default)]
    pub instructions: String,
    /// Optional image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Optional video URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    /// Optional garnish description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garnish: Option<String>,
    /// Tag set, e.g. "signature", "seasonal"
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ordered ingredient list
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    /// Tag-membership check, case-insensitive
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Featured recipes carry the "signature" tag or are IBA official
    #[must_use]
    pub fn is_featured(&self) -> bool {
        self.has_tag("signature") || self.iba
    }

    /// Seasonal recipes carry the "seasonal" tag
    #[must_use]
    pub fn is_seasonal(&self) -> bool {
        self.has_tag("seasonal")
    }
}

/// An ingredient from the catalog taxonomy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    /// Display name; the normalized form is the unique key
    pub name: String,
    /// Optional category tag, e.g. "spirit" or "mixer"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// One owned ingredient on a user's bar shelf
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryEntry {
    /// Row id
    pub id: Uuid,
    /// Owning user
    pub user_id: i64,
    /// Ingredient display name, preserved as entered
    pub ingredient_name: String,
    /// Optional free-form quantity, e.g. "750 ml"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// When the ingredient was added to the shelf
    pub date_added: DateTime<Utc>,
}

/// One item on a user's shopping list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingListItem {
    /// Row id
    pub id: Uuid,
    /// Owning user
    pub user_id: i64,
    /// Ingredient display name, preserved as entered
    pub ingredient_name: String,
    /// Whether the item has been purchased
    pub purchased: bool,
    /// When the item was added
    pub date_added: DateTime<Utc>,
    /// When the item was marked purchased, if it is
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_purchased: Option<DateTime<Utc>>,
}

/// Match engine output for one recipe against one inventory.
///
/// Derived on every request and never persisted. `is_makeable` holds exactly
/// when `missing_ingredients` is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Recipe this result describes
    pub recipe_id: i64,
    /// Recipe display name, for rendering without a second lookup
    pub recipe_name: String,
    /// Required ingredients not in the inventory, in recipe order
    pub missing_ingredients: Vec<String>,
    /// True iff every required ingredient is owned
    pub is_makeable: bool,
}
