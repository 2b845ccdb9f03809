// ABOUTME: Opaque curated views served verbatim: favorites and the house menu
// ABOUTME: No selection logic lives here; the data is external and bundled at build time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep

//! Curated subsets with no discoverable selection rule.
//!
//! The favorites view is intentionally empty and the per-user cocktails view
//! is the current house menu, bundled as static JSON. Neither participates in
//! the match or search pipelines.

use crate::models::Recipe;
use std::sync::OnceLock;

static HOUSE_MENU_JSON: &str = include_str!("../data/curated_menu.json");

static HOUSE_MENU: OnceLock<Vec<Recipe>> = OnceLock::new();

/// The curated house menu, parsed once per process.
///
/// The bundled file is validated by tests, so a parse failure here means a
/// corrupted build and an empty menu is returned instead of panicking.
#[must_use]
pub fn house_menu() -> &'static [Recipe] {
    HOUSE_MENU
        .get_or_init(|| serde_json::from_str(HOUSE_MENU_JSON).unwrap_or_default())
        .as_slice()
}

/// Curated favorites for a user: always empty
#[must_use]
pub fn favorites(_user_id: i64) -> &'static [Recipe] {
    &[]
}
