// ABOUTME: Read-only catalog store for cocktail recipes and the ingredient taxonomy
// ABOUTME: Loads seed JSON, answers lookups/listings, and caches derived metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep

//! The catalog is immutable for the process lifetime, so it is shared across
//! requests without locking and derived data (metadata, the normalizer) is
//! computed once and cached.

use crate::{
    errors::{AppError, AppResult},
    models::{Ingredient, Recipe, RecipeIngredient},
    normalize::{canonical, Normalizer},
};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

/// Filter options for catalog listings
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    /// Exact-match on the category attribute (case-sensitive taxonomy value)
    pub category: Option<String>,
    /// Keep only featured recipes when true
    pub featured: Option<bool>,
    /// Keep only seasonal recipes when true
    pub seasonal: Option<bool>,
}

/// Derived catalog metadata, computed by one full scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMetadata {
    /// Sorted unique recipe categories
    pub categories: Vec<String>,
    /// Sorted unique glass types
    pub glasses: Vec<String>,
    /// Sorted unique ingredient display names
    pub ingredients: Vec<String>,
}

/// Seed-file recipe: identical to `Recipe` except the id may be omitted,
/// in which case the loader assigns sequential ids in file order
#[derive(Debug, Deserialize)]
struct RecipeSeed {
    #[serde(default)]
    id: Option<i64>,
    name: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    glass: String,
    #[serde(default)]
    alcoholic: bool,
    #[serde(default)]
    iba: bool,
    #[serde(default)]
    instructions: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    video: Option<String>,
    #[serde(default)]
    garnish: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    ingredients: Vec<RecipeIngredient>,
}

/// Catalog seed file: either a bare recipe array or an object that also
/// carries an explicit ingredient taxonomy with category tags
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Recipes(Vec<RecipeSeed>),
    Full {
        recipes: Vec<RecipeSeed>,
        #[serde(default)]
        ingredients: Vec<Ingredient>,
    },
}

/// In-memory store of the recipe catalog and ingredient taxonomy.
///
/// Recipes are held in id order, which is the stable catalog order every
/// listing and search result follows.
pub struct CatalogStore {
    recipes: Vec<Recipe>,
    taxonomy: Vec<Ingredient>,
    metadata: OnceLock<CatalogMetadata>,
    normalizer: OnceLock<Normalizer>,
}

impl CatalogStore {
    /// Build a store from already-constructed recipes and an explicit taxonomy.
    ///
    /// Ingredients appearing in recipes but not in the explicit taxonomy are
    /// added with no category tag.
    #[must_use]
    pub fn new(mut recipes: Vec<Recipe>, explicit_taxonomy: Vec<Ingredient>) -> Self {
        recipes.sort_by_key(|r| r.id);

        // Dedupe by normalized key, keeping the first display form seen.
        let mut by_key: BTreeMap<String, Ingredient> = BTreeMap::new();
        for ing in explicit_taxonomy {
            by_key.entry(canonical(&ing.name)).or_insert(ing);
        }
        for recipe in &recipes {
            for ing in &recipe.ingredients {
                by_key.entry(canonical(&ing.name)).or_insert(Ingredient {
                    name: ing.name.clone(),
                    category: None,
                });
            }
        }

        Self {
            recipes,
            taxonomy: by_key.into_values().collect(),
            metadata: OnceLock::new(),
            normalizer: OnceLock::new(),
        }
    }

    /// Parse a catalog seed document
    pub fn from_json(json: &str) -> AppResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let (seeds, taxonomy) = match file {
            CatalogFile::Recipes(seeds) => (seeds, Vec::new()),
            CatalogFile::Full {
                recipes,
                ingredients,
            } => (recipes, ingredients),
        };

        let mut next_id = seeds.iter().filter_map(|s| s.id).max().unwrap_or(0);
        let recipes = seeds
            .into_iter()
            .map(|seed| {
                let id = seed.id.unwrap_or_else(|| {
                    next_id += 1;
                    next_id
                });
                Recipe {
                    id,
                    name: seed.name,
                    category: seed.category,
                    glass: seed.glass,
                    alcoholic: seed.alcoholic,
                    iba: seed.iba,
                    instructions: seed.instructions,
                    image: seed.image,
                    video: seed.video,
                    garnish: seed.garnish,
                    tags: seed.tags,
                    ingredients: seed.ingredients,
                }
            })
            .collect();

        Ok(Self::new(recipes, taxonomy))
    }

    /// Load a catalog seed file from disk
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("failed to read catalog file {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    /// Number of recipes in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// All recipes in stable catalog order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// The full ingredient taxonomy, sorted by normalized key
    #[must_use]
    pub fn taxonomy(&self) -> &[Ingredient] {
        &self.taxonomy
    }

    /// Look up a recipe by id
    #[must_use]
    pub fn get_by_id(&self, id: i64) -> Option<&Recipe> {
        self.recipes
            .binary_search_by_key(&id, |r| r.id)
            .ok()
            .map(|idx| &self.recipes[idx])
    }

    /// List recipes matching a filter, in stable catalog order
    #[must_use]
    pub fn list(&self, filter: &CatalogFilter) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| {
                filter
                    .category
                    .as_ref()
                    .is_none_or(|c| r.category == *c)
            })
            .filter(|r| filter.featured.is_none_or(|want| r.is_featured() == want))
            .filter(|r| filter.seasonal.is_none_or(|want| r.is_seasonal() == want))
            .collect()
    }

    /// Pick one recipe at random
    #[must_use]
    pub fn random(&self) -> Option<&Recipe> {
        self.recipes.choose(&mut rand::thread_rng())
    }

    /// Derived metadata: computed lazily by one full scan and cached for the
    /// process lifetime since the catalog is read-only
    pub fn metadata(&self) -> &CatalogMetadata {
        self.metadata.get_or_init(|| {
            let mut categories: Vec<String> = self
                .recipes
                .iter()
                .map(|r| r.category.clone())
                .filter(|c| !c.is_empty())
                .collect();
            categories.sort();
            categories.dedup();

            let mut glasses: Vec<String> = self
                .recipes
                .iter()
                .map(|r| r.glass.clone())
                .filter(|g| !g.is_empty())
                .collect();
            glasses.sort();
            glasses.dedup();

            let mut ingredients: Vec<String> =
                self.taxonomy.iter().map(|i| i.name.clone()).collect();
            ingredients.sort();
            ingredients.dedup();

            CatalogMetadata {
                categories,
                glasses,
                ingredients,
            }
        })
    }

    /// Normalizer built from this catalog's taxonomy, cached like metadata
    pub fn normalizer(&self) -> &Normalizer {
        self.normalizer
            .get_or_init(|| Normalizer::new(self.taxonomy.iter().map(|i| i.name.as_str())))
    }
}
