// ABOUTME: Ingredient name normalization for equality comparison across stores
// ABOUTME: Lowercases, trims, collapses whitespace, and folds known plurals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep

//! Canonicalization of ingredient names.
//!
//! All ingredient comparison in the crate happens on normalized keys; raw
//! display strings are preserved for output. `canonical` is the pure base
//! form. `Normalizer` additionally folds a trailing plural "s", but only when
//! the singular is a known taxonomy entry, so distinct ingredients that end
//! in "s" (e.g. "Bitters") are never collapsed.

use std::collections::HashSet;

/// Lowercase, trim, and collapse internal whitespace.
///
/// Pure and total: unknown names simply normalize to this form.
#[must_use]
pub fn canonical(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Taxonomy-aware normalizer built from the catalog's ingredient set
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    known: HashSet<String>,
}

impl Normalizer {
    /// Build a normalizer from known ingredient display names
    pub fn new<I, S>(taxonomy: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            known: taxonomy.into_iter().map(|s| canonical(s.as_ref())).collect(),
        }
    }

    /// Normalize a name to its canonical key.
    ///
    /// Strips a trailing "s" only when the singular form is itself a known
    /// taxonomy entry.
    #[must_use]
    pub fn normalize(&self, name: &str) -> String {
        let key = canonical(name);
        if let Some(singular) = key.strip_suffix('s') {
            if !self.known.contains(&key) && self.known.contains(singular) {
                return singular.to_owned();
            }
        }
        key
    }

    /// Whether a name resolves to a known taxonomy entry
    #[must_use]
    pub fn is_known(&self, name: &str) -> bool {
        self.known.contains(&self.normalize(name))
    }
}
