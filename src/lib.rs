// ABOUTME: Main library entry point for the Barkeep cocktail platform
// ABOUTME: Provides the catalog, match engine, per-user inventory, and REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep

#![deny(unsafe_code)]

//! # Barkeep
//!
//! A cocktail-catalog server with per-user bar-shelf inventory. The recipe
//! catalog is loaded once at startup and served read-only; per-user state (bar
//! shelf and shopping list) lives in `SQLite`.
//!
//! ## Features
//!
//! - **Catalog browsing**: search, filter, and paginate the recipe catalog
//! - **Bar shelf**: track which ingredients a user owns, with idempotent adds
//! - **Match engine**: which recipes are makeable, and what is missing for the rest
//! - **Shopping list**: pending/purchased items with atomic promotion to the shelf
//!
//! ## Architecture
//!
//! - **Catalog**: immutable in-memory recipe store with cached metadata
//! - **Normalize**: taxonomy-aware ingredient name canonicalization
//! - **Database**: `sqlx` managers for bar-shelf and shopping-list state
//! - **Routes**: `axum` handlers grouped per resource
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use barkeep::config::ServerConfig;
//! use barkeep::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Barkeep configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod curated;
pub mod database;
pub mod errors;
pub mod health;
pub mod logging;
pub mod matching;
pub mod models;
pub mod normalize;
pub mod routes;
pub mod search;
pub mod server;
