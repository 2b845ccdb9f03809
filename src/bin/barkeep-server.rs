// ABOUTME: Server binary wiring configuration, catalog, database, and HTTP routes
// ABOUTME: Loads the catalog at startup and serves the REST API until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep

//! # Barkeep Server Binary
//!
//! Starts the cocktail-catalog REST API with per-user bar-shelf and
//! shopping-list storage backed by `SQLite`.

use anyhow::Result;
use barkeep::{
    catalog::CatalogStore,
    config::ServerConfig,
    database,
    logging,
    server::{self, AppState},
};
use clap::Parser;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "barkeep-server")]
#[command(about = "Barkeep - cocktail catalog and bar-shelf API")]
pub struct Args {
    /// Override the catalog JSON path
    #[arg(short, long)]
    catalog: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(catalog) = args.catalog {
        config.catalog_path = catalog.into();
    }

    logging::init_from_env()?;

    info!("Starting Barkeep server");
    info!("{}", config.summary());

    let catalog = CatalogStore::load(&config.catalog_path)?;
    info!("Catalog loaded with {} recipes", catalog.len());

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    database::init_schema(&pool).await?;
    info!("Database schema ready");

    let state = AppState::new(Arc::new(catalog), pool);
    server::run(&config, state).await?;

    Ok(())
}
