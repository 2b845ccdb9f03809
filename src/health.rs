// ABOUTME: Server health monitoring for operational visibility
// ABOUTME: Checks the catalog and the per-user database behind /health
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep

//! Health check types and checks.

use crate::catalog::CatalogStore;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Overall health status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Individual component health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Component name
    pub name: String,
    /// Component status
    pub status: HealthStatus,
    /// Status description
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: HealthStatus,
    /// Service name
    pub service: String,
    /// Service version
    pub version: String,
    /// Service uptime in seconds
    pub uptime_seconds: u64,
    /// Individual component checks
    pub checks: Vec<ComponentHealth>,
    /// Response timestamp (unix seconds)
    pub timestamp: u64,
}

/// Health checker holding references to the checked components
pub struct HealthChecker {
    start_time: Instant,
    catalog: Arc<CatalogStore>,
    pool: SqlitePool,
}

impl HealthChecker {
    /// Create a new health checker
    #[must_use]
    pub fn new(catalog: Arc<CatalogStore>, pool: SqlitePool) -> Self {
        Self {
            start_time: Instant::now(),
            catalog,
            pool,
        }
    }

    /// Run all component checks and aggregate an overall status
    pub async fn check(&self) -> HealthResponse {
        let catalog_check = if self.catalog.is_empty() {
            ComponentHealth {
                name: "catalog".into(),
                status: HealthStatus::Degraded,
                message: "catalog is empty".into(),
            }
        } else {
            ComponentHealth {
                name: "catalog".into(),
                status: HealthStatus::Healthy,
                message: format!("{} recipes loaded", self.catalog.len()),
            }
        };

        let database_check = match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => ComponentHealth {
                name: "database".into(),
                status: HealthStatus::Healthy,
                message: "reachable".into(),
            },
            Err(e) => ComponentHealth {
                name: "database".into(),
                status: HealthStatus::Unhealthy,
                message: format!("query failed: {e}"),
            },
        };

        let checks = vec![catalog_check, database_check];
        let status = if checks.iter().any(|c| c.status == HealthStatus::Unhealthy) {
            HealthStatus::Unhealthy
        } else if checks.iter().any(|c| c.status == HealthStatus::Degraded) {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        };

        HealthResponse {
            status,
            service: env!("CARGO_PKG_NAME").to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            checks,
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default(),
        }
    }
}
