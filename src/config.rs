// ABOUTME: Environment-based configuration for deployment-specific settings
// ABOUTME: Everything is overridable by environment variable with sane defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep

//! Environment-based configuration management.

use crate::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP server binds to (`HTTP_PORT`)
    pub http_port: u16,
    /// SQLite connection string for per-user state (`DATABASE_URL`)
    pub database_url: String,
    /// Path to the catalog seed JSON (`CATALOG_PATH`)
    pub catalog_path: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from a variable lookup; unset keys fall back to
    /// defaults
    pub fn from_lookup<F>(get: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let http_port = match get("HTTP_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::config(format!("Invalid HTTP_PORT {raw}: {e}")))?,
            None => 8080,
        };

        let database_url =
            get("DATABASE_URL").unwrap_or_else(|| "sqlite:barkeep.db?mode=rwc".to_owned());

        let catalog_path = get("CATALOG_PATH")
            .map_or_else(|| PathBuf::from("data/catalog.json"), PathBuf::from);

        Ok(Self {
            http_port,
            database_url,
            catalog_path,
        })
    }

    /// One-line summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} database={} catalog={}",
            self.http_port,
            self.database_url,
            self.catalog_path.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.database_url, "sqlite:barkeep.db?mode=rwc");
        assert_eq!(config.catalog_path, PathBuf::from("data/catalog.json"));
        assert!(config.summary().contains("port=8080"));
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = ServerConfig::from_lookup(|key| match key {
            "HTTP_PORT" => Some("9090".to_owned()),
            "CATALOG_PATH" => Some("/srv/catalog.json".to_owned()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.http_port, 9090);
        assert_eq!(config.catalog_path, PathBuf::from("/srv/catalog.json"));
    }

    #[test]
    fn test_invalid_port_is_a_config_error() {
        let result = ServerConfig::from_lookup(|key| {
            (key == "HTTP_PORT").then(|| "not-a-port".to_owned())
        });
        assert!(result.is_err());
    }
}
