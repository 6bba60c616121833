//! Named per-connection dialect configurations.
//!
//! The registry is owned by the caller and handed to whatever needs to render
//! for a given connection. It is usually loaded from a JSON document:
//!
//! ```rust
//! use oxide_query::dialect::{Dialect, DialectKind};
//! use oxide_query::ConnectionRegistry;
//!
//! let registry = ConnectionRegistry::from_json(r#"{
//!     "default": "main",
//!     "connections": {
//!         "main": { "kind": "mysql", "table_prefix": "wp_" },
//!         "reports": { "kind": "postgres" }
//!     }
//! }"#).unwrap();
//!
//! let main = registry.default_config().unwrap();
//! assert_eq!(main.kind, DialectKind::Mysql);
//! assert_eq!(main.table_prefix(), "wp_");
//! assert_eq!(registry.names().collect::<Vec<_>>(), vec!["main", "reports"]);
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::{debug, info};

use crate::dialect::DialectConfig;
use crate::error::{QueryError, Result};

/// Dialect configurations keyed by connection name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionRegistry {
    #[serde(default)]
    default: Option<String>,
    #[serde(default)]
    connections: BTreeMap<String, DialectConfig>,
}

impl ConnectionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a registry from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let registry: Self = serde_json::from_str(json)?;
        info!(
            connections = registry.connections.len(),
            default = registry.default.as_deref().unwrap_or(""),
            "loaded connection registry"
        );
        Ok(registry)
    }

    /// Adds or replaces a connection. The first connection registered becomes
    /// the default when none is set.
    pub fn register(&mut self, name: impl Into<String>, config: DialectConfig) {
        let name = name.into();
        debug!(name = %name, kind = %config.kind, "registered connection");
        if self.default.is_none() {
            self.default = Some(name.clone());
        }
        self.connections.insert(name, config);
    }

    /// Sets the default connection name.
    pub fn set_default(&mut self, name: impl Into<String>) {
        self.default = Some(name.into());
    }

    /// Returns the configuration for `name`.
    pub fn get(&self, name: &str) -> Result<&DialectConfig> {
        self.connections
            .get(name)
            .ok_or_else(|| QueryError::UnknownConnection(String::from(name)))
    }

    /// Returns the default connection's configuration.
    pub fn default_config(&self) -> Result<&DialectConfig> {
        let name = self
            .default
            .as_deref()
            .ok_or(QueryError::NoDefaultConnection)?;
        self.get(name)
    }

    /// Returns the default connection name, if any.
    #[must_use]
    pub fn default_name(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Returns the connection names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.connections.keys().map(String::as_str)
    }
}
