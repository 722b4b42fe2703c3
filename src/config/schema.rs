//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::routing::{MatchOptions, RouteError, RouteTable};

/// Opaque view handle used by config-driven route tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Root configuration for the router.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// History-mode settings.
    pub history: HistoryConfig,

    /// Path normalization applied before matching.
    pub matching: MatchOptions,

    /// View shown when nothing matches.
    pub fallback: FallbackConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Route definitions, checked in order.
    pub routes: Vec<RouteConfig>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            matching: MatchOptions::default(),
            fallback: FallbackConfig::default(),
            observability: ObservabilityConfig::default(),
            routes: default_routes(),
        }
    }
}

impl RouterConfig {
    /// Compile the configured routes.
    pub fn route_table(&self) -> Result<RouteTable<ViewId>, RouteError> {
        self.routes
            .iter()
            .fold(RouteTable::builder(), |builder, route| {
                builder.route(route.path.clone(), route.name.clone(), route.view.clone())
            })
            .options(self.matching.clone())
            .build()
    }
}

impl RouteTable<ViewId> {
    /// The application's built-in table: home, config and project.
    pub fn default_table() -> Self {
        RouterConfig::default()
            .route_table()
            .expect("built-in routes are valid")
    }
}

/// A single route definition.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteConfig {
    /// Path pattern, e.g. "/project/:id".
    pub path: String,

    /// Unique route name.
    pub name: String,

    /// View handle the route renders.
    pub view: ViewId,
}

impl RouteConfig {
    pub fn new(path: &str, name: &str, view: &str) -> Self {
        Self {
            path: path.to_string(),
            name: name.to_string(),
            view: ViewId::from(view),
        }
    }
}

fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::new("/", "home", "HomeView"),
        RouteConfig::new("/config", "config", "ConfigView"),
        RouteConfig::new("/project/:id", "project", "ProjectView"),
    ]
}

/// History-mode configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Path prefix the application is served under (e.g., "/app/").
    pub base: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            base: "/".to_string(),
        }
    }
}

/// Fallback view configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// View rendered for unmatched paths. None leaves NotFound to the host.
    pub view: Option<ViewId>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
