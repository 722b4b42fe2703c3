//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → RouterConfig::route_table() → RouteTable<ViewId>
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; the route table never changes afterwards
//! - All fields have defaults; an empty file yields the built-in route table
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    FallbackConfig, HistoryConfig, LogFormat, ObservabilityConfig, RouteConfig, RouterConfig,
    ViewId,
};
pub use validation::{validate_config, ValidationError};
