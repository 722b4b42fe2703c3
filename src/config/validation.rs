//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check route names are present and unique
//! - Check every pattern parses
//! - Check history base and fallback view
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::routing::{PathPattern, PatternError};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no routes configured")]
    NoRoutes,

    #[error("route #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("route name {0:?} is declared more than once")]
    DuplicateName(String),

    #[error("route {route:?} has an empty view")]
    EmptyView { route: String },

    #[error("route {route:?}: {source}")]
    InvalidPattern {
        route: String,
        #[source]
        source: PatternError,
    },

    #[error("history base {0:?} must start with '/'")]
    InvalidBase(String),

    #[error("fallback view must not be empty")]
    EmptyFallback,
}

/// Validate a parsed configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
    }

    let mut seen = HashSet::new();
    for (index, route) in config.routes.iter().enumerate() {
        if route.name.is_empty() {
            errors.push(ValidationError::EmptyName { index });
        } else if !seen.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateName(route.name.clone()));
        }

        if route.view.as_str().is_empty() {
            errors.push(ValidationError::EmptyView {
                route: route.name.clone(),
            });
        }

        if let Err(source) = PathPattern::parse(&route.path) {
            errors.push(ValidationError::InvalidPattern {
                route: route.name.clone(),
                source,
            });
        }
    }

    if !config.history.base.starts_with('/') {
        errors.push(ValidationError::InvalidBase(config.history.base.clone()));
    }

    if matches!(&config.fallback.view, Some(view) if view.as_str().is_empty()) {
        errors.push(ValidationError::EmptyFallback);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
