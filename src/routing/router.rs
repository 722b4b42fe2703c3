//! Route lookup.
//!
//! # Responsibilities
//! - Store compiled routes in declaration order
//! - Look up the first route matching a path
//! - Return the matched route or an explicit `NotFound`
//! - Build paths for named routes
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan over routes (tables are small)
//! - Declaration order is the only precedence
//! - Explicit NotFound rather than a silent default

use thiserror::Error;

use crate::routing::matcher::{Matcher, SegmentMatcher};
use crate::routing::normalize::{MatchOptions, RequestPath};
use crate::routing::params::{Params, Query};
use crate::routing::pattern::{BuildError, PathPattern, PatternError};

/// No configured route matches the path.
///
/// This is an expected outcome, not a failure: callers fall back to a
/// default view. Resolving the same path again yields the same result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no route matches {path:?}")]
pub struct NotFound {
    /// The normalized path that failed to match.
    pub path: String,
}

/// Errors raised while building a table or a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route name must not be empty (pattern {0:?})")]
    EmptyName(String),

    #[error("route name {0:?} is declared more than once")]
    DuplicateName(String),

    #[error("route {route:?}: {source}")]
    Pattern {
        route: String,
        #[source]
        source: PatternError,
    },

    #[error("no route named {0:?}")]
    UnknownRoute(String),

    #[error("route {route:?}: {source}")]
    Build {
        route: String,
        #[source]
        source: BuildError,
    },
}

/// A named route bound to a view handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V> {
    name: String,
    matcher: SegmentMatcher,
    view: V,
}

impl<V> Route<V> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &PathPattern {
        self.matcher.pattern()
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

/// A successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a, V> {
    /// The matched route.
    pub route: &'a Route<V>,
    /// Captured path parameters.
    pub params: Params,
    /// Decoded query string.
    pub query: Query,
    /// Fragment after `#`, if any.
    pub fragment: Option<String>,
}

impl<'a, V> Resolution<'a, V> {
    pub fn name(&self) -> &'a str {
        self.route.name()
    }

    pub fn view(&self) -> &'a V {
        self.route.view()
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }
}

/// The ordered, immutable route table.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
    options: MatchOptions,
}

impl<V> RouteTable<V> {
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder::new()
    }

    /// Resolve a path (optionally with query and fragment) to a route.
    pub fn resolve(&self, path: &str) -> Result<Resolution<'_, V>, NotFound> {
        self.resolve_request(RequestPath::parse(path, &self.options))
    }

    /// Resolve an already normalized request.
    pub fn resolve_request(&self, request: RequestPath) -> Result<Resolution<'_, V>, NotFound> {
        let found = self
            .routes
            .iter()
            .find_map(|route| route.matcher.capture(&request).map(|params| (route, params)));

        let (path, query, fragment) = request.into_parts();
        match found {
            Some((route, params)) => Ok(Resolution {
                route,
                params,
                query,
                fragment,
            }),
            None => Err(NotFound { path }),
        }
    }

    /// Build the path of the route called `name`.
    pub fn href(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        let route = self
            .route(name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?;
        route.pattern().build(params).map_err(|source| RouteError::Build {
            route: name.to_string(),
            source,
        })
    }

    /// Look up a route by name.
    pub fn route(&self, name: &str) -> Option<&Route<V>> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Collects route declarations and compiles them into a [`RouteTable`].
#[derive(Debug)]
pub struct RouteTableBuilder<V> {
    declarations: Vec<(String, String, V)>,
    options: MatchOptions,
}

impl<V> RouteTableBuilder<V> {
    pub fn new() -> Self {
        Self {
            declarations: Vec::new(),
            options: MatchOptions::default(),
        }
    }

    /// Declare a route. Earlier declarations take precedence.
    pub fn route(mut self, pattern: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        self.declarations.push((pattern.into(), name.into(), view));
        self
    }

    pub fn options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse every pattern and check name uniqueness.
    pub fn build(self) -> Result<RouteTable<V>, RouteError> {
        let mut routes: Vec<Route<V>> = Vec::with_capacity(self.declarations.len());
        for (pattern, name, view) in self.declarations {
            if name.is_empty() {
                return Err(RouteError::EmptyName(pattern));
            }
            if routes.iter().any(|r| r.name == name) {
                return Err(RouteError::DuplicateName(name));
            }
            let parsed = PathPattern::parse(&pattern).map_err(|source| RouteError::Pattern {
                route: name.clone(),
                source,
            })?;
            routes.push(Route {
                name,
                matcher: SegmentMatcher::new(parsed, self.options.case_sensitive),
                view,
            });
        }

        Ok(RouteTable {
            routes,
            options: self.options,
        })
    }
}

impl<V> Default for RouteTableBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
