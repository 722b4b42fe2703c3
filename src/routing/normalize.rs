//! Input normalization applied before matching.
//!
//! # Responsibilities
//! - Split the query string and fragment off the path
//! - Apply the trailing-slash policy
//! - Expose the `/`-delimited segments of an absolute path
//!
//! # Design Decisions
//! - The empty string is the root path
//! - Relative paths never match anything
//! - Query and fragment never take part in matching

use serde::{Deserialize, Serialize};

use crate::routing::params::Query;

/// What to do with a trailing `/` on an incoming path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingSlash {
    /// `/config/` is treated as `/config`.
    #[default]
    Ignore,
    /// `/config/` is a distinct path.
    Strict,
}

/// Matching options fixed when the route table is built.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct MatchOptions {
    /// Trailing slash policy.
    pub trailing_slash: TrailingSlash,

    /// Compare literal segments case-sensitively.
    pub case_sensitive: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            trailing_slash: TrailingSlash::Ignore,
            case_sensitive: false,
        }
    }
}

/// An incoming navigation path, split and normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPath {
    path: String,
    query: Query,
    fragment: Option<String>,
}

impl RequestPath {
    pub fn parse(raw: &str, options: &MatchOptions) -> Self {
        let (rest, fragment) = match raw.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Query::parse(query)),
            None => (rest, Query::default()),
        };

        let path = match path {
            "" => "/",
            p if options.trailing_slash == TrailingSlash::Ignore && p.len() > 1 => {
                p.strip_suffix('/').unwrap_or(p)
            }
            p => p,
        };

        Self {
            path: path.to_string(),
            query,
            fragment,
        }
    }

    /// The normalized path, without query or fragment.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// The segments after the leading `/`, or `None` for a relative path.
    ///
    /// `/` yields a single empty segment.
    pub fn segments(&self) -> Option<Vec<&str>> {
        self.path
            .strip_prefix('/')
            .map(|rest| rest.split('/').collect())
    }

    pub(crate) fn into_parts(self) -> (String, Query, Option<String>) {
        (self.path, self.query, self.fragment)
    }
}
