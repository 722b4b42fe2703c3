//! Browser locations.

use thiserror::Error;
use url::Url;

/// Errors raised while reading a location.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("invalid URL {input:?}: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
}

/// A location split into path, query and fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl Location {
    /// Parse an absolute URL (`https://host/app/x?y#z`) or a path (`/app/x?y#z`).
    pub fn parse(input: &str) -> Result<Self, LocationError> {
        if input.is_empty() || input.starts_with('/') {
            return Ok(Self::from_path(input));
        }

        let url = Url::parse(input).map_err(|source| LocationError::InvalidUrl {
            input: input.to_string(),
            source,
        })?;
        Ok(Self {
            path: url.path().to_string(),
            query: url.query().map(str::to_string),
            fragment: url.fragment().map(str::to_string),
        })
    }

    pub(crate) fn from_path(input: &str) -> Self {
        let (rest, fragment) = match input.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (input, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };
        Self {
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
            query,
            fragment,
        }
    }

    /// Reassemble with `path` in place of the location's own path.
    pub fn with_path(&self, path: &str) -> String {
        let mut out = path.to_string();
        if let Some(query) = &self.query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absolute_url() {
        let loc = Location::parse("https://example.com/app/project/42?tab=files#top").unwrap();
        assert_eq!(loc.path, "/app/project/42");
        assert_eq!(loc.query.as_deref(), Some("tab=files"));
        assert_eq!(loc.fragment.as_deref(), Some("top"));
    }

    #[test]
    fn test_parse_path() {
        let loc = Location::parse("/config?x=1").unwrap();
        assert_eq!(loc.path, "/config");
        assert_eq!(loc.query.as_deref(), Some("x=1"));
        assert_eq!(loc.fragment, None);
        assert_eq!(loc.with_path("/other"), "/other?x=1");

        assert_eq!(Location::parse("").unwrap().path, "/");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            Location::parse("not a url"),
            Err(LocationError::InvalidUrl { .. })
        ));
    }
}
