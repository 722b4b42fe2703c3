//! Route matching logic.
//!
//! # Responsibilities
//! - Compare a normalized path against one compiled pattern
//! - Bind captured segments to parameter names
//!
//! # Design Decisions
//! - Segment counts must be equal (no optional or catch-all segments)
//! - Captures never match an empty segment
//! - Literal case sensitivity is configurable, captured values keep their case
//! - No regex: one linear pass over the segments

use std::borrow::Cow;

use crate::routing::normalize::RequestPath;
use crate::routing::params::Params;
use crate::routing::pattern::{PathPattern, Segment};

/// Trait for matching paths against a route condition.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns the captured parameters if the path matches.
    fn capture(&self, path: &RequestPath) -> Option<Params>;

    /// Returns true if the path matches.
    fn matches(&self, path: &RequestPath) -> bool {
        self.capture(path).is_some()
    }
}

/// Matches a path segment by segment against a [`PathPattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentMatcher {
    pattern: PathPattern,
    case_sensitive: bool,
}

impl SegmentMatcher {
    pub fn new(pattern: PathPattern, case_sensitive: bool) -> Self {
        Self {
            pattern,
            case_sensitive,
        }
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    fn literal_eq(&self, literal: &str, input: &str) -> bool {
        if self.case_sensitive {
            literal == input
        } else {
            literal.eq_ignore_ascii_case(input)
        }
    }
}

impl Matcher for SegmentMatcher {
    fn capture(&self, path: &RequestPath) -> Option<Params> {
        let input = path.segments()?;
        let segments = self.pattern.segments();
        if input.len() != segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, value) in segments.iter().zip(input) {
            match segment {
                Segment::Literal(literal) => {
                    if !self.literal_eq(literal, value) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if value.is_empty() {
                        return None;
                    }
                    params.insert(name.as_str(), decode_segment(value));
                }
            }
        }
        Some(params)
    }
}

/// Percent-decode a captured value, keeping it raw if it is not UTF-8.
fn decode_segment(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::normalize::{MatchOptions, TrailingSlash};

    fn matcher(pattern: &str, case_sensitive: bool) -> SegmentMatcher {
        SegmentMatcher::new(PathPattern::parse(pattern).unwrap(), case_sensitive)
    }

    fn req(path: &str) -> RequestPath {
        RequestPath::parse(path, &MatchOptions::default())
    }

    #[test]
    fn test_literal_match() {
        let m = matcher("/config", false);
        assert!(m.matches(&req("/config")));
        assert!(m.matches(&req("/CONFIG")));
        assert!(!m.matches(&req("/configs")));
        assert!(!m.matches(&req("/config/extra")));
        assert_eq!(m.capture(&req("/config")), Some(Params::new()));
    }

    #[test]
    fn test_case_sensitive_literal() {
        let m = matcher("/config", true);
        assert!(m.matches(&req("/config")));
        assert!(!m.matches(&req("/Config")));
    }

    #[test]
    fn test_root_only_matches_root() {
        let m = matcher("/", false);
        assert!(m.matches(&req("/")));
        assert!(m.matches(&req("")));
        assert!(!m.matches(&req("/config")));
    }

    #[test]
    fn test_param_capture() {
        let m = matcher("/project/:id", false);
        let params = m.capture(&req("/project/AbC")).unwrap();
        assert_eq!(params.get("id"), Some("AbC"));

        let params = m.capture(&req("/project/a%20b")).unwrap();
        assert_eq!(params.get("id"), Some("a b"));
    }

    #[test]
    fn test_param_rejects_empty_segment() {
        let m = matcher("/project/:id", false);
        let strict = MatchOptions {
            trailing_slash: TrailingSlash::Strict,
            ..MatchOptions::default()
        };
        assert!(!m.matches(&RequestPath::parse("/project/", &strict)));
        assert!(!m.matches(&req("/project/")));
        assert!(!m.matches(&req("/project")));
    }

    #[test]
    fn test_undecodable_value_kept_raw() {
        let m = matcher("/project/:id", false);
        let params = m.capture(&req("/project/%FF")).unwrap();
        assert_eq!(params.get("id"), Some("%FF"));
    }

    #[test]
    fn test_relative_path_never_matches() {
        let m = matcher("/config", false);
        assert!(!m.matches(&req("config")));
    }
}
