//! Path pattern parsing.
//!
//! A pattern is an absolute path whose segments are either literals or
//! named captures written `:name`, e.g. `/project/:id`.

use std::fmt;

use thiserror::Error;

use crate::routing::params::Params;

/// One `/`-delimited piece of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the input segment.
    Literal(String),
    /// Matches any non-empty input segment and binds it to the name.
    Param(String),
}

/// Errors raised while parsing a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern {0:?} must start with '/'")]
    MissingLeadingSlash(String),

    #[error("pattern {0:?} contains an empty segment")]
    EmptySegment(String),

    #[error("pattern {0:?} contains a parameter without a name")]
    EmptyParamName(String),

    #[error("invalid parameter name {name:?} in pattern {pattern:?}")]
    InvalidParamName { pattern: String, name: String },

    #[error("parameter {name:?} appears more than once in pattern {pattern:?}")]
    DuplicateParam { pattern: String, name: String },
}

/// Errors raised while building a path from a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("missing value for parameter {0:?}")]
    MissingParam(String),

    #[error("empty value for parameter {0:?}")]
    EmptyParam(String),
}

/// A parsed path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern such as `/`, `/config` or `/project/:id`.
    ///
    /// The root pattern `/` is a single empty literal segment, which is
    /// exactly what the input path `/` splits into.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let rest = pattern
            .strip_prefix('/')
            .ok_or_else(|| PatternError::MissingLeadingSlash(pattern.to_string()))?;

        if rest.is_empty() {
            return Ok(Self {
                source: pattern.to_string(),
                segments: vec![Segment::Literal(String::new())],
            });
        }

        let mut segments: Vec<Segment> = Vec::new();
        for raw in rest.split('/') {
            let segment = match raw.strip_prefix(':') {
                Some("") => return Err(PatternError::EmptyParamName(pattern.to_string())),
                Some(name) => {
                    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                        return Err(PatternError::InvalidParamName {
                            pattern: pattern.to_string(),
                            name: name.to_string(),
                        });
                    }
                    if segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(existing) if existing == name))
                    {
                        return Err(PatternError::DuplicateParam {
                            pattern: pattern.to_string(),
                            name: name.to_string(),
                        });
                    }
                    Segment::Param(name.to_string())
                }
                None if raw.is_empty() => {
                    return Err(PatternError::EmptySegment(pattern.to_string()))
                }
                None => Segment::Literal(raw.to_string()),
            };
            segments.push(segment);
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the captures, in order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// True when the pattern has no captures.
    pub fn is_static(&self) -> bool {
        self.param_names().next().is_none()
    }

    /// Substitute `params` into the pattern, percent-encoding each value.
    ///
    /// Extra params are ignored.
    pub fn build(&self, params: &Params) -> Result<String, BuildError> {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(lit) => path.push_str(lit),
                Segment::Param(name) => {
                    let value = params
                        .get(name)
                        .ok_or_else(|| BuildError::MissingParam(name.clone()))?;
                    if value.is_empty() {
                        return Err(BuildError::EmptyParam(name.clone()));
                    }
                    path.push_str(&urlencoding::encode(value));
                }
            }
        }
        Ok(path)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
