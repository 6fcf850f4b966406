//! Route pattern compilation and matching.
//!
//! # Responsibilities
//! - Compile a pattern string into segment tokens at registration time
//! - Match a concrete path against the compiled tokens
//! - Bind named parameter segments to their path values
//!
//! # Design Decisions
//! - Segment comparison only, no regex
//! - A `:` prefix marks a parameter segment; everything else is literal
//! - Match requires equal segment count (no prefix or catch-all matching)
//! - Malformed patterns are rejected at compile time, never at match time

use std::collections::HashMap;

use thiserror::Error;

/// Marker prefix identifying a parameter segment.
const PARAM_MARKER: char = ':';

/// Parameters captured from a matched path, keyed by parameter name.
pub type Params = HashMap<String, String>;

/// Errors raised while compiling a route pattern.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern string was empty.
    #[error("route pattern must not be empty")]
    Empty,

    /// Consecutive slashes produced an empty interior segment.
    #[error("route pattern `{0}` contains an empty segment")]
    EmptySegment(String),

    /// A segment consisted of the parameter marker alone.
    #[error("route pattern `{0}` contains a parameter segment with no name")]
    UnnamedParameter(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A compiled route pattern.
///
/// Created once at registration and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Compile a pattern string such as `/posts/:id` into a matcher.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }

        // One leading and one trailing slash are part of the syntax;
        // any other empty segment is a configuration error.
        let mut parts: Vec<&str> = pattern.split('/').collect();
        if parts.first() == Some(&"") {
            parts.remove(0);
        }
        if parts.last() == Some(&"") {
            parts.pop();
        }

        let mut segments = Vec::with_capacity(parts.len());
        for part in parts {
            if part.is_empty() {
                return Err(PatternError::EmptySegment(pattern.to_string()));
            }
            match part.strip_prefix(PARAM_MARKER) {
                Some("") => return Err(PatternError::UnnamedParameter(pattern.to_string())),
                Some(name) => segments.push(Segment::Param(name.to_string())),
                None => segments.push(Segment::Literal(part.to_string())),
            }
        }

        Ok(Self { segments })
    }

    /// Match a concrete path, returning captured parameters on success.
    ///
    /// Parameter segments match any non-empty path segment and capture its
    /// raw string value. Literal segments match only the identical string.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let candidates = path_segments(path);
        if candidates.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (candidate, segment) in candidates.into_iter().zip(self.segments.iter()) {
            match segment {
                Segment::Literal(literal) => {
                    if candidate != literal.as_str() {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if candidate.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), candidate.to_string());
                }
            }
        }

        Some(params)
    }
}

/// Split a path on `/`, ignoring leading and trailing empty segments so
/// `/posts` and `/posts/` both normalize to `["posts"]`.
fn path_segments(path: &str) -> Vec<&str> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}
