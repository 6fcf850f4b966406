//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Compile every route pattern (malformed patterns fail at load time)
//! - Check view names are present
//! - Detect duplicate patterns (dead routes under first-match-wins)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RoutesConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RoutesConfig;
use crate::routing::pattern::{PatternError, RoutePattern};

/// A single semantic problem found in a route table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A route pattern failed to compile.
    #[error("route {index}: {source}")]
    Pattern {
        index: usize,
        #[source]
        source: PatternError,
    },

    /// A route has an empty view name.
    #[error("route {index} (`{pattern}`): view name must not be empty")]
    EmptyView { index: usize, pattern: String },

    /// A pattern appears twice; the later route can never match.
    #[error("route {index} duplicates pattern `{pattern}`")]
    DuplicatePattern { index: usize, pattern: String },

    /// The not-found view name is empty.
    #[error("not-found view name must not be empty")]
    EmptyNotFoundView,
}

/// Validate a route table, collecting every error.
pub fn validate_config(config: &RoutesConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, route) in config.routes.iter().enumerate() {
        if let Err(source) = RoutePattern::compile(&route.pattern) {
            errors.push(ValidationError::Pattern { index, source });
        }
        if route.view.is_empty() {
            errors.push(ValidationError::EmptyView {
                index,
                pattern: route.pattern.clone(),
            });
        }
        if !seen.insert(route.pattern.as_str()) {
            errors.push(ValidationError::DuplicatePattern {
                index,
                pattern: route.pattern.clone(),
            });
        }
    }

    if let Some(not_found) = &config.not_found {
        if not_found.view.is_empty() {
            errors.push(ValidationError::EmptyNotFoundView);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
