//! Route table storage and lookup.
//!
//! # Responsibilities
//! - Store registered routes in insertion order
//! - Compile patterns at registration time
//! - Return the first structural match for a path, or explicit no-match
//!
//! # Design Decisions
//! - First match wins, ordered by registration
//! - No specificity ranking: callers register more specific patterns
//!   before overlapping parameter-bearing ones
//! - Append-only; routes are never removed or reordered

use crate::routing::pattern::{Params, PatternError, RoutePattern};
use crate::routing::query::QueryMap;

/// Arguments handed to a matched route handler.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteContext {
    /// Named path parameters captured by the matched pattern.
    pub params: Params,

    /// Key/value pairs parsed from the query string.
    pub query: QueryMap,
}

/// Callback invoked when its route matches the current path.
pub type RouteHandler = Box<dyn FnMut(RouteContext)>;

/// Callback invoked when no route matches.
pub type NotFoundHandler = Box<dyn FnMut()>;

struct RouteEntry {
    pattern: RoutePattern,
    handler: RouteHandler,
}

/// Ordered collection of (pattern, handler) pairs.
#[derive(Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Create an empty route table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route. Chainable through `?`.
    ///
    /// The pattern is compiled immediately, so a malformed pattern is
    /// surfaced here rather than at match time.
    pub fn add(
        &mut self,
        pattern: &str,
        handler: impl FnMut(RouteContext) + 'static,
    ) -> Result<&mut Self, PatternError> {
        let pattern = RoutePattern::compile(pattern)?;
        self.entries.push(RouteEntry {
            pattern,
            handler: Box::new(handler),
        });
        Ok(self)
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the first registered route matching `path`.
    ///
    /// Returns the route's handler together with the captured parameters,
    /// or `None` when nothing matches.
    pub fn resolve(&mut self, path: &str) -> Option<(&mut RouteHandler, Params)> {
        for entry in &mut self.entries {
            if let Some(params) = entry.pattern.matches(path) {
                return Some((&mut entry.handler, params));
            }
        }
        None
    }
}
