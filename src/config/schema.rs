//! Configuration schema definitions.
//!
//! This module defines the declarative route-table structure. All types
//! derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration: the declarative route table.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RoutesConfig {
    /// Route definitions, in match-priority order (first match wins).
    pub routes: Vec<RouteConfig>,

    /// Optional fallback view for unmatched locations.
    pub not_found: Option<NotFoundConfig>,
}

/// A single route definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route pattern (e.g. "/posts/:id").
    pub pattern: String,

    /// View name the route renders.
    pub view: String,
}

/// Fallback view configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotFoundConfig {
    /// View name rendered when no route matches.
    pub view: String,
}
