//! Route-table configuration subsystem.
//!
//! # Data Flow
//! ```text
//! route table file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, all errors at once)
//!     → RoutesConfig (validated, immutable)
//!     → host binds view names to handlers and registers routes
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the route table is append-only
//! - Every pattern is compiled during validation, so malformed patterns
//!   fail at load time, never at match time
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::NotFoundConfig;
pub use schema::RouteConfig;
pub use schema::RoutesConfig;
