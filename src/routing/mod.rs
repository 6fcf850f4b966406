//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! navigate(url)
//!     → history push + RouteChange signal to the host
//!     → host calls reconcile()
//!     → router.rs (signature dedup)
//!     → query.rs (parse query string)
//!     → table.rs (first-match lookup, registration order)
//!     → pattern.rs (segment matching, parameter capture)
//!     → Invoke: matched handler or not-found handler, exactly once
//!
//! Route Compilation (at registration):
//!     pattern string
//!     → Tokenize into literal / parameter segments
//!     → Reject malformed patterns immediately
//!     → Freeze as immutable RoutePattern
//! ```
//!
//! # Design Decisions
//! - Patterns compiled at registration, immutable at runtime
//! - No regex, segment comparison only
//! - First match wins (ordered by registration)
//! - Identical consecutive locations never re-dispatch

pub mod pattern;
pub mod query;
pub mod router;
pub mod table;

pub use pattern::{Params, PatternError, RoutePattern};
pub use query::{parse_query, QueryMap};
pub use router::{Dispatch, RouteChange, Router, RouterError};
pub use table::{RouteContext, RouteTable};
