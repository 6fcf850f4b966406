//! History surface.
//!
//! # Data Flow
//! ```text
//! Router.navigate(url)
//!     → History.push (visible URL changes, no reload)
//!
//! Host back/forward command
//!     → History.back / History.forward
//!     → host calls Router.reconcile()
//!
//! Router.reconcile()
//!     → History.location (current path + query)
//! ```
//!
//! # Design Decisions
//! - The browser history API is an opaque side-effect surface; the router
//!   only reads the current location and pushes new ones
//! - Back/forward movement is host-driven, mirroring how an embedding
//!   page wires the native history event to reconciliation
//! - Locations keep path and query as raw strings; the dedup signature
//!   must stay unnormalized

pub mod memory;

pub use memory::MemoryHistory;

/// A point in the navigation history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Path portion, e.g. `/posts/1`.
    pub path: String,

    /// Query portion without the leading `?`, e.g. `username=gyu`.
    pub query: String,
}

impl Location {
    /// The root location, `/` with no query.
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
            query: String::new(),
        }
    }

    /// Split a URL into path and query on the first `?`.
    pub fn from_url(url: &str) -> Self {
        let (path, query) = match url.split_once('?') {
            Some((path, query)) => (path, query),
            None => (url, ""),
        };
        Self {
            path: path.to_string(),
            query: query.to_string(),
        }
    }

    /// The exact path+query string used as the dispatch dedup key.
    pub fn signature(&self) -> String {
        format!("{}?{}", self.path, self.query)
    }
}

/// Abstraction over the platform history the router drives.
///
/// The router calls only [`location`](History::location) and
/// [`push`](History::push); `back` and `forward` exist for the host.
pub trait History {
    /// The location currently visible to the user.
    fn location(&self) -> Location;

    /// Make `url` the visible location without dispatching.
    fn push(&mut self, url: &str);

    /// Step one entry back. Returns whether the cursor moved.
    fn back(&mut self) -> bool;

    /// Step one entry forward. Returns whether the cursor moved.
    fn forward(&mut self) -> bool;
}
