//! Navigation orchestration and dispatch.
//!
//! # States
//! - Idle: holds the signature of the last dispatched location
//!
//! # State Transitions
//! ```text
//! navigate(url):  push onto history, hand the host a RouteChange token
//! reconcile():    signature unchanged → skip (no handler runs)
//!                 signature changed   → record it, dispatch exactly once
//! ```
//!
//! # Design Decisions
//! - Navigation and dispatch are decoupled: initial load, programmatic
//!   navigation, and back/forward all funnel through `reconcile`
//! - The dedup key is the raw path+query string, not a normalized form
//! - A dispatch always runs some handler; the default not-found handler
//!   logs a warning

use thiserror::Error;

use crate::history::History;
use crate::routing::pattern::PatternError;
use crate::routing::query::parse_query;
use crate::routing::table::{NotFoundHandler, RouteContext, RouteTable};

/// Errors surfaced by router operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// A route pattern failed to compile at registration time.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// `navigate` was called with an empty target.
    #[error("navigation target must not be empty")]
    EmptyTarget,
}

/// Token signaling that the visible URL changed.
///
/// The host consumes it by calling [`Router::reconcile`], the same way an
/// embedding page wires a route-changed event back into the router.
#[must_use = "a route change only takes effect once the host calls reconcile()"]
#[derive(Debug)]
pub struct RouteChange;

/// Outcome of a single reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The location was identical to the last dispatch; nothing ran.
    Skipped,
    /// A registered route handler ran.
    Matched,
    /// The not-found handler ran.
    NotFound,
}

/// Client-side navigation router.
///
/// Owns the route table, the not-found handler, the history backend, and
/// the last-dispatched signature. One instance per application entry
/// point; all operations run synchronously on the calling thread.
pub struct Router {
    table: RouteTable,
    not_found: NotFoundHandler,
    last_signature: Option<String>,
    history: Box<dyn History>,
}

impl Router {
    /// Create a router over the given history backend.
    pub fn new(history: Box<dyn History>) -> Self {
        Self {
            table: RouteTable::new(),
            not_found: Box::new(default_not_found),
            last_signature: None,
            history,
        }
    }

    /// Register a route. Chainable through `?`.
    pub fn add_route(
        &mut self,
        pattern: &str,
        handler: impl FnMut(RouteContext) + 'static,
    ) -> Result<&mut Self, RouterError> {
        self.table.add(pattern, handler)?;
        Ok(self)
    }

    /// Replace the not-found handler. Last call wins.
    pub fn set_not_found(&mut self, handler: impl FnMut() + 'static) -> &mut Self {
        self.not_found = Box::new(handler);
        self
    }

    /// Change the visible URL without dispatching.
    ///
    /// Pushes `target` onto the history backend and returns a
    /// [`RouteChange`] the host is expected to answer with a
    /// [`reconcile`](Self::reconcile) call.
    pub fn navigate(&mut self, target: &str) -> Result<RouteChange, RouterError> {
        if target.is_empty() {
            return Err(RouterError::EmptyTarget);
        }

        self.history.push(target);
        tracing::debug!(url = %target, "navigation pushed");
        Ok(RouteChange)
    }

    /// Re-evaluate the current location and dispatch at most once.
    ///
    /// Reads the current location, and if its signature equals the last
    /// dispatched one the call is a no-op. Otherwise the signature is
    /// recorded and exactly one handler runs: the first matching route's,
    /// or the not-found handler.
    pub fn reconcile(&mut self) -> Dispatch {
        let location = self.history.location();
        let signature = location.signature();

        if self.last_signature.as_deref() == Some(signature.as_str()) {
            tracing::debug!(%signature, "location unchanged, dispatch skipped");
            return Dispatch::Skipped;
        }
        self.last_signature = Some(signature);

        let query = parse_query(&location.query);
        match self.table.resolve(&location.path) {
            Some((handler, params)) => {
                tracing::debug!(path = %location.path, "dispatching matched route");
                handler(RouteContext { params, query });
                Dispatch::Matched
            }
            None => {
                tracing::debug!(path = %location.path, "no route matched");
                (self.not_found)();
                Dispatch::NotFound
            }
        }
    }

    /// The history backend, read-only.
    pub fn history(&self) -> &dyn History {
        self.history.as_ref()
    }

    /// The history backend, for host-driven back/forward movement.
    pub fn history_mut(&mut self) -> &mut dyn History {
        self.history.as_mut()
    }
}

fn default_not_found() {
    tracing::warn!("no route matched and no not-found handler is registered");
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::history::MemoryHistory;

    fn test_router() -> Router {
        Router::new(Box::new(MemoryHistory::new()))
    }

    fn counter() -> (Rc<RefCell<usize>>, impl FnMut(RouteContext) + 'static) {
        let count = Rc::new(RefCell::new(0));
        let handle = count.clone();
        (count, move |_ctx| *handle.borrow_mut() += 1)
    }

    #[test]
    fn test_initial_reconcile_dispatches() {
        let mut router = test_router();
        let (count, handler) = counter();
        router.add_route("/", handler).unwrap();

        assert_eq!(router.reconcile(), Dispatch::Matched);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_repeated_reconcile_is_a_noop() {
        let mut router = test_router();
        let (count, handler) = counter();
        router.add_route("/", handler).unwrap();

        assert_eq!(router.reconcile(), Dispatch::Matched);
        assert_eq!(router.reconcile(), Dispatch::Skipped);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_query_change_triggers_new_dispatch() {
        let mut router = test_router();
        let (count, handler) = counter();
        router.add_route("/users", handler).unwrap();

        router.history_mut().push("/users");
        router.reconcile();
        router.history_mut().push("/users?username=gyu");
        router.reconcile();

        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_navigate_rejects_empty_target() {
        let mut router = test_router();

        assert_eq!(router.navigate("").unwrap_err(), RouterError::EmptyTarget);
    }

    #[test]
    fn test_navigate_pushes_without_dispatching() {
        let mut router = test_router();
        let (count, handler) = counter();
        router.add_route("/posts", handler).unwrap();

        let RouteChange = router.navigate("/posts").unwrap();
        assert_eq!(*count.borrow(), 0); // dispatch waits for reconcile

        router.reconcile();
        assert_eq!(*count.borrow(), 1);
        assert_eq!(router.history().location().path, "/posts");
    }

    #[test]
    fn test_not_found_replacement_last_write_wins() {
        let mut router = test_router();
        let first = Rc::new(RefCell::new(0));
        let second = Rc::new(RefCell::new(0));

        let handle = first.clone();
        router.set_not_found(move || *handle.borrow_mut() += 1);
        let handle = second.clone();
        router.set_not_found(move || *handle.borrow_mut() += 1);

        assert_eq!(router.reconcile(), Dispatch::NotFound);
        assert_eq!(*first.borrow(), 0);
        assert_eq!(*second.borrow(), 1);
    }

    #[test]
    fn test_repeated_unmatched_location_dispatches_once() {
        let mut router = test_router();
        let hits = Rc::new(RefCell::new(0));
        let handle = hits.clone();
        router.set_not_found(move || *handle.borrow_mut() += 1);

        assert_eq!(router.reconcile(), Dispatch::NotFound);
        assert_eq!(router.reconcile(), Dispatch::Skipped);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_default_not_found_does_not_panic() {
        let mut router = test_router();

        assert_eq!(router.reconcile(), Dispatch::NotFound);
    }

    #[test]
    fn test_malformed_pattern_surfaces_at_registration() {
        let mut router = test_router();

        let err = router.add_route("", |_| {}).err().unwrap();
        assert_eq!(err, RouterError::Pattern(PatternError::Empty));
    }
}
