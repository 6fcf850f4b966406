//! Shared utilities for router integration tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use spa_router::RouteContext;

/// Records every context a route handler receives.
#[derive(Clone, Default)]
pub struct RenderLog {
    calls: Rc<RefCell<Vec<RouteContext>>>,
}

impl RenderLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that appends each received context to this log.
    pub fn handler(&self) -> impl FnMut(RouteContext) + 'static {
        let calls = self.calls.clone();
        move |ctx| calls.borrow_mut().push(ctx)
    }

    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn last(&self) -> Option<RouteContext> {
        self.calls.borrow().last().cloned()
    }
}

/// Counts invocations of a not-found handler.
#[derive(Clone, Default)]
pub struct HitCounter {
    hits: Rc<RefCell<usize>>,
}

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handler(&self) -> impl FnMut() + 'static {
        let hits = self.hits.clone();
        move || *hits.borrow_mut() += 1
    }

    pub fn count(&self) -> usize {
        *self.hits.borrow()
    }
}

/// Build an owned string map from borrowed pairs.
pub fn string_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
