//! In-memory history backend.
//!
//! Browser-like semantics: a push drops every entry past the cursor, so
//! navigating after going back rewrites the forward stack.

use crate::history::{History, Location};

/// History backend holding its entry stack in memory.
///
/// Starts at the root location, the way a page session starts at `/`.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Location>,
    cursor: usize,
}

impl MemoryHistory {
    /// Create a history positioned at `/`.
    pub fn new() -> Self {
        Self::starting_at("/")
    }

    /// Create a history positioned at the given URL.
    pub fn starting_at(url: &str) -> Self {
        Self {
            entries: vec![Location::from_url(url)],
            cursor: 0,
        }
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl History for MemoryHistory {
    fn location(&self) -> Location {
        self.entries[self.cursor].clone()
    }

    fn push(&mut self, url: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(Location::from_url(url));
        self.cursor += 1;
    }

    fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    fn forward(&mut self) -> bool {
        if self.cursor + 1 == self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_root() {
        let history = MemoryHistory::new();

        assert_eq!(history.location(), Location::root());
    }

    #[test]
    fn test_push_and_back() {
        let mut history = MemoryHistory::new();
        history.push("/posts");
        history.push("/posts/1");

        assert_eq!(history.location().path, "/posts/1");
        assert!(history.back());
        assert_eq!(history.location().path, "/posts");
        assert!(history.back());
        assert_eq!(history.location().path, "/");
        assert!(!history.back()); // at the oldest entry
    }

    #[test]
    fn test_forward_after_back() {
        let mut history = MemoryHistory::new();
        history.push("/posts");

        assert!(history.back());
        assert!(history.forward());
        assert_eq!(history.location().path, "/posts");
        assert!(!history.forward()); // at the newest entry
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = MemoryHistory::new();
        history.push("/posts");
        history.push("/users");

        history.back();
        history.push("/about");

        assert_eq!(history.location().path, "/about");
        assert!(!history.forward()); // "/users" was dropped
    }
}
