//! Route history: the current page plus back/forward stacks.

use log::debug;

pub const HOME_ROUTE: &str = "/";

#[derive(Debug, Clone)]
pub struct RouteHistory {
    entries: Vec<String>,
    index: usize,
}

impl RouteHistory {
    pub fn new(start: &str) -> Self {
        Self {
            entries: vec![start.to_string()],
            index: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    pub fn is_home(&self) -> bool {
        self.current() == HOME_ROUTE
    }

    /// Navigate to `route`. Returns false if already there.
    pub fn push(&mut self, route: &str) -> bool {
        if self.current() == route {
            return false;
        }
        // Drop forward history when branching off
        self.entries.truncate(self.index + 1);
        self.entries.push(route.to_string());
        self.index += 1;
        debug!("Route history: {} entries, at {}", self.entries.len(), route);
        true
    }

    pub fn back(&mut self) -> Option<&str> {
        if self.index > 0 {
            self.index -= 1;
            Some(self.current())
        } else {
            None
        }
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            Some(self.current())
        } else {
            None
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }
}

impl Default for RouteHistory {
    fn default() -> Self {
        Self::new(HOME_ROUTE)
    }
}
