//! # Application State
//!
//! Core state for the portal. This module contains domain state only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── tree: NavigationTree          // mega-menu, read-only
//! ├── history: RouteHistory         // current page + back/forward
//! ├── status_message: String        // status bar text
//! ├── notice: Option<String>        // modal notice (e.g. no search results)
//! ├── search_open: bool             // search box visible
//! ├── carousel: Carousel            // hero slide index
//! ├── autoplay: bool                // carousel advances on timer ticks
//! ├── active_tab: ProgramLevel      // programme browser tab
//! └── screen_reader: bool           // announcements enabled
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::academics::ProgramLevel;
use crate::core::carousel::Carousel;
use crate::core::config::ResolvedConfig;
use crate::core::navigation::NavigationTree;
use crate::core::route::{HOME_ROUTE, RouteHistory};

pub const WELCOME_MESSAGE: &str = "Welcome to Pandit Shambhunath Shukla Vishwavidyalaya";

pub struct App {
    pub tree: NavigationTree,
    pub history: RouteHistory,
    pub status_message: String,
    pub notice: Option<String>,
    pub search_open: bool,
    pub carousel: Carousel,
    pub autoplay: bool,
    pub active_tab: ProgramLevel,
    pub screen_reader: bool,
}

impl App {
    pub fn new(tree: NavigationTree) -> Self {
        Self {
            tree,
            history: RouteHistory::new(HOME_ROUTE),
            status_message: String::from(WELCOME_MESSAGE),
            notice: None,
            search_open: false,
            carousel: Carousel::default(),
            autoplay: true,
            active_tab: ProgramLevel::default(),
            screen_reader: false,
        }
    }

    pub fn from_config(tree: NavigationTree, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(tree);
        app.history = RouteHistory::new(&config.start_route);
        app.autoplay = config.autoplay;
        app.active_tab = config.default_tab;
        app.screen_reader = config.screen_reader;
        app
    }

    pub fn route(&self) -> &str {
        self.history.current()
    }

    /// Human-readable name of the current page.
    pub fn page_title(&self) -> String {
        let route = self.route();
        if route == HOME_ROUTE {
            return "Home".to_string();
        }
        match self.tree.locate(route) {
            Some(crumb) => crumb.link.to_string(),
            None => route.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, WELCOME_MESSAGE);
        assert_eq!(app.route(), "/");
        assert!(app.notice.is_none());
        assert!(!app.search_open);
        assert_eq!(app.active_tab, ProgramLevel::Ug);
    }

    #[test]
    fn test_page_title() {
        let mut app = test_app();
        assert_eq!(app.page_title(), "Home");
        app.history.push("/vc-message");
        assert_eq!(app.page_title(), "Vice Chancellor's Message");
        app.history.push("/unknown");
        assert_eq!(app.page_title(), "/unknown");
    }
}
