//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow three patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TopBar`: G.I. badge, contacts, screen reader state
//! - `NavBar`: university name and the top-level menu row
//! - `StatusBar`: route, status message, key hints
//! - `Notice`: modal message (e.g. no search results)
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SearchBox`: query input
//! - `MegaMenuState` / `MegaMenu`: flyout for the selected nav entry
//! - `MobileMenuState` / `MobileMenu`: accordion for compact terminals
//! - `PageState` / `Page`: scrollable page body
//!
//! Overlays follow the persistent state + transient wrapper pattern: the
//! `*State` struct lives in `TuiState`, the wrapper is built each frame.
//!
//! ### Page Sections
//!
//! Blocks stacked inside `Page`, implementing `PageSection`:
//! - `Hero`, `InfoCards`, `AcademicsSection` on the home page
//! - `ContentPage` for every other route
//! - `Footer`, always last
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, not by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! StatusBar::new(app.route(), &app.status_message, tui.chrome.go_to_top_visible)
//!     .render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── overlay.rs        (geometry and truncation helpers)
//! ├── top_bar.rs
//! ├── nav_bar.rs
//! ├── status_bar.rs
//! ├── search_box.rs
//! ├── mega_menu.rs
//! ├── mobile_menu.rs
//! ├── notice.rs
//! ├── page.rs           (scroll view host)
//! ├── hero.rs
//! ├── info_cards.rs
//! ├── academics.rs
//! ├── content_page.rs
//! └── footer.rs
//! ```

pub mod academics;
pub mod content_page;
pub mod footer;
pub mod hero;
pub mod info_cards;
pub mod mega_menu;
pub mod mobile_menu;
pub mod nav_bar;
pub mod notice;
pub mod overlay;
pub mod page;
pub mod search_box;
pub mod status_bar;
pub mod top_bar;

pub use academics::AcademicsSection;
pub use content_page::ContentPage;
pub use hero::Hero;
pub use info_cards::InfoCards;
pub use mega_menu::{MegaMenu, MegaMenuEvent, MegaMenuState};
pub use mobile_menu::{MobileMenu, MobileMenuEvent, MobileMenuState};
pub use nav_bar::NavBar;
pub use notice::Notice;
pub use page::{Page, PageState};
pub use search_box::{SearchBox, SearchEvent};
pub use status_bar::StatusBar;
pub use top_bar::TopBar;
