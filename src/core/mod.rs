//! # Core Application Logic
//!
//! This module contains the portal's domain logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • NavigationTree       │
//!                    │  • search::resolve()    │
//!                    │  • State + Action       │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Speaker   │      │    CLI     │
//!     │  Adapter   │      │ (TTS cmd)  │      │ --search   │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`navigation`]: the mega-menu tree (reference data)
//! - [`search`]: free text → destination resolver
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`speech`], [`viewport`]: capabilities the adapter injects

pub mod academics;
pub mod action;
pub mod announcements;
pub mod carousel;
pub mod config;
pub mod navigation;
pub mod route;
pub mod search;
pub mod speech;
pub mod state;
pub mod viewport;
