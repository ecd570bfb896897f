//! # Actions
//!
//! Everything that can happen in the portal becomes an `Action`.
//! User submits a search? That's `Action::Search(query)`.
//! Carousel timer fires? That's `Action::AutoAdvance`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the adapter must
//! perform (speaking, scrolling, quitting). No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::academics::ProgramLevel;
use crate::core::route::HOME_ROUTE;
use crate::core::search::{SearchOutcome, no_match_message, resolve};
use crate::core::speech::{ACTIVATION_MESSAGE, Utterance, announcement};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(String),
    Search(String),
    Back,
    Forward,
    Home,
    NextSlide,
    PrevSlide,
    GoToSlide(usize),
    /// Timer tick from the autoplay task.
    AutoAdvance,
    NextTab,
    PrevTab,
    SelectTab(ProgramLevel),
    ToggleSearch,
    CloseSearch,
    ToggleScreenReader,
    /// Read `text` aloud if the screen reader is on.
    Announce(String),
    DismissNotice,
    ScrollToTop,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// The current route changed.
    Navigated,
    Speak(Utterance),
    Silence,
    ScrollToTop,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Navigate(href) => navigate(app, &href),
        Action::Search(query) => match resolve(&app.tree, &query) {
            SearchOutcome::Idle => Effect::None,
            SearchOutcome::Found(href) => {
                info!("Search '{}' resolved to {}", query.trim(), href);
                app.search_open = false;
                navigate(app, &href);
                // Searching for the current page still counts as a hit
                Effect::Navigated
            }
            SearchOutcome::NoMatch(query) => {
                info!("Search '{}' matched nothing", query);
                app.notice = Some(no_match_message(&query));
                Effect::None
            }
        },
        Action::Back => match app.history.back() {
            Some(route) => {
                app.status_message = format!("Back to {route}");
                Effect::Navigated
            }
            None => {
                app.status_message = "No earlier page".to_string();
                Effect::None
            }
        },
        Action::Forward => match app.history.forward() {
            Some(route) => {
                app.status_message = format!("Forward to {route}");
                Effect::Navigated
            }
            None => Effect::None,
        },
        Action::Home => navigate(app, HOME_ROUTE),
        Action::NextSlide => {
            app.carousel.next();
            Effect::None
        }
        Action::PrevSlide => {
            app.carousel.prev();
            Effect::None
        }
        Action::GoToSlide(index) => {
            app.carousel.go_to(index);
            Effect::None
        }
        Action::AutoAdvance => {
            // The banner only exists on the home page
            if app.autoplay && app.history.is_home() {
                app.carousel.next();
            }
            Effect::None
        }
        Action::NextTab => {
            let level = app.active_tab.next();
            select_tab(app, level)
        }
        Action::PrevTab => {
            let level = app.active_tab.prev();
            select_tab(app, level)
        }
        Action::SelectTab(level) => select_tab(app, level),
        Action::ToggleSearch => {
            app.search_open = !app.search_open;
            Effect::None
        }
        Action::CloseSearch => {
            app.search_open = false;
            Effect::None
        }
        Action::ToggleScreenReader => {
            app.screen_reader = !app.screen_reader;
            info!("Screen reader {}", if app.screen_reader { "on" } else { "off" });
            if app.screen_reader {
                app.status_message = "Screen reader on".to_string();
                Effect::Speak(Utterance::new(ACTIVATION_MESSAGE))
            } else {
                app.status_message = "Screen reader off".to_string();
                Effect::Silence
            }
        }
        Action::Announce(text) => {
            if !app.screen_reader {
                return Effect::None;
            }
            match announcement(&text) {
                Some(utterance) => Effect::Speak(utterance),
                None => Effect::None,
            }
        }
        Action::DismissNotice => {
            app.notice = None;
            Effect::None
        }
        Action::ScrollToTop => Effect::ScrollToTop,
        Action::Quit => Effect::Quit,
    }
}

fn navigate(app: &mut App, href: &str) -> Effect {
    app.notice = None;
    app.search_open = false;
    if !app.history.push(href) {
        return Effect::None;
    }
    info!("Navigated to {}", href);
    app.status_message = format!("Opened {}", app.page_title());
    Effect::Navigated
}

fn select_tab(app: &mut App, level: ProgramLevel) -> Effect {
    app.active_tab = level;
    if app.screen_reader {
        return Effect::Speak(Utterance::new(format!("Tab: {}", level.label())));
    }
    Effect::None
}
