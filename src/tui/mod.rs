//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Input Routing
//!
//! Events go to the topmost layer that is open, in this order:
//!
//! 1. notice modal (any key dismisses)
//! 2. search box
//! 3. mega menu flyout
//! 4. compact accordion menu
//! 5. browse keymap (nav bar, carousel, tabs, scrolling)
//!
//! Ctrl+C quits from anywhere; scroll wheel events always reach the page.
//!
//! ## Redraw Strategy
//!
//! The loop polls for input with a 250ms timeout and only redraws after an
//! event or a background action (carousel autoplay tick).
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during redraws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::academics::APPLY_ROUTE;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::NavigationTree;
use crate::core::speech::{ACTIVATION_MESSAGE, Speaker, Utterance, build_speaker};
use crate::core::state::App;
use crate::core::viewport::Chrome;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    MegaMenuEvent, MegaMenuState, MobileMenuEvent, MobileMenuState, PageState, SearchBox,
    SearchEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Keyboard-selected nav bar entry
    pub nav_selected: usize,
    // Overlays (None = hidden)
    pub mega_menu: Option<MegaMenuState>,
    pub mobile_menu: Option<MobileMenuState>,
    // Persistent component states
    pub search_box: SearchBox,
    pub page: PageState,
    pub chrome: Chrome,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            nav_selected: 0,
            mega_menu: None,
            mobile_menu: None,
            search_box: SearchBox::new(),
            page: PageState::new(),
            chrome: Chrome::default(),
        }
    }

    fn close_menus(&mut self) {
        self.mega_menu = None;
        self.mobile_menu = None;
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol is harmlessly ignored by terminals that lack it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(NavigationTree::university(), &config);
    let mut tui = TuiState::new();
    let mut speaker = build_speaker(&config.speech_command, &config.speech_args);
    sync_nav_selection(&app, &mut tui);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Failed to enable terminal modes: {}", e));

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let autoplay = config
        .autoplay
        .then(|| spawn_autoplay(config.slide_interval, tx.clone()));

    if app.screen_reader {
        speaker.speak(&Utterance::new(ACTIVATION_MESSAGE));
    }

    let mut needs_redraw = true;
    let mut should_quit = false;

    while !should_quit {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Process first event + drain all pending events before next draw
        let first_event = poll_event_timeout(POLL_TIMEOUT)?;
        if first_event.is_some() {
            needs_redraw = true;
        }
        let pending = std::iter::from_fn(|| poll_event_immediate().ok().flatten());
        for event in first_event.into_iter().chain(pending) {
            let actions = route_event(&event, &app, &mut tui);
            for action in actions {
                let effect = update(&mut app, action);
                if apply_effect(effect, &mut app, &mut tui, speaker.as_mut()) {
                    should_quit = true;
                }
            }
            if should_quit {
                break;
            }
        }

        // Handle background task actions (autoplay ticks)
        while let Ok(action) = rx.try_recv() {
            debug!("Event loop received: {:?}", action);
            needs_redraw = true;
            let effect = update(&mut app, action);
            if apply_effect(effect, &mut app, &mut tui, speaker.as_mut()) {
                should_quit = true;
            }
        }
    }

    if let Some(handle) = autoplay {
        handle.abort();
    }
    speaker.cancel();
    ratatui::restore();
    Ok(())
}

/// Background ticker feeding `Action::AutoAdvance` into the loop.
fn spawn_autoplay(interval: Duration, tx: mpsc::Sender<Action>) -> tokio::task::JoinHandle<()> {
    info!("Carousel autoplay every {:?}", interval);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if tx.send(Action::AutoAdvance).is_err() {
                debug!("Autoplay stopped: receiver dropped");
                return;
            }
        }
    })
}

/// Translate one terminal event into core actions, updating presentation
/// state along the way.
fn route_event(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Vec<Action> {
    match event {
        TuiEvent::Resize => return Vec::new(),
        TuiEvent::ForceQuit => return vec![Action::Quit],
        TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
            tui.page.handle_event(event);
            return Vec::new();
        }
        _ => {}
    }

    if app.notice.is_some() {
        return vec![Action::DismissNotice];
    }

    if app.search_open {
        return match tui.search_box.handle_event(event) {
            Some(SearchEvent::Submit(query)) => vec![Action::Search(query)],
            Some(SearchEvent::Close) => vec![Action::CloseSearch],
            _ => Vec::new(),
        };
    }

    if let Some(menu) = tui.mega_menu.as_mut() {
        return match menu.handle_event(event) {
            Some(MegaMenuEvent::Navigate(href)) => {
                tui.mega_menu = None;
                vec![Action::Navigate(href)]
            }
            Some(MegaMenuEvent::Focus(label)) => vec![Action::Announce(label)],
            Some(MegaMenuEvent::PrevItem) => step_nav(app, tui, false, true),
            Some(MegaMenuEvent::NextItem) => step_nav(app, tui, true, true),
            Some(MegaMenuEvent::Dismiss) => {
                tui.mega_menu = None;
                Vec::new()
            }
            None => Vec::new(),
        };
    }

    if let Some(menu) = tui.mobile_menu.as_mut() {
        return match menu.handle_event(event, &app.tree) {
            Some(MobileMenuEvent::Navigate(href)) => {
                tui.mobile_menu = None;
                vec![Action::Navigate(href)]
            }
            Some(MobileMenuEvent::Focus(label)) => vec![Action::Announce(label)],
            Some(MobileMenuEvent::Dismiss) => {
                tui.mobile_menu = None;
                Vec::new()
            }
            None => Vec::new(),
        };
    }

    browse(event, app, tui)
}

fn browse(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Vec<Action> {
    let action = match event {
        TuiEvent::CursorLeft => return step_nav(app, tui, false, false),
        TuiEvent::CursorRight => return step_nav(app, tui, true, false),
        TuiEvent::Submit => return open_selected(app, tui),
        TuiEvent::OpenSearch | TuiEvent::InputChar('/') => Action::ToggleSearch,
        TuiEvent::Tab => Action::NextTab,
        TuiEvent::BackTab => Action::PrevTab,
        TuiEvent::InputChar('[') => Action::PrevSlide,
        TuiEvent::InputChar(']') => Action::NextSlide,
        TuiEvent::InputChar(c @ '1'..='9') => {
            Action::GoToSlide(c.to_digit(10).unwrap_or(1) as usize - 1)
        }
        TuiEvent::InputChar('b') => Action::Back,
        TuiEvent::InputChar('f') => Action::Forward,
        TuiEvent::InputChar('h') => Action::Home,
        TuiEvent::InputChar('t') => Action::ScrollToTop,
        TuiEvent::InputChar('r') => Action::ToggleScreenReader,
        TuiEvent::InputChar('a') => Action::Navigate(APPLY_ROUTE.to_string()),
        TuiEvent::InputChar('q') => Action::Quit,
        TuiEvent::InputChar('m') if tui.chrome.compact => {
            tui.mobile_menu = Some(MobileMenuState::new(&app.tree));
            return vec![Action::Announce("Menu opened".to_string())];
        }
        TuiEvent::CursorUp
        | TuiEvent::CursorDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown
        | TuiEvent::CursorHome
        | TuiEvent::CursorEnd => {
            tui.page.handle_event(event);
            return Vec::new();
        }
        _ => return Vec::new(),
    };
    vec![action]
}

/// Move the nav bar selection one entry, wrapping. With `follow_menu` the
/// flyout moves along with the selection (closing on direct links).
fn step_nav(app: &App, tui: &mut TuiState, forward: bool, follow_menu: bool) -> Vec<Action> {
    let count = app.tree.len();
    if count == 0 {
        return Vec::new();
    }
    tui.nav_selected = if forward {
        (tui.nav_selected + 1) % count
    } else {
        (tui.nav_selected + count - 1) % count
    };
    let Some(item) = app.tree.get(tui.nav_selected) else {
        return Vec::new();
    };
    if follow_menu {
        tui.mega_menu = MegaMenuState::new(tui.nav_selected, item);
    }
    let kind = if item.has_flyout() { "Menu" } else { "Link" };
    vec![Action::Announce(format!("{kind}: {}", item.name))]
}

/// Enter on the nav bar: follow a direct link or open its flyout.
fn open_selected(app: &App, tui: &mut TuiState) -> Vec<Action> {
    let Some(item) = app.tree.get(tui.nav_selected) else {
        return Vec::new();
    };
    if let Some(href) = item.href() {
        return vec![Action::Navigate(href.to_string())];
    }
    if tui.chrome.compact {
        tui.mobile_menu = Some(MobileMenuState::new(&app.tree));
        return vec![Action::Announce("Menu opened".to_string())];
    }
    tui.mega_menu = MegaMenuState::new(tui.nav_selected, item);
    tui.mega_menu
        .as_ref()
        .and_then(MegaMenuState::focus_label)
        .map(Action::Announce)
        .into_iter()
        .collect()
}

fn sync_nav_selection(app: &App, tui: &mut TuiState) {
    if let Some(index) = app.tree.item_index_of(app.route()) {
        tui.nav_selected = index;
    }
}

/// Perform the I/O an effect asks for. Returns `true` on quit.
fn apply_effect(effect: Effect, app: &mut App, tui: &mut TuiState, speaker: &mut dyn Speaker) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::Navigated => {
            tui.page.scroll_to_top();
            tui.search_box.clear();
            tui.close_menus();
            sync_nav_selection(app, tui);
            let title = app.page_title();
            let follow_up = update(app, Action::Announce(format!("Page: {title}")));
            apply_effect(follow_up, app, tui, speaker)
        }
        Effect::Speak(utterance) => {
            speaker.speak(&utterance);
            false
        }
        Effect::Silence => {
            speaker.cancel();
            false
        }
        Effect::ScrollToTop => {
            tui.page.scroll_to_top();
            false
        }
    }
}
