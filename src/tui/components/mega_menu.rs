//! # Mega Menu Component
//!
//! Flyout for the selected nav bar entry. Categorized flyouts list each
//! section title followed by its links; flat flyouts list links only.
//! Opened with Enter on an entry that has a flyout, dismissed with Esc.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MegaMenuState` lives in `TuiState`
//! - `MegaMenu` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::navigation::{Destination, NavItem};
use crate::tui::components::overlay::truncate_str;
use crate::tui::event::TuiEvent;

const MAX_WIDTH: u16 = 56;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Header(String),
    Link { name: String, href: String },
}

impl MenuEntry {
    fn is_link(&self) -> bool {
        matches!(self, MenuEntry::Link { .. })
    }
}

/// Persistent state for an open flyout.
pub struct MegaMenuState {
    /// Index of the nav item this flyout belongs to.
    pub item: usize,
    pub title: String,
    pub entries: Vec<MenuEntry>,
    pub selected: usize,
    pub list_state: ListState,
}

impl MegaMenuState {
    /// Build the flyout for `nav_item`. Returns `None` for direct links.
    pub fn new(item: usize, nav_item: &NavItem) -> Option<Self> {
        let entries: Vec<MenuEntry> = match &nav_item.destination {
            Destination::Page(_) => return None,
            Destination::Sections(sections) => sections
                .iter()
                .flat_map(|section| {
                    std::iter::once(MenuEntry::Header(section.title.clone())).chain(
                        section.items.iter().map(|l| MenuEntry::Link {
                            name: l.name.clone(),
                            href: l.href.clone(),
                        }),
                    )
                })
                .collect(),
            Destination::Links(links) => links
                .iter()
                .map(|l| MenuEntry::Link {
                    name: l.name.clone(),
                    href: l.href.clone(),
                })
                .collect(),
        };
        let selected = entries.iter().position(MenuEntry::is_link)?;
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Some(Self {
            item,
            title: nav_item.name.clone(),
            entries,
            selected,
            list_state,
        })
    }

    /// Label of the selected link, for announcements.
    pub fn focus_label(&self) -> Option<String> {
        match self.entries.get(self.selected) {
            Some(MenuEntry::Link { name, .. }) => Some(format!("Link: {name}")),
            _ => None,
        }
    }

    fn step(&mut self, forward: bool) -> bool {
        let found = if forward {
            (self.selected + 1..self.entries.len()).find(|&i| self.entries[i].is_link())
        } else {
            (0..self.selected).rev().find(|&i| self.entries[i].is_link())
        };
        match found {
            Some(i) => {
                self.selected = i;
                self.list_state.select(Some(i));
                true
            }
            None => false,
        }
    }

    /// Handle a key event, returning a MegaMenuEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<MegaMenuEvent> {
        match event {
            TuiEvent::Escape => Some(MegaMenuEvent::Dismiss),
            TuiEvent::CursorUp => self.step(false).then(|| self.focused()),
            TuiEvent::CursorDown => self.step(true).then(|| self.focused()),
            TuiEvent::CursorLeft => Some(MegaMenuEvent::PrevItem),
            TuiEvent::CursorRight => Some(MegaMenuEvent::NextItem),
            TuiEvent::Submit => match self.entries.get(self.selected) {
                Some(MenuEntry::Link { href, .. }) => Some(MegaMenuEvent::Navigate(href.clone())),
                _ => None,
            },
            _ => None,
        }
    }

    fn focused(&self) -> MegaMenuEvent {
        MegaMenuEvent::Focus(self.focus_label().unwrap_or_default())
    }
}

/// Events emitted by the mega menu.
#[derive(Debug, Clone, PartialEq)]
pub enum MegaMenuEvent {
    Navigate(String),
    /// Selection moved; carries the label to announce.
    Focus(String),
    PrevItem,
    NextItem,
    Dismiss,
}

/// Transient render wrapper for the flyout.
pub struct MegaMenu<'a> {
    state: &'a mut MegaMenuState,
}

impl<'a> MegaMenu<'a> {
    pub fn new(state: &'a mut MegaMenuState) -> Self {
        Self { state }
    }

    /// Height needed for the entries plus borders.
    pub fn height(&self) -> u16 {
        self.state.entries.len() as u16 + 2
    }

    /// Draw anchored at the top-left of `area` (the region under the nav bar).
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = MAX_WIDTH.min(area.width);
        let height = self.height().min(area.height);
        let overlay = Rect {
            x: area.x + area.width.saturating_sub(width).min(2),
            y: area.y,
            width,
            height,
        };

        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::LightBlue))
            .title(format!(" {} ", self.state.title))
            .title_bottom(Line::from(" Enter Open  ←/→ Menu  Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let text_width = width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .state
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| match entry {
                MenuEntry::Header(title) => ListItem::new(Line::from(Span::styled(
                    truncate_str(&title.to_uppercase(), text_width),
                    Style::default()
                        .fg(Color::Rgb(227, 160, 8))
                        .add_modifier(Modifier::BOLD),
                ))),
                MenuEntry::Link { name, .. } => {
                    let style = if i == self.state.selected {
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                    } else {
                        Style::default().fg(Color::Gray)
                    };
                    ListItem::new(Line::from(Span::styled(
                        truncate_str(&format!("  {name}"), text_width),
                        style,
                    )))
                }
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}
