//! # Mobile Menu Component
//!
//! Accordion menu used on compact terminals in place of the nav bar row.
//! Each top-level entry is a row; entries with a flyout expand in place to
//! show their section titles and links. Only one entry is expanded at a time.
//!
//! Opened with `m`, dismissed with Esc or `m`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};

use crate::core::navigation::{Destination, NavigationTree};
use crate::tui::event::TuiEvent;

const PANEL_WIDTH: u16 = 44;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccordionRow {
    Item {
        index: usize,
        name: String,
        href: Option<String>,
        expanded: bool,
    },
    SectionTitle(String),
    Link {
        name: String,
        href: String,
    },
}

impl AccordionRow {
    fn selectable(&self) -> bool {
        !matches!(self, AccordionRow::SectionTitle(_))
    }

    fn label(&self) -> String {
        match self {
            AccordionRow::Item { name, href: None, .. } => format!("Menu: {name}"),
            AccordionRow::Item { name, .. } | AccordionRow::Link { name, .. } => {
                format!("Link: {name}")
            }
            AccordionRow::SectionTitle(title) => title.clone(),
        }
    }
}

/// Events emitted by the accordion.
#[derive(Debug, Clone, PartialEq)]
pub enum MobileMenuEvent {
    Navigate(String),
    Focus(String),
    Dismiss,
}

/// Persistent accordion state.
pub struct MobileMenuState {
    pub rows: Vec<AccordionRow>,
    pub expanded: Option<usize>,
    pub selected: usize,
    pub list_state: ListState,
}

impl MobileMenuState {
    pub fn new(tree: &NavigationTree) -> Self {
        let mut state = Self {
            rows: Vec::new(),
            expanded: None,
            selected: 0,
            list_state: ListState::default(),
        };
        state.rebuild(tree);
        state
    }

    fn rebuild(&mut self, tree: &NavigationTree) {
        self.rows.clear();
        for (index, item) in tree.items().iter().enumerate() {
            let expanded = self.expanded == Some(index);
            self.rows.push(AccordionRow::Item {
                index,
                name: item.name.clone(),
                href: item.href().map(str::to_string),
                expanded,
            });
            if !expanded {
                continue;
            }
            match &item.destination {
                Destination::Page(_) => {}
                Destination::Sections(sections) => {
                    for section in sections {
                        self.rows.push(AccordionRow::SectionTitle(section.title.clone()));
                        self.rows.extend(section.items.iter().map(|l| AccordionRow::Link {
                            name: l.name.clone(),
                            href: l.href.clone(),
                        }));
                    }
                }
                Destination::Links(links) => {
                    self.rows.extend(links.iter().map(|l| AccordionRow::Link {
                        name: l.name.clone(),
                        href: l.href.clone(),
                    }));
                }
            }
        }
        self.selected = self.selected.min(self.rows.len().saturating_sub(1));
        self.list_state
            .select((!self.rows.is_empty()).then_some(self.selected));
    }

    fn step(&mut self, forward: bool) -> Option<MobileMenuEvent> {
        let found = if forward {
            (self.selected + 1..self.rows.len()).find(|&i| self.rows[i].selectable())
        } else {
            (0..self.selected).rev().find(|&i| self.rows[i].selectable())
        }?;
        self.selected = found;
        self.list_state.select(Some(found));
        Some(MobileMenuEvent::Focus(self.rows[found].label()))
    }

    fn toggle(&mut self, index: usize, tree: &NavigationTree) {
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
        self.rebuild(tree);
        // Keep the toggled entry selected once rows shift
        if let Some(row) = self
            .rows
            .iter()
            .position(|r| matches!(r, AccordionRow::Item { index: i, .. } if *i == index))
        {
            self.selected = row;
            self.list_state.select(Some(row));
        }
    }

    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        tree: &NavigationTree,
    ) -> Option<MobileMenuEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::InputChar('m') => Some(MobileMenuEvent::Dismiss),
            TuiEvent::CursorUp => self.step(false),
            TuiEvent::CursorDown => self.step(true),
            TuiEvent::Submit => match self.rows.get(self.selected)?.clone() {
                AccordionRow::Item { href: Some(href), .. } | AccordionRow::Link { href, .. } => {
                    Some(MobileMenuEvent::Navigate(href))
                }
                AccordionRow::Item { index, .. } => {
                    self.toggle(index, tree);
                    None
                }
                AccordionRow::SectionTitle(_) => None,
            },
            _ => None,
        }
    }
}

/// Transient render wrapper for the accordion.
pub struct MobileMenu<'a> {
    state: &'a mut MobileMenuState,
}

impl<'a> MobileMenu<'a> {
    pub fn new(state: &'a mut MobileMenuState) -> Self {
        Self { state }
    }

    /// Draw as a panel along the right edge of `area`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = PANEL_WIDTH.min(area.width);
        let panel = Rect {
            x: area.x + area.width - width,
            y: area.y,
            width,
            height: area.height,
        };
        frame.render_widget(Clear, panel);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::LightBlue))
            .title(" Menu ")
            .title_bottom(Line::from(" Enter Open  Esc Close ").centered());

        let items: Vec<ListItem> = self
            .state
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let selected = i == self.state.selected;
                let line = match row {
                    AccordionRow::Item {
                        name,
                        href,
                        expanded,
                        ..
                    } => {
                        let marker = match (href, expanded) {
                            (Some(_), _) => "  ",
                            (None, true) => "▾ ",
                            (None, false) => "▸ ",
                        };
                        Line::from(vec![
                            Span::raw(marker),
                            Span::styled(
                                name.clone(),
                                Style::default().add_modifier(Modifier::BOLD),
                            ),
                        ])
                    }
                    AccordionRow::SectionTitle(title) => Line::from(Span::styled(
                        format!("    {}", title.to_uppercase()),
                        Style::default().fg(Color::Rgb(227, 160, 8)),
                    )),
                    AccordionRow::Link { name, .. } => Line::from(format!("      {name}")),
                };
                let style = if selected {
                    Style::default().fg(Color::White).add_modifier(Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(line).style(style)
            })
            .collect();

        frame.render_stateful_widget(
            List::new(items).block(block),
            panel,
            &mut self.state.list_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_starts_collapsed() {
        let tree = NavigationTree::university();
        let menu = MobileMenuState::new(&tree);
        assert_eq!(menu.rows.len(), tree.len());
        assert_eq!(menu.selected, 0);
    }

    #[test]
    fn test_direct_item_navigates() {
        let tree = NavigationTree::university();
        let mut menu = MobileMenuState::new(&tree);
        assert_eq!(
            menu.handle_event(&TuiEvent::Submit, &tree),
            Some(MobileMenuEvent::Navigate("/".to_string()))
        );
    }

    #[test]
    fn test_expand_skip_titles_and_navigate() {
        let tree = NavigationTree::university();
        let mut menu = MobileMenuState::new(&tree);
        assert_eq!(
            menu.handle_event(&TuiEvent::CursorDown, &tree),
            Some(MobileMenuEvent::Focus("Menu: About Us".to_string()))
        );
        assert_eq!(menu.handle_event(&TuiEvent::Submit, &tree), None);
        assert_eq!(menu.expanded, Some(1));
        assert_eq!(menu.rows[2], AccordionRow::SectionTitle("Overview".to_string()));

        // Down from the item skips the section title
        assert_eq!(
            menu.handle_event(&TuiEvent::CursorDown, &tree),
            Some(MobileMenuEvent::Focus("Link: University Profile".to_string()))
        );
        assert_eq!(
            menu.handle_event(&TuiEvent::Submit, &tree),
            Some(MobileMenuEvent::Navigate("/about".to_string()))
        );
    }

    #[test]
    fn test_only_one_expanded() {
        let tree = NavigationTree::university();
        let mut menu = MobileMenuState::new(&tree);
        menu.handle_event(&TuiEvent::CursorDown, &tree);
        menu.handle_event(&TuiEvent::Submit, &tree);
        let expanded_len = menu.rows.len();
        assert!(expanded_len > tree.len());

        // Collapse again
        menu.handle_event(&TuiEvent::Submit, &tree);
        assert_eq!(menu.expanded, None);
        assert_eq!(menu.rows.len(), tree.len());
        assert_eq!(menu.selected, 1);
    }

    #[test]
    fn test_dismiss_keys() {
        let tree = NavigationTree::university();
        let mut menu = MobileMenuState::new(&tree);
        assert_eq!(
            menu.handle_event(&TuiEvent::Escape, &tree),
            Some(MobileMenuEvent::Dismiss)
        );
        assert_eq!(
            menu.handle_event(&TuiEvent::InputChar('m'), &tree),
            Some(MobileMenuEvent::Dismiss)
        );
        assert_eq!(menu.handle_event(&TuiEvent::CursorUp, &tree), None);
    }

    #[test]
    fn test_render_panel() {
        let tree = NavigationTree::university();
        let mut state = MobileMenuState::new(&tree);
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|f| MobileMenu::new(&mut state).render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("▸ Student Life"));
        assert!(text.contains("Event Gallery"));
    }
}
