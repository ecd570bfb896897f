//! # NavBar Component
//!
//! The sticky header: university name in English and Hindi above a row of
//! top-level menu entries. Entries with a flyout carry a `▾` marker.
//!
//! Wide terminals show the menu row, windowed horizontally so the selected
//! entry is always visible. Compact terminals replace the row with a menu
//! button that opens the accordion (`m`).
//!
//! Once the page is scrolled the Hindi line is dropped and the bottom border
//! turns thick, the terminal version of the site's shrinking shadowed header.

use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::navigation::{NavItem, NavigationTree};
use crate::tui::component::Component;

pub const ENGLISH_NAME: &str = "Pandit Shambhunath Shukla Vishwavidyalaya, Shahdol (M.P.)";
pub const HINDI_NAME: &str = "पंडित शंभूनाथ शुक्ल विश्वविद्यालय, शहडोल (म.प्र.)";
const MENU_BUTTON: &str = " ≡ Menu (m) ";

/// Header with the university name and the top-level menu.
///
/// # Props
///
/// - `tree`: the navigation tree (from App state)
/// - `selected`: keyboard-selected entry (from TUI state)
/// - `active`: entry owning the current route, if any
/// - `scrolled` / `compact`: chrome flags (from TUI state)
pub struct NavBar<'a> {
    pub tree: &'a NavigationTree,
    pub selected: usize,
    pub active: Option<usize>,
    pub scrolled: bool,
    pub compact: bool,
}

impl<'a> NavBar<'a> {
    pub fn new(tree: &'a NavigationTree, selected: usize, active: Option<usize>) -> Self {
        Self {
            tree,
            selected,
            active,
            scrolled: false,
            compact: false,
        }
    }

    pub fn scrolled(mut self, scrolled: bool) -> Self {
        self.scrolled = scrolled;
        self
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Rows needed: name lines, menu row, bottom border.
    pub fn height(scrolled: bool) -> u16 {
        if scrolled { 3 } else { 4 }
    }

    fn menu_line(&self, width: u16) -> Line<'static> {
        if self.compact {
            return Line::from(Span::styled(
                MENU_BUTTON,
                Style::default().fg(Color::Black).bg(Color::LightBlue),
            ))
            .right_aligned();
        }

        let labels: Vec<String> = self.tree.items().iter().map(item_label).collect();
        let widths: Vec<usize> = labels.iter().map(|l| l.width()).collect();
        let window = visible_window(&widths, self.selected, width as usize);

        let mut spans = Vec::new();
        if window.start > 0 {
            spans.push(Span::styled("‹", Style::default().fg(Color::DarkGray)));
        }
        for i in window.clone() {
            let style = if i == self.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD)
            } else if Some(i) == self.active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(labels[i].clone(), style));
        }
        if window.end < labels.len() {
            spans.push(Span::styled("›", Style::default().fg(Color::DarkGray)));
        }
        Line::from(spans)
    }
}

fn item_label(item: &NavItem) -> String {
    if item.has_flyout() {
        format!(" {} ▾ ", item.name)
    } else {
        format!(" {} ", item.name)
    }
}

/// The contiguous run of entries to draw so that `selected` fits in `avail`
/// columns. Two columns are held back for the overflow markers.
pub fn visible_window(widths: &[usize], selected: usize, avail: usize) -> Range<usize> {
    if widths.is_empty() {
        return 0..0;
    }
    let selected = selected.min(widths.len() - 1);
    let total: usize = widths.iter().sum();
    if total <= avail {
        return 0..widths.len();
    }
    let avail = avail.saturating_sub(2);

    let mut start = 0;
    while start < selected && widths[start..=selected].iter().sum::<usize>() > avail {
        start += 1;
    }
    let mut end = selected + 1;
    let mut used: usize = widths[start..end].iter().sum();
    while end < widths.len() && used + widths[end] <= avail {
        used += widths[end];
        end += 1;
    }
    start..end
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_type = if self.scrolled {
            BorderType::Thick
        } else {
            BorderType::Plain
        };
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(border_type)
            .border_style(Style::default().fg(Color::LightBlue));

        let mut lines = vec![Line::from(vec![
            Span::raw("🎓 "),
            Span::styled(
                ENGLISH_NAME,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ])];
        if !self.scrolled {
            lines.push(Line::from(Span::styled(
                format!("   {HINDI_NAME}"),
                Style::default().fg(Color::Rgb(227, 160, 8)),
            )));
        }
        lines.push(self.menu_line(area.width));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(nav: &mut NavBar<'_>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| nav.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_visible_window_fits_everything() {
        assert_eq!(visible_window(&[5, 5, 5], 1, 20), 0..3);
        assert_eq!(visible_window(&[], 0, 20), 0..0);
    }

    #[test]
    fn test_visible_window_follows_selection() {
        let widths = [10, 10, 10, 10, 10];
        assert_eq!(visible_window(&widths, 0, 32), 0..3);
        let w = visible_window(&widths, 4, 32);
        assert!(w.contains(&4));
        assert_eq!(w, 2..5);
    }

    #[test]
    fn test_visible_window_oversized_entry() {
        assert_eq!(visible_window(&[50, 5], 0, 20), 0..1);
    }

    #[test]
    fn test_nav_bar_wide_shows_menu_and_markers() {
        let tree = NavigationTree::university();
        let mut nav = NavBar::new(&tree, 0, Some(0));
        let text = render_text(&mut nav, 200, NavBar::height(false));
        assert!(text.contains("Pandit Shambhunath Shukla Vishwavidyalaya"));
        assert!(text.contains(" Home "));
        assert!(text.contains("About Us ▾"));
        assert!(text.contains(" Online Services "));
    }

    #[test]
    fn test_nav_bar_compact_shows_menu_button() {
        let tree = NavigationTree::university();
        let mut nav = NavBar::new(&tree, 0, None).compact(true);
        let text = render_text(&mut nav, 80, NavBar::height(false));
        assert!(text.contains("≡ Menu (m)"));
        assert!(!text.contains("About Us"));
    }

    #[test]
    fn test_menu_button_is_single_width() {
        // Wide glyphs leave a padding cell behind them in the buffer
        assert_eq!(MENU_BUTTON.width(), MENU_BUTTON.chars().count());
    }

    #[test]
    fn test_nav_bar_scrolled_drops_hindi_line() {
        let tree = NavigationTree::university();
        let mut nav = NavBar::new(&tree, 0, None).scrolled(true);
        let text = render_text(&mut nav, 200, NavBar::height(true));
        assert!(text.contains("Home"));
        assert!(text.contains("━"));
        assert_eq!(NavBar::height(true), 3);
    }
}
