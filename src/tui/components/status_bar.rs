//! # StatusBar Component
//!
//! Bottom line showing the current route, the last status message, and key
//! hints.
//!
//! ## Conditional Formatting
//!
//! The text changes based on state:
//!
//! 1. **Footer in view**: `" /library | Opened Library | ↑ Top (t)"`
//! 2. **Status message**: `" /library | Opened Library"`
//! 3. **Default**: `" /library"`
//!
//! Key hints are right-aligned and dropped first when the terminal is narrow.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const HINTS: &str = "←/→ Menu  Enter Open  / Search  b Back  q Quit ";
const GO_TO_TOP: &str = "↑ Top (t)";

/// Bottom status line.
///
/// # Props
///
/// - `route`: current route (from App state)
/// - `status_message`: last status text (from App state)
/// - `go_to_top_visible`: footer is in view (from TUI chrome)
pub struct StatusBar<'a> {
    pub route: &'a str,
    pub status_message: &'a str,
    pub go_to_top_visible: bool,
}

impl<'a> StatusBar<'a> {
    pub fn new(route: &'a str, status_message: &'a str, go_to_top_visible: bool) -> Self {
        Self {
            route,
            status_message,
            go_to_top_visible,
        }
    }
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let base = Style::default().bg(Color::Rgb(0, 31, 63)).fg(Color::Gray);

        let mut spans = vec![Span::styled(
            format!(" {}", self.route),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(self.status_message.to_string()));
        }
        if self.go_to_top_visible {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                GO_TO_TOP,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ));
        }
        let left = Line::from(spans);

        let hint_width = HINTS.chars().count() as u16;
        let show_hints = area.width >= left.width() as u16 + hint_width + 2;
        let [left_area, right_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(if show_hints { hint_width } else { 0 }),
        ])
        .areas(area);

        frame.render_widget(Paragraph::new(left).style(base), left_area);
        if show_hints {
            let hints = Line::from(Span::styled(HINTS, Style::default().fg(Color::DarkGray)));
            frame.render_widget(Paragraph::new(hints.right_aligned()).style(base), right_area);
        }
    }
}
