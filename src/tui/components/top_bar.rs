//! # TopBar Component
//!
//! Single line above the nav bar: the G.I. tag badge and contact details on
//! the left, the screen reader toggle on the right.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TopBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut top_bar = TopBar::new(app.screen_reader, tui.chrome.compact);
//! top_bar.render(frame, area);
//! ```
//!
//! ### Compact Layout
//!
//! On narrow terminals the badge and toggle are dropped and only the
//! office contact line remains, the way the site hides its top bar on
//! phones and shows the office phone and email in the mobile menu.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const PHONE: &str = "+91 7052 101 786";
pub const EMAIL: &str = "info@psnsu.ac.in";
/// Office contacts shown in place of the top bar on compact terminals.
pub const OFFICE_PHONE: &str = "07652-240917";
pub const OFFICE_EMAIL: &str = "ptsnuniversity@gmail.com";
const GI_TAG: &str = "G.I. Tag For Haldi";

/// Top bar showing the G.I. badge, contacts, and screen reader state.
///
/// # Props
///
/// - `screen_reader`: whether announcements are on (from App state)
/// - `compact`: narrow terminal layout (from TUI chrome)
pub struct TopBar {
    pub screen_reader: bool,
    pub compact: bool,
}

impl TopBar {
    pub fn new(screen_reader: bool, compact: bool) -> Self {
        Self {
            screen_reader,
            compact,
        }
    }

    fn contact_spans(phone: &str, email: &'static str) -> Vec<Span<'static>> {
        vec![
            Span::styled("☎ ", Style::default().fg(Color::LightBlue)),
            Span::raw(format!("Phone: {phone}")),
            Span::raw("   "),
            Span::styled("✉ ", Style::default().fg(Color::LightBlue)),
            Span::raw(email),
        ]
    }
}

impl Component for TopBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let base = Style::default().bg(Color::Rgb(0, 31, 63)).fg(Color::White);

        if self.compact {
            let line = Line::from(Self::contact_spans(OFFICE_PHONE, OFFICE_EMAIL)).centered();
            frame.render_widget(Paragraph::new(line).style(base), area);
            return;
        }

        let [left_area, right_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(28)]).areas(area);

        let mut left = vec![
            Span::styled(
                format!(" {GI_TAG} "),
                Style::default()
                    .bg(Color::Rgb(227, 160, 8))
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];
        left.extend(Self::contact_spans(PHONE, EMAIL));
        frame.render_widget(Paragraph::new(Line::from(left)).style(base), left_area);

        let (label, style) = if self.screen_reader {
            ("On ", Style::default().fg(Color::Black).bg(Color::Green))
        } else {
            ("Off", Style::default().fg(Color::LightBlue))
        };
        let right = Line::from(vec![
            Span::raw("Screen Reader (r): "),
            Span::styled(label, style.add_modifier(Modifier::BOLD)),
            Span::raw(" "),
        ])
        .right_aligned();
        frame.render_widget(Paragraph::new(right).style(base), right_area);
    }
}
