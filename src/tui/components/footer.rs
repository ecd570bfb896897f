//! Page footer. Its position in the page feeds the go-to-top hint.

use chrono::{Datelike, Local};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::tui::component::PageSection;
use crate::tui::components::nav_bar::ENGLISH_NAME;
use crate::tui::components::top_bar::{OFFICE_EMAIL, OFFICE_PHONE};

const QUICK_LINKS: &[(&str, &str)] = &[
    ("Notices/Circulars", "/notices"),
    ("Recruitment", "/recruitment"),
    ("RTI", "/rti"),
    ("Online Services", "/online-services"),
];
const COLUMN_ROWS: u16 = 5;

pub struct Footer {
    pub year: i32,
}

impl Footer {
    pub fn new() -> Self {
        Self {
            year: Local::now().year(),
        }
    }

    fn heading(text: &str) -> Line<'_> {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::Rgb(227, 160, 8))
                .add_modifier(Modifier::BOLD),
        ))
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSection for Footer {
    fn height(&self, _width: u16) -> u16 {
        // Top border, columns, copyright
        COLUMN_ROWS + 2
    }

    fn render_section(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(Color::Rgb(0, 31, 63)));
        let inner = block.inner(area);
        block.render(area, buf);

        let [columns, copyright] =
            Layout::vertical([Constraint::Length(COLUMN_ROWS), Constraint::Length(1)]).areas(inner);
        let [contact, links, help] = Layout::horizontal([Constraint::Fill(1); 3]).areas(columns);

        let muted = Style::default().fg(Color::Gray);
        Paragraph::new(vec![
            Self::heading("Contact"),
            Line::from(Span::styled(format!("☎ {OFFICE_PHONE}"), muted)),
            Line::from(Span::styled(format!("✉ {OFFICE_EMAIL}"), muted)),
            Line::from(Span::styled("Shahdol (M.P.)", muted)),
        ])
        .render(contact, buf);

        let mut link_lines = vec![Self::heading("Quick Links")];
        link_lines.extend(
            QUICK_LINKS
                .iter()
                .map(|(name, href)| Line::from(Span::styled(format!("{name}  {href}"), muted))),
        );
        Paragraph::new(link_lines).render(links, buf);

        Paragraph::new(vec![
            Self::heading("Accessibility"),
            Line::from(Span::styled("r  Screen reader", muted)),
            Line::from(Span::styled("/  Search", muted)),
            Line::from(Span::styled("t  Back to top", muted)),
        ])
        .render(help, buf);

        Line::from(Span::styled(
            format!("© {} {ENGLISH_NAME}. All rights reserved.", self.year),
            Style::default().fg(Color::DarkGray),
        ))
        .centered()
        .render(copyright, buf);
    }
}
