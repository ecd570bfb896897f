//! # Academics Section
//!
//! Programme browser on the home page: a tab row (Tab / Shift-Tab), a grid
//! of programme cards for the active level, and the admission call to action.
//!
//! ```text
//! ┌ Academic Programs ───────────────────────────┐
//! │  Undergraduate │ Postgraduate │ Doctoral ... │  tabs
//! │  ╭ B.A. ─────╮  ╭ B.Sc. ────╮                │  cards, 2 per row
//! │  ╰───────────╯  ╰───────────╯                │
//! │        [ Start Your Application (a) ]        │  CTA
//! └──────────────────────────────────────────────┘
//! ```

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Tabs, Widget, Wrap};

use crate::core::academics::{ADMISSION_SESSION, Program, ProgramLevel};
use crate::tui::component::PageSection;

const TITLE: &str = "Our Academic Programs & Courses";
const INTRO: &str =
    "Explore our comprehensive range of Diploma, Undergraduate, Postgraduate, and Doctoral programs.";
const CTA: &str = "Start Your Application (a)";
const TWO_COLUMN_WIDTH: u16 = 80;
/// Title, intro, spacer, tabs, spacer.
const HEADER_ROWS: u16 = 5;
/// Spacer, button, session line.
const CTA_ROWS: u16 = 3;

pub struct AcademicsSection {
    pub active: ProgramLevel,
}

impl AcademicsSection {
    pub fn new(active: ProgramLevel) -> Self {
        Self { active }
    }

    fn columns(width: u16) -> usize {
        if width >= TWO_COLUMN_WIDTH { 2 } else { 1 }
    }

    fn card_height(program: &Program, width: u16) -> u16 {
        let inner = width.saturating_sub(4).max(1) as usize;
        // Borders, duration row, wrapped description
        textwrap::wrap(program.description, inner).len() as u16 + 3
    }

    /// Card rows as (programmes in the row, row height).
    fn rows(&self, width: u16) -> Vec<(&'static [Program], u16)> {
        let columns = Self::columns(width);
        let card_width = width / columns as u16;
        self.active
            .programs()
            .chunks(columns)
            .map(|row| {
                let height = row
                    .iter()
                    .map(|p| Self::card_height(p, card_width))
                    .max()
                    .unwrap_or(0);
                (row, height)
            })
            .collect()
    }

    fn render_card(program: &Program, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::LightBlue))
            .title(Span::styled(
                format!(" {} ", program.title),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))
            .padding(Padding::horizontal(1));
        let lines = vec![
            Line::from(Span::styled(
                format!("⏱ {}", program.duration),
                Style::default().fg(Color::Rgb(227, 160, 8)),
            )),
            Line::from(Span::styled(program.description, Style::default().fg(Color::Gray))),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

impl PageSection for AcademicsSection {
    fn height(&self, width: u16) -> u16 {
        let intro = textwrap::wrap(INTRO, width.max(1) as usize).len() as u16;
        let cards: u16 = self.rows(width).iter().map(|(_, h)| h).sum();
        HEADER_ROWS - 1 + intro + cards + CTA_ROWS
    }

    fn render_section(&self, area: Rect, buf: &mut Buffer) {
        let intro_rows = textwrap::wrap(INTRO, area.width.max(1) as usize).len() as u16;
        let [title, intro, _, tabs, _, body] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(intro_rows),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::Rgb(227, 160, 8))
                .add_modifier(Modifier::BOLD),
        ))
        .centered()
        .render(title, buf);
        Paragraph::new(INTRO)
            .wrap(Wrap { trim: true })
            .centered()
            .style(Style::default().fg(Color::Gray))
            .render(intro, buf);

        let labels: Vec<&str> = ProgramLevel::TABS.iter().map(ProgramLevel::label).collect();
        let tab_width: u16 = labels.iter().map(|l| l.len() as u16 + 3).sum();
        let tab_area = Rect {
            x: tabs.x + tabs.width.saturating_sub(tab_width) / 2,
            width: tab_width.min(tabs.width),
            ..tabs
        };
        Tabs::new(labels)
            .select(self.active.tab_index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Rgb(227, 160, 8))
                    .add_modifier(Modifier::BOLD),
            )
            .render(tab_area, buf);

        let columns = Self::columns(area.width);
        let mut y = body.y;
        for (row, height) in self.rows(area.width) {
            if y >= body.bottom() {
                return;
            }
            let row_area = Rect {
                y,
                height: height.min(body.bottom() - y),
                ..body
            };
            let cells = Layout::horizontal(vec![Constraint::Fill(1); columns]).split(row_area);
            for (program, cell) in row.iter().zip(cells.iter()) {
                Self::render_card(program, *cell, buf);
            }
            y += height;
        }

        if y + CTA_ROWS <= body.bottom() {
            let button = Line::from(Span::styled(
                format!(" {CTA} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Rgb(227, 160, 8))
                    .add_modifier(Modifier::BOLD),
            ))
            .centered();
            button.render(Rect { y: y + 1, height: 1, ..body }, buf);
            Line::from(Span::styled(
                format!("ADMISSION OPEN FOR {ADMISSION_SESSION}"),
                Style::default().fg(Color::DarkGray),
            ))
            .centered()
            .render(Rect { y: y + 2, height: 1, ..body }, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_text(section: &AcademicsSection, width: u16) -> String {
        let area = Rect::new(0, 0, width, section.height(width));
        let mut buf = Buffer::empty(area);
        section.render_section(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_active_tab_programmes_rendered() {
        let text = render_text(&AcademicsSection::new(ProgramLevel::Ug), 120);
        assert!(text.contains("Undergraduate"));
        assert!(text.contains("Bachelor of Science (B.Sc.)"));
        assert!(!text.contains("M.B.A."));
        assert!(text.contains("Start Your Application (a)"));
        assert!(text.contains("ADMISSION OPEN FOR 2025-26"));
    }

    #[test]
    fn test_switching_level_changes_cards() {
        let text = render_text(&AcademicsSection::new(ProgramLevel::Pg), 120);
        assert!(text.contains("M.B.A."));
        assert!(!text.contains("B.C.A."));
    }

    #[test]
    fn test_single_column_is_taller() {
        let section = AcademicsSection::new(ProgramLevel::Ug);
        assert!(section.height(60) > section.height(120));
    }
}
