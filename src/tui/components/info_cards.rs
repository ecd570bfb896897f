//! Notification cards under the hero: three columns on wide terminals,
//! stacked otherwise. Entries that lead somewhere show their route.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::announcements::{CardKind, InfoCard};
use crate::tui::component::PageSection;

const HEADING: &str = "University Notifications";
const TAGLINE: &str = "Latest updates, quick links and highlights from the university";
const COLUMN_MIN_WIDTH: u16 = 90;
/// Heading, tagline, spacer.
const HEADER_ROWS: u16 = 3;

pub struct InfoCards {
    pub cards: &'static [InfoCard],
}

impl InfoCards {
    pub fn new(cards: &'static [InfoCard]) -> Self {
        Self { cards }
    }

    fn columns(width: u16) -> bool {
        width >= COLUMN_MIN_WIDTH
    }

    fn card_width(&self, width: u16) -> u16 {
        if Self::columns(width) && !self.cards.is_empty() {
            width / self.cards.len() as u16
        } else {
            width
        }
    }

    fn entry_text(card: &InfoCard, index: usize) -> String {
        let entry = &card.entries[index];
        match entry.link {
            Some(href) => format!("• {} → {}", entry.text, href),
            None => format!("• {}", entry.text),
        }
    }

    fn card_height(card: &InfoCard, width: u16) -> u16 {
        // Borders plus horizontal padding
        let inner = width.saturating_sub(4).max(1) as usize;
        let body: usize = (0..card.entries.len())
            .map(|i| textwrap::wrap(&Self::entry_text(card, i), inner).len())
            .sum();
        body as u16 + 2
    }

    fn render_card(card: &InfoCard, area: Rect, buf: &mut Buffer) {
        let accent = match card.kind {
            CardKind::Notifications => Color::LightRed,
            CardKind::QuickLinks => Color::LightBlue,
            CardKind::Highlights => Color::Rgb(227, 160, 8),
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent))
            .title(Line::from(vec![
                Span::raw(format!(" {} ", card.icon())),
                Span::styled(
                    format!("{} ", card.title),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ]))
            .padding(Padding::horizontal(1));

        let lines: Vec<Line> = (0..card.entries.len())
            .map(|i| {
                let style = if card.entries[i].link.is_some() {
                    Style::default().fg(Color::LightBlue)
                } else {
                    Style::default().fg(Color::Gray)
                };
                Line::from(Span::styled(Self::entry_text(card, i), style))
            })
            .collect();
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

impl PageSection for InfoCards {
    fn height(&self, width: u16) -> u16 {
        let card_width = self.card_width(width);
        let heights = self.cards.iter().map(|c| Self::card_height(c, card_width));
        let body = if Self::columns(width) {
            heights.max().unwrap_or(0)
        } else {
            heights.sum()
        };
        HEADER_ROWS + body
    }

    fn render_section(&self, area: Rect, buf: &mut Buffer) {
        let [heading, tagline, _, body] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);
        Line::from(Span::styled(
            HEADING,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .centered()
        .render(heading, buf);
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::DarkGray)))
            .centered()
            .render(tagline, buf);

        if Self::columns(area.width) {
            let card_areas =
                Layout::horizontal(vec![Constraint::Fill(1); self.cards.len()]).split(body);
            for (card, card_area) in self.cards.iter().zip(card_areas.iter()) {
                Self::render_card(card, *card_area, buf);
            }
        } else {
            let mut y = body.y;
            for card in self.cards {
                let height = Self::card_height(card, body.width).min(body.bottom().saturating_sub(y));
                Self::render_card(card, Rect { y, height, ..body }, buf);
                y += height;
            }
        }
    }
}
