//! Hero banner: the current carousel slide with slide indicators.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::carousel::Carousel;
use crate::tui::component::PageSection;

const ESTABLISHED: &str = "EST. 2016";
/// Border + padding on each side.
const HORIZONTAL_OVERHEAD: u16 = 6;
/// Borders, label, two spacer rows, indicator row.
const FIXED_ROWS: u16 = 6;

pub struct Hero<'a> {
    pub carousel: &'a Carousel,
    pub autoplay: bool,
}

impl<'a> Hero<'a> {
    pub fn new(carousel: &'a Carousel, autoplay: bool) -> Self {
        Self { carousel, autoplay }
    }

    fn wrapped_rows(text: &str, width: u16) -> u16 {
        let inner = width.saturating_sub(HORIZONTAL_OVERHEAD).max(1) as usize;
        textwrap::wrap(text, inner).len() as u16
    }

    fn indicators(&self) -> Line<'static> {
        let mut spans: Vec<Span> = (0..self.carousel.len())
            .map(|i| {
                if i == self.carousel.current() {
                    Span::styled("● ", Style::default().fg(Color::Rgb(227, 160, 8)))
                } else {
                    Span::styled("○ ", Style::default().fg(Color::DarkGray))
                }
            })
            .collect();
        let hint = if self.autoplay { "  [ ] Slides  1-9 Jump" } else { "  [ ] Slides  1-9 Jump  (paused)" };
        spans.push(Span::styled(hint, Style::default().fg(Color::DarkGray)));
        Line::from(spans).centered()
    }
}

impl PageSection for Hero<'_> {
    fn height(&self, width: u16) -> u16 {
        let text = self.carousel.slide().map_or(2, |s| {
            Self::wrapped_rows(s.title, width) + Self::wrapped_rows(s.subtitle, width)
        });
        FIXED_ROWS + text
    }

    fn render_section(&self, area: Rect, buf: &mut Buffer) {
        let Some(slide) = self.carousel.slide() else {
            return;
        };
        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Rgb(227, 160, 8)))
            .title(format!(" {}/{} ", self.carousel.current() + 1, self.carousel.len()))
            .title_bottom(Line::from(format!(" {} ", slide.image)).right_aligned())
            .padding(Padding::horizontal(2));

        let lines = vec![
            Line::from(Span::styled(
                ESTABLISHED,
                Style::default().fg(Color::Rgb(227, 160, 8)).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                slide.title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(slide.subtitle, Style::default().fg(Color::Gray))),
        ];
        let inner = block.inner(area);
        block.render(area, buf);

        let text_height = inner.height.saturating_sub(2);
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .render(Rect { height: text_height, ..inner }, buf);

        if inner.height >= 1 {
            let row = Rect {
                y: inner.y + inner.height - 1,
                height: 1,
                ..inner
            };
            self.indicators().render(row, buf);
        }
    }
}
