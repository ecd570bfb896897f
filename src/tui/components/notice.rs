//! Modal notice, e.g. the "no results" message after a failed search.
//! Any key dismisses it; the parent routes input accordingly.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::components::overlay::centered_fixed;

const MAX_WIDTH: u16 = 60;

pub struct Notice<'a> {
    pub message: &'a str,
}

impl<'a> Notice<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Component for Notice<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = MAX_WIDTH.min(area.width);
        let text_width = width.saturating_sub(4).max(1) as usize;
        let lines = textwrap::wrap(self.message, text_width).len() as u16;
        let overlay = centered_fixed(width, lines + 4, area);

        frame.render_widget(Clear, overlay);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Notice ")
            .title_bottom(Line::from(" Press any key ").centered())
            .padding(Padding::uniform(1));
        let paragraph = Paragraph::new(self.message)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search::no_match_message;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_notice_renders_wrapped_message() {
        let message = no_match_message("xyz");
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|f| Notice::new(&message).render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Notice"));
        assert!(text.contains("No results found for \"xyz\"."));
        assert!(text.contains("Press any key"));
    }
}
