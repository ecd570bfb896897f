//! # SearchBox Component
//!
//! Single-line query field shown under the nav bar while search is open.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Emit the query on Enter and a close request on Esc
//!
//! ## State Management
//!
//! The buffer is internal state. It is *not* cleared on submit: when a query
//! has no match the field keeps the text so it can be corrected. The parent
//! calls `clear()` after a successful navigation.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const PLACEHOLDER: &str = "Search...";
/// Border + padding on each side.
const HORIZONTAL_OVERHEAD: u16 = 4;
pub const HEIGHT: u16 = 3;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Enter pressed; carries the raw query.
    Submit(String),
    /// Esc pressed.
    Close,
    ContentChanged,
}

/// Search input with horizontal scrolling.
///
/// # State
///
/// - `buffer`: current query text
/// - `cursor`: byte offset into `buffer`
/// - `scroll`: first visible display column
#[derive(Debug, Default)]
pub struct SearchBox {
    pub buffer: String,
    cursor: usize,
    scroll: usize,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.scroll = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].width()
    }

    /// Keep the cursor column inside a viewport of `inner` columns.
    fn update_scroll(&mut self, inner: usize) {
        if inner == 0 {
            self.scroll = 0;
            return;
        }
        let col = self.cursor_column();
        if col < self.scroll {
            self.scroll = col;
        } else if col >= self.scroll + inner {
            self.scroll = col + 1 - inner;
        }
    }

    fn visible_text(&self, inner: usize) -> String {
        let mut out = String::new();
        let mut col = 0;
        for c in self.buffer.chars() {
            let w = c.width().unwrap_or(0);
            if col >= self.scroll && col + w <= self.scroll + inner {
                out.push(c);
            }
            col += w;
        }
        out
    }

    fn insert(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner = area.width.saturating_sub(HORIZONTAL_OVERHEAD) as usize;
        self.update_scroll(inner);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::LightBlue))
            .title(" Search ")
            .title_bottom(Line::from(" Enter Go  Esc Close ").right_aligned())
            .padding(Padding::horizontal(1));

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.visible_text(inner)).style(Style::default().fg(Color::White))
        };
        frame.render_widget(paragraph.block(block), area);

        if area.height >= HEIGHT {
            let col = (self.cursor_column() - self.scroll) as u16;
            frame.set_cursor_position((area.x + 2 + col, area.y + 1));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.insert(c.encode_utf8(&mut [0; 4]));
                Some(SearchEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                let line: String = text.chars().filter(|c| !c.is_control()).collect();
                if line.is_empty() {
                    return None;
                }
                self.insert(&line);
                Some(SearchEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                SearchEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                SearchEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                SearchEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                SearchEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                SearchEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                SearchEvent::ContentChanged
            }),
            TuiEvent::Submit => Some(SearchEvent::Submit(self.buffer.clone())),
            TuiEvent::Escape => Some(SearchEvent::Close),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn typed(text: &str) -> SearchBox {
        let mut search = SearchBox::new();
        for c in text.chars() {
            search.handle_event(&TuiEvent::InputChar(c));
        }
        search
    }

    fn render_text(search: &mut SearchBox, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, HEIGHT)).unwrap();
        terminal.draw(|f| search.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut search = typed("lib");
        assert_eq!(search.buffer, "lib");
        assert_eq!(
            search.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::ContentChanged)
        );
        assert_eq!(search.buffer, "li");
        assert_eq!(search.cursor(), 2);
    }

    #[test]
    fn test_submit_keeps_buffer() {
        let mut search = typed("xyz");
        assert_eq!(
            search.handle_event(&TuiEvent::Submit),
            Some(SearchEvent::Submit("xyz".to_string()))
        );
        assert_eq!(search.buffer, "xyz");
    }

    #[test]
    fn test_empty_submit_still_emits() {
        let mut search = SearchBox::new();
        assert_eq!(
            search.handle_event(&TuiEvent::Submit),
            Some(SearchEvent::Submit(String::new()))
        );
    }

    #[test]
    fn test_escape_closes() {
        let mut search = typed("a");
        assert_eq!(search.handle_event(&TuiEvent::Escape), Some(SearchEvent::Close));
    }

    #[test]
    fn test_cursor_editing_multibyte() {
        let mut search = typed("छात्रावास");
        search.handle_event(&TuiEvent::CursorHome);
        assert_eq!(search.cursor(), 0);
        search.handle_event(&TuiEvent::CursorRight);
        search.handle_event(&TuiEvent::Backspace);
        assert!(!search.buffer.starts_with('छ'));
        assert!(search.buffer.is_char_boundary(search.cursor()));
        search.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(search.cursor(), search.buffer.len());
        assert_eq!(search.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut search = SearchBox::new();
        search.handle_event(&TuiEvent::Paste("Hostel\n".to_string()));
        assert_eq!(search.buffer, "Hostel");
        assert_eq!(search.handle_event(&TuiEvent::Paste("\n".to_string())), None);
    }

    #[test]
    fn test_clear_resets() {
        let mut search = typed("rti");
        search.clear();
        assert!(search.buffer.is_empty());
        assert_eq!(search.cursor(), 0);
    }

    #[test]
    fn test_render_placeholder_and_text() {
        let mut search = SearchBox::new();
        assert!(render_text(&mut search, 40).contains(PLACEHOLDER));

        let mut search = typed("Library");
        let text = render_text(&mut search, 40);
        assert!(text.contains("Library"));
        assert!(!text.contains(PLACEHOLDER));
    }

    #[test]
    fn test_long_query_scrolls_to_cursor() {
        let mut search = typed("abcdefghijklmnopqrstuvwxyz");
        let text = render_text(&mut search, 14);
        assert!(text.contains("xyz"));
        assert!(!text.contains("abc"));
    }
}
