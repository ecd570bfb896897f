//! # Page Component
//!
//! Scrollable body of the current route. Stacks `PageSection`s top to bottom
//! into a `ScrollView`; the footer is always the last section.
//!
//! ## Architecture
//!
//! `Page` is a transient component (created each frame) that wraps
//! `&'a mut PageState` (persistent scroll state) and the sections to draw.
//! Rendering records the content and footer geometry in the state so the
//! next frame's `ViewportMetrics` can be measured without re-laying out.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect, Size};
use ratatui::widgets::Widget;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::viewport::ViewportMetrics;
use crate::tui::component::{Component, EventHandler, PageSection};
use crate::tui::components::footer::Footer;
use crate::tui::event::TuiEvent;

/// Scroll and layout state for the page. Persisted in `TuiState`.
#[derive(Default)]
pub struct PageState {
    pub scroll_state: ScrollViewState,
    pub viewport: Rect,
    pub content_height: u16,
    pub footer_top: u16,
    pub footer_height: u16,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_y(&self) -> u16 {
        self.scroll_state.offset().y
    }

    fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport.height)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.max_scroll();
        if self.scroll_y() > max_y {
            self.scroll_state.set_offset(Position { x: 0, y: max_y });
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_state.scroll_to_top();
    }

    /// Metrics as of the last render, with `width` being the full terminal width.
    pub fn metrics(&self, width: u16) -> ViewportMetrics {
        ViewportMetrics {
            width,
            height: self.viewport.height,
            scroll_y: self.scroll_y(),
            content_height: self.content_height,
            footer_top: self.footer_top,
            footer_height: self.footer_height,
        }
    }
}

impl EventHandler for PageState {
    /// `true` when the scroll position changed.
    type Event = bool;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<bool> {
        let before = self.scroll_y();
        match event {
            TuiEvent::ScrollUp | TuiEvent::CursorUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown | TuiEvent::CursorDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::CursorHome => self.scroll_state.scroll_to_top(),
            TuiEvent::CursorEnd => {
                let y = self.max_scroll();
                self.scroll_state.set_offset(Position { x: 0, y });
            }
            _ => return None,
        }
        self.clamp_scroll();
        Some(self.scroll_y() != before)
    }
}

struct SectionWidget<'s>(&'s dyn PageSection);

impl Widget for SectionWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.0.render_section(area, buf);
    }
}

/// Scrollable page body. Created fresh each frame.
pub struct Page<'a> {
    pub state: &'a mut PageState,
    pub sections: Vec<Box<dyn PageSection + 'a>>,
    pub footer: Footer,
}

impl<'a> Page<'a> {
    pub fn new(state: &'a mut PageState, sections: Vec<Box<dyn PageSection + 'a>>) -> Self {
        Self {
            state,
            sections,
            footer: Footer::new(),
        }
    }
}

impl Component for Page<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // -1 for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let heights: Vec<u16> = self
            .sections
            .iter()
            .map(|s| s.height(content_width))
            .collect();
        let body_height: u16 = heights.iter().sum();
        let footer_height = self.footer.height(content_width);

        self.state.viewport = area;
        self.state.content_height = body_height + footer_height;
        self.state.footer_top = body_height;
        self.state.footer_height = footer_height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, self.state.content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y = 0;
        for (section, height) in self.sections.iter().zip(heights) {
            let rect = Rect::new(0, y, content_width, height);
            scroll_view.render_widget(SectionWidget(section.as_ref()), rect);
            y += height;
        }
        scroll_view.render_widget(
            SectionWidget(&self.footer),
            Rect::new(0, y, content_width, footer_height),
        );

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
