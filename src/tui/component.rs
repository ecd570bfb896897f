use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Anything drawn straight into the frame: bars, overlays, the page host.
///
/// Props arrive as struct fields; persistent state (menu selection, scroll
/// offset) is borrowed as `&mut *State`, which is why `render` takes
/// `&mut self`.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Turns a raw `TuiEvent` into whatever the component reports upward
/// (navigate, dismiss, submit...). `None` means "not mine".
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}

/// A block of the scrollable page (hero, cards, footer, ...).
///
/// Page sections are drawn into the scroll view's off-screen buffer rather
/// than the frame, so they render to a `Buffer` and report their own height
/// for a given width up front.
pub trait PageSection {
    fn height(&self, width: u16) -> u16;
    fn render_section(&self, area: Rect, buf: &mut Buffer);
}
