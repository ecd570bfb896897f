//! # Viewport Observation
//!
//! Scroll position, terminal width, and footer visibility drive a few bits
//! of chrome: the compact (hamburger) nav bar, the scrolled nav bar border,
//! and the go-to-top hint. The TUI measures a [`ViewportMetrics`] after every
//! page render and hands it to whichever [`ViewportObserver`]s care.
//!
//! All units are terminal cells.

/// Below this width the nav bar collapses into a menu button.
pub const COMPACT_WIDTH: u16 = 100;
/// Rows scrolled before the nav bar is drawn as "scrolled".
pub const SCROLLED_ROWS: u16 = 2;
/// Fraction of the footer that must be on screen to show go-to-top.
pub const FOOTER_VISIBLE_THRESHOLD: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportMetrics {
    /// Terminal width.
    pub width: u16,
    /// Height of the scrollable page area.
    pub height: u16,
    /// Current vertical scroll offset of the page.
    pub scroll_y: u16,
    /// Total page content height.
    pub content_height: u16,
    /// Offset of the footer within the page content.
    pub footer_top: u16,
    pub footer_height: u16,
}

impl ViewportMetrics {
    /// Fraction of the footer currently inside the viewport, 0.0..=1.0.
    pub fn footer_visible_ratio(&self) -> f32 {
        if self.footer_height == 0 {
            return 0.0;
        }
        let view_top = self.scroll_y as u32;
        let view_bottom = view_top + self.height as u32;
        let footer_top = self.footer_top as u32;
        let footer_bottom = footer_top + self.footer_height as u32;

        let overlap_top = view_top.max(footer_top);
        let overlap_bottom = view_bottom.min(footer_bottom);
        let overlap = overlap_bottom.saturating_sub(overlap_top);
        overlap as f32 / self.footer_height as f32
    }
}

pub trait ViewportObserver {
    fn observe(&mut self, metrics: &ViewportMetrics);
}

/// Layout flags derived from the viewport. Owned by the view that renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Chrome {
    pub compact: bool,
    pub scrolled: bool,
    pub go_to_top_visible: bool,
}

impl ViewportObserver for Chrome {
    fn observe(&mut self, metrics: &ViewportMetrics) {
        self.compact = metrics.width < COMPACT_WIDTH;
        self.scrolled = metrics.scroll_y > SCROLLED_ROWS;
        self.go_to_top_visible = metrics.footer_visible_ratio() >= FOOTER_VISIBLE_THRESHOLD;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(width: u16, scroll_y: u16) -> ViewportMetrics {
        ViewportMetrics {
            width,
            height: 20,
            scroll_y,
            content_height: 100,
            footer_top: 90,
            footer_height: 10,
        }
    }

    #[test]
    fn test_compact_breakpoint() {
        let mut chrome = Chrome::default();
        chrome.observe(&metrics(99, 0));
        assert!(chrome.compact);
        chrome.observe(&metrics(100, 0));
        assert!(!chrome.compact);
    }

    #[test]
    fn test_scrolled_threshold() {
        let mut chrome = Chrome::default();
        chrome.observe(&metrics(120, SCROLLED_ROWS));
        assert!(!chrome.scrolled);
        chrome.observe(&metrics(120, SCROLLED_ROWS + 1));
        assert!(chrome.scrolled);
    }

    #[test]
    fn test_footer_ratio() {
        // Viewport covers rows 70..90, footer is 90..100: no overlap
        assert_eq!(metrics(120, 70).footer_visible_ratio(), 0.0);
        // 71..91 overlaps one row of ten
        assert!((metrics(120, 71).footer_visible_ratio() - 0.1).abs() < f32::EPSILON);
        // 80..100 shows the whole footer
        assert_eq!(metrics(120, 80).footer_visible_ratio(), 1.0);
    }

    #[test]
    fn test_go_to_top_follows_footer() {
        let mut chrome = Chrome::default();
        chrome.observe(&metrics(120, 0));
        assert!(!chrome.go_to_top_visible);
        chrome.observe(&metrics(120, 71));
        assert!(chrome.go_to_top_visible);
    }

    #[test]
    fn test_no_footer_never_visible() {
        let m = ViewportMetrics {
            footer_height: 0,
            ..metrics(120, 0)
        };
        assert_eq!(m.footer_visible_ratio(), 0.0);
    }
}
