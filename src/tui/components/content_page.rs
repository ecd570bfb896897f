//! Body for every route other than home: breadcrumb, heading, and the other
//! pages of the same menu section. Unknown routes get a not-found body.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::core::navigation::{Breadcrumb, NavigationTree};
use crate::tui::component::PageSection;

pub const NOT_FOUND_TITLE: &str = "Page not found";

pub struct ContentPage<'a> {
    pub route: &'a str,
    pub crumb: Option<Breadcrumb<'a>>,
}

impl<'a> ContentPage<'a> {
    pub fn new(tree: &'a NavigationTree, route: &'a str) -> Self {
        Self {
            route,
            crumb: tree.locate(route),
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let heading = Style::default()
            .fg(Color::Rgb(227, 160, 8))
            .add_modifier(Modifier::BOLD);
        let muted = Style::default().fg(Color::DarkGray);

        let Some(crumb) = &self.crumb else {
            return vec![
                Line::from(Span::styled(NOT_FOUND_TITLE, heading)),
                Line::default(),
                Line::from(format!("There is no page at {}.", self.route)),
                Line::from(Span::styled(
                    "Press h to return home or / to search.",
                    muted,
                )),
            ];
        };

        let mut path = vec!["Home", crumb.item];
        if let Some(section) = crumb.section {
            path.push(section);
        }
        if crumb.link != crumb.item {
            path.push(crumb.link);
        }

        let mut lines = vec![
            Line::from(Span::styled(path.join(" › "), muted)),
            Line::default(),
            Line::from(Span::styled(crumb.link.to_string(), heading)),
            Line::from(Span::styled(self.route.to_string(), muted)),
            Line::default(),
            Line::from(format!(
                "Information about {} will be published here.",
                crumb.link
            )),
        ];
        if !crumb.siblings.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Related pages",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )));
            lines.extend(crumb.siblings.iter().map(|link| {
                Line::from(vec![
                    Span::raw(format!("  • {}  ", link.name)),
                    Span::styled(link.href.clone(), Style::default().fg(Color::LightBlue)),
                ])
            }));
        }
        lines
    }
}

impl PageSection for ContentPage<'_> {
    fn height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(4).max(1) as usize;
        let rows: usize = self
            .lines()
            .iter()
            .map(|line| textwrap::wrap(&line.to_string(), inner).len().max(1))
            .sum();
        // Vertical padding
        rows as u16 + 2
    }

    fn render_section(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .block(Block::default().padding(Padding::new(2, 2, 1, 1)))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_text(page: &ContentPage<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, page.height(width));
        let mut buf = Buffer::empty(area);
        page.render_section(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_content_page_breadcrumb_and_siblings() {
        let tree = NavigationTree::university();
        let page = ContentPage::new(&tree, "/library");
        let text = render_text(&page, 100);
        assert!(text.contains("Home › Student Life › Facilities › Library"));
        assert!(text.contains("Related pages"));
        assert!(text.contains("/hostel"));
        assert!(!text.contains(NOT_FOUND_TITLE));
    }

    #[test]
    fn test_direct_page_has_short_breadcrumb() {
        let tree = NavigationTree::university();
        let page = ContentPage::new(&tree, "/gallery");
        let text = render_text(&page, 100);
        assert!(text.contains("Home › Event Gallery"));
        assert!(!text.contains("Related pages"));
    }

    #[test]
    fn test_unknown_route_is_not_found() {
        let tree = NavigationTree::university();
        let page = ContentPage::new(&tree, "/nowhere");
        let text = render_text(&page, 100);
        assert!(text.contains(NOT_FOUND_TITLE));
        assert!(text.contains("/nowhere"));
    }
}
