use crate::core::announcements::INFO_CARDS;
use crate::core::state::App;
use crate::core::viewport::ViewportObserver;
use crate::tui::TuiState;
use crate::tui::component::{Component, PageSection};
use crate::tui::components::search_box;
use crate::tui::components::{
    AcademicsSection, ContentPage, Hero, InfoCards, MegaMenu, MobileMenu, NavBar, Notice, Page,
    StatusBar, TopBar,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let area = frame.area();
    // Width changes apply this frame; scroll-derived flags lag by one
    tui.chrome.observe(&tui.page.metrics(area.width));

    let search_height = if app.search_open { search_box::HEIGHT } else { 0 };
    let layout = Layout::vertical([
        Length(1),
        Length(NavBar::height(tui.chrome.scrolled)),
        Length(search_height),
        Min(0),
        Length(1),
    ]);
    let [top_area, nav_area, search_area, page_area, status_area] = layout.areas(area);

    TopBar::new(app.screen_reader, tui.chrome.compact).render(frame, top_area);
    NavBar::new(&app.tree, tui.nav_selected, app.tree.item_index_of(app.route()))
        .scrolled(tui.chrome.scrolled)
        .compact(tui.chrome.compact)
        .render(frame, nav_area);

    let sections: Vec<Box<dyn PageSection + '_>> = if app.history.is_home() {
        vec![
            Box::new(Hero::new(&app.carousel, app.autoplay)),
            Box::new(InfoCards::new(INFO_CARDS)),
            Box::new(AcademicsSection::new(app.active_tab)),
        ]
    } else {
        vec![Box::new(ContentPage::new(&app.tree, app.route()))]
    };
    Page::new(&mut tui.page, sections).render(frame, page_area);
    tui.chrome.observe(&tui.page.metrics(area.width));

    StatusBar::new(app.route(), &app.status_message, tui.chrome.go_to_top_visible)
        .render(frame, status_area);

    if app.search_open {
        tui.search_box.render(frame, search_area);
    }

    if let Some(menu) = tui.mega_menu.as_mut() {
        MegaMenu::new(menu).render(frame, page_area);
    }
    if let Some(menu) = tui.mobile_menu.as_mut() {
        MobileMenu::new(menu).render(frame, page_area);
    }
    if let Some(message) = &app.notice {
        Notice::new(message).render(frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use crate::tui::components::MegaMenuState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_home_page() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui, 160, 50);
        assert!(text.contains("G.I. Tag For Haldi"));
        assert!(text.contains("Education is the Key to Success"));
        assert!(text.contains("Latest Notifications"));
        assert!(!tui.chrome.compact);
    }

    #[test]
    fn test_content_page_after_navigation() {
        let mut app = test_app();
        update(&mut app, Action::Navigate("/library".to_string()));
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui, 160, 40);
        assert!(text.contains("Home › Student Life › Facilities › Library"));
        assert!(text.contains("/library | Opened Library"));
    }

    #[test]
    fn test_unknown_route() {
        let mut app = test_app();
        update(&mut app, Action::Navigate("/nowhere".to_string()));
        let mut tui = TuiState::new();
        assert!(draw(&app, &mut tui, 160, 40).contains("Page not found"));
    }

    #[test]
    fn test_compact_layout() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui, 80, 40);
        assert!(tui.chrome.compact);
        assert!(text.contains("≡ Menu (m)"));
        assert!(!text.contains("G.I. Tag"));
    }

    #[test]
    fn test_search_and_notice_overlays() {
        let mut app = test_app();
        update(&mut app, Action::ToggleSearch);
        update(&mut app, Action::Search("xyz".to_string()));
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui, 160, 40);
        assert!(text.contains(" Search "));
        assert!(text.contains("No results found for \"xyz\"."));
    }

    #[test]
    fn test_mega_menu_overlay() {
        let app = test_app();
        let mut tui = TuiState::new();
        tui.mega_menu = MegaMenuState::new(6, &app.tree.items()[6]);
        let text = draw(&app, &mut tui, 160, 40);
        assert!(text.contains("FACILITIES"));
        assert!(text.contains("Hostel"));
    }

    #[test]
    fn test_scrolling_to_footer_shows_go_to_top() {
        let app = test_app();
        let mut tui = TuiState::new();
        draw(&app, &mut tui, 160, 30);
        tui.page.scroll_state.scroll_to_bottom();
        draw(&app, &mut tui, 160, 30);
        let text = draw(&app, &mut tui, 160, 30);
        assert!(tui.chrome.scrolled);
        assert!(tui.chrome.go_to_top_visible);
        assert!(text.contains("↑ Top (t)"));
    }
}
