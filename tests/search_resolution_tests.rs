use campus::core::action::{Action, Effect, update};
use campus::core::config::{CampusConfig, CliOverrides, resolve as resolve_config};
use campus::core::navigation::NavigationTree;
use campus::core::search::{SearchOutcome, no_match_message, resolve};
use campus::core::state::App;

// ============================================================================
// Helper Functions
// ============================================================================

fn found(href: &str) -> SearchOutcome {
    SearchOutcome::Found(href.to_string())
}

fn university_app() -> App {
    App::new(NavigationTree::university())
}

// ============================================================================
// Resolver Against the University Menu
// ============================================================================

#[test]
fn test_link_names_resolve() {
    let tree = NavigationTree::university();
    assert_eq!(resolve(&tree, "hostel"), found("/hostel"));
    assert_eq!(resolve(&tree, "Library"), found("/library"));
    assert_eq!(resolve(&tree, "message"), found("/chancellor-message"));
}

#[test]
fn test_section_titles_resolve_to_first_entry() {
    let tree = NavigationTree::university();
    assert_eq!(resolve(&tree, "admission"), found("/admission-notification"));
    assert_eq!(resolve(&tree, "fee"), found("/fees"));
    assert_eq!(resolve(&tree, "research"), found("/phd-cell"));
}

#[test]
fn test_direct_pages_resolve() {
    let tree = NavigationTree::university();
    assert_eq!(resolve(&tree, "home"), found("/"));
    assert_eq!(resolve(&tree, "gallery"), found("/gallery"));
}

#[test]
fn test_earlier_menu_entry_wins() {
    // "Apply Online" sits under Admission and Fee, ahead of Online Services
    let tree = NavigationTree::university();
    assert_eq!(resolve(&tree, "online"), found("/apply-online"));
}

#[test]
fn test_unmatched_query_keeps_its_text() {
    let tree = NavigationTree::university();
    assert_eq!(
        resolve(&tree, "  quantum  "),
        SearchOutcome::NoMatch("  quantum  ".to_string())
    );
    assert_eq!(resolve(&tree, "    "), SearchOutcome::Idle);
}

#[test]
fn test_every_link_name_finds_some_destination() {
    let tree = NavigationTree::university();
    for link in tree.links() {
        assert!(
            matches!(resolve(&tree, &link.name), SearchOutcome::Found(_)),
            "{} did not resolve",
            link.name
        );
    }
}

// ============================================================================
// Search Through the Reducer
// ============================================================================

#[test]
fn test_search_navigates_and_closes_box() {
    let mut app = university_app();
    update(&mut app, Action::ToggleSearch);
    assert!(app.search_open);

    let effect = update(&mut app, Action::Search("hostel".to_string()));
    assert_eq!(effect, Effect::Navigated);
    assert_eq!(app.route(), "/hostel");
    assert!(!app.search_open);
    assert!(app.notice.is_none());
}

#[test]
fn test_failed_search_raises_notice_and_stays_put() {
    let mut app = university_app();
    update(&mut app, Action::ToggleSearch);

    let effect = update(&mut app, Action::Search("xyz123".to_string()));
    assert_eq!(effect, Effect::None);
    assert_eq!(app.route(), "/");
    assert!(app.search_open);
    assert_eq!(app.notice.as_deref(), Some(no_match_message("xyz123").as_str()));

    update(&mut app, Action::DismissNotice);
    assert!(app.notice.is_none());
}

#[test]
fn test_blank_search_does_nothing() {
    let mut app = university_app();
    update(&mut app, Action::ToggleSearch);
    assert_eq!(update(&mut app, Action::Search("   ".to_string())), Effect::None);
    assert!(app.search_open);
    assert!(app.notice.is_none());
}

#[test]
fn test_search_then_back_returns_home() {
    let mut app = university_app();
    update(&mut app, Action::Search("library".to_string()));
    assert_eq!(app.route(), "/library");
    assert_eq!(app.page_title(), "Library");

    assert_eq!(update(&mut app, Action::Back), Effect::Navigated);
    assert_eq!(app.route(), "/");
    assert_eq!(update(&mut app, Action::Forward), Effect::Navigated);
    assert_eq!(app.route(), "/library");
}

// ============================================================================
// Startup Configuration
// ============================================================================

#[test]
fn test_cli_start_route_is_normalized() {
    let cli = CliOverrides {
        start_route: Some("library"),
        screen_reader: true,
    };
    let resolved = resolve_config(&CampusConfig::default(), &cli);
    assert_eq!(resolved.start_route, "/library");
    assert!(resolved.screen_reader);

    let app = App::from_config(NavigationTree::university(), &resolved);
    assert_eq!(app.route(), "/library");
    assert!(app.screen_reader);
}
