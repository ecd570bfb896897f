//! # Navigation Search
//!
//! Maps free text typed into the search box to a single destination in the
//! [`NavigationTree`]. First match wins; there is no ranking.
//!
//! Scan order, per nav item in tree order:
//!
//! 1. the item's own name, if it is a direct link
//! 2. each section title (resolves to the section's first link)
//! 3. each link of that section
//! 4. the item's flat links
//!
//! Matching is case-insensitive substring containment on the trimmed query.
//! A blank query is idle, not a failure.

use crate::core::navigation::NavigationTree;

/// Suggestions shown when nothing matches.
pub const SEARCH_SUGGESTIONS: &str = "Admission, Programs, Hostel, Library, etc.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank query. Nothing to do.
    Idle,
    /// Navigate here.
    Found(String),
    /// Nothing in the tree matched. Carries the query as typed.
    NoMatch(String),
}

/// Resolve `query` against `tree`.
pub fn resolve(tree: &NavigationTree, query: &str) -> SearchOutcome {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchOutcome::Idle;
    }
    let matches = |candidate: &str| candidate.to_lowercase().contains(&needle);

    for item in tree.items() {
        if let Some(href) = item.href()
            && matches(&item.name)
        {
            return SearchOutcome::Found(href.to_string());
        }

        for section in item.sections_slice() {
            // Section titles have no landing page of their own; use the first entry.
            if matches(&section.title)
                && let Some(first) = section.items.first()
            {
                return SearchOutcome::Found(first.href.clone());
            }
            if let Some(link) = section.items.iter().find(|link| matches(&link.name)) {
                return SearchOutcome::Found(link.href.clone());
            }
        }

        if let Some(link) = item.simple_links().iter().find(|link| matches(&link.name)) {
            return SearchOutcome::Found(link.href.clone());
        }
    }

    SearchOutcome::NoMatch(query.to_string())
}

/// The notice shown to the user for an unmatched query.
pub fn no_match_message(query: &str) -> String {
    format!("No results found for \"{query}\". Try searching for: {SEARCH_SUGGESTIONS}")
}

/// What a one-shot command line search prints, and whether it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub output: Option<String>,
    pub success: bool,
}

pub fn report(tree: &NavigationTree, query: &str) -> SearchReport {
    match resolve(tree, query) {
        SearchOutcome::Idle => SearchReport {
            output: None,
            success: true,
        },
        SearchOutcome::Found(href) => SearchReport {
            output: Some(href),
            success: true,
        },
        SearchOutcome::NoMatch(query) => SearchReport {
            output: Some(no_match_message(&query)),
            success: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::{Link, NavItem, Section};

    fn scenario_tree() -> NavigationTree {
        NavigationTree::new(vec![
            NavItem::page("Home", "/"),
            NavItem::sections(
                "Student Life",
                vec![Section::new(
                    "Facilities",
                    vec![Link::new("Hostel", "/hostel"), Link::new("Library", "/library")],
                )],
            ),
        ])
    }

    #[test]
    fn test_scenario_link_name() {
        assert_eq!(
            resolve(&scenario_tree(), "library"),
            SearchOutcome::Found("/library".to_string())
        );
    }

    #[test]
    fn test_scenario_section_title_resolves_to_first_link() {
        assert_eq!(
            resolve(&scenario_tree(), "facilities"),
            SearchOutcome::Found("/hostel".to_string())
        );
    }

    #[test]
    fn test_scenario_direct_item() {
        assert_eq!(resolve(&scenario_tree(), "home"), SearchOutcome::Found("/".to_string()));
    }

    #[test]
    fn test_scenario_no_match() {
        assert_eq!(
            resolve(&scenario_tree(), "xyz123"),
            SearchOutcome::NoMatch("xyz123".to_string())
        );
    }

    #[test]
    fn test_blank_queries_are_idle() {
        let tree = scenario_tree();
        assert_eq!(resolve(&tree, ""), SearchOutcome::Idle);
        assert_eq!(resolve(&tree, "   "), SearchOutcome::Idle);
        assert_eq!(resolve(&tree, "\t\n"), SearchOutcome::Idle);
    }

    #[test]
    fn test_whitespace_and_case_invariance() {
        let tree = scenario_tree();
        let plain = resolve(&tree, "library");
        assert_eq!(resolve(&tree, "  library  "), plain);
        assert_eq!(resolve(&tree, "LIBRARY"), plain);
        assert_eq!(resolve(&tree, "LiBrArY"), plain);
    }

    #[test]
    fn test_idempotent() {
        let tree = NavigationTree::university();
        assert_eq!(resolve(&tree, "fee"), resolve(&tree, "fee"));
    }

    #[test]
    fn test_flyout_item_name_alone_does_not_match() {
        // "Student Life" has no direct href, so its name is skipped.
        assert_eq!(
            resolve(&scenario_tree(), "student"),
            SearchOutcome::NoMatch("student".to_string())
        );
    }

    #[test]
    fn test_earlier_item_wins() {
        let tree = NavigationTree::new(vec![
            NavItem::page("Online Services", "/online-services"),
            NavItem::page("Services Desk", "/desk"),
        ]);
        assert_eq!(
            resolve(&tree, "services"),
            SearchOutcome::Found("/online-services".to_string())
        );
    }

    #[test]
    fn test_item_order_beats_match_kind() {
        // A link in an earlier item wins over a direct page later in the tree.
        let tree = NavigationTree::new(vec![
            NavItem::sections("About", vec![Section::new("Overview", vec![Link::new("Gallery Tour", "/tour")])]),
            NavItem::page("Event Gallery", "/gallery"),
        ]);
        assert_eq!(resolve(&tree, "gallery"), SearchOutcome::Found("/tour".to_string()));
    }

    #[test]
    fn test_section_title_checked_before_its_links() {
        let tree = NavigationTree::new(vec![NavItem::sections(
            "Research",
            vec![Section::new(
                "Research",
                vec![Link::new("Ph.D. Cell", "/phd-cell"), Link::new("Research Projects", "/projects")],
            )],
        )]);
        assert_eq!(resolve(&tree, "research"), SearchOutcome::Found("/phd-cell".to_string()));
    }

    #[test]
    fn test_empty_section_title_match_falls_through() {
        let tree = NavigationTree::new(vec![NavItem::sections(
            "Misc",
            vec![
                Section::new("Library Annex", vec![]),
                Section::new("Other", vec![Link::new("Library", "/library")]),
            ],
        )]);
        assert_eq!(resolve(&tree, "library"), SearchOutcome::Found("/library".to_string()));
    }

    #[test]
    fn test_simple_links_checked() {
        let tree = NavigationTree::new(vec![NavItem::links(
            "Quick Links",
            vec![Link::new("Samarth Portal", "/samarth"), Link::new("Admit Card", "/admit-card")],
        )]);
        assert_eq!(resolve(&tree, "admit"), SearchOutcome::Found("/admit-card".to_string()));
    }

    #[test]
    fn test_university_tree_queries() {
        let tree = NavigationTree::university();
        assert_eq!(resolve(&tree, "hostel"), SearchOutcome::Found("/hostel".to_string()));
        assert_eq!(resolve(&tree, "Programmes"), SearchOutcome::Found("/programs".to_string()));
        assert_eq!(
            resolve(&tree, "admission"),
            SearchOutcome::Found("/admission-notification".to_string())
        );
        assert_eq!(resolve(&tree, "gallery"), SearchOutcome::Found("/gallery".to_string()));
    }

    #[test]
    fn test_no_match_carries_query_as_typed() {
        let tree = scenario_tree();
        assert_eq!(
            resolve(&tree, "  Quantum  "),
            SearchOutcome::NoMatch("  Quantum  ".to_string())
        );
    }

    #[test]
    fn test_no_match_message() {
        let msg = no_match_message("xyz123");
        assert_eq!(
            msg,
            "No results found for \"xyz123\". Try searching for: Admission, Programs, Hostel, Library, etc."
        );
    }

    #[test]
    fn test_report_found_prints_href() {
        let report = report(&NavigationTree::university(), "hostel");
        assert_eq!(report.output.as_deref(), Some("/hostel"));
        assert!(report.success);
    }

    #[test]
    fn test_report_no_match_prints_notice_and_fails() {
        let report = report(&NavigationTree::university(), "xyz123");
        assert_eq!(report.output, Some(no_match_message("xyz123")));
        assert!(!report.success);
    }

    #[test]
    fn test_report_blank_prints_nothing() {
        let report = report(&NavigationTree::university(), "  ");
        assert_eq!(report.output, None);
        assert!(report.success);
    }
}
