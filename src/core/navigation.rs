//! # Navigation Tree
//!
//! The university's mega-menu as immutable reference data. Built once at
//! startup and only ever read afterwards, both by the nav bar and by the
//! search resolver.
//!
//! ```text
//! NavigationTree
//! └── NavItem               // top-level nav bar entry (display order)
//!     └── Destination
//!         ├── Page(href)    // direct link
//!         ├── Sections      // categorized flyout
//!         │   └── Section { title, items: [Link] }
//!         └── Links         // flat flyout
//!             └── Link { name, href }
//! ```
//!
//! A nav item is exactly one of the three destination kinds, so "an item
//! with nothing to show" cannot be constructed.

use serde::{Deserialize, Serialize};

/// A single named destination path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub href: String,
}

impl Link {
    pub fn new(name: &str, href: &str) -> Self {
        Self {
            name: name.to_string(),
            href: href.to_string(),
        }
    }
}

/// A labeled group of links inside a categorized flyout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub items: Vec<Link>,
}

impl Section {
    pub fn new(title: &str, items: Vec<Link>) -> Self {
        Self {
            title: title.to_string(),
            items,
        }
    }
}

/// What activating a nav item does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    /// Navigates straight to `href`.
    Page(String),
    /// Opens a flyout of titled sections.
    Sections(Vec<Section>),
    /// Opens a flat flyout of links.
    Links(Vec<Link>),
}

/// A top-level navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub destination: Destination,
}

impl NavItem {
    pub fn page(name: &str, href: &str) -> Self {
        Self {
            name: name.to_string(),
            destination: Destination::Page(href.to_string()),
        }
    }

    pub fn sections(name: &str, sections: Vec<Section>) -> Self {
        Self {
            name: name.to_string(),
            destination: Destination::Sections(sections),
        }
    }

    pub fn links(name: &str, links: Vec<Link>) -> Self {
        Self {
            name: name.to_string(),
            destination: Destination::Links(links),
        }
    }

    /// The direct href, if this item is a plain link.
    pub fn href(&self) -> Option<&str> {
        match &self.destination {
            Destination::Page(href) => Some(href),
            _ => None,
        }
    }

    /// Sections of a categorized flyout (empty for other kinds).
    pub fn sections_slice(&self) -> &[Section] {
        match &self.destination {
            Destination::Sections(sections) => sections,
            _ => &[],
        }
    }

    /// Links of a flat flyout (empty for other kinds).
    pub fn simple_links(&self) -> &[Link] {
        match &self.destination {
            Destination::Links(links) => links,
            _ => &[],
        }
    }

    pub fn has_flyout(&self) -> bool {
        !matches!(self.destination, Destination::Page(_))
    }
}

/// Where an href lives in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb<'a> {
    pub item: &'a str,
    pub section: Option<&'a str>,
    pub link: &'a str,
    /// The other links of the same section or flat flyout.
    pub siblings: Vec<&'a Link>,
}

/// The full ordered menu. Order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationTree {
    items: Vec<NavItem>,
}

impl NavigationTree {
    pub fn new(items: Vec<NavItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&NavItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Every link in scan order: nav item order, then section order, then item order,
    /// then the item's flat links.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.items.iter().flat_map(|item| {
            item.sections_slice()
                .iter()
                .flat_map(|section| section.items.iter())
                .chain(item.simple_links().iter())
        })
    }

    /// Find the first place `href` appears. Direct nav item links have no section.
    pub fn locate(&self, href: &str) -> Option<Breadcrumb<'_>> {
        for item in &self.items {
            match &item.destination {
                Destination::Page(page) if page == href => {
                    return Some(Breadcrumb {
                        item: &item.name,
                        section: None,
                        link: &item.name,
                        siblings: Vec::new(),
                    });
                }
                Destination::Page(_) => {}
                Destination::Sections(sections) => {
                    for section in sections {
                        if let Some(link) = section.items.iter().find(|l| l.href == href) {
                            return Some(Breadcrumb {
                                item: &item.name,
                                section: Some(&section.title),
                                link: &link.name,
                                siblings: section.items.iter().filter(|l| l.href != href).collect(),
                            });
                        }
                    }
                }
                Destination::Links(links) => {
                    if let Some(link) = links.iter().find(|l| l.href == href) {
                        return Some(Breadcrumb {
                            item: &item.name,
                            section: None,
                            link: &link.name,
                            siblings: links.iter().filter(|l| l.href != href).collect(),
                        });
                    }
                }
            }
        }
        None
    }

    /// Index of the nav item that owns `href`, directly or through its flyout.
    pub fn item_index_of(&self, href: &str) -> Option<usize> {
        self.items.iter().position(|item| match &item.destination {
            Destination::Page(page) => page == href,
            Destination::Sections(sections) => sections
                .iter()
                .any(|s| s.items.iter().any(|l| l.href == href)),
            Destination::Links(links) => links.iter().any(|l| l.href == href),
        })
    }

    /// The university site's menu.
    pub fn university() -> Self {
        Self::new(vec![
            NavItem::page("Home", "/"),
            NavItem::sections(
                "About Us",
                vec![
                    Section::new(
                        "Overview",
                        vec![
                            Link::new("University Profile", "/about"),
                            Link::new("Vision & Mission", "/vision-mission"),
                            Link::new("History", "/history"),
                            Link::new("Kulgeet", "/kulgeet"),
                        ],
                    ),
                    Section::new(
                        "Leadership",
                        vec![
                            Link::new("Chancellor's Message", "/chancellor-message"),
                            Link::new("Vice Chancellor's Message", "/vc-message"),
                        ],
                    ),
                ],
            ),
            NavItem::sections(
                "Administration",
                vec![
                    Section::new(
                        "Governance",
                        vec![
                            Link::new("Executive Council", "/executive-council"),
                            Link::new("Academic Council", "/academic-council"),
                            Link::new("Finance Committee", "/finance-committee"),
                            Link::new("Court", "/court"),
                        ],
                    ),
                    Section::new(
                        "Officers",
                        vec![
                            Link::new("Registrar", "/registrar"),
                            Link::new("Finance Officer", "/finance-officer"),
                            Link::new("Exam Controller", "/exam-controller"),
                        ],
                    ),
                ],
            ),
            NavItem::sections(
                "Admission and Fee",
                vec![
                    Section::new(
                        "Admission",
                        vec![
                            Link::new("Admission Notification", "/admission-notification"),
                            Link::new("Apply Online", "/apply-online"),
                            Link::new("Entrance Exam", "/entrance-exam"),
                        ],
                    ),
                    Section::new(
                        "Fee Details",
                        vec![
                            Link::new("Fee Structure", "/fees"),
                            Link::new("Bank Details", "/bank-details"),
                        ],
                    ),
                ],
            ),
            NavItem::sections(
                "Academics",
                vec![Section::new(
                    "Academic Wing",
                    vec![
                        Link::new("Schools & Departments", "/schools-departments"),
                        Link::new("Programmes Offered", "/programs"),
                        Link::new("Academic Calendar", "/calendar"),
                        Link::new("Syllabus", "/syllabus"),
                    ],
                )],
            ),
            NavItem::sections(
                "Research",
                vec![Section::new(
                    "Research",
                    vec![
                        Link::new("Ph.D. Cell", "/phd-cell"),
                        Link::new("Ordinance", "/ordinance"),
                        Link::new("Ongoing Projects", "/projects"),
                    ],
                )],
            ),
            NavItem::sections(
                "Student Life",
                vec![Section::new(
                    "Facilities",
                    vec![
                        Link::new("Hostel", "/hostel"),
                        Link::new("Library", "/library"),
                        Link::new("Sports", "/sports"),
                        Link::new("NCC/NSS", "/ncc-nss"),
                        Link::new("Club Culture", "/club-culture"),
                    ],
                )],
            ),
            NavItem::sections(
                "Information Corner",
                vec![Section::new(
                    "Updates",
                    vec![
                        Link::new("Notices/Circulars", "/notices"),
                        Link::new("Tenders", "/tenders"),
                        Link::new("Recruitment", "/recruitment"),
                        Link::new("RTI", "/rti"),
                    ],
                )],
            ),
            NavItem::page("Online Services", "/online-services"),
            NavItem::page("Event Gallery", "/gallery"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_university_tree_order() {
        let tree = NavigationTree::university();
        let names: Vec<&str> = tree.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names.first(), Some(&"Home"));
        assert_eq!(names.last(), Some(&"Event Gallery"));
        assert_eq!(tree.len(), 10);
    }

    #[test]
    fn test_every_authored_link_is_non_empty() {
        let tree = NavigationTree::university();
        for link in tree.links() {
            assert!(!link.name.is_empty());
            assert!(link.href.starts_with('/'), "bad href {}", link.href);
        }
        for item in tree.items() {
            for section in item.sections_slice() {
                assert!(!section.items.is_empty(), "empty section {}", section.title);
            }
        }
    }

    #[test]
    fn test_destination_accessors() {
        let home = NavItem::page("Home", "/");
        assert_eq!(home.href(), Some("/"));
        assert!(!home.has_flyout());
        assert!(home.sections_slice().is_empty());

        let flat = NavItem::links("Quick", vec![Link::new("A", "/a")]);
        assert_eq!(flat.href(), None);
        assert!(flat.has_flyout());
        assert_eq!(flat.simple_links().len(), 1);
    }

    #[test]
    fn test_links_scan_order() {
        let tree = NavigationTree::new(vec![
            NavItem::sections(
                "One",
                vec![
                    Section::new("S1", vec![Link::new("a", "/a"), Link::new("b", "/b")]),
                    Section::new("S2", vec![Link::new("c", "/c")]),
                ],
            ),
            NavItem::page("Two", "/two"),
            NavItem::links("Three", vec![Link::new("d", "/d")]),
        ]);
        let hrefs: Vec<&str> = tree.links().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, vec!["/a", "/b", "/c", "/d"]);
    }

    #[test]
    fn test_locate_section_link() {
        let tree = NavigationTree::university();
        let crumb = tree.locate("/library").unwrap();
        assert_eq!(crumb.item, "Student Life");
        assert_eq!(crumb.section, Some("Facilities"));
        assert_eq!(crumb.link, "Library");
        assert_eq!(crumb.siblings.len(), 4);
        assert!(crumb.siblings.iter().all(|l| l.href != "/library"));
    }

    #[test]
    fn test_locate_direct_page_and_missing() {
        let tree = NavigationTree::university();
        let crumb = tree.locate("/gallery").unwrap();
        assert_eq!(crumb.item, "Event Gallery");
        assert_eq!(crumb.section, None);
        assert!(tree.locate("/nowhere").is_none());
    }

    #[test]
    fn test_item_index_of() {
        let tree = NavigationTree::university();
        assert_eq!(tree.item_index_of("/"), Some(0));
        assert_eq!(tree.item_index_of("/vc-message"), Some(1));
        assert_eq!(tree.item_index_of("/gallery"), Some(9));
        assert_eq!(tree.item_index_of("/nowhere"), None);
    }

    #[test]
    fn test_tree_serializes_destination_kind() {
        let tree = NavigationTree::new(vec![NavItem::page("Home", "/")]);
        let json = serde_json::to_string(&tree).unwrap();
        assert!(json.contains(r#""page":"/""#));
    }
}
