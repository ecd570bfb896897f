//! Notification cards shown below the hero banner.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEntry {
    pub text: &'static str,
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Notifications,
    QuickLinks,
    Highlights,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoCard {
    pub kind: CardKind,
    pub title: &'static str,
    pub entries: &'static [CardEntry],
}

impl InfoCard {
    /// Glyph used in place of the site's icon.
    pub fn icon(&self) -> &'static str {
        match self.kind {
            CardKind::Notifications => "🔔",
            CardKind::QuickLinks => "🔗",
            CardKind::Highlights => "★",
        }
    }
}

pub const INFO_CARDS: &[InfoCard] = &[
    InfoCard {
        kind: CardKind::Notifications,
        title: "Latest Notifications",
        entries: &[
            CardEntry { text: "Exam Schedule for B.A./B.Sc. First Year Private Students (2024-25)", link: None },
            CardEntry { text: "Registration date extended for PhD Entrance Exam Phase II", link: None },
            CardEntry { text: "Important Notice regarding Merit Scholarships", link: None },
            CardEntry { text: "Department of English seminar postponed", link: None },
        ],
    },
    InfoCard {
        kind: CardKind::QuickLinks,
        title: "Quick Links",
        entries: &[
            CardEntry { text: "Academic Calendar & Holiday List 2025", link: Some("/calendar") },
            CardEntry { text: "Samarth Portal Student Login", link: Some("/online-services") },
            CardEntry { text: "Download Exam Admit Card", link: Some("/exam-controller") },
            CardEntry { text: "Anti-Ragging Affidavits & Guidelines", link: Some("/notices") },
        ],
    },
    InfoCard {
        kind: CardKind::Highlights,
        title: "University Highlights",
        entries: &[
            CardEntry { text: "University awarded 'A' Grade by NAAC", link: None },
            CardEntry { text: "Vice Chancellor's Vision 2030 Document released", link: None },
            CardEntry { text: "New Smart Library Block inaugurated", link: None },
            CardEntry { text: "Mega Job Fair: 50+ Companies Visiting", link: None },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::NavigationTree;

    #[test]
    fn test_three_cards_of_four() {
        assert_eq!(INFO_CARDS.len(), 3);
        assert!(INFO_CARDS.iter().all(|c| c.entries.len() == 4));
    }

    #[test]
    fn test_quick_links_point_into_the_menu() {
        let tree = NavigationTree::university();
        for entry in INFO_CARDS.iter().flat_map(|c| c.entries.iter()) {
            if let Some(href) = entry.link {
                assert!(tree.locate(href).is_some(), "dangling quick link {href}");
            }
        }
    }
}
