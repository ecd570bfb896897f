//! # Academic Programmes
//!
//! The programme browser on the home page: one tab per level, each listing
//! the programmes offered at that level.

use serde::{Deserialize, Serialize};

pub const APPLY_ROUTE: &str = "/admission-notification";
pub const ADMISSION_SESSION: &str = "2025-26";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramLevel {
    Diploma,
    #[default]
    Ug,
    Pg,
    PhD,
}

impl ProgramLevel {
    /// Display order of the tabs.
    pub const TABS: [ProgramLevel; 4] = [
        ProgramLevel::Ug,
        ProgramLevel::Pg,
        ProgramLevel::PhD,
        ProgramLevel::Diploma,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProgramLevel::Ug => "Undergraduate",
            ProgramLevel::Pg => "Postgraduate",
            ProgramLevel::PhD => "Doctoral (PhD)",
            ProgramLevel::Diploma => "Diploma",
        }
    }

    pub fn tab_index(&self) -> usize {
        Self::TABS.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::TABS[(self.tab_index() + 1) % Self::TABS.len()]
    }

    pub fn prev(&self) -> Self {
        Self::TABS[(self.tab_index() + Self::TABS.len() - 1) % Self::TABS.len()]
    }

    pub fn programs(&self) -> &'static [Program] {
        match self {
            ProgramLevel::Diploma => DIPLOMA,
            ProgramLevel::Ug => UNDERGRADUATE,
            ProgramLevel::Pg => POSTGRADUATE,
            ProgramLevel::PhD => DOCTORAL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub title: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

const DIPLOMA: &[Program] = &[
    Program {
        title: "Diploma in Pharmacy",
        duration: "2 Years",
        description: "Foundational course in pharmaceutical sciences and practice.",
    },
    Program {
        title: "D.C.A.",
        duration: "1 Year",
        description: "Diploma in Computer Applications covering basics of IT.",
    },
    Program {
        title: "P.G.D.C.A.",
        duration: "1 Year",
        description: "Post Graduate Diploma in Computer Applications for advanced IT skills.",
    },
    Program {
        title: "Post Graduate Diploma in Yoga",
        duration: "1 Year",
        description: "Comprehensive training in Yoga and holistic health.",
    },
];

const UNDERGRADUATE: &[Program] = &[
    Program {
        title: "Bachelor of Arts (B.A.)",
        duration: "3/4 Years",
        description: "Specializations in History, Pol. Science, Sociology, Economics, Hindi, English, Sanskrit, Geography.",
    },
    Program {
        title: "Bachelor of Science (B.Sc.)",
        duration: "3/4 Years",
        description: "Physics, Chemistry, Maths, Botany, Zoology, Geology, Biotechnology, Computer Science.",
    },
    Program {
        title: "Bachelor of Commerce (B.Com)",
        duration: "3/4 Years",
        description: "Comprehensive commerce education including Honors and Tax Procedure.",
    },
    Program {
        title: "B.B.A.",
        duration: "3/4 Years",
        description: "Bachelor of Business Administration focusing on management skills.",
    },
    Program {
        title: "B.C.A.",
        duration: "3/4 Years",
        description: "Bachelor of Computer Applications for software development careers.",
    },
    Program {
        title: "B.S.W.",
        duration: "3/4 Years",
        description: "Bachelor of Social Work dedicated to community service and social welfare.",
    },
];

const POSTGRADUATE: &[Program] = &[
    Program {
        title: "Master of Arts (M.A.)",
        duration: "2 Years",
        description: "Advanced studies in Humanities and Social Sciences disciplines.",
    },
    Program {
        title: "Master of Science (M.Sc.)",
        duration: "2 Years",
        description: "Specialized research-oriented programs in various Science subjects.",
    },
    Program {
        title: "Master of Commerce (M.Com)",
        duration: "2 Years",
        description: "Advanced commerce studies focusing on accounting and finance.",
    },
    Program {
        title: "M.B.A.",
        duration: "2 Years",
        description: "Master of Business Administration developing future corporate leaders.",
    },
    Program {
        title: "M.S.W.",
        duration: "2 Years",
        description: "Master of Social Work for professional social work practice.",
    },
];

const DOCTORAL: &[Program] = &[Program {
    title: "Doctoral Programs",
    duration: "Min. 3 Years",
    description: "Research opportunities in Hindi, English, Sociology, Pol. Sci, Economics, Geography, Physics, Chemistry, Botany, Zoology, Maths, Commerce.",
}];
