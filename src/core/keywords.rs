//! Fixed keyword lookup tables for the scoring engine.
//!
//! All tables are immutable constant data. Matching is case-sensitive
//! substring search against already-lowercased text, so every entry here
//! must be lowercase.

/// A named category of keywords. A category contributes (or penalizes) at
/// most once regardless of how many of its keywords match.
#[derive(Debug, Clone, Copy)]
pub struct KeywordCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// Common English function words dropped during term extraction.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "has", "have", "this", "that", "with", "from", "they", "will", "would", "there",
    "their", "what", "about", "which", "when", "were", "been", "more", "some", "than", "then",
    "them", "these", "into", "also", "its", "who", "how", "any", "your",
];

/// Seniority tiers, checked against the title only. Only the single highest
/// matching tier contributes.
pub const SENIORITY_HIGH: &[&str] = &["staff", "principal", "distinguished", "fellow"];
pub const SENIORITY_MEDIUM: &[&str] = &["senior", "lead", "sr.", "sr "];
pub const SENIORITY_LOW: &[&str] = &["mid-level", "intermediate"];

/// Technical domain categories, checked against the full posting text.
pub const DOMAIN_CATEGORIES: &[KeywordCategory] = &[
    KeywordCategory {
        name: "distributed_systems",
        keywords: &[
            "distributed systems",
            "distributed",
            "consensus",
            "replication",
            "sharding",
            "fault tolerance",
        ],
    },
    KeywordCategory {
        name: "ai_ml",
        keywords: &[
            "machine learning",
            "artificial intelligence",
            "llm",
            "ml systems",
            "ai infrastructure",
            "inference",
            "model serving",
        ],
    },
    KeywordCategory {
        name: "backend_infra",
        keywords: &[
            "backend",
            "infrastructure",
            "platform",
            "microservices",
            "kubernetes",
            "cloud",
        ],
    },
    KeywordCategory {
        name: "orchestration",
        keywords: &[
            "orchestration",
            "workflow",
            "pipeline",
            "scheduling",
            "event driven",
        ],
    },
    KeywordCategory {
        name: "observability",
        keywords: &[
            "observability",
            "monitoring",
            "telemetry",
            "tracing",
            "metrics",
            "reliability",
        ],
    },
];

/// Role-type words, checked against the title only. At least one must be
/// present for a posting to match at all.
pub const ROLE_TYPES: &[&str] = &[
    "engineer",
    "engineering",
    "architect",
    "developer",
    "scientist",
    "researcher",
];

/// Immediate disqualifiers, checked against title and team.
pub const STRONG_NEGATIVES: &[&str] = &[
    "marketing",
    "sales",
    "account executive",
    "recruiter",
    "recruiting",
    "operations manager",
    "finance",
    "legal",
    "compliance",
    "hr",
    "customer success",
    "account manager",
    "business development",
];

/// Soft penalties, checked against the full posting text. Each category
/// subtracts once if any of its keywords match.
pub const MODERATE_NEGATIVE_CATEGORIES: &[KeywordCategory] = &[
    KeywordCategory {
        name: "frontend",
        keywords: &[
            "frontend",
            "front-end",
            "front end",
            "react",
            "mobile engineer",
            "mobile developer",
        ],
    },
    KeywordCategory {
        name: "research",
        keywords: &[
            "research scientist",
            "pure research",
            "research intern",
            "postdoc",
        ],
    },
    KeywordCategory {
        name: "product_management",
        keywords: &[
            "product manager",
            "product management",
            "program manager",
            "product owner",
        ],
    },
    KeywordCategory {
        name: "junior",
        keywords: &["junior", "internship", "entry level", "entry-level", "new grad"],
    },
];

/// Preferred locations, checked against the location field only.
pub const LOCATION_BONUS: &[&str] = &["remote", "san francisco", "sf", "bay area", "new york"];
