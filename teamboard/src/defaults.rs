//! Built-in board vocabulary.
//!
//! The role categories, the job and weekday lists offered by the card
//! form, the bulk-import shorthand table, and the team columns seeded on
//! first run. All of this is deployment vocabulary, not structure: the
//! engine itself only cares that categories have a fixed order and that
//! the last one is the catch-all.

use crate::types::TeamConfig;

/// The leader job. Skipped when deriving a card's category.
pub const LEADER_JOB: &str = "captain";

/// Jobs offered by the card form, leader first.
pub const AVAILABLE_JOBS: &[&str] = &[
    "captain",
    "vanguard",
    "mender",
    "mystic",
    "reaper",
    "brewmaster",
    "twinblades",
    "dualsabers",
    "scout",
];

/// Weekday tags offered by the card form.
pub const WEEKDAYS: &[&str] = &["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// One entry of the fixed category table.
#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub id: &'static str,
    pub name: &'static str,
    /// Jobs that classify into this category.
    pub jobs: &'static [&'static str],
}

/// The five role categories, in display order.
///
/// The last entry is the catch-all: jobs listed nowhere (`scout`) and
/// cards whose only job is the leader's land there.
pub const ROLE_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        id: "tank",
        name: "Tank",
        jobs: &["vanguard"],
    },
    CategoryDef {
        id: "healer",
        name: "Healer",
        jobs: &["mender"],
    },
    CategoryDef {
        id: "mystic",
        name: "Mystic",
        jobs: &["mystic"],
    },
    CategoryDef {
        id: "reaper",
        name: "Reaper",
        jobs: &["reaper"],
    },
    CategoryDef {
        id: "flex",
        name: "Flex",
        jobs: &["brewmaster", "twinblades", "dualsabers"],
    },
];

/// Id of the catch-all category (the last table entry).
pub const CATCH_ALL_CATEGORY: &str = "flex";

/// Shorthand role tokens accepted by bulk text import.
pub const ROLE_SHORTHANDS: &[(&str, &str)] = &[
    ("99", "brewmaster"),
    ("heals", "mender"),
    ("swords", "twinblades"),
];

/// A first bulk-import line containing this word is a header and skipped.
pub const BULK_HEADER_MARKER: &str = "username";

/// Team columns seeded when storage is empty.
pub fn default_teams() -> Vec<TeamConfig> {
    vec![
        TeamConfig::new("team1", "🚩 Team 1"),
        TeamConfig::new("team2", "🚩 Team 2"),
        TeamConfig::new("team3", "🚩 Team 3"),
        TeamConfig::new("teamMobile", "⚡ Mobile Squad"),
    ]
}
