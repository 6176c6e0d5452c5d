//! The card type: one character entry on the roster.

use super::ids::{CardId, CategoryId};
use serde::{Deserialize, Serialize};

/// A character entry.
///
/// Wire shape: `{ id, name, jobs, days, categoryOverride? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    /// Role tags in the order the user picked them. Cards created through
    /// the form carry at least one; bulk-imported rows carry exactly one.
    pub jobs: Vec<String>,
    /// Weekday availability tags.
    #[serde(default)]
    pub days: Vec<String>,
    /// Set only when the card was deliberately dropped into a team
    /// sub-category that differs from its derived one. Cleared whenever
    /// the card returns to the pool.
    #[serde(
        rename = "categoryOverride",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub category_override: Option<CategoryId>,
}

impl Card {
    /// Create a card with a fresh id and no availability.
    pub fn new(name: impl Into<String>, jobs: Vec<String>) -> Self {
        Self {
            id: CardId::new(),
            name: name.into(),
            jobs,
            days: Vec::new(),
            category_override: None,
        }
    }

    /// Set the weekday availability.
    pub fn with_days(mut self, days: Vec<String>) -> Self {
        self.days = days;
        self
    }

    /// Set a category override.
    pub fn with_override(mut self, category: CategoryId) -> Self {
        self.category_override = Some(category);
        self
    }
}
