//! Category derivation for cards.

use crate::defaults::{CATCH_ALL_CATEGORY, LEADER_JOB, ROLE_CATEGORIES};
use crate::types::{Card, CategoryId};

/// Effective category of a card: the override when present, otherwise the
/// derived one.
///
/// Overrides are returned verbatim; callers are trusted to hand in ids
/// that mean something to them. Total over any job list, including an
/// empty one.
pub fn classify(card: &Card) -> CategoryId {
    match &card.category_override {
        Some(overridden) => overridden.clone(),
        None => auto_category(&card.jobs),
    }
}

/// Category derived from the job list alone, ignoring any override.
///
/// The first non-leader job decides. A card with only the leader job, no
/// jobs at all, or a first job listed in no category falls into the
/// catch-all.
pub fn auto_category(jobs: &[String]) -> CategoryId {
    let job = match jobs.iter().find(|j| j.as_str() != LEADER_JOB) {
        Some(job) => job,
        None => return CategoryId::from_string(CATCH_ALL_CATEGORY),
    };
    ROLE_CATEGORIES
        .iter()
        .find(|cat| cat.jobs.contains(&job.as_str()))
        .map(|cat| CategoryId::from_string(cat.id))
        .unwrap_or_else(|| CategoryId::from_string(CATCH_ALL_CATEGORY))
}
