//! Form state for creating and editing cards.

use crate::types::{Card, CardId};

/// The character form: what the user has typed and ticked so far, plus
/// the id of the card being edited, if any.
///
/// The draft is plain state; validation and the actual create/update
/// happen in [`crate::TeamBoard::submit_draft`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardDraft {
    pub name: String,
    pub jobs: Vec<String>,
    pub days: Vec<String>,
    pub editing: Option<CardId>,
}

impl CardDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the form from an existing card for editing.
    pub fn start_edit(card: &Card) -> Self {
        Self {
            name: card.name.clone(),
            jobs: card.jobs.clone(),
            days: card.days.clone(),
            editing: Some(card.id.clone()),
        }
    }

    /// Flip a job checkbox.
    pub fn toggle_job(&mut self, job: &str) {
        match self.jobs.iter().position(|j| j == job) {
            Some(index) => {
                self.jobs.remove(index);
            }
            None => self.jobs.push(job.to_string()),
        }
    }

    /// Flip a weekday checkbox.
    pub fn toggle_day(&mut self, day: &str) {
        match self.days.iter().position(|d| d == day) {
            Some(index) => {
                self.days.remove(index);
            }
            None => self.days.push(day.to_string()),
        }
    }

    /// A draft is submittable with a non-empty name and at least one job.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.jobs.is_empty()
    }

    /// Clear the form after submit or an explicit reset.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
