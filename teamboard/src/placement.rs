//! Card relocation: insertion-point math and the transactional move.
//!
//! A move is a single remove-then-insert against the [`ColumnStore`], so a
//! card is in exactly one column at every observation point. Insertion
//! indices are always computed against the post-removal view: re-inserting
//! into the same column a card was just spliced out of cannot land out of
//! bounds.

use crate::classify::{auto_category, classify};
use crate::error::{BoardError, Result};
use crate::store::ColumnStore;
use crate::types::{Card, CardId, CategoryId, ColumnId};

/// Bounding box of one rendered card, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardBox {
    pub top: f64,
    pub height: f64,
}

impl CardBox {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Index of the first box whose vertical center lies below the pointer,
/// or the box count when the pointer is below them all (append).
///
/// `boxes` must list the rendered, non-dragging cards of the drop
/// container top to bottom - a card mid-drag must not participate in its
/// own insertion-point calculation.
pub fn insertion_index(boxes: &[CardBox], pointer_y: f64) -> usize {
    boxes
        .iter()
        .position(|b| pointer_y < b.center())
        .unwrap_or(boxes.len())
}

/// Outcome of a completed move.
///
/// `card` doubles as the "just placed" signal: the render layer flashes a
/// transient highlight on that card.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    pub card: CardId,
    pub column: ColumnId,
    /// Column-sequence index the card actually landed at.
    pub index: usize,
}

/// Map a container-local insertion index to a column-sequence index.
///
/// `cards` is the target column with the moved card already removed. With
/// no category the container is the column itself and the index passes
/// through clamped. With a category, the container is that category's
/// effective sub-sequence: landing before its Nth member means landing at
/// that member's column index; past the last member, just after it; into
/// an empty category, at the end of the column.
pub(crate) fn resolve_container_index(
    cards: &[Card],
    category: Option<&CategoryId>,
    local_index: usize,
) -> usize {
    let category = match category {
        Some(category) => category,
        None => return local_index.min(cards.len()),
    };
    let members: Vec<usize> = cards
        .iter()
        .enumerate()
        .filter(|(_, card)| classify(card) == *category)
        .map(|(index, _)| index)
        .collect();
    match members.get(local_index) {
        Some(&column_index) => column_index,
        None => members
            .last()
            .map(|&last| last + 1)
            .unwrap_or(cards.len()),
    }
}

/// Move a card into `target` at a column-sequence index.
///
/// Override bookkeeping happens here: a pool target clears the override
/// unconditionally; a supplied category sets the override only when it
/// deviates from the auto-derived one, and clears it otherwise. A move
/// without a category leaves the override alone.
pub(crate) fn move_card(
    store: &mut ColumnStore,
    id: &CardId,
    target: &ColumnId,
    category: Option<&CategoryId>,
    index: usize,
) -> Result<MoveOutcome> {
    let (_source, mut card) = store
        .take_card(id)
        .ok_or_else(|| BoardError::card_not_found(id))?;

    if target.is_pool() {
        card.category_override = None;
    } else if let Some(category) = category {
        if auto_category(&card.jobs) == *category {
            card.category_override = None;
        } else {
            card.category_override = Some(category.clone());
        }
    }

    let index = store.insert_at(target, index, card);
    Ok(MoveOutcome {
        card: id.clone(),
        column: target.clone(),
        index,
    })
}
