//! The authoritative in-memory model: ordered card sequences per column.

use std::collections::BTreeMap;

use crate::classify::classify;
use crate::defaults::ROLE_CATEGORIES;
use crate::types::{Card, CardId, CategoryId, ColumnId};

/// Ordered card sequences keyed by column id.
///
/// Sequence order is the user's intentional arrangement and survives
/// persistence untouched. Mutators are crate-scoped so that every change
/// routes through the placement engine or the owning session; a card can
/// therefore never appear in two columns at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnStore {
    columns: BTreeMap<ColumnId, Vec<Card>>,
}

/// One category row of a grouped team column view.
#[derive(Debug, PartialEq)]
pub struct CategoryGroup<'a> {
    pub id: CategoryId,
    pub name: &'static str,
    /// Cards of the column whose effective category matches, in column
    /// order.
    pub cards: Vec<&'a Card>,
}

impl ColumnStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a deserialized column map (load or snapshot import).
    pub(crate) fn from_columns(columns: BTreeMap<ColumnId, Vec<Card>>) -> Self {
        Self { columns }
    }

    pub(crate) fn columns(&self) -> &BTreeMap<ColumnId, Vec<Card>> {
        &self.columns
    }

    /// Cards of a column in order. Unknown columns read as empty, never
    /// as an error.
    pub fn cards_in(&self, column: &ColumnId) -> &[Card] {
        self.columns.get(column).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Cardinality of a column's sequence.
    pub fn count_in(&self, column: &ColumnId) -> usize {
        self.cards_in(column).len()
    }

    /// Job tag -> number of cards in the column carrying it. A multi-job
    /// card counts once per job.
    pub fn role_tally(&self, column: &ColumnId) -> BTreeMap<String, usize> {
        let mut tally = BTreeMap::new();
        for card in self.cards_in(column) {
            for job in &card.jobs {
                *tally.entry(job.clone()).or_insert(0) += 1;
            }
        }
        tally
    }

    /// The five categories in display order, each with the sub-sequence of
    /// the column's cards whose effective category matches.
    pub fn category_groups(&self, column: &ColumnId) -> Vec<CategoryGroup<'_>> {
        let cards = self.cards_in(column);
        ROLE_CATEGORIES
            .iter()
            .map(|cat| CategoryGroup {
                id: CategoryId::from_string(cat.id),
                name: cat.name,
                cards: cards
                    .iter()
                    .filter(|card| classify(card).as_str() == cat.id)
                    .collect(),
            })
            .collect()
    }

    /// Non-empty categories of a column with display names and counts.
    pub fn category_tally(&self, column: &ColumnId) -> Vec<(&'static str, usize)> {
        self.category_groups(column)
            .into_iter()
            .filter(|group| !group.cards.is_empty())
            .map(|group| (group.name, group.cards.len()))
            .collect()
    }

    /// Locate a card: its column and position within it.
    pub fn find_card(&self, id: &CardId) -> Option<(&ColumnId, usize)> {
        for (column, cards) in &self.columns {
            if let Some(index) = cards.iter().position(|c| &c.id == id) {
                return Some((column, index));
            }
        }
        None
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        let (column, index) = self.find_card(id)?;
        self.columns.get(column).and_then(|cards| cards.get(index))
    }

    /// Iterate every (column, card) pair.
    pub fn iter(&self) -> impl Iterator<Item = (&ColumnId, &Card)> {
        self.columns
            .iter()
            .flat_map(|(column, cards)| cards.iter().map(move |card| (column, card)))
    }

    // Mutators below are crate-scoped: see the struct docs.

    /// Splice a card out of whichever column holds it.
    pub(crate) fn take_card(&mut self, id: &CardId) -> Option<(ColumnId, Card)> {
        let column = self
            .columns
            .iter()
            .find(|(_, cards)| cards.iter().any(|c| &c.id == id))
            .map(|(column, _)| column.clone())?;
        let cards = self.columns.get_mut(&column)?;
        let index = cards.iter().position(|c| &c.id == id)?;
        Some((column, cards.remove(index)))
    }

    /// Insert at `index` clamped to the sequence length. Creates the
    /// column on demand. Returns the index actually used.
    pub(crate) fn insert_at(&mut self, column: &ColumnId, index: usize, card: Card) -> usize {
        let cards = self.columns.entry(column.clone()).or_default();
        let index = index.min(cards.len());
        cards.insert(index, card);
        index
    }

    /// Append to a column, creating it on demand.
    pub(crate) fn push_card(&mut self, column: &ColumnId, card: Card) {
        self.columns.entry(column.clone()).or_default().push(card);
    }

    pub(crate) fn card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.columns
            .values_mut()
            .flat_map(|cards| cards.iter_mut())
            .find(|card| &card.id == id)
    }

    /// Make sure a column key exists, so empty columns persist as `[]`.
    pub(crate) fn ensure_column(&mut self, column: &ColumnId) {
        self.columns.entry(column.clone()).or_default();
    }
}
