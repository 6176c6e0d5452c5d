//! TeamBoard - the top-level session owning the model, the team metadata
//! and the storage backend.
//!
//! There are no ambient globals: everything hangs off one `TeamBoard`
//! value, and every mutating method ends with an explicit persist call,
//! making the write-through behavior a contract rather than a framework
//! side effect. Persistence failures degrade the session to in-memory
//! state; they never fail an operation.

use std::collections::BTreeSet;

use crate::defaults::default_teams;
use crate::drag::{DragEnd, DropCommand, DropTargetResolver, Point, Rect, TouchDragSession};
use crate::editor::CardDraft;
use crate::error::{BoardError, Result};
use crate::persist;
use crate::placement::{self, CardBox, MoveOutcome};
use crate::storage::StorageBackend;
use crate::store::{CategoryGroup, ColumnStore};
use crate::transfer::{self, Snapshot};
use crate::types::{Card, CardId, CategoryId, ColumnId, TeamConfig};

/// Display name for the pool in move menus.
pub const POOL_MENU_NAME: &str = "📚 Roster";

/// One move-menu entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveTarget {
    pub id: ColumnId,
    pub name: String,
}

/// The board session.
pub struct TeamBoard {
    store: ColumnStore,
    teams: Vec<TeamConfig>,
    storage: Box<dyn StorageBackend>,
    /// Collapsed category sections, keyed by column and category.
    /// Session-local; not persisted.
    collapsed: BTreeSet<(ColumnId, CategoryId)>,
}

impl TeamBoard {
    /// Open a board over the given storage: restore the saved state, or
    /// seed an empty pool plus the default team columns.
    pub fn open(storage: Box<dyn StorageBackend>) -> Self {
        let (mut store, teams) = match persist::load(storage.as_ref()) {
            Some((store, teams)) => (store, teams),
            None => (ColumnStore::new(), default_teams()),
        };
        store.ensure_column(&ColumnId::pool());
        for team in &teams {
            store.ensure_column(&team.id);
        }
        Self {
            store,
            teams,
            storage,
            collapsed: BTreeSet::new(),
        }
    }

    fn persist(&mut self) {
        persist::save(self.storage.as_mut(), &self.store, &self.teams);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Read access to the model.
    pub fn store(&self) -> &ColumnStore {
        &self.store
    }

    pub fn teams(&self) -> &[TeamConfig] {
        &self.teams
    }

    /// Team columns to lay out, in stored order.
    pub fn visible_teams(&self) -> Vec<&TeamConfig> {
        self.teams.iter().filter(|team| team.visible).collect()
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.store.card(id)
    }

    /// Grouped view of a team column. The pool is not categorized and
    /// answers None; it renders as a flat list.
    pub fn category_groups(&self, column: &ColumnId) -> Option<Vec<CategoryGroup<'_>>> {
        if column.is_pool() {
            return None;
        }
        Some(self.store.category_groups(column))
    }

    /// Move-menu entries for a card: the pool first (unless the card is
    /// already pooled), then every team except the current one. A stale
    /// id gets the full list.
    pub fn move_targets(&self, id: &CardId) -> Vec<MoveTarget> {
        let source = self.store.find_card(id).map(|(column, _)| column.clone());
        let mut targets = Vec::new();
        if source.as_ref().map(|s| !s.is_pool()).unwrap_or(true) {
            targets.push(MoveTarget {
                id: ColumnId::pool(),
                name: POOL_MENU_NAME.to_string(),
            });
        }
        for team in &self.teams {
            if source.as_ref() != Some(&team.id) {
                targets.push(MoveTarget {
                    id: team.id.clone(),
                    name: team.name.clone(),
                });
            }
        }
        targets
    }

    pub fn is_category_collapsed(&self, column: &ColumnId, category: &CategoryId) -> bool {
        self.collapsed
            .contains(&(column.clone(), category.clone()))
    }

    // =========================================================================
    // Card lifecycle
    // =========================================================================

    /// Create a card into the pool.
    pub fn add_card(&mut self, name: &str, jobs: Vec<String>, days: Vec<String>) -> Result<CardId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BoardError::EmptyName);
        }
        if jobs.is_empty() {
            return Err(BoardError::NoRoles);
        }
        let card = Card::new(name, jobs).with_days(days);
        let id = card.id.clone();
        self.store.push_card(&ColumnId::pool(), card);
        self.persist();
        Ok(id)
    }

    /// Rewrite a card's fields in place. Position is kept; any category
    /// override is dropped along with the old role set, since the new
    /// roles re-derive the category from scratch.
    pub fn update_card(
        &mut self,
        id: &CardId,
        name: &str,
        jobs: Vec<String>,
        days: Vec<String>,
    ) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BoardError::EmptyName);
        }
        if jobs.is_empty() {
            return Err(BoardError::NoRoles);
        }
        match self.store.card_mut(id) {
            Some(card) => {
                card.name = name.to_string();
                card.jobs = jobs;
                card.days = days;
                card.category_override = None;
            }
            None => return Err(BoardError::card_not_found(id)),
        }
        self.persist();
        Ok(())
    }

    /// Remove a card from whichever column holds it.
    pub fn delete_card(&mut self, id: &CardId) -> Result<()> {
        if self.store.take_card(id).is_none() {
            return Err(BoardError::card_not_found(id));
        }
        self.persist();
        Ok(())
    }

    /// Submit the character form: create into the pool, or rewrite the
    /// card being edited. The draft resets on success; a stale editing id
    /// is a logged no-op that still clears the form.
    pub fn submit_draft(&mut self, draft: &mut CardDraft) -> Result<Option<CardId>> {
        if draft.name.trim().is_empty() {
            return Err(BoardError::EmptyName);
        }
        if draft.jobs.is_empty() {
            return Err(BoardError::NoRoles);
        }
        let submitted = match draft.editing.clone() {
            Some(id) => {
                match self.update_card(&id, &draft.name, draft.jobs.clone(), draft.days.clone()) {
                    Ok(()) => Some(id),
                    Err(err) if err.is_benign() => {
                        tracing::debug!(card = %id, "edited card vanished, dropping the edit");
                        None
                    }
                    Err(err) => return Err(err),
                }
            }
            None => Some(self.add_card(&draft.name, draft.jobs.clone(), draft.days.clone())?),
        };
        draft.reset();
        Ok(submitted)
    }

    // =========================================================================
    // Placement
    // =========================================================================

    /// Move a card to `column` at a column-sequence index. See
    /// [`crate::placement`] for the override bookkeeping rules.
    pub fn move_card(
        &mut self,
        id: &CardId,
        column: &ColumnId,
        category: Option<&CategoryId>,
        index: usize,
    ) -> Result<MoveOutcome> {
        let outcome = placement::move_card(&mut self.store, id, column, category, index)?;
        self.persist();
        Ok(outcome)
    }

    /// Move-menu relocation: append to the target column. Pool targets
    /// clear the override; team targets keep it.
    pub fn move_card_to_end(&mut self, id: &CardId, column: &ColumnId) -> Result<MoveOutcome> {
        let index = self.store.count_in(column);
        self.move_card(id, column, None, index)
    }

    /// Pointer-drag drop: compute the slot from the rendered boxes of the
    /// drop container, then move.
    pub fn drop_at(
        &mut self,
        id: &CardId,
        column: &ColumnId,
        category: Option<&CategoryId>,
        boxes: &[CardBox],
        pointer_y: f64,
    ) -> Result<MoveOutcome> {
        let local = placement::insertion_index(boxes, pointer_y);
        self.drop_local(id, column, category, local)
    }

    /// Apply a finalized drop command (container-local index).
    pub fn apply_drop(&mut self, command: &DropCommand) -> Result<MoveOutcome> {
        self.drop_local(
            &command.card,
            &command.column,
            command.category.as_ref(),
            command.index,
        )
    }

    fn drop_local(
        &mut self,
        id: &CardId,
        column: &ColumnId,
        category: Option<&CategoryId>,
        local_index: usize,
    ) -> Result<MoveOutcome> {
        // Post-removal view of the target: the dragged card never takes
        // part in its own insertion-point calculation.
        let remaining: Vec<Card> = self
            .store
            .cards_in(column)
            .iter()
            .filter(|card| &card.id != id)
            .cloned()
            .collect();
        let index = placement::resolve_container_index(&remaining, category, local_index);
        self.move_card(id, column, category, index)
    }

    // =========================================================================
    // Touch drag glue
    // =========================================================================

    /// Start a touch gesture on a card. None when the id is stale.
    pub fn begin_touch_drag(
        &self,
        id: &CardId,
        touch: Point,
        card_rect: Rect,
    ) -> Option<TouchDragSession> {
        let (column, _) = self.store.find_card(id)?;
        Some(TouchDragSession::begin(
            id.clone(),
            column.clone(),
            touch,
            card_rect,
        ))
    }

    /// Finish a touch gesture. Taps and out-of-bounds releases leave the
    /// board untouched; a card that vanished mid-gesture aborts quietly.
    pub fn finish_touch_drag(
        &mut self,
        session: TouchDragSession,
        touch: Point,
        resolver: &dyn DropTargetResolver,
    ) -> Option<MoveOutcome> {
        match session.release(touch, resolver) {
            DragEnd::Drop(command) => match self.apply_drop(&command) {
                Ok(outcome) => Some(outcome),
                Err(err) => {
                    tracing::debug!(error = %err, "late drop ignored");
                    None
                }
            },
            DragEnd::Tap | DragEnd::Abort => None,
        }
    }

    // =========================================================================
    // Team metadata
    // =========================================================================

    pub fn set_team_visible(&mut self, id: &ColumnId, visible: bool) -> Result<()> {
        self.team_mut(id)?.visible = visible;
        self.persist();
        Ok(())
    }

    pub fn rename_team(&mut self, id: &ColumnId, name: &str) -> Result<()> {
        self.team_mut(id)?.name = name.to_string();
        self.persist();
        Ok(())
    }

    /// Reorder the team column list: move `id` to `to_index` (clamped).
    pub fn move_team(&mut self, id: &ColumnId, to_index: usize) -> Result<()> {
        let from = self
            .teams
            .iter()
            .position(|team| &team.id == id)
            .ok_or_else(|| BoardError::team_not_found(id))?;
        let team = self.teams.remove(from);
        let to = to_index.min(self.teams.len());
        self.teams.insert(to, team);
        self.persist();
        Ok(())
    }

    fn team_mut(&mut self, id: &ColumnId) -> Result<&mut TeamConfig> {
        self.teams
            .iter_mut()
            .find(|team| &team.id == id)
            .ok_or_else(|| BoardError::team_not_found(id))
    }

    /// Collapse state is session-local and not persisted.
    pub fn toggle_category(&mut self, column: &ColumnId, category: &CategoryId) {
        let key = (column.clone(), category.clone());
        if !self.collapsed.remove(&key) {
            self.collapsed.insert(key);
        }
    }

    // =========================================================================
    // Import / export
    // =========================================================================

    /// Export the full state, stamped now.
    pub fn export_snapshot(&self) -> Snapshot {
        transfer::export_snapshot(&self.store, &self.teams)
    }

    /// Replace the whole state from a snapshot file - a replacement, not
    /// a merge. Team metadata is replaced only when the snapshot carries
    /// it. A rejected file leaves the board untouched.
    pub fn import_snapshot(&mut self, json: &str) -> Result<()> {
        let snapshot = transfer::parse_snapshot(json)?;
        if let Some(teams) = snapshot.team_configs {
            self.teams = teams;
        }
        let mut store = ColumnStore::from_columns(snapshot.cards);
        store.ensure_column(&ColumnId::pool());
        for team in &self.teams {
            store.ensure_column(&team.id);
        }
        self.store = store;
        self.persist();
        Ok(())
    }

    /// Bulk-add roster rows to the pool. Returns how many cards were
    /// created; malformed rows are skipped without being reported.
    pub fn import_roster_text(&mut self, text: &str) -> usize {
        let cards = transfer::parse_roster_rows(text);
        let count = cards.len();
        if count == 0 {
            return 0;
        }
        for card in cards {
            self.store.push_card(&ColumnId::pool(), card);
        }
        self.persist();
        count
    }
}
