//! Write-through persistence of the whole board state.
//!
//! Every mutating session operation ends with [`save`]; there is no
//! batching and no dirty tracking. A broken medium degrades the session
//! to in-memory state for its lifetime instead of failing operations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::storage::StorageBackend;
use crate::store::ColumnStore;
use crate::types::{Card, ColumnId, TeamConfig};

/// Fixed storage key for the board blob.
pub const STORAGE_KEY: &str = "teamData_v2";

/// Wire shape of the persisted blob:
/// `{ data: { columnId: Card[] }, configs: [{id, name, visible}] }`.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedState {
    data: BTreeMap<ColumnId, Vec<Card>>,
    configs: Vec<TeamConfig>,
}

/// Serialize the whole state under [`STORAGE_KEY`].
///
/// Failures are logged and swallowed: the app stays usable for the
/// session when the medium is out of quota or read-only.
pub(crate) fn save(storage: &mut dyn StorageBackend, store: &ColumnStore, teams: &[TeamConfig]) {
    let state = PersistedState {
        data: store.columns().clone(),
        configs: teams.to_vec(),
    };
    let blob = match serde_json::to_string(&state) {
        Ok(blob) => blob,
        Err(err) => {
            tracing::warn!(error = %err, "board state refused to serialize");
            return;
        }
    };
    if let Err(err) = storage.write(STORAGE_KEY, &blob) {
        tracing::warn!(error = %err, "board state not persisted");
    }
}

/// Load a previously saved state.
///
/// None means "start fresh": a missing key, an unreadable medium and an
/// unparsable blob all degrade the same way, and the caller seeds the
/// default columns.
pub(crate) fn load(storage: &dyn StorageBackend) -> Option<(ColumnStore, Vec<TeamConfig>)> {
    let blob = match storage.read(STORAGE_KEY) {
        Ok(Some(blob)) => blob,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(error = %err, "stored board state unreadable");
            return None;
        }
    };
    match serde_json::from_str::<PersistedState>(&blob) {
        Ok(state) => Some((ColumnStore::from_columns(state.data), state.configs)),
        Err(err) => {
            tracing::warn!(error = %err, "stored board state did not parse");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use crate::storage::MemoryStorage;
    use crate::types::CategoryId;

    fn seeded() -> (ColumnStore, Vec<TeamConfig>) {
        let mut store = ColumnStore::new();
        store.push_card(
            &ColumnId::pool(),
            Card::new("Ashe", vec!["vanguard".to_string()]),
        );
        store.push_card(
            &ColumnId::from_string("team1"),
            Card::new("Bao", vec!["mender".to_string()])
                .with_override(CategoryId::from_string("tank")),
        );
        (store, crate::defaults::default_teams())
    }

    #[test]
    fn test_save_load_roundtrip() {
        let (store, teams) = seeded();
        let mut storage = MemoryStorage::new();

        save(&mut storage, &store, &teams);
        let (loaded_store, loaded_teams) = load(&storage).unwrap();
        assert_eq!(loaded_store, store);
        assert_eq!(loaded_teams, teams);
    }

    #[test]
    fn test_load_empty_storage() {
        assert!(load(&MemoryStorage::new()).is_none());
    }

    #[test]
    fn test_load_garbage_degrades_to_fresh() {
        let mut storage = MemoryStorage::new();
        storage.write(STORAGE_KEY, "not json at all").unwrap();
        assert!(load(&storage).is_none());
    }

    #[test]
    fn test_legacy_configs_backfill_visible() {
        let mut storage = MemoryStorage::new();
        storage
            .write(
                STORAGE_KEY,
                r#"{"data": {"pool": []}, "configs": [{"id": "team1", "name": "One"}]}"#,
            )
            .unwrap();
        let (_, teams) = load(&storage).unwrap();
        assert!(teams[0].visible);
    }

    #[test]
    fn test_save_swallows_write_failures() {
        struct BrokenStorage;
        impl StorageBackend for BrokenStorage {
            fn read(&self, _key: &str) -> crate::error::Result<Option<String>> {
                Err(BoardError::storage_unavailable("quota exceeded"))
            }
            fn write(&mut self, _key: &str, _value: &str) -> crate::error::Result<()> {
                Err(BoardError::storage_unavailable("quota exceeded"))
            }
        }

        let (store, teams) = seeded();
        // Must not panic or propagate
        save(&mut BrokenStorage, &store, &teams);
        assert!(load(&BrokenStorage).is_none());
    }
}
