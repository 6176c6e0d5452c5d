//! Team column metadata.

use super::ids::ColumnId;
use serde::{Deserialize, Serialize};

/// Metadata for one team column. The pool has no metadata row.
///
/// Hidden columns are excluded from layout but keep their cards and their
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamConfig {
    pub id: ColumnId,
    pub name: String,
    /// Backfills to `true` when a stored record predates the flag.
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl TeamConfig {
    /// Create a visible team column.
    pub fn new(id: impl Into<ColumnId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            visible: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_record_defaults_to_visible() {
        let json = r#"{"id": "team1", "name": "Team 1"}"#;
        let team: TeamConfig = serde_json::from_str(json).unwrap();
        assert!(team.visible);
    }

    #[test]
    fn test_explicit_false_survives() {
        let json = r#"{"id": "team1", "name": "Team 1", "visible": false}"#;
        let team: TeamConfig = serde_json::from_str(json).unwrap();
        assert!(!team.visible);

        let reserialized = serde_json::to_string(&team).unwrap();
        assert!(reserialized.contains("\"visible\":false"));
    }
}
