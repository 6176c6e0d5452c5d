//! Import/export boundary: bulk roster text in, JSON snapshots both ways.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::defaults::{BULK_HEADER_MARKER, ROLE_SHORTHANDS};
use crate::error::{BoardError, Result};
use crate::store::ColumnStore;
use crate::types::{Card, ColumnId, TeamConfig};

/// Format tag written into every export.
pub const SNAPSHOT_VERSION: &str = "1.0";

/// Full-state snapshot: what export writes and import reads.
///
/// `cards` is the only field import insists on. Everything else reads
/// leniently so files from older builds stay loadable: a missing
/// `teamConfigs` leaves the current metadata untouched, a missing
/// `exportDate` is stamped on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub version: String,
    #[serde(rename = "exportDate", default = "Utc::now")]
    pub export_date: DateTime<Utc>,
    #[serde(
        rename = "teamConfigs",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub team_configs: Option<Vec<TeamConfig>>,
    pub cards: BTreeMap<ColumnId, Vec<Card>>,
}

impl Snapshot {
    /// Suggested download name, dated like `team-division-2026-08-07.json`.
    pub fn file_name(&self) -> String {
        format!("team-division-{}.json", self.export_date.format("%Y-%m-%d"))
    }
}

/// Build an export snapshot of the current state, stamped now.
pub(crate) fn export_snapshot(store: &ColumnStore, teams: &[TeamConfig]) -> Snapshot {
    Snapshot {
        version: SNAPSHOT_VERSION.to_string(),
        export_date: Utc::now(),
        team_configs: Some(teams.to_vec()),
        cards: store.columns().clone(),
    }
}

/// Parse a snapshot file.
///
/// The single viability requirement is a `cards` field; its absence, like
/// unreadable JSON, rejects the file outright so the caller's state stays
/// untouched.
pub fn parse_snapshot(json: &str) -> Result<Snapshot> {
    serde_json::from_str(json).map_err(|err| BoardError::malformed_snapshot(err.to_string()))
}

/// Parse bulk roster text into pool-ready cards.
///
/// Rows are `name,roleToken`. Only the first comma splits, so role tokens
/// may themselves contain commas; the remainder is trimmed and mapped
/// through the shorthand table, with unrecognized tokens taken verbatim.
/// A first line containing the header marker is skipped, as are rows
/// without a comma or with an empty name - silently, per row.
pub fn parse_roster_rows(text: &str) -> Vec<Card> {
    let mut lines = text.lines();
    let mut first = lines.next();
    if let Some(line) = first {
        if line.contains(BULK_HEADER_MARKER) {
            first = None;
        }
    }
    first
        .into_iter()
        .chain(lines)
        .filter_map(parse_roster_row)
        .collect()
}

fn parse_roster_row(line: &str) -> Option<Card> {
    let (name, token) = line.trim().split_once(',')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let token = token.trim();
    let job = ROLE_SHORTHANDS
        .iter()
        .find(|(short, _)| *short == token)
        .map(|(_, job)| (*job).to_string())
        .unwrap_or_else(|| token.to_string());
    Some(Card::new(name, vec![job]))
}
