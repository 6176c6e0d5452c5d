//! ID wrapper types for type-safe identifiers.
//!
//! Ids are string-backed: freshly generated card ids are ULIDs
//! (time-ordered with a random suffix), but ids read from snapshots or
//! persisted blobs are kept verbatim, whatever their shape.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Identifier for a roster card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Generate a fresh card id.
    pub fn new() -> Self {
        Self(Ulid::new().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier for a column: the pool or one of the team columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

/// The pool's fixed column id.
const POOL_ID: &str = "pool";

impl ColumnId {
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The shared holding column every card starts in.
    pub fn pool() -> Self {
        Self(POOL_ID.to_string())
    }

    pub fn is_pool(&self) -> bool {
        self.0 == POOL_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl From<String> for ColumnId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier for a role category within a team column.
///
/// The five built-in categories live in [`crate::defaults::ROLE_CATEGORIES`];
/// override bookkeeping passes ids through verbatim without validating
/// against that table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl From<String> for CategoryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
