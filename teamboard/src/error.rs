//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
#[derive(Debug, Error)]
pub enum BoardError {
    /// Card id not present in any column. Stale ids can arrive from
    /// deferred UI callbacks, so callers usually treat this as a no-op.
    #[error("card not found: {id}")]
    CardNotFound { id: String },

    /// Team column id not present in the metadata list
    #[error("team not found: {id}")]
    TeamNotFound { id: String },

    /// Card creation/edit with an empty name
    #[error("card name must not be empty")]
    EmptyName,

    /// Card creation/edit with no roles
    #[error("card needs at least one role")]
    NoRoles,

    /// Snapshot import rejected; the board state is untouched
    #[error("malformed snapshot: {message}")]
    MalformedSnapshot { message: String },

    /// Storage medium refused the operation
    #[error("storage unavailable: {message}")]
    StorageUnavailable { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create a card-not-found error
    pub fn card_not_found(id: impl std::fmt::Display) -> Self {
        Self::CardNotFound { id: id.to_string() }
    }

    /// Create a team-not-found error
    pub fn team_not_found(id: impl std::fmt::Display) -> Self {
        Self::TeamNotFound { id: id.to_string() }
    }

    /// Create a malformed-snapshot error
    pub fn malformed_snapshot(message: impl Into<String>) -> Self {
        Self::MalformedSnapshot {
            message: message.into(),
        }
    }

    /// Create a storage-unavailable error
    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            message: message.into(),
        }
    }

    /// Check if callers may swallow this error as a no-op
    pub fn is_benign(&self) -> bool {
        matches!(self, Self::CardNotFound { .. })
    }
}
