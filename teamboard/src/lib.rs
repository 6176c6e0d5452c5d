//! Roster board engine: ordered team columns, role categories, and drag
//! placement with pluggable storage.
//!
//! This crate is the model and logic core of a single-page roster board:
//! characters ("cards") carry role and weekday tags, live in a shared pool
//! or in named team columns, and are rearranged by drag gestures. The
//! rendering layer - a web view, a TUI, a test - stays outside: it draws
//! the state this crate exposes, feeds pointer events into the drag state
//! machine, and implements hit-testing behind the [`DropTargetResolver`]
//! trait.
//!
//! ## Overview
//!
//! - **One session = one board** - a [`TeamBoard`] owns the card
//!   sequences, the team metadata and a [`StorageBackend`]; there are no
//!   globals.
//! - **Exclusive membership** - a card lives in exactly one column; moves
//!   are a single remove-then-insert in [`placement`].
//! - **Write-through persistence** - every mutating call ends with a
//!   persist; a broken medium degrades to in-memory state instead of
//!   failing operations.
//! - **Categories** - team columns group cards into five fixed role
//!   categories ([`classify`]), with drag-and-drop overrides recorded only
//!   when they deviate from the derived category.
//!
//! ## Basic Usage
//!
//! ```
//! use teamboard::{ColumnId, MemoryStorage, TeamBoard};
//!
//! # fn main() -> teamboard::Result<()> {
//! let mut board = TeamBoard::open(Box::new(MemoryStorage::new()));
//!
//! let id = board.add_card("Ashe", vec!["vanguard".into()], vec!["fri".into()])?;
//! board.move_card_to_end(&id, &ColumnId::from_string("team1"))?;
//!
//! assert_eq!(board.store().count_in(&ColumnId::from_string("team1")), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Storage Shape
//!
//! ```text
//! teamData_v2 -> {
//!     "data":    { "<columnId>": [Card, ...], ... },
//!     "configs": [ { "id", "name", "visible" }, ... ]
//! }
//! ```
//!
//! Cards serialize as `{ id, name, jobs, days, categoryOverride? }`.
//! Snapshot files add a version tag and an export timestamp on top of the
//! same shapes.

pub mod classify;
pub mod defaults;
pub mod drag;
pub mod editor;
pub mod placement;
pub mod storage;
pub mod store;
pub mod transfer;
pub mod types;

mod board;
mod error;
mod persist;

pub use board::{MoveTarget, TeamBoard, POOL_MENU_NAME};
pub use drag::{
    DragEnd, DragFrame, DropCommand, DropTarget, DropTargetResolver, IndicatorSlot, Point, Rect,
    TouchDragSession, DRAG_THRESHOLD,
};
pub use editor::CardDraft;
pub use error::{BoardError, Result};
pub use persist::STORAGE_KEY;
pub use placement::{insertion_index, CardBox, MoveOutcome};
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
pub use store::{CategoryGroup, ColumnStore};
pub use transfer::{parse_roster_rows, parse_snapshot, Snapshot, SNAPSHOT_VERSION};
pub use types::{Card, CardId, CategoryId, ColumnId, TeamConfig};
