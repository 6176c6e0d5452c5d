//! Touch drag gestures as an explicit state machine.
//!
//! One [`TouchDragSession`] tracks one gesture: Armed on touch-down,
//! Dragging once the pointer travels past the threshold, gone on release
//! or cancellation. The session never touches presentation nodes - the
//! platform layer feeds it pointer coordinates, resolves drop targets
//! through [`DropTargetResolver`], and renders the feedback each
//! [`TouchDragSession::update`] returns. Ending a gesture consumes the
//! session, so stale clones, dimmed source cards and indicators cannot
//! outlive it on any path.
//!
//! Desktop pointer drags skip the threshold and clone (the platform's
//! native drag imagery stands in) and go straight to the session-level
//! drop entry points with the same index and override logic.

use crate::placement::{insertion_index, CardBox};
use crate::types::{CardId, CategoryId, ColumnId};

/// Viewport-space pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Viewport-space bounding box of the grabbed card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Movement (per axis) required before a press becomes a drag. Keeps taps
/// and accidental wobbles from picking cards up.
pub const DRAG_THRESHOLD: f64 = 10.0;

/// What the platform's hit-test found under the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct DropTarget {
    pub column: ColumnId,
    /// Category section under the pointer, when the column groups cards.
    pub category: Option<CategoryId>,
    /// Rendered boxes of the insertion container (the category sub-list
    /// when `category` is set, the whole column otherwise), top to
    /// bottom, with the dragged card excluded.
    pub card_boxes: Vec<CardBox>,
}

/// Platform hit-testing capability.
///
/// Implementations must hide the drag clone for the duration of the
/// lookup so it cannot occlude its own drop target, and must not list the
/// dragged card's box in `card_boxes`.
pub trait DropTargetResolver {
    fn target_at(&self, point: Point) -> Option<DropTarget>;
}

/// Where the drop indicator sits right now.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSlot {
    pub column: ColumnId,
    pub category: Option<CategoryId>,
    /// Index local to the container the indicator is drawn in.
    pub index: usize,
}

/// Feedback for one pointer-move frame while a drag is live.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DragFrame {
    /// True exactly once, on the frame that crossed the threshold: spawn
    /// the clone at the grabbed rect and dim the source card.
    pub lift: bool,
    /// Top-left corner for the clone, corrected by the grab offset so the
    /// card stays under the finger.
    pub clone_at: Point,
    /// Column to highlight; set only when it differs from the source.
    pub hover: Option<ColumnId>,
    /// Indicator slot, or None to clear the indicator.
    pub indicator: Option<IndicatorSlot>,
}

/// Finalized drop parameters, ready for the placement engine.
#[derive(Debug, Clone, PartialEq)]
pub struct DropCommand {
    pub card: CardId,
    pub column: ColumnId,
    pub category: Option<CategoryId>,
    /// Container-local insertion index.
    pub index: usize,
}

/// How a gesture ended. Every variant obliges the platform to clear its
/// drag visuals; only `Drop` moves anything.
#[derive(Debug, Clone, PartialEq)]
pub enum DragEnd {
    /// Threshold never crossed; the press was a tap or click.
    Tap,
    /// Released over a column.
    Drop(DropCommand),
    /// Released outside every column; nothing moves.
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Armed,
    Dragging,
}

/// One in-flight touch gesture.
#[derive(Debug)]
pub struct TouchDragSession {
    card: CardId,
    source_column: ColumnId,
    start: Point,
    /// Pointer offset inside the grabbed card.
    grab: Point,
    phase: Phase,
}

impl TouchDragSession {
    /// Arm a session at touch-down. Nothing is visual yet.
    pub fn begin(card: CardId, source_column: ColumnId, touch: Point, card_rect: Rect) -> Self {
        Self {
            card,
            source_column,
            start: touch,
            grab: Point::new(touch.x - card_rect.left, touch.y - card_rect.top),
            phase: Phase::Armed,
        }
    }

    pub fn card(&self) -> &CardId {
        &self.card
    }

    pub fn source_column(&self) -> &ColumnId {
        &self.source_column
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    /// Feed a pointer move.
    ///
    /// Returns None while the press is still within the tap threshold;
    /// afterwards, one frame of feedback per call.
    pub fn update(&mut self, touch: Point, resolver: &dyn DropTargetResolver) -> Option<DragFrame> {
        let mut lift = false;
        if self.phase == Phase::Armed {
            let dx = (touch.x - self.start.x).abs();
            let dy = (touch.y - self.start.y).abs();
            if dx < DRAG_THRESHOLD && dy < DRAG_THRESHOLD {
                return None;
            }
            self.phase = Phase::Dragging;
            lift = true;
        }

        let clone_at = Point::new(touch.x - self.grab.x, touch.y - self.grab.y);
        let target = resolver.target_at(touch);
        let hover = target
            .as_ref()
            .map(|t| t.column.clone())
            .filter(|column| column != &self.source_column);
        let indicator = target.map(|t| IndicatorSlot {
            index: insertion_index(&t.card_boxes, touch.y),
            column: t.column,
            category: t.category,
        });

        Some(DragFrame {
            lift,
            clone_at,
            hover,
            indicator,
        })
    }

    /// Finish the gesture at the release point.
    pub fn release(self, touch: Point, resolver: &dyn DropTargetResolver) -> DragEnd {
        if self.phase == Phase::Armed {
            return DragEnd::Tap;
        }
        match resolver.target_at(touch) {
            Some(target) => DragEnd::Drop(DropCommand {
                card: self.card,
                index: insertion_index(&target.card_boxes, touch.y),
                column: target.column,
                category: target.category,
            }),
            None => DragEnd::Abort,
        }
    }

    /// Abandon the gesture (system interruption, focus loss). Returns
    /// whether drag visuals existed and need clearing.
    pub fn cancel(self) -> bool {
        self.phase == Phase::Dragging
    }
}
