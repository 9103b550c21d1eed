use micpress_ui_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A raw pointer event as delivered by the platform.
///
/// Timestamps are caller-supplied uptime milliseconds; the input layer
/// never reads a wall clock, which keeps gesture interpretation
/// deterministic and replayable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub uptime_ms: u64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, uptime_ms: u64) -> Self {
        Self {
            id: 0,
            kind,
            position,
            uptime_ms,
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }
}

/// A typed gesture event, the output of [`GestureDetector`] and the input
/// of the record-gesture state machine.
///
/// `Tap` and `Release` are distinct on purpose: a short press emits both
/// (tap first), a long-press path emits only `Release`. Drag events can
/// only occur after `LongPress` within the same episode.
///
/// [`GestureDetector`]: crate::GestureDetector
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Pointer went down; an episode opened.
    PressDown,
    /// The press was held past the long-press deadline within slop.
    LongPress,
    /// The press was released before the deadline within slop.
    Tap,
    /// Pointer went up; the episode closed.
    Release,
    /// First movement after a long-press.
    DragStart,
    /// Pointer movement after a long-press, as a delta from the previous
    /// position.
    DragMove { delta: Point },
    /// The gesture was interrupted at the system level.
    DragCancel,
    /// The drag ended with the pointer going up.
    DragEnd,
}
