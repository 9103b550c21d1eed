//! Tap / long-press / drag disambiguation.
//!
//! [`GestureDetector`] consumes the raw pointer stream and emits typed
//! [`GestureEvent`]s. It owns no callbacks and fires no side effects; the
//! record-gesture state machine downstream decides what the events mean.

use crate::gesture_constants::{LONG_PRESS_TIMEOUT_MS, TAP_SLOP};
use crate::input::types::{GestureEvent, PointerEvent, PointerEventKind};
use micpress_ui_graphics::Point;
use smallvec::SmallVec;

/// Gesture events emitted by one detector entry point, in order.
///
/// A single pointer event can emit up to three gesture events (a move
/// that crosses the long-press deadline emits long-press, drag-start and
/// drag-move).
pub type GestureEvents = SmallVec<[GestureEvent; 4]>;

#[derive(Clone, Copy, Debug)]
enum PressState {
    Idle,
    /// Pointer is down, long-press deadline not yet reached.
    Pressed {
        origin: Point,
        down_time_ms: u64,
        last_position: Point,
        /// Moved beyond [`TAP_SLOP`] before the deadline; the episode can
        /// no longer become a tap or a long-press.
        disqualified: bool,
    },
    /// The long-press fired; subsequent moves are drag deltas.
    LongPressed {
        last_position: Point,
        dragging: bool,
    },
}

/// Stateful recognizer for one pointer over one widget.
///
/// Single-pointer by design: a second `Down` while an episode is open is
/// ignored. Time comes exclusively from event timestamps and explicit
/// [`poll`] calls, never from a clock.
///
/// [`poll`]: GestureDetector::poll
pub struct GestureDetector {
    state: PressState,
}

impl Default for GestureDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureDetector {
    pub fn new() -> Self {
        Self {
            state: PressState::Idle,
        }
    }

    /// Whether a press episode is currently open.
    pub fn is_pressed(&self) -> bool {
        !matches!(self.state, PressState::Idle)
    }

    /// Feed one raw pointer event; returns the gesture events it produced.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> GestureEvents {
        let mut out = GestureEvents::new();
        // Time passes before the event's own effect: a move or release
        // stamped after the deadline means the long-press already fired.
        self.check_long_press(event.uptime_ms, &mut out);

        match event.kind {
            PointerEventKind::Down => self.handle_down(event, &mut out),
            PointerEventKind::Move => self.handle_move(event, &mut out),
            PointerEventKind::Up => self.handle_up(&mut out),
            PointerEventKind::Cancel => self.handle_cancel(&mut out),
        }
        out
    }

    /// Notify the detector that time has passed without pointer movement.
    ///
    /// Platforms without a long-press timer call this from their frame
    /// loop; the long-press fires here when a still press crosses the
    /// deadline.
    pub fn poll(&mut self, now_ms: u64) -> GestureEvents {
        let mut out = GestureEvents::new();
        self.check_long_press(now_ms, &mut out);
        out
    }

    fn check_long_press(&mut self, now_ms: u64, out: &mut GestureEvents) {
        if let PressState::Pressed {
            down_time_ms,
            last_position,
            disqualified,
            ..
        } = self.state
        {
            if !disqualified && now_ms.saturating_sub(down_time_ms) >= LONG_PRESS_TIMEOUT_MS {
                log::trace!("long-press fired after {}ms", now_ms - down_time_ms);
                self.state = PressState::LongPressed {
                    last_position,
                    dragging: false,
                };
                out.push(GestureEvent::LongPress);
            }
        }
    }

    fn handle_down(&mut self, event: &PointerEvent, out: &mut GestureEvents) {
        if self.is_pressed() {
            // Secondary pointer; this widget tracks one press at a time.
            return;
        }
        self.state = PressState::Pressed {
            origin: event.position,
            down_time_ms: event.uptime_ms,
            last_position: event.position,
            disqualified: false,
        };
        out.push(GestureEvent::PressDown);
    }

    fn handle_move(&mut self, event: &PointerEvent, out: &mut GestureEvents) {
        match &mut self.state {
            PressState::Idle => {}
            PressState::Pressed {
                origin,
                last_position,
                disqualified,
                ..
            } => {
                if !*disqualified && origin.distance_to(event.position) > TAP_SLOP {
                    log::trace!("press moved beyond slop, tap/long-press disqualified");
                    *disqualified = true;
                }
                *last_position = event.position;
            }
            PressState::LongPressed {
                last_position,
                dragging,
            } => {
                if !*dragging {
                    *dragging = true;
                    out.push(GestureEvent::DragStart);
                }
                let delta = event.position - *last_position;
                *last_position = event.position;
                out.push(GestureEvent::DragMove { delta });
            }
        }
    }

    fn handle_up(&mut self, out: &mut GestureEvents) {
        match self.state {
            PressState::Idle => return,
            PressState::Pressed { disqualified, .. } => {
                // The deadline check already ran for this timestamp, so
                // reaching here means the press was short.
                if !disqualified {
                    out.push(GestureEvent::Tap);
                }
            }
            PressState::LongPressed { dragging, .. } => {
                if dragging {
                    out.push(GestureEvent::DragEnd);
                }
            }
        }
        self.state = PressState::Idle;
        out.push(GestureEvent::Release);
    }

    fn handle_cancel(&mut self, out: &mut GestureEvents) {
        if let PressState::LongPressed { .. } = self.state {
            out.push(GestureEvent::DragCancel);
        }
        self.state = PressState::Idle;
    }
}
