//! Gesture robot: scripted pointer sequences against a [`RecordButton`].
//!
//! The robot owns a synthetic clock. Every step advances it explicitly,
//! so scripts are deterministic and independent of wall time.

use micpress_foundation::{PointerEvent, PointerEventKind, LONG_PRESS_TIMEOUT_MS};
use micpress_ui::RecordButton;
use micpress_ui_graphics::Point;

/// Milliseconds per simulated frame (~60fps).
const FRAME_MS: u64 = 16;

/// Interpolation steps for a scripted drag.
const DRAG_STEPS: u32 = 10;

pub struct GestureRobot {
    button: RecordButton,
    position: Point,
    now_ms: u64,
}

impl GestureRobot {
    /// Wrap a button; the pointer starts at an arbitrary resting spot.
    pub fn new(button: RecordButton) -> Self {
        Self {
            button,
            position: Point::new(100.0, 100.0),
            now_ms: 0,
        }
    }

    pub fn button(&self) -> &RecordButton {
        &self.button
    }

    pub fn button_mut(&mut self) -> &mut RecordButton {
        &mut self.button
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Press the pointer down at the current position.
    pub fn press(&mut self) {
        self.send(PointerEventKind::Down);
    }

    /// Release the pointer at the current position.
    pub fn release(&mut self) {
        self.send(PointerEventKind::Up);
    }

    /// Interrupt the gesture at the system level.
    pub fn cancel(&mut self) {
        self.send(PointerEventKind::Cancel);
    }

    /// Let `ms` pass without movement, polling and ticking frames along
    /// the way so deadlines and springs observe the time.
    pub fn advance(&mut self, ms: u64) {
        let deadline = self.now_ms + ms;
        while self.now_ms < deadline {
            self.now_ms = (self.now_ms + FRAME_MS).min(deadline);
            self.button.poll(self.now_ms);
            self.button.frame(self.now_ms * 1_000_000);
        }
    }

    /// Tick `frames` simulated frames without pointer activity.
    pub fn advance_frames(&mut self, frames: u32) {
        self.advance(frames as u64 * FRAME_MS);
    }

    /// Press and release quickly: a tap.
    pub fn tap(&mut self) {
        self.press();
        self.advance(FRAME_MS * 3);
        self.release();
    }

    /// Press and hold past the long-press deadline.
    pub fn long_press(&mut self) {
        self.press();
        self.advance(LONG_PRESS_TIMEOUT_MS);
    }

    /// Drag by `(dx, dy)` in interpolated steps, one frame apart.
    pub fn drag_by(&mut self, dx: f32, dy: f32) {
        let step = Point::new(dx / DRAG_STEPS as f32, dy / DRAG_STEPS as f32);
        for _ in 0..DRAG_STEPS {
            self.now_ms += FRAME_MS;
            self.position += step;
            let event = PointerEvent::new(PointerEventKind::Move, self.position, self.now_ms);
            self.button.push_pointer_event(event);
            self.button.pump();
            self.button.frame(self.now_ms * 1_000_000);
        }
    }

    fn send(&mut self, kind: PointerEventKind) {
        self.now_ms += 1;
        let event = PointerEvent::new(kind, self.position, self.now_ms);
        self.button.push_pointer_event(event);
        self.button.pump();
    }
}
