//! Headless walkthrough of the record button: one tap episode, one
//! hold-and-release recording, one swipe-to-cancel.
//!
//! Run with `RUST_LOG=debug` to see the state machine's own transitions
//! alongside the demo's narration.

use anyhow::Result;
use micpress_foundation::{
    HapticFeedback, HapticFeedbackType, PointerEvent, PointerEventKind, RecordCallbacks,
};
use micpress_ui::{FrameClock, RecordButton};
use micpress_ui_graphics::{Color, Point};
use std::rc::Rc;
use std::thread;
use std::time::Duration;

const CONTENT_COLOR: Color = Color::from_rgb_u8(0xe0, 0xe0, 0xe0);
const BUTTON_CENTER: Point = Point::new(100.0, 100.0);

struct LoggingHaptics;

impl HapticFeedback for LoggingHaptics {
    fn perform(&self, feedback: HapticFeedbackType) {
        log::info!("haptic pulse: {:?}", feedback);
    }
}

struct Demo {
    button: RecordButton,
    clock: FrameClock,
    position: Point,
}

impl Demo {
    fn new() -> Self {
        let callbacks = RecordCallbacks::new(
            || log::info!("-> on_click"),
            || {
                log::info!("-> on_start_recording (accepted)");
                false
            },
            || log::info!("-> on_finish_recording"),
            || log::info!("-> on_cancel_recording"),
        );
        Self {
            button: RecordButton::with_haptics(callbacks, Rc::new(LoggingHaptics)),
            clock: FrameClock::new(),
            position: BUTTON_CENTER,
        }
    }

    fn send(&mut self, kind: PointerEventKind) {
        let event = PointerEvent::new(kind, self.position, self.clock.now_ms());
        self.button.push_pointer_event(event);
        self.button.pump();
    }

    fn move_by(&mut self, dx: f32, dy: f32) {
        self.position += Point::new(dx, dy);
        self.send(PointerEventKind::Move);
    }

    /// Idle for `ms` of wall time, polling deadlines and ticking the
    /// spring each frame.
    fn idle(&mut self, ms: u64) {
        let deadline = self.clock.now_ms() + ms;
        while self.clock.now_ms() < deadline {
            thread::sleep(Duration::from_millis(8));
            self.button.poll(self.clock.now_ms());
            self.button.frame(self.clock.now_nanos());
        }
    }

    fn report(&self, label: &str) {
        log::info!(
            "{label}: recording={} scale={:.2} tint={:?}",
            self.button.is_recording(),
            self.button.scale(),
            self.button.tint(CONTENT_COLOR),
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init()?;
    let mut demo = Demo::new();

    log::info!("episode 1: tap");
    demo.send(PointerEventKind::Down);
    demo.idle(60);
    demo.send(PointerEventKind::Up);
    demo.report("after tap");

    log::info!("episode 2: hold, then release");
    demo.send(PointerEventKind::Down);
    demo.idle(600);
    demo.report("while holding");
    demo.send(PointerEventKind::Up);
    demo.idle(400);
    demo.report("after release");

    log::info!("episode 3: hold, then swipe left to cancel");
    demo.send(PointerEventKind::Down);
    demo.idle(600);
    for _ in 0..10 {
        demo.move_by(-30.0, 0.0);
        demo.idle(16);
    }
    demo.report("after swipe");
    demo.send(PointerEventKind::Up);
    demo.idle(400);
    demo.report("at rest");

    Ok(())
}
