//! The record-gesture state machine.
//!
//! Interprets the typed gesture stream into recording intents and fires
//! at most one of four injected callbacks per gesture episode. All episode
//! state lives in explicit fields on [`RecordGesture`], reset at
//! well-defined transition points, so the lifecycle is auditable without
//! tracing closures.

use crate::gesture_constants::{SWIPE_TO_CANCEL_THRESHOLD, TOUCH_SLOP};
use crate::haptics::{HapticFeedback, HapticFeedbackType, NullHaptics};
use crate::input::types::GestureEvent;
use micpress_ui_graphics::Point;
use std::rc::Rc;

/// The four recording intents, injected as handlers.
///
/// Handlers are invoked synchronously from `on_gesture_event`; a panic in
/// a handler propagates to the caller.
#[derive(Clone)]
pub struct RecordCallbacks {
    on_click: Rc<dyn Fn()>,
    on_start_recording: Rc<dyn Fn() -> bool>,
    on_finish_recording: Rc<dyn Fn()>,
    on_cancel_recording: Rc<dyn Fn()>,
}

impl RecordCallbacks {
    /// Build the callback set.
    ///
    /// `on_start_recording` returns whether the start request was
    /// *consumed*: `true` means the caller rejected it (e.g. missing
    /// microphone permission) and no recording begins. Note the polarity —
    /// `true` prevents recording.
    pub fn new(
        on_click: impl Fn() + 'static,
        on_start_recording: impl Fn() -> bool + 'static,
        on_finish_recording: impl Fn() + 'static,
        on_cancel_recording: impl Fn() + 'static,
    ) -> Self {
        Self {
            on_click: Rc::new(on_click),
            on_start_recording: Rc::new(on_start_recording),
            on_finish_recording: Rc::new(on_finish_recording),
            on_cancel_recording: Rc::new(on_cancel_recording),
        }
    }
}

/// Press-and-hold recording trigger.
///
/// Owns two observable flags and the drag accumulator:
///
/// - `recording` is true between an accepted long-press start and the end
///   of the episode, whichever way it ends;
/// - `passed_swipe_threshold` latches once the current drag has crossed
///   the cancel threshold, guaranteeing at most one cancel per episode;
/// - the accumulator sums drag deltas since drag start and is reset
///   there.
pub struct RecordGesture {
    callbacks: RecordCallbacks,
    haptics: Rc<dyn HapticFeedback>,
    recording: bool,
    passed_swipe_threshold: bool,
    drag_offset: Point,
}

impl RecordGesture {
    pub fn new(callbacks: RecordCallbacks) -> Self {
        Self::with_haptics(callbacks, Rc::new(NullHaptics))
    }

    pub fn with_haptics(callbacks: RecordCallbacks, haptics: Rc<dyn HapticFeedback>) -> Self {
        Self {
            callbacks,
            haptics,
            recording: false,
            passed_swipe_threshold: false,
            drag_offset: Point::ZERO,
        }
    }

    /// True while a long-press-initiated recording is active. Read each
    /// frame by the rendering layer to drive tint and scale.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// True once the current drag has crossed the cancel threshold.
    pub fn passed_swipe_threshold(&self) -> bool {
        self.passed_swipe_threshold
    }

    /// Apply one gesture event.
    pub fn on_gesture_event(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::PressDown => {
                // A new episode opens with a fresh threshold latch; the
                // latch must never outlive the episode whose cancel it
                // recorded.
                self.passed_swipe_threshold = false;
            }
            GestureEvent::LongPress => {
                let consumed = (self.callbacks.on_start_recording)();
                self.recording = !consumed;
                if self.recording {
                    log::debug!("recording started");
                    self.haptics.perform(HapticFeedbackType::LongPress);
                }
            }
            GestureEvent::Tap => {
                (self.callbacks.on_click)();
                self.recording = false;
            }
            GestureEvent::Release => {
                if !self.passed_swipe_threshold && self.recording {
                    log::debug!("recording finished");
                    (self.callbacks.on_finish_recording)();
                }
                self.recording = false;
            }
            GestureEvent::DragStart => {
                self.drag_offset = Point::ZERO;
                self.passed_swipe_threshold = false;
            }
            GestureEvent::DragMove { delta } => {
                if self.passed_swipe_threshold || !self.recording {
                    return;
                }
                self.drag_offset += delta;
                self.passed_swipe_threshold = self.drag_offset.x < 0.0
                    && self.drag_offset.x.abs() >= SWIPE_TO_CANCEL_THRESHOLD
                    && self.drag_offset.y.abs() <= TOUCH_SLOP;
                if self.passed_swipe_threshold {
                    log::debug!("swipe crossed cancel threshold");
                    (self.callbacks.on_cancel_recording)();
                    self.recording = false;
                }
            }
            GestureEvent::DragCancel => {
                self.passed_swipe_threshold = false;
                if self.recording {
                    log::debug!("recording cancelled by gesture interruption");
                    (self.callbacks.on_cancel_recording)();
                    self.recording = false;
                }
            }
            GestureEvent::DragEnd => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Counters {
        clicks: u32,
        starts: u32,
        finishes: u32,
        cancels: u32,
        pulses: u32,
    }

    struct CountingHaptics {
        counters: Rc<RefCell<Counters>>,
    }

    impl HapticFeedback for CountingHaptics {
        fn perform(&self, _feedback: HapticFeedbackType) {
            self.counters.borrow_mut().pulses += 1;
        }
    }

    fn gesture(reject_start: bool) -> (RecordGesture, Rc<RefCell<Counters>>) {
        let counters = Rc::new(RefCell::new(Counters::default()));
        let callbacks = {
            let clicks = Rc::clone(&counters);
            let starts = Rc::clone(&counters);
            let finishes = Rc::clone(&counters);
            let cancels = Rc::clone(&counters);
            RecordCallbacks::new(
                move || clicks.borrow_mut().clicks += 1,
                move || {
                    starts.borrow_mut().starts += 1;
                    reject_start
                },
                move || finishes.borrow_mut().finishes += 1,
                move || cancels.borrow_mut().cancels += 1,
            )
        };
        let haptics = Rc::new(CountingHaptics {
            counters: Rc::clone(&counters),
        });
        (RecordGesture::with_haptics(callbacks, haptics), counters)
    }

    fn drag(machine: &mut RecordGesture, dx: f32, dy: f32) {
        machine.on_gesture_event(GestureEvent::DragMove {
            delta: Point::new(dx, dy),
        });
    }

    #[test]
    fn tap_only_fires_click_once() {
        let (mut machine, counters) = gesture(false);
        machine.on_gesture_event(GestureEvent::PressDown);
        machine.on_gesture_event(GestureEvent::Tap);
        machine.on_gesture_event(GestureEvent::Release);

        let c = counters.borrow();
        assert_eq!(c.clicks, 1);
        assert_eq!(c.starts, 0);
        assert_eq!(c.finishes, 0);
        assert_eq!(c.cancels, 0);
        assert!(!machine.is_recording());
    }

    #[test]
    fn long_press_then_release_finishes() {
        let (mut machine, counters) = gesture(false);
        machine.on_gesture_event(GestureEvent::PressDown);
        machine.on_gesture_event(GestureEvent::LongPress);
        assert!(machine.is_recording());
        assert_eq!(counters.borrow().pulses, 1);

        machine.on_gesture_event(GestureEvent::Release);
        let c = counters.borrow();
        assert_eq!(c.finishes, 1);
        assert_eq!(c.clicks, 0);
        assert_eq!(c.cancels, 0);
        assert!(!machine.is_recording());
    }

    #[test]
    fn rejected_start_reverts_to_idle() {
        let (mut machine, counters) = gesture(true);
        machine.on_gesture_event(GestureEvent::PressDown);
        machine.on_gesture_event(GestureEvent::LongPress);
        assert!(!machine.is_recording());
        assert_eq!(counters.borrow().pulses, 0);

        machine.on_gesture_event(GestureEvent::Release);
        let c = counters.borrow();
        assert_eq!(c.starts, 1);
        assert_eq!(c.finishes, 0);
    }

    #[test]
    fn leftward_swipe_cancels() {
        let (mut machine, counters) = gesture(false);
        machine.on_gesture_event(GestureEvent::LongPress);
        machine.on_gesture_event(GestureEvent::DragStart);
        drag(&mut machine, -300.0, 0.0);

        assert!(machine.passed_swipe_threshold());
        assert!(!machine.is_recording());
        assert_eq!(counters.borrow().cancels, 1);

        machine.on_gesture_event(GestureEvent::Release);
        assert_eq!(counters.borrow().finishes, 0);
    }

    #[test]
    fn swipe_accumulates_across_moves() {
        let (mut machine, counters) = gesture(false);
        machine.on_gesture_event(GestureEvent::LongPress);
        machine.on_gesture_event(GestureEvent::DragStart);
        drag(&mut machine, -100.0, 2.0);
        drag(&mut machine, -100.0, -3.0);
        assert_eq!(counters.borrow().cancels, 0);
        drag(&mut machine, -60.0, 1.0);
        assert_eq!(counters.borrow().cancels, 1);
    }

    #[test]
    fn vertical_drift_does_not_cancel() {
        let (mut machine, counters) = gesture(false);
        machine.on_gesture_event(GestureEvent::LongPress);
        machine.on_gesture_event(GestureEvent::DragStart);
        drag(&mut machine, -300.0, 150.0);

        assert!(!machine.passed_swipe_threshold());
        assert!(machine.is_recording());

        machine.on_gesture_event(GestureEvent::DragEnd);
        machine.on_gesture_event(GestureEvent::Release);
        let c = counters.borrow();
        assert_eq!(c.cancels, 0);
        assert_eq!(c.finishes, 1);
    }

    #[test]
    fn rightward_swipe_never_cancels() {
        let (mut machine, counters) = gesture(false);
        machine.on_gesture_event(GestureEvent::LongPress);
        machine.on_gesture_event(GestureEvent::DragStart);
        drag(&mut machine, 400.0, 0.0);

        assert!(!machine.passed_swipe_threshold());
        assert!(machine.is_recording());
        assert_eq!(counters.borrow().cancels, 0);
    }

    #[test]
    fn cancel_fires_at_most_once_per_episode() {
        let (mut machine, counters) = gesture(false);
        machine.on_gesture_event(GestureEvent::LongPress);
        machine.on_gesture_event(GestureEvent::DragStart);
        drag(&mut machine, -300.0, 0.0);
        drag(&mut machine, -50.0, 0.0);
        drag(&mut machine, 500.0, 0.0);
        drag(&mut machine, -400.0, 0.0);

        assert_eq!(counters.borrow().cancels, 1);
        machine.on_gesture_event(GestureEvent::Release);
        assert_eq!(counters.borrow().finishes, 0);
    }

    #[test]
    fn system_cancel_mid_recording_cancels_once() {
        let (mut machine, counters) = gesture(false);
        machine.on_gesture_event(GestureEvent::LongPress);
        machine.on_gesture_event(GestureEvent::DragCancel);

        assert!(!machine.is_recording());
        assert_eq!(counters.borrow().cancels, 1);
    }

    #[test]
    fn system_cancel_without_recording_is_silent() {
        let (mut machine, counters) = gesture(true);
        machine.on_gesture_event(GestureEvent::LongPress);
        machine.on_gesture_event(GestureEvent::DragCancel);
        assert_eq!(counters.borrow().cancels, 0);
    }

    #[test]
    fn new_episode_starts_with_a_fresh_latch() {
        let (mut machine, counters) = gesture(false);
        machine.on_gesture_event(GestureEvent::PressDown);
        machine.on_gesture_event(GestureEvent::LongPress);
        machine.on_gesture_event(GestureEvent::DragStart);
        drag(&mut machine, -300.0, 0.0);
        machine.on_gesture_event(GestureEvent::Release);
        assert!(machine.passed_swipe_threshold());

        machine.on_gesture_event(GestureEvent::PressDown);
        assert!(!machine.passed_swipe_threshold());
        machine.on_gesture_event(GestureEvent::LongPress);
        machine.on_gesture_event(GestureEvent::Release);
        assert_eq!(counters.borrow().finishes, 1);
    }

    #[test]
    fn drag_start_resets_threshold_latch() {
        let (mut machine, _) = gesture(false);
        machine.on_gesture_event(GestureEvent::LongPress);
        machine.on_gesture_event(GestureEvent::DragStart);
        drag(&mut machine, -300.0, 0.0);
        assert!(machine.passed_swipe_threshold());

        machine.on_gesture_event(GestureEvent::Release);
        machine.on_gesture_event(GestureEvent::LongPress);
        machine.on_gesture_event(GestureEvent::DragStart);
        assert!(!machine.passed_swipe_threshold());
    }

    #[test]
    fn moves_while_not_recording_are_ignored() {
        let (mut machine, counters) = gesture(true);
        machine.on_gesture_event(GestureEvent::LongPress);
        machine.on_gesture_event(GestureEvent::DragStart);
        drag(&mut machine, -300.0, 0.0);

        assert!(!machine.passed_swipe_threshold());
        assert_eq!(counters.borrow().cancels, 0);
    }
}
