//! The record button: pointer queue, gesture interpretation and
//! indicator feedback behind one widget-scoped object.

use crate::visuals::{indicator_tint, RecordVisuals};
use micpress_foundation::{
    GestureDetector, HapticFeedback, PointerDispatcher, PointerEvent, RecordCallbacks,
    RecordGesture,
};
use micpress_ui_graphics::Color;
use std::rc::Rc;

/// Press-and-hold voice recording trigger.
///
/// The platform enqueues raw pointer events with [`push_pointer_event`]
/// and calls [`pump`] once per event batch; [`poll`] lets the long-press
/// fire while the pointer rests; [`frame`] advances the scale spring.
/// Dropping the button mid-gesture discards all episode state; no
/// callback fires on teardown.
///
/// [`push_pointer_event`]: RecordButton::push_pointer_event
/// [`pump`]: RecordButton::pump
/// [`poll`]: RecordButton::poll
/// [`frame`]: RecordButton::frame
pub struct RecordButton {
    dispatcher: PointerDispatcher,
    detector: GestureDetector,
    gesture: RecordGesture,
    visuals: RecordVisuals,
}

impl RecordButton {
    pub fn new(callbacks: RecordCallbacks) -> Self {
        Self::build(RecordGesture::new(callbacks))
    }

    pub fn with_haptics(callbacks: RecordCallbacks, haptics: Rc<dyn HapticFeedback>) -> Self {
        Self::build(RecordGesture::with_haptics(callbacks, haptics))
    }

    fn build(gesture: RecordGesture) -> Self {
        Self {
            dispatcher: PointerDispatcher::new(),
            detector: GestureDetector::new(),
            gesture,
            visuals: RecordVisuals::new(),
        }
    }

    /// Enqueue a raw pointer event from the platform.
    pub fn push_pointer_event(&mut self, event: PointerEvent) {
        self.dispatcher.push(event);
    }

    /// Drain queued pointer events through the detector and the state
    /// machine, then retarget the indicator.
    pub fn pump(&mut self) {
        let Self {
            dispatcher,
            detector,
            gesture,
            ..
        } = self;
        dispatcher.drain(|event| {
            for gesture_event in detector.on_pointer_event(&event) {
                gesture.on_gesture_event(gesture_event);
            }
        });
        self.visuals.sync(self.gesture.is_recording());
    }

    /// Let time pass without pointer movement; fires the long-press when
    /// a resting press crosses the deadline.
    pub fn poll(&mut self, now_ms: u64) {
        for gesture_event in self.detector.poll(now_ms) {
            self.gesture.on_gesture_event(gesture_event);
        }
        self.visuals.sync(self.gesture.is_recording());
    }

    /// Advance the indicator spring; returns true while still animating.
    pub fn frame(&mut self, frame_time_nanos: u64) -> bool {
        self.visuals.tick(frame_time_nanos)
    }

    pub fn is_recording(&self) -> bool {
        self.gesture.is_recording()
    }

    pub fn passed_swipe_threshold(&self) -> bool {
        self.gesture.passed_swipe_threshold()
    }

    /// Current indicator scale, read each render tick.
    pub fn scale(&self) -> f32 {
        self.visuals.scale()
    }

    /// Indicator tint given the inherited content color.
    pub fn tint(&self, content_color: Color) -> Color {
        indicator_tint(self.is_recording(), content_color)
    }
}
