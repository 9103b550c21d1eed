//! Pointer input model and gesture interpretation for Micpress.
//!
//! The input module turns a raw pointer stream into typed gesture events
//! (tap, long-press, drag); the record-gesture state machine turns those
//! into recording intents via injected callbacks.

pub mod gesture_constants;
pub mod haptics;
pub mod input;
mod record_gesture;

pub use gesture_constants::*;
pub use haptics::{HapticFeedback, HapticFeedbackType, NullHaptics};
pub use input::detector::GestureDetector;
pub use input::dispatcher::PointerDispatcher;
pub use input::types::{GestureEvent, PointerEvent, PointerEventKind, PointerId};
pub use record_gesture::{RecordCallbacks, RecordGesture};
