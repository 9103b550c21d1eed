//! Test support for Micpress widgets.
//!
//! [`RecordingProbe`] captures callback invocations; [`GestureRobot`]
//! drives scripted pointer sequences against a [`RecordButton`] with a
//! deterministic synthetic clock.
//!
//! [`RecordButton`]: micpress_ui::RecordButton

mod probe;
mod robot;

pub use probe::{CallbackKind, RecordingProbe};
pub use robot::GestureRobot;
