//! Record button surface for Micpress.
//!
//! [`RecordButton`] wires the pointer queue, the gesture detector, the
//! record-gesture state machine and the indicator visuals into one
//! widget-scoped object. The rendering layer feeds it pointer events and
//! frame ticks and reads back `scale`, `tint` and `is_recording`.

mod frame_clock;
mod record_button;
mod visuals;

pub use frame_clock::FrameClock;
pub use record_button::RecordButton;
pub use visuals::{indicator_tint, RecordVisuals, IDLE_SCALE, RECORDING_SCALE, RECORDING_TINT};
