//! Haptic feedback seam.
//!
//! The record gesture requests one pulse per successful long-press start.
//! Hardware access is the embedding platform's concern; the default
//! implementation does nothing.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HapticFeedbackType {
    LongPress,
}

pub trait HapticFeedback {
    fn perform(&self, feedback: HapticFeedbackType);
}

/// No-op haptics for platforms without a vibrator and for tests.
#[derive(Default)]
pub struct NullHaptics;

impl HapticFeedback for NullHaptics {
    fn perform(&self, _feedback: HapticFeedbackType) {}
}
