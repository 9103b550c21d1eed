//! Shared gesture constants for consistent touch/pointer handling.
//!
//! The cancel threshold and slop values are matched between the detector
//! and the record-gesture state machine so the two layers never disagree
//! about what counts as "the same gesture".
//!
//! # DPI Considerations
//!
//! These values are in logical pixels. For very high-density touch
//! screens, consider scaling by the device's DPI factor. Current
//! implementation uses fixed values that work well for typical
//! desktop/mobile displays.

/// Leftward drag distance, in logical pixels, that cancels an active
/// recording.
///
/// Measured on the accumulated horizontal delta since drag start, not on
/// the instantaneous position. Only leftward motion counts; dragging
/// right by any amount never cancels.
pub const SWIPE_TO_CANCEL_THRESHOLD: f32 = 250.0;

/// Maximum vertical drift, in logical pixels, tolerated while a drag is
/// still considered a straight swipe-to-cancel.
///
/// A drag that wanders further off-axis than this keeps the recording
/// alive no matter how far left it travels.
pub const TOUCH_SLOP: f32 = 100.0;

/// Movement threshold, in logical pixels, under which a press can still
/// become a tap or a long-press.
///
/// If the pointer moves more than this distance from the initial press
/// position before the long-press deadline, the episode is disqualified
/// from both: release will fire neither a click nor a recording.
///
/// Value of 8.0 is large enough to ignore minor finger jitter on touch
/// screens and matches common platform conventions (Android uses ~8dp
/// for ViewConfiguration.TOUCH_SLOP).
pub const TAP_SLOP: f32 = 8.0;

/// Hold duration, in milliseconds, after which a press within slop
/// becomes a long-press and the recording start is requested.
pub const LONG_PRESS_TIMEOUT_MS: u64 = 500;
