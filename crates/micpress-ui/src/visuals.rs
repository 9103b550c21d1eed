//! Indicator feedback derived from the recording flag.
//!
//! Pure derivation: the scale target and the tint are functions of
//! `recording`; the only kinematic state is the spring approaching the
//! current target.

use micpress_animation::{Animatable, SpringSpec};
use micpress_ui_graphics::Color;

/// Indicator scale while idle.
pub const IDLE_SCALE: f32 = 1.0;

/// Indicator scale while recording.
pub const RECORDING_SCALE: f32 = 2.0;

/// Indicator tint while recording; otherwise the inherited content color
/// applies.
pub const RECORDING_TINT: Color = Color::RED;

/// Tint for the given recording state.
pub fn indicator_tint(recording: bool, content_color: Color) -> Color {
    if recording {
        RECORDING_TINT
    } else {
        content_color
    }
}

/// Scale spring for the record indicator.
pub struct RecordVisuals {
    scale: Animatable<f32>,
}

impl Default for RecordVisuals {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordVisuals {
    pub fn new() -> Self {
        Self {
            scale: Animatable::new(IDLE_SCALE),
        }
    }

    /// Retarget the scale spring if the recording flag changed.
    pub fn sync(&mut self, recording: bool) {
        let target = if recording {
            RECORDING_SCALE
        } else {
            IDLE_SCALE
        };
        if (self.scale.target() - target).abs() > f32::EPSILON {
            log::trace!("indicator scale retargeted to {target}");
            self.scale
                .animate_to(target, SpringSpec::medium_bouncy_low_stiffness());
        }
    }

    /// Advance the spring; returns true while still animating.
    pub fn tick(&mut self, frame_time_nanos: u64) -> bool {
        self.scale.tick(frame_time_nanos)
    }

    pub fn scale(&self) -> f32 {
        self.scale.value()
    }
}
