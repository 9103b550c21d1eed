//! Wall-clock frame source for embeddings without their own frame loop.

use web_time::Instant;

/// Monotonic clock producing the timestamps [`RecordButton`] consumes.
///
/// Library code never reads this on its own; embeddings that have a real
/// frame loop should pass their own timestamps instead.
///
/// [`RecordButton`]: crate::RecordButton
pub struct FrameClock {
    origin: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds since the clock was created, for pointer timestamps.
    pub fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    /// Nanoseconds since the clock was created, for frame ticks.
    pub fn now_nanos(&self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }
}
