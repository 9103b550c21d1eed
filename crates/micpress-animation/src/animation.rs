//! Spring physics with semi-implicit Euler integration.

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// Trait for values that can participate in spring animations.
pub trait SpringScalar: Lerp + Clone {
    /// Convert the value to `f32` for physics calculations.
    fn to_f32(&self) -> f32;

    /// Compute the current progress between the start and target values.
    fn spring_progress(start: &Self, target: &Self, current: &Self) -> f32 {
        let start_val = start.to_f32();
        let target_val = target.to_f32();
        let current_val = current.to_f32();

        if (target_val - start_val).abs() < f32::EPSILON {
            1.0
        } else {
            (current_val - start_val) / (target_val - start_val)
        }
    }

    /// Whether the current value is close enough to the target to consider
    /// the spring finished.
    fn is_near_target(current: &Self, target: &Self, threshold: f32) -> bool {
        (current.to_f32() - target.to_f32()).abs() < threshold
    }
}

impl SpringScalar for f32 {
    fn to_f32(&self) -> f32 {
        *self
    }
}

impl SpringScalar for f64 {
    fn to_f32(&self) -> f32 {
        *self as f32
    }
}

/// Damping ratio of an under-damped, visibly bouncing spring.
pub const DAMPING_RATIO_MEDIUM_BOUNCY: f32 = 0.5;

/// Damping ratio of a critically damped spring (no bounce).
pub const DAMPING_RATIO_NO_BOUNCY: f32 = 1.0;

/// Stiffness of a slow, soft spring.
pub const STIFFNESS_LOW: f32 = 200.0;

/// Stiffness of the default spring.
pub const STIFFNESS_MEDIUM: f32 = 1500.0;

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped
    /// (bouncy), > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
    /// Velocity threshold to stop the animation.
    pub velocity_threshold: f32,
    /// Position threshold to stop the animation.
    pub position_threshold: f32,
}

impl SpringSpec {
    pub const fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio,
            stiffness,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    /// Critically damped spring with medium stiffness.
    pub const fn default_spring() -> Self {
        Self::new(DAMPING_RATIO_NO_BOUNCY, STIFFNESS_MEDIUM)
    }

    /// Under-damped spring with visible bounce.
    pub const fn bouncy() -> Self {
        Self::new(DAMPING_RATIO_MEDIUM_BOUNCY, STIFFNESS_MEDIUM)
    }

    /// Soft bouncy spring: medium bounce, low stiffness.
    pub const fn medium_bouncy_low_stiffness() -> Self {
        Self::new(DAMPING_RATIO_MEDIUM_BOUNCY, STIFFNESS_LOW)
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// Animatable value holder driven by explicit frame ticks.
///
/// Physics runs in progress space: 0.0 is the animation's start value,
/// 1.0 the target. Integration uses semi-implicit Euler with a fixed
/// substep for stability regardless of frame pacing.
pub struct Animatable<T: SpringScalar> {
    current: T,
    start: T,
    target: T,
    spec: SpringSpec,
    /// Velocity in progress units per second.
    velocity: f32,
    last_frame_nanos: Option<u64>,
    running: bool,
}

/// Fixed integration substep (~60fps) for stability.
const SPRING_TIMESTEP_SECONDS: f32 = 0.016;

impl<T: SpringScalar> Animatable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            spec: SpringSpec::default(),
            velocity: 0.0,
            last_frame_nanos: None,
            running: false,
        }
    }

    /// The current animated value.
    pub fn value(&self) -> T {
        self.current.clone()
    }

    /// The value the animation is heading towards.
    pub fn target(&self) -> T {
        self.target.clone()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start animating towards `target` with the given spring.
    ///
    /// Retargeting mid-flight keeps the current value and restarts the
    /// progress interval from there; velocity is reset, which reads as
    /// the spring being caught and re-launched.
    pub fn animate_to(&mut self, target: T, spec: SpringSpec) {
        self.start = self.current.clone();
        self.target = target;
        self.spec = spec;
        self.velocity = 0.0;
        self.last_frame_nanos = None;
        self.running = true;
    }

    /// Jump immediately to `target` without animating.
    pub fn snap_to(&mut self, target: T) {
        self.current = target.clone();
        self.start = target.clone();
        self.target = target;
        self.velocity = 0.0;
        self.last_frame_nanos = None;
        self.running = false;
    }

    /// Advance the spring to `frame_time_nanos`.
    ///
    /// Returns true while the animation is still in flight. The first
    /// tick after a retarget only records the timestamp.
    pub fn tick(&mut self, frame_time_nanos: u64) -> bool {
        if !self.running {
            return false;
        }

        let last = match self.last_frame_nanos.replace(frame_time_nanos) {
            Some(last) => last,
            None => return true,
        };
        let dt = frame_time_nanos.saturating_sub(last) as f32 / 1_000_000_000.0;
        if dt == 0.0 {
            return true;
        }

        let stiffness = self.spec.stiffness;
        let damping = 2.0 * self.spec.damping_ratio * stiffness.sqrt();

        let mut elapsed = 0.0f32;
        while elapsed < dt {
            let step = SPRING_TIMESTEP_SECONDS.min(dt - elapsed);

            let progress =
                <T as SpringScalar>::spring_progress(&self.start, &self.target, &self.current);
            // Displacement from the resting point at progress 1.0.
            let displacement = progress - 1.0;
            let spring_force = -stiffness * displacement - damping * self.velocity;

            self.velocity += spring_force * step;
            let new_progress = progress + self.velocity * step;
            self.current = self.start.lerp(&self.target, new_progress.clamp(-1.0, 2.0));

            elapsed += step;
        }

        let at_rest = self.velocity.abs() < self.spec.velocity_threshold;
        let near_target = <T as SpringScalar>::is_near_target(
            &self.current,
            &self.target,
            self.spec.position_threshold,
        );
        if at_rest && near_target {
            log::trace!("spring settled");
            self.current = self.target.clone();
            self.start = self.target.clone();
            self.velocity = 0.0;
            self.running = false;
        }
        self.running
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
