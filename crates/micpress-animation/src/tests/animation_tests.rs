use super::*;

/// Tick `anim` at ~60fps until it settles or `max_frames` elapse.
/// Returns every sampled value.
fn run_to_rest(anim: &mut Animatable<f32>, max_frames: u32) -> Vec<f32> {
    let mut samples = Vec::new();
    let mut frame_time = 0u64;
    for _ in 0..max_frames {
        frame_time += 16_666_667; // ~60 FPS
        let still_running = anim.tick(frame_time);
        samples.push(anim.value());
        if !still_running {
            break;
        }
    }
    samples
}

#[test]
fn spring_converges_to_target() {
    let mut anim = Animatable::new(1.0f32);
    anim.animate_to(2.0, SpringSpec::medium_bouncy_low_stiffness());

    let samples = run_to_rest(&mut anim, 600);
    let last = *samples.last().expect("at least one sample");
    assert!(!anim.is_running(), "spring should settle within 10s");
    assert_eq!(last, 2.0);
}

#[test]
fn spring_reports_intermediate_values() {
    let mut anim = Animatable::new(1.0f32);
    anim.animate_to(2.0, SpringSpec::medium_bouncy_low_stiffness());

    let samples = run_to_rest(&mut anim, 600);
    let saw_midpoint = samples.iter().any(|v| *v > 1.0 && *v < 2.0);
    assert!(saw_midpoint, "animation should pass through the interval");
}

#[test]
fn under_damped_spring_overshoots() {
    let mut anim = Animatable::new(1.0f32);
    anim.animate_to(2.0, SpringSpec::bouncy());

    let samples = run_to_rest(&mut anim, 600);
    let max = samples.iter().cloned().fold(f32::MIN, f32::max);
    assert!(max > 2.0, "bouncy spring should overshoot, max was {}", max);
}

#[test]
fn snap_to_stops_the_animation() {
    let mut anim = Animatable::new(1.0f32);
    anim.animate_to(2.0, SpringSpec::bouncy());
    anim.tick(0);
    anim.tick(16_666_667);
    assert!(anim.is_running());

    anim.snap_to(1.5);
    assert!(!anim.is_running());
    assert_eq!(anim.value(), 1.5);
    assert!(!anim.tick(33_333_334));
    assert_eq!(anim.value(), 1.5);
}

#[test]
fn retarget_mid_flight_continues_from_current_value() {
    let mut anim = Animatable::new(1.0f32);
    anim.animate_to(2.0, SpringSpec::default_spring());
    let mut frame_time = 0u64;
    for _ in 0..10 {
        frame_time += 16_666_667;
        anim.tick(frame_time);
    }
    let mid = anim.value();
    assert!(mid > 1.0 && mid < 2.0);

    anim.animate_to(1.0, SpringSpec::default_spring());
    assert_eq!(anim.value(), mid);

    let mut frame_time2 = frame_time;
    for _ in 0..600 {
        frame_time2 += 16_666_667;
        if !anim.tick(frame_time2) {
            break;
        }
    }
    assert_eq!(anim.value(), 1.0);
}

#[test]
fn first_tick_only_records_the_timestamp() {
    let mut anim = Animatable::new(1.0f32);
    anim.animate_to(2.0, SpringSpec::default_spring());
    assert!(anim.tick(1_000_000_000));
    assert_eq!(anim.value(), 1.0);
}

#[test]
fn spring_spec_bouncy_is_under_damped() {
    let spec = SpringSpec::bouncy();
    assert_eq!(spec.damping_ratio, DAMPING_RATIO_MEDIUM_BOUNCY);
    assert!(spec.damping_ratio < 1.0);
}

#[test]
fn spring_spec_default_is_critically_damped() {
    let spec = SpringSpec::default();
    assert_eq!(spec.damping_ratio, DAMPING_RATIO_NO_BOUNCY);
}

#[test]
fn indicator_spring_is_soft() {
    let spec = SpringSpec::medium_bouncy_low_stiffness();
    assert_eq!(spec.stiffness, STIFFNESS_LOW);
    assert!(spec.stiffness < SpringSpec::default().stiffness);
}
