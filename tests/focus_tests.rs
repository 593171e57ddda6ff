// Host-side tests for the camera focus animation and its cancellation
// semantics.

use app_core::{ease_out_cubic, FocusAnimator, OrbitTarget};
use glam::Vec3;

const DT: f32 = 1.0 / 60.0;

#[test]
fn ease_out_cubic_hits_endpoints_and_is_monotone() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = ease_out_cubic(i as f32 / 100.0);
        assert!(v >= prev, "easing must not reverse at {i}");
        prev = v;
    }
    // inputs outside [0,1] clamp instead of extrapolating
    assert_eq!(ease_out_cubic(2.0), 1.0);
    assert_eq!(ease_out_cubic(-1.0), 0.0);
}

#[test]
fn animation_reaches_destination_and_returns_to_idle() {
    let mut fa = FocusAnimator::new(1.5);
    let mut orbit = OrbitTarget::default();
    let dest = Vec3::new(0.0, 0.0, -2.0);
    fa.begin("red", orbit.get(), dest);
    assert_eq!(fa.target_id(), Some("red"));
    for _ in 0..120 {
        fa.tick(DT, &mut orbit);
    }
    assert!(
        orbit.get().distance(dest) < 1e-3,
        "orbit ended at {:?}",
        orbit.get()
    );
    assert!(!fa.is_animating(), "must return to idle after the duration");
    assert_eq!(fa.target_id(), None, "completed focus clears the id");
}

#[test]
fn target_holds_at_destination_after_completion() {
    let mut fa = FocusAnimator::new(1.5);
    let mut orbit = OrbitTarget::default();
    let dest = Vec3::new(3.0, -2.0, 1.0);
    fa.begin("yellow", orbit.get(), dest);
    for _ in 0..120 {
        fa.tick(DT, &mut orbit);
    }
    let held = orbit.get();
    for _ in 0..60 {
        fa.tick(DT, &mut orbit);
    }
    assert_eq!(orbit.get(), held, "idle animator must not keep writing");
}

#[test]
fn preemption_leaves_exactly_one_animation() {
    let mut fa = FocusAnimator::new(1.5);
    let mut orbit = OrbitTarget::default();
    let dest_a = Vec3::new(1.0, 0.0, 0.0);
    let dest_b = Vec3::new(0.0, 2.0, 0.0);
    fa.begin("orange", orbit.get(), dest_a);
    for _ in 0..20 {
        fa.tick(DT, &mut orbit);
    }
    // retarget mid-flight: the first animation is superseded synchronously
    fa.begin("red", orbit.get(), dest_b);
    assert_eq!(fa.target_id(), Some("red"));
    for _ in 0..200 {
        fa.tick(DT, &mut orbit);
    }
    assert!(
        orbit.get().distance(dest_b) < 1e-3,
        "stale animation must never win: {:?}",
        orbit.get()
    );
    assert_eq!(fa.target_id(), None);
}

#[test]
fn distance_to_destination_never_increases() {
    let mut fa = FocusAnimator::new(1.5);
    let mut orbit = OrbitTarget::default();
    let dest = Vec3::new(-3.0, 2.0, 0.0);
    fa.begin("orange", orbit.get(), dest);
    let mut prev = orbit.get().distance(dest);
    for _ in 0..120 {
        fa.tick(DT, &mut orbit);
        let d = orbit.get().distance(dest);
        assert!(d <= prev + 1e-4, "focus overshoot: {prev} -> {d}");
        prev = d;
    }
}

#[test]
fn clear_cancels_all_further_writes() {
    let mut fa = FocusAnimator::new(1.5);
    let mut orbit = OrbitTarget::default();
    fa.begin("red", orbit.get(), Vec3::new(0.0, 0.0, -2.0));
    for _ in 0..10 {
        fa.tick(DT, &mut orbit);
    }
    fa.clear();
    assert_eq!(fa.target_id(), None);
    assert!(!fa.is_animating());
    let frozen = orbit.get();
    for _ in 0..60 {
        fa.tick(DT, &mut orbit);
    }
    assert_eq!(orbit.get(), frozen, "cleared focus must stop moving the target");
}
