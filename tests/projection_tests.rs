// Host-side tests for world-to-screen projection and the throttled emitter.

use app_core::{project, Camera, Projection, ProjectionEmitter, PROJECT_MAX_DISTANCE};
use glam::{Vec2, Vec3};

fn test_camera() -> Camera {
    Camera {
        eye: Vec3::new(0.0, 0.0, 8.0),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: 1920.0 / 1080.0,
        fovy_radians: std::f32::consts::FRAC_PI_4,
        znear: 0.1,
        zfar: 100.0,
    }
}

const VIEWPORT: Vec2 = Vec2::new(1920.0, 1080.0);

#[test]
fn red_sphere_projects_to_viewport_center() {
    // entity "red" sits at (0,0,-2), straight ahead of the camera
    let p = project(Vec3::new(0.0, 0.0, -2.0), &test_camera(), VIEWPORT);
    assert!(p.visible, "on-axis entity within range must be visible");
    assert!((p.x - 960.0).abs() < 0.5, "x was {}", p.x);
    assert!((p.y - 540.0).abs() < 0.5, "y was {}", p.y);
}

#[test]
fn behind_camera_is_not_visible() {
    let p = project(Vec3::new(0.0, 0.0, 20.0), &test_camera(), VIEWPORT);
    assert!(!p.visible, "point behind the eye must not be visible");
}

#[test]
fn beyond_max_distance_is_not_visible() {
    let z = -(PROJECT_MAX_DISTANCE + 20.0);
    let p = project(Vec3::new(0.0, 0.0, z), &test_camera(), VIEWPORT);
    assert!(!p.visible, "point past the tracking range must not be visible");
}

#[test]
fn coincident_with_eye_is_not_visible() {
    let cam = test_camera();
    let p = project(cam.eye, &cam, VIEWPORT);
    assert!(!p.visible, "zero distance must be treated as not visible");
}

#[test]
fn screen_axes_match_viewport_orientation() {
    let cam = test_camera();
    let right = project(Vec3::new(2.0, 0.0, 0.0), &cam, VIEWPORT);
    assert!(right.x > 960.0, "+x world must land right of center");
    // screen y grows downward, so +y world lands above center
    let up = project(Vec3::new(0.0, 2.0, 0.0), &cam, VIEWPORT);
    assert!(up.y < 540.0, "+y world must land above center");
}

#[test]
fn emitter_commits_first_sample_immediately() {
    let mut em = ProjectionEmitter::new(0.033, 0.5);
    let p = Projection {
        x: 100.0,
        y: 100.0,
        visible: true,
    };
    assert!(em.update(0.016, [("orange", p)]));
    assert_eq!(em.get("orange"), Some(&p));
}

#[test]
fn emitter_throttles_within_interval() {
    let mut em = ProjectionEmitter::new(0.033, 0.5);
    let p0 = Projection {
        x: 100.0,
        y: 100.0,
        visible: true,
    };
    let p1 = Projection {
        x: 300.0,
        y: 300.0,
        visible: true,
    };
    assert!(em.update(0.016, [("orange", p0)]));
    // next frame arrives before the interval elapses: no commit
    assert!(!em.update(0.010, [("orange", p1)]));
    assert_eq!(em.get("orange"), Some(&p0));
    // after the interval, the pending move commits
    assert!(em.update(0.033, [("orange", p1)]));
    assert_eq!(em.get("orange"), Some(&p1));
}

#[test]
fn emitter_ignores_subpixel_jitter() {
    let mut em = ProjectionEmitter::new(0.033, 0.5);
    let p0 = Projection {
        x: 100.0,
        y: 100.0,
        visible: true,
    };
    assert!(em.update(0.033, [("orange", p0)]));
    let jitter = Projection {
        x: 100.2,
        y: 100.1,
        visible: true,
    };
    assert!(
        !em.update(0.05, [("orange", jitter)]),
        "sub-pixel motion must not re-emit"
    );
    assert_eq!(em.get("orange"), Some(&p0));
}

#[test]
fn emitter_commits_visibility_flips() {
    let mut em = ProjectionEmitter::new(0.033, 0.5);
    let shown = Projection {
        x: 100.0,
        y: 100.0,
        visible: true,
    };
    let hidden = Projection {
        visible: false,
        ..shown
    };
    assert!(em.update(0.033, [("orange", shown)]));
    assert!(
        em.update(0.05, [("orange", hidden)]),
        "a visibility change must commit even without movement"
    );
}
