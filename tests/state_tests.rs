// Host-side integration tests for the frame-driven scene state machine.

use app_core::{Event, PanelBounds, SceneState};
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;
const VIEWPORT: Vec2 = Vec2::new(1920.0, 1080.0);

fn ticks(state: &mut SceneState, seconds: f32) {
    let steps = (seconds / DT).ceil() as usize;
    for _ in 0..steps {
        state.apply(Event::Tick(DT));
    }
}

fn select(state: &mut SceneState, name: &str) {
    let id = state.scene().canonical_id(name).expect("known entity");
    state.apply(Event::Select(id));
}

#[test]
fn selecting_opens_a_panel_and_focuses_the_camera() {
    let mut st = SceneState::new(VIEWPORT, 7);
    ticks(&mut st, 0.1);
    select(&mut st, "red");
    assert!(st.panels().is_open("red"));
    assert_eq!(st.focus_target(), Some("red"));

    let dest = st.scene().entity("red").unwrap().world_position;
    ticks(&mut st, 2.0);
    // focus captured the destination at begin time; the sphere keeps
    // floating +-0.2 around it afterwards
    assert!(
        st.orbit_target().distance(dest) < 0.5,
        "orbit ended at {:?} for dest {:?}",
        st.orbit_target(),
        dest
    );
    assert_eq!(st.focus_target(), None, "focus releases after completing");
}

#[test]
fn selecting_again_closes_the_panel_and_clears_focus() {
    let mut st = SceneState::new(VIEWPORT, 7);
    select(&mut st, "red");
    select(&mut st, "red");
    assert!(!st.panels().is_open("red"));
    assert_eq!(st.focus_target(), None);
    assert!(st.placements().is_empty());
}

#[test]
fn multiple_panels_stay_open_together() {
    let mut st = SceneState::new(VIEWPORT, 7);
    select(&mut st, "orange");
    select(&mut st, "yellow");
    assert!(st.panels().is_open("orange"));
    assert!(st.panels().is_open("yellow"));
    ticks(&mut st, 0.5);
    assert_eq!(st.placements().len(), 2);
}

#[test]
fn placements_track_the_committed_projection() {
    let mut st = SceneState::new(VIEWPORT, 7);
    select(&mut st, "red");
    ticks(&mut st, 3.0);
    let projected = st
        .projections()
        .find(|&(id, _)| *id == "red")
        .map(|(_, p)| Vec2::new(p.x, p.y))
        .expect("red must have a committed projection");
    let placements = st.placements();
    let p = placements.iter().find(|p| p.id == "red").expect("placement");
    let d = (Vec2::new(p.x, p.y) - projected).length();
    assert!(d < 20.0, "panel lags its target by {d}px");
    assert!(p.opacity > 0.9, "tracked visible panel must be opaque");
}

#[test]
fn settle_delay_requests_bounds_then_applies_displacement() {
    let mut st = SceneState::new(VIEWPORT, 7);
    select(&mut st, "orange");
    select(&mut st, "red");
    assert!(!st.needs_bounds(), "bounds are requested only after settling");
    ticks(&mut st, 0.2);
    assert!(st.needs_bounds(), "settle delay must elapse into a request");

    // overlapping measurements: the resolver must push the pair apart
    let measured = [
        PanelBounds {
            id: st.scene().canonical_id("orange").unwrap(),
            center: Vec2::new(900.0, 540.0),
            size: Vec2::new(300.0, 200.0),
        },
        PanelBounds {
            id: st.scene().canonical_id("red").unwrap(),
            center: Vec2::new(1020.0, 540.0),
            size: Vec2::new(300.0, 200.0),
        },
    ];
    st.submit_bounds(&measured);
    assert!(!st.needs_bounds());

    ticks(&mut st, 3.0);
    let placements = st.placements();
    let a = placements.iter().find(|p| p.id == "orange").unwrap();
    let b = placements.iter().find(|p| p.id == "red").unwrap();
    let dist = (Vec2::new(a.x, a.y) - Vec2::new(b.x, b.y)).length();
    assert!(
        dist > 200.0,
        "displaced panels must not sit on top of each other ({dist}px)"
    );
}

#[test]
fn placements_respect_the_viewport_padding() {
    let mut st = SceneState::new(VIEWPORT, 7);
    select(&mut st, "small-red"); // far off-center sphere
    ticks(&mut st, 0.2);
    let measured = [PanelBounds {
        id: st.scene().canonical_id("small-red").unwrap(),
        center: Vec2::new(1800.0, 200.0),
        size: Vec2::new(300.0, 200.0),
    }];
    st.submit_bounds(&measured);
    ticks(&mut st, 3.0);
    let placements = st.placements();
    let p = placements.iter().find(|p| p.id == "small-red").unwrap();
    assert!(p.x + 150.0 <= 1920.0 - 20.0 + 1.0, "x was {}", p.x);
    assert!(p.y - 100.0 >= 20.0 - 1.0, "y was {}", p.y);
}

#[test]
fn centering_overrides_tracking_then_expires_back() {
    // mobile-width viewport: the anchor is distinct from any projection
    let vp = Vec2::new(390.0, 844.0);
    let mut st = SceneState::new(vp, 7);
    select(&mut st, "orange");
    ticks(&mut st, 2.0);
    let id = st.scene().canonical_id("orange").unwrap();
    st.apply(Event::Center(id));
    assert_eq!(st.panels().centered(), Some("orange"));
    ticks(&mut st, 1.5);
    let placements = st.placements();
    let p = placements.iter().find(|p| p.id == "orange").unwrap();
    let anchor = Vec2::new(195.0, app_core::MOBILE_ANCHOR_TOP_PX);
    assert!(
        (Vec2::new(p.x, p.y) - anchor).length() < 10.0,
        "centered panel must sit at the anchor, was ({}, {})",
        p.x,
        p.y
    );

    // expiry returns the panel to its tracked position
    ticks(&mut st, 1.2);
    assert_eq!(st.panels().centered(), None);
    ticks(&mut st, 2.0);
    let placements = st.placements();
    let p = placements.iter().find(|p| p.id == "orange").unwrap();
    assert!(
        (Vec2::new(p.x, p.y) - anchor).length() > 30.0,
        "expired centering must release the panel"
    );
}

#[test]
fn resize_updates_viewport_and_redirects_clamping() {
    let mut st = SceneState::new(VIEWPORT, 7);
    st.apply(Event::Resize(800.0, 600.0));
    assert_eq!(st.viewport(), Vec2::new(800.0, 600.0));
    select(&mut st, "red");
    ticks(&mut st, 3.0);
    let placements = st.placements();
    let p = placements.iter().find(|p| p.id == "red").unwrap();
    assert!(p.x >= 20.0 - 1.0 && p.x <= 800.0 - 20.0 + 1.0);
    assert!(p.y >= 20.0 - 1.0 && p.y <= 600.0 - 20.0 + 1.0);
}

#[test]
fn clear_focus_is_independent_of_panel_state() {
    let mut st = SceneState::new(VIEWPORT, 7);
    select(&mut st, "red");
    st.apply(Event::ClearFocus);
    assert_eq!(st.focus_target(), None);
    assert!(st.panels().is_open("red"), "panel stays open after Escape");
}

#[test]
fn preempting_focus_lands_on_the_newest_entity() {
    let mut st = SceneState::new(VIEWPORT, 7);
    select(&mut st, "orange");
    ticks(&mut st, 0.3);
    select(&mut st, "yellow");
    let dest = st.scene().entity("yellow").unwrap().world_position;
    assert_eq!(st.focus_target(), Some("yellow"));
    ticks(&mut st, 2.0);
    assert!(
        st.orbit_target().distance(dest) < 0.5,
        "stale completion must not win: {:?}",
        st.orbit_target()
    );
}

#[test]
fn same_seed_replays_the_same_float_animation() {
    let mut a = SceneState::new(VIEWPORT, 42);
    let mut b = SceneState::new(VIEWPORT, 42);
    ticks(&mut a, 1.0);
    ticks(&mut b, 1.0);
    for (ea, eb) in a.scene().entities.iter().zip(b.scene().entities.iter()) {
        assert_eq!(ea.world_position, eb.world_position, "seed must replay {}", ea.id);
    }
}
