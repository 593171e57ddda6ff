//! World-to-screen projection and the throttled emitter that feeds the
//! panel layer.

use crate::camera::Camera;
use crate::constants::{PROJECT_EMIT_EPSILON_PX, PROJECT_EMIT_INTERVAL_SEC, PROJECT_MAX_DISTANCE};
use crate::scene::EntityId;
use fnv::FnvHashMap;
use glam::{Vec2, Vec3};

/// Screen-space position of an entity for one frame. Off-screen and
/// degenerate cases are reported through `visible`, never as an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub x: f32,
    pub y: f32,
    pub visible: bool,
}

impl Projection {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Project a world position into viewport pixels.
///
/// NDC x/y in [-1, 1] map to [0, width] and [height, 0] (screen y grows
/// downward). Visible means: in front of the camera, inside the depth range,
/// and within the bounded tracking distance of the eye.
pub fn project(world: Vec3, camera: &Camera, viewport: Vec2) -> Projection {
    let clip = camera.view_projection() * world.extend(1.0);
    let w = clip.w;
    let ndc = if w.abs() > f32::EPSILON {
        clip.truncate() / w
    } else {
        Vec3::ZERO
    };
    let x = (ndc.x + 1.0) * 0.5 * viewport.x;
    let y = (1.0 - ndc.y) * 0.5 * viewport.y;
    let dist = camera.eye.distance(world);
    let visible = w > 0.0 && ndc.z <= 1.0 && dist > 0.0 && dist < PROJECT_MAX_DISTANCE;
    Projection { x, y, visible }
}

/// Rate-limits projection updates to downstream consumers: at most one
/// commit per interval, and a commit only moves a position that changed by
/// more than the pixel epsilon (or flipped visibility).
pub struct ProjectionEmitter {
    interval: f32,
    epsilon: f32,
    since_emit: f32,
    committed: FnvHashMap<EntityId, Projection>,
}

impl Default for ProjectionEmitter {
    fn default() -> Self {
        Self::new(PROJECT_EMIT_INTERVAL_SEC, PROJECT_EMIT_EPSILON_PX)
    }
}

impl ProjectionEmitter {
    pub fn new(interval: f32, epsilon: f32) -> Self {
        Self {
            interval,
            epsilon,
            since_emit: interval, // first frame commits immediately
            committed: FnvHashMap::default(),
        }
    }

    /// Feed this frame's raw projections. Returns true when the committed
    /// snapshot changed.
    pub fn update<I>(&mut self, dt: f32, raw: I) -> bool
    where
        I: IntoIterator<Item = (EntityId, Projection)>,
    {
        self.since_emit += dt;
        if self.since_emit < self.interval {
            return false;
        }
        self.since_emit = 0.0;
        let mut changed = false;
        for (id, p) in raw {
            match self.committed.get(&id) {
                Some(prev) => {
                    let moved = (p.position() - prev.position()).length() > self.epsilon;
                    if moved || p.visible != prev.visible {
                        self.committed.insert(id, p);
                        changed = true;
                    }
                }
                None => {
                    self.committed.insert(id, p);
                    changed = true;
                }
            }
        }
        changed
    }

    pub fn get(&self, id: &str) -> Option<&Projection> {
        self.committed.get(id)
    }

    pub fn committed(&self) -> impl Iterator<Item = (&EntityId, &Projection)> {
        self.committed.iter()
    }
}
