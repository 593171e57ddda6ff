//! Camera state shared between the interaction core and the renderer.
//!
//! The orbit target is deliberately wrapped in a handle type whose setter is
//! crate-private: while a focus animation is running, the animator is the
//! only writer. Everything else reads a per-frame snapshot.

use crate::constants::{CAMERA_SWAY_RANGE, CAMERA_SWAY_RATE};
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// The point the camera pivots around. Readable anywhere; written only by
/// the focus animator through the crate-private setter.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrbitTarget(Vec3);

impl OrbitTarget {
    pub fn get(&self) -> Vec3 {
        self.0
    }
    pub(crate) fn set(&mut self, v: Vec3) {
        self.0 = v;
    }
}

/// Camera rig: fixed base eye plus a pointer-driven sway offset, and the
/// animated orbit target.
#[derive(Clone, Debug)]
pub struct CameraRig {
    base_eye: Vec3,
    sway: Vec2,
    pub orbit: OrbitTarget,
    fovy_radians: f32,
    znear: f32,
    zfar: f32,
}

impl CameraRig {
    pub fn new(base_eye: Vec3, fovy_radians: f32, znear: f32, zfar: f32) -> Self {
        Self {
            base_eye,
            sway: Vec2::ZERO,
            orbit: OrbitTarget::default(),
            fovy_radians,
            znear,
            zfar,
        }
    }

    /// Ease the eye's x/y toward the pointer offset. Writes only the eye;
    /// the orbit target stays untouched here.
    pub fn apply_sway(&mut self, pointer_ndc: Vec2, dt: f32) {
        let goal = pointer_ndc * CAMERA_SWAY_RANGE;
        let alpha = 1.0 - (-dt * CAMERA_SWAY_RATE).exp();
        self.sway += (goal - self.sway) * alpha;
    }

    pub fn eye(&self) -> Vec3 {
        self.base_eye + Vec3::new(self.sway.x, self.sway.y, 0.0)
    }

    /// Immutable snapshot for this frame's projection and picking.
    pub fn camera(&self, viewport: Vec2) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.orbit.get(),
            up: Vec3::Y,
            aspect: viewport.x / viewport.y.max(1.0),
            fovy_radians: self.fovy_radians,
            znear: self.znear,
            zfar: self.zfar,
        }
    }
}
