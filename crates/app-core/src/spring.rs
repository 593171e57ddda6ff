//! Critically-damped spring smoothing for panel positions and opacity.
//!
//! A retargeted spring never teleports; it redirects toward the new target
//! and converges without sustained oscillation (damping is kept at or above
//! critical for the default stiffness/mass).

use crate::constants::{PANEL_SPRING_DAMPING, PANEL_SPRING_MASS, PANEL_SPRING_STIFFNESS};
use glam::Vec2;

// Integration chunk; keeps semi-implicit Euler stable across long frames.
const MAX_STEP_SEC: f32 = 0.05;

#[derive(Clone, Copy, Debug)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: PANEL_SPRING_STIFFNESS,
            damping: PANEL_SPRING_DAMPING,
            mass: PANEL_SPRING_MASS,
        }
    }
}

/// One spring-damper axis.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spring1D {
    value: f32,
    velocity: f32,
}

impl Spring1D {
    pub fn at(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn step(&mut self, target: f32, p: &SpringParams, dt: f32) {
        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SEC);
            let accel = (p.stiffness * (target - self.value) - p.damping * self.velocity) / p.mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
    }
}

/// Smoothed screen position plus opacity for one open panel.
#[derive(Clone, Copy, Debug)]
pub struct PanelSpring {
    pub params: SpringParams,
    x: Spring1D,
    y: Spring1D,
    opacity: Spring1D,
}

impl PanelSpring {
    /// Spawn at the first target so a freshly opened panel does not fly in
    /// from the origin; opacity starts at zero and fades up.
    pub fn spawn_at(position: Vec2, params: SpringParams) -> Self {
        Self {
            params,
            x: Spring1D::at(position.x),
            y: Spring1D::at(position.y),
            opacity: Spring1D::at(0.0),
        }
    }

    pub fn step(&mut self, target: Vec2, opacity_target: f32, dt: f32) {
        let p = self.params;
        self.x.step(target.x, &p, dt);
        self.y.step(target.y, &p, dt);
        self.opacity.step(opacity_target, &p, dt);
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.value().clamp(0.0, 1.0)
    }
}
