//! Scene construction and per-frame sphere animation.
//!
//! Entities are created once and never destroyed; their world positions
//! mutate every frame through the float animation below.

use crate::constants::*;
use glam::{Vec2, Vec3};
use rand::prelude::*;

/// Stable key for an interactive sphere. Entities come from const scene
/// config, so keys are borrowed for the whole session.
pub type EntityId = &'static str;

#[derive(Clone, Debug)]
pub struct Entity {
    pub id: EntityId,
    pub base_position: Vec3,
    pub world_position: Vec3,
    pub scale: f32,
    pub color: [f32; 3],
    pub rotation: Vec2,
    pub wire_pulse: f32,
    pub hovered: bool,
    phase: f32,
    click_pulse: f32,
}

impl Entity {
    /// Render scale including hover and click feedback.
    pub fn render_scale(&self) -> f32 {
        let m = if self.click_pulse > 0.0 {
            CLICK_SCALE
        } else if self.hovered {
            HOVER_SCALE
        } else {
            1.0
        };
        self.scale * m
    }
}

/// Background wireframe sphere; floats more subtly and is not pickable.
#[derive(Clone, Debug)]
pub struct Decorative {
    pub id: EntityId,
    pub base_position: Vec3,
    pub world_position: Vec3,
    pub scale: f32,
    pub color: [f32; 3],
    pub rotation: Vec2,
    phase: f32,
}

pub struct Scene {
    pub entities: Vec<Entity>,
    pub decorations: Vec<Decorative>,
    elapsed: f32,
}

impl Scene {
    /// Build the scene from config tables. Per-sphere float phases come from
    /// the seeded rng so a given seed reproduces the exact animation.
    pub fn new(spheres: &[SphereConfig], decor: &[SphereConfig], seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let entities = spheres
            .iter()
            .map(|c| Entity {
                id: c.id,
                base_position: Vec3::from_array(c.position),
                world_position: Vec3::from_array(c.position),
                scale: c.scale,
                color: c.color,
                rotation: Vec2::ZERO,
                wire_pulse: 1.0,
                hovered: false,
                phase: rng.gen::<f32>() * 100.0,
                click_pulse: 0.0,
            })
            .collect();
        // Decorative phases are derived from the id so they stay stable
        // independent of rng draw order.
        let decorations = decor
            .iter()
            .map(|c| Decorative {
                id: c.id,
                base_position: Vec3::from_array(c.position),
                world_position: Vec3::from_array(c.position),
                scale: c.scale,
                color: c.color,
                rotation: Vec2::ZERO,
                phase: c.id.as_bytes().first().copied().unwrap_or(0) as f32 * 10.0,
            })
            .collect();
        Self {
            entities,
            decorations,
            elapsed: 0.0,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Advance the float/rotation animation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
        let t = self.elapsed;
        for e in &mut self.entities {
            e.world_position = e.base_position;
            e.world_position.y += (t + e.phase).sin() * FLOAT_AMPLITUDE;
            e.rotation.x += ROT_SPEED_X * dt;
            e.rotation.y += ROT_SPEED_Y * dt;
            e.wire_pulse = 1.0 + (t * WIRE_PULSE_RATE).sin() * WIRE_PULSE_AMPLITUDE;
            e.click_pulse = (e.click_pulse - dt).max(0.0);
        }
        for d in &mut self.decorations {
            d.world_position = d.base_position;
            d.world_position.y += (t * DECOR_FLOAT_RATE + d.phase).sin() * DECOR_FLOAT_AMPLITUDE;
            d.rotation.x += DECOR_ROT_SPEED * dt;
            d.rotation.y += DECOR_ROT_SPEED * 1.5 * dt;
        }
    }

    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Map a runtime string (e.g. from a DOM dataset) back to the canonical
    /// borrowed id used as map key everywhere else.
    pub fn canonical_id(&self, id: &str) -> Option<EntityId> {
        self.entities.iter().find(|e| e.id == id).map(|e| e.id)
    }

    pub fn set_hovered(&mut self, id: Option<&str>) {
        for e in &mut self.entities {
            e.hovered = Some(e.id) == id;
        }
    }

    /// Kick off the brief scale pulse that acknowledges a click.
    pub fn click(&mut self, id: &str) {
        if let Some(e) = self.entities.iter_mut().find(|e| e.id == id) {
            e.click_pulse = CLICK_PULSE_SEC;
        }
    }
}
