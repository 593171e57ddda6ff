//! The per-frame state machine that composes scene animation, projection,
//! collision layout, centering and camera focus.
//!
//! All inbound interaction is modeled as discrete messages applied in order;
//! one `Tick` drives every time-based subsystem, so there are no implicit
//! ordering dependencies between independent callbacks. Within a tick, all
//! entity positions commit before the collision layer reads them.

use crate::camera::CameraRig;
use crate::collide::{clamp_center, resolve, PanelBounds};
use crate::constants::*;
use crate::focus::FocusAnimator;
use crate::panels::{centered_anchor, PanelController};
use crate::project::{project, Projection, ProjectionEmitter};
use crate::scene::{EntityId, Scene};
use crate::spring::{PanelSpring, SpringParams};
use fnv::FnvHashMap;
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

/// Inbound interaction message.
#[derive(Clone, Copy, Debug)]
pub enum Event {
    /// Toggle the panel for an entity; opening also starts a camera focus.
    Select(EntityId),
    /// Request the centered override for an open panel.
    Center(EntityId),
    /// Pointer hover target changed.
    Hover(Option<EntityId>),
    /// Pointer position in NDC (-1..1), drives the camera sway.
    Pointer(Vec2),
    /// Viewport size changed (pixels).
    Resize(f32, f32),
    /// Drop the camera focus without touching panel state.
    ClearFocus,
    /// Advance all time-based subsystems by `dt` seconds.
    Tick(f32),
}

/// Fixed behavior constants, named here so tests can tighten or stretch
/// them without patching globals.
#[derive(Clone, Copy, Debug)]
pub struct Tuning {
    pub focus_duration: f32,
    pub center_hold: f32,
    pub emit_interval: f32,
    pub emit_epsilon: f32,
    pub min_gap: f32,
    pub settle_delay: f32,
    pub padding: f32,
    pub dim_opacity: f32,
    pub spring: SpringParams,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            focus_duration: FOCUS_DURATION_SEC,
            center_hold: CENTER_HOLD_SEC,
            emit_interval: PROJECT_EMIT_INTERVAL_SEC,
            emit_epsilon: PROJECT_EMIT_EPSILON_PX,
            min_gap: COLLIDE_MIN_GAP_PX,
            settle_delay: COLLIDE_SETTLE_SEC,
            padding: VIEWPORT_PADDING_PX,
            dim_opacity: PANEL_DIM_OPACITY,
            spring: SpringParams::default(),
        }
    }
}

/// Final screen placement of one open panel for this frame.
#[derive(Clone, Copy, Debug)]
pub struct PanelPlacement {
    pub id: EntityId,
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
}

pub struct SceneState {
    scene: Scene,
    rig: CameraRig,
    focus: FocusAnimator,
    panels: PanelController,
    emitter: ProjectionEmitter,
    springs: FnvHashMap<EntityId, PanelSpring>,
    displacements: FnvHashMap<EntityId, Vec2>,
    panel_sizes: FnvHashMap<EntityId, Vec2>,
    settle: Option<f32>,
    awaiting_bounds: bool,
    viewport: Vec2,
    pointer_ndc: Vec2,
    tuning: Tuning,
}

impl SceneState {
    pub fn new(viewport: Vec2, seed: u64) -> Self {
        Self::with_tuning(viewport, seed, Tuning::default())
    }

    pub fn with_tuning(viewport: Vec2, seed: u64, tuning: Tuning) -> Self {
        Self {
            scene: Scene::new(&DEFAULT_SPHERES, &DEFAULT_DECOR, seed),
            rig: CameraRig::new(camera_eye_vec3(), CAMERA_FOV_Y, CAMERA_ZNEAR, CAMERA_ZFAR),
            focus: FocusAnimator::new(tuning.focus_duration),
            panels: PanelController::new(tuning.center_hold),
            emitter: ProjectionEmitter::new(tuning.emit_interval, tuning.emit_epsilon),
            springs: FnvHashMap::default(),
            displacements: FnvHashMap::default(),
            panel_sizes: FnvHashMap::default(),
            settle: None,
            awaiting_bounds: false,
            viewport,
            pointer_ndc: Vec2::ZERO,
            tuning,
        }
    }

    pub fn apply(&mut self, event: Event) {
        match event {
            Event::Select(id) => self.select(id),
            Event::Center(id) => self.panels.center(id),
            Event::Hover(id) => self.scene.set_hovered(id),
            Event::Pointer(ndc) => self.pointer_ndc = ndc,
            Event::Resize(w, h) => {
                self.viewport = Vec2::new(w, h);
                self.mark_layout_dirty(true);
            }
            Event::ClearFocus => self.focus.clear(),
            Event::Tick(dt) => self.tick(dt),
        }
    }

    fn select(&mut self, id: EntityId) {
        let Some(world) = self.scene.entity(id).map(|e| e.world_position) else {
            log::warn!("[select] unknown entity {id}");
            return;
        };
        self.scene.click(id);
        if self.panels.toggle_open(id) {
            let camera = self.rig.camera(self.viewport);
            let first = project(world, &camera, self.viewport);
            self.springs
                .insert(id, PanelSpring::spawn_at(first.position(), self.tuning.spring));
            self.focus.begin(id, self.rig.orbit.get(), world);
            log::info!("[select] open panel {id}");
        } else {
            self.springs.remove(&id);
            self.displacements.remove(&id);
            if self.focus.target_id() == Some(id) {
                self.focus.clear();
            }
            log::info!("[select] close panel {id}");
        }
        self.mark_layout_dirty(true);
    }

    /// Arm or restart the collision settle countdown. Position drift only
    /// arms an idle countdown (restart=false) so continuous animation cannot
    /// starve the resolver; layout-changing events restart it.
    fn mark_layout_dirty(&mut self, restart: bool) {
        if restart || self.settle.is_none() {
            self.settle = Some(self.tuning.settle_delay);
        }
    }

    fn tick(&mut self, dt: f32) {
        // 1. entity animation commits all world positions for this frame
        self.scene.tick(dt);
        // 2. camera: sway writes the eye, the animator alone writes the
        //    orbit target
        self.rig.apply_sway(self.pointer_ndc, dt);
        self.focus.tick(dt, &mut self.rig.orbit);
        // 3. projection, throttled toward downstream consumers
        let camera = self.rig.camera(self.viewport);
        let raw: SmallVec<[(EntityId, Projection); 8]> = self
            .scene
            .entities
            .iter()
            .map(|e| (e.id, project(e.world_position, &camera, self.viewport)))
            .collect();
        if self.emitter.update(dt, raw) {
            self.mark_layout_dirty(false);
        }
        // 4. centering expiry
        self.panels.tick(dt);
        // 5. collision settle countdown -> request fresh bounds from host
        if let Some(remaining) = &mut self.settle {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.settle = None;
                self.awaiting_bounds = self.panels.open_count() > 0;
            }
        }
        // 6. springs toward final targets
        let anchor = centered_anchor(self.viewport);
        for id in self.panels.open_ids() {
            let Some(spring) = self.springs.get_mut(&id) else {
                continue;
            };
            let committed = self.emitter.get(id);
            let centered = self.panels.centered() == Some(id);
            let (target, opacity) = if centered {
                (anchor, 1.0)
            } else {
                let (tracked, visible) = match committed {
                    Some(p) => (p.position(), p.visible),
                    None => (spring.position(), true),
                };
                let displaced =
                    tracked + self.displacements.get(&id).copied().unwrap_or(Vec2::ZERO);
                let size = self.panel_sizes.get(&id).copied().unwrap_or(Vec2::ZERO);
                let clamped =
                    clamp_center(displaced, size, self.viewport, self.tuning.padding);
                let o = if visible { 1.0 } else { self.tuning.dim_opacity };
                (clamped, o)
            };
            spring.step(target, opacity, dt);
        }
    }

    /// True when the settle delay elapsed and the host should measure the
    /// rendered panel bounds and call [`SceneState::submit_bounds`].
    pub fn needs_bounds(&self) -> bool {
        self.awaiting_bounds
    }

    /// Feed measured bounds and run one resolution pass. Displacements are
    /// stored relative to the measured centers and applied to the tracked
    /// targets until the next pass.
    pub fn submit_bounds(&mut self, bounds: &[PanelBounds]) {
        self.awaiting_bounds = false;
        for b in bounds {
            if b.is_valid() {
                self.panel_sizes.insert(b.id, b.size);
            }
        }
        let adjusted = resolve(bounds, self.tuning.min_gap, self.viewport, self.tuning.padding);
        self.displacements.clear();
        for a in &adjusted {
            self.displacements.insert(a.id, a.displacement);
        }
    }

    /// Smoothed placements for every open panel, ready to render.
    pub fn placements(&self) -> SmallVec<[PanelPlacement; 8]> {
        self.panels
            .open_ids()
            .filter_map(|id| {
                self.springs.get(&id).map(|s| {
                    let p = s.position();
                    PanelPlacement {
                        id,
                        x: p.x,
                        y: p.y,
                        opacity: s.opacity(),
                    }
                })
            })
            .collect()
    }

    /// Latest committed (throttled) projections, keyed by entity.
    pub fn projections(&self) -> impl Iterator<Item = (&EntityId, &Projection)> {
        self.emitter.committed()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn panels(&self) -> &PanelController {
        &self.panels
    }

    pub fn focus_target(&self) -> Option<EntityId> {
        self.focus.target_id()
    }

    pub fn orbit_target(&self) -> Vec3 {
        self.rig.orbit.get()
    }

    /// Read-only camera snapshot for this frame (picking, rendering).
    pub fn camera(&self) -> crate::camera::Camera {
        self.rig.camera(self.viewport)
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }
}
