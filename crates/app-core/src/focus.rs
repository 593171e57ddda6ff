//! Timed camera-focus animation toward a selected sphere.
//!
//! State machine: Idle -> Animating -> Idle. Retargeting bumps a generation
//! counter so a superseded animation can never advance or complete; the
//! stale-completion guard is structural, not a compare-ids convention.

use crate::camera::OrbitTarget;
use crate::constants::FOCUS_DURATION_SEC;
use crate::scene::EntityId;
use glam::Vec3;

/// Ease-out cubic: fast start, gentle settle.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}

#[derive(Clone, Copy, Debug)]
struct FocusAnim {
    generation: u64,
    from: Vec3,
    to: Vec3,
    elapsed: f32,
}

pub struct FocusAnimator {
    duration: f32,
    generation: u64,
    focused: Option<EntityId>,
    anim: Option<FocusAnim>,
}

impl Default for FocusAnimator {
    fn default() -> Self {
        Self::new(FOCUS_DURATION_SEC)
    }
}

impl FocusAnimator {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            generation: 0,
            focused: None,
            anim: None,
        }
    }

    /// Start animating the orbit target from its current value toward `to`.
    /// Any in-flight animation is invalidated before the new one is armed.
    pub fn begin(&mut self, id: EntityId, current_target: Vec3, to: Vec3) {
        self.generation += 1;
        self.focused = Some(id);
        self.anim = Some(FocusAnim {
            generation: self.generation,
            from: current_target,
            to,
            elapsed: 0.0,
        });
        log::debug!("[focus] begin {id}");
    }

    /// External clear: stop writing to the orbit target immediately.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.focused = None;
        self.anim = None;
    }

    pub fn target_id(&self) -> Option<EntityId> {
        self.focused
    }

    pub fn is_animating(&self) -> bool {
        self.anim.is_some()
    }

    /// Advance the animation and write the interpolated orbit target. Holds
    /// the destination once the duration elapses, then returns to Idle. A
    /// completion whose generation was superseded never clears the newer
    /// focus id.
    pub fn tick(&mut self, dt: f32, orbit: &mut OrbitTarget) {
        let Some(anim) = &mut self.anim else {
            return;
        };
        if anim.generation != self.generation {
            self.anim = None;
            return;
        }
        anim.elapsed += dt;
        let t = (anim.elapsed / self.duration).min(1.0);
        orbit.set(anim.from.lerp(anim.to, ease_out_cubic(t)));
        if anim.elapsed >= self.duration {
            let gen = anim.generation;
            self.anim = None;
            if gen == self.generation {
                self.focused = None;
            }
        }
    }
}
