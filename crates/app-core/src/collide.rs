//! Single-pass panel separation and viewport clamping.
//!
//! Each colliding pair is resolved independently and the corrections are
//! accumulated additively per panel; residual overlap between three or more
//! clustered panels is accepted rather than iterating to convergence.

use crate::scene::EntityId;
use glam::Vec2;
use smallvec::SmallVec;

/// Measured bounding box of a rendered panel, in viewport pixels.
#[derive(Clone, Copy, Debug)]
pub struct PanelBounds {
    pub id: EntityId,
    pub center: Vec2,
    pub size: Vec2,
}

impl PanelBounds {
    /// Bounds are only usable once the panel has actually been laid out.
    pub fn is_valid(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }
}

/// Post-resolution position: clamped center plus the displacement relative
/// to the measured center.
#[derive(Clone, Copy, Debug)]
pub struct Adjusted {
    pub id: EntityId,
    pub center: Vec2,
    pub displacement: Vec2,
}

/// Clamp a box center so the whole box stays inside the padded viewport.
pub fn clamp_center(center: Vec2, size: Vec2, viewport: Vec2, padding: f32) -> Vec2 {
    let half = size * 0.5;
    let lo = Vec2::splat(padding) + half;
    let hi = (viewport - Vec2::splat(padding) - half).max(lo);
    center.clamp(lo, hi)
}

/// One separation pass over every unordered pair of valid bounds, then a
/// viewport clamp. With fewer than two valid bounds the input passes through
/// unchanged (stale or zero-sized measurements must not push anything).
pub fn resolve(
    bounds: &[PanelBounds],
    min_gap: f32,
    viewport: Vec2,
    padding: f32,
) -> SmallVec<[Adjusted; 8]> {
    let valid: SmallVec<[usize; 8]> = bounds
        .iter()
        .enumerate()
        .filter(|(_, b)| b.is_valid())
        .map(|(i, _)| i)
        .collect();

    let mut out: SmallVec<[Adjusted; 8]> = bounds
        .iter()
        .map(|b| Adjusted {
            id: b.id,
            center: b.center,
            displacement: Vec2::ZERO,
        })
        .collect();

    if valid.len() < 2 {
        return out;
    }

    let mut disp: SmallVec<[Vec2; 8]> = SmallVec::from_elem(Vec2::ZERO, bounds.len());
    for (vi, &i) in valid.iter().enumerate() {
        for &j in &valid[vi + 1..] {
            let a = &bounds[i];
            let b = &bounds[j];
            let delta = b.center - a.center;
            let dist = delta.length();
            if dist <= f32::EPSILON {
                // coincident centers: no defined push direction
                continue;
            }
            let combined = a.size.x * 0.5 + b.size.x * 0.5 + min_gap;
            if dist < combined {
                let push = delta / dist * (combined - dist) * 0.5;
                disp[i] -= push;
                disp[j] += push;
            }
        }
    }

    for &i in &valid {
        let b = &bounds[i];
        let center = clamp_center(b.center + disp[i], b.size, viewport, padding);
        out[i] = Adjusted {
            id: b.id,
            center,
            displacement: center - b.center,
        };
    }
    out
}
