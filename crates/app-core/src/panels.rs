//! Open/closed panel state and the exclusive, auto-expiring centered
//! selection.

use crate::constants::{CENTER_HOLD_SEC, MOBILE_ANCHOR_TOP_PX, MOBILE_BREAKPOINT_PX};
use crate::scene::EntityId;
use fnv::FnvHashSet;
use glam::Vec2;

#[derive(Clone, Copy, Debug)]
struct Centered {
    id: EntityId,
    remaining: f32,
}

/// Panels open and close independently; at most one may be centered at a
/// time, and centering expires on its own after the hold duration.
pub struct PanelController {
    open: FnvHashSet<EntityId>,
    centered: Option<Centered>,
    hold: f32,
}

impl Default for PanelController {
    fn default() -> Self {
        Self::new(CENTER_HOLD_SEC)
    }
}

impl PanelController {
    pub fn new(hold: f32) -> Self {
        Self {
            open: FnvHashSet::default(),
            centered: None,
            hold,
        }
    }

    /// Toggle a panel; returns true when the panel is now open. Closing a
    /// centered panel drops the centered selection with it.
    pub fn toggle_open(&mut self, id: EntityId) -> bool {
        if self.open.remove(&id) {
            if self.centered.map(|c| c.id) == Some(id) {
                self.centered = None;
            }
            false
        } else {
            self.open.insert(id);
            true
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    pub fn open_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.open.iter().copied()
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Center an open panel for the hold duration. Re-triggering while
    /// already centered clears immediately (toggle); centering a closed
    /// panel is ignored.
    pub fn center(&mut self, id: EntityId) {
        if self.centered.map(|c| c.id) == Some(id) {
            self.centered = None;
            return;
        }
        if self.open.contains(&id) {
            self.centered = Some(Centered {
                id,
                remaining: self.hold,
            });
            log::debug!("[panels] center {id}");
        }
    }

    pub fn centered(&self) -> Option<EntityId> {
        self.centered.map(|c| c.id)
    }

    /// Count down the centering hold; expiry returns the panel to its
    /// entity-tracked position.
    pub fn tick(&mut self, dt: f32) {
        if let Some(c) = &mut self.centered {
            c.remaining -= dt;
            if c.remaining <= 0.0 {
                self.centered = None;
            }
        }
    }
}

/// Anchor for a centered panel: true viewport center on desktop, a fixed
/// point below the header on mobile widths where true centering would
/// collide with the header.
pub fn centered_anchor(viewport: Vec2) -> Vec2 {
    if viewport.x < MOBILE_BREAKPOINT_PX {
        Vec2::new(viewport.x * 0.5, MOBILE_ANCHOR_TOP_PX)
    } else {
        viewport * 0.5
    }
}
