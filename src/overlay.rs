//! DOM side of the panel layer: show/hide, placement writes, and bounds
//! measurement for the collision resolver.

use crate::dom;
use app_core::{PanelBounds, SceneState};
use web_sys as web;

/// Write this frame's smoothed placements and hide everything closed.
pub fn apply_placements(document: &web::Document, state: &SceneState) {
    let placements = state.placements();
    for e in &state.scene().entities {
        if state.panels().is_open(e.id) {
            if let Some(p) = placements.iter().find(|p| p.id == e.id) {
                dom::apply_panel_placement(document, p);
            }
        } else {
            dom::hide_panel(document, e.id);
        }
    }
}

/// Measure every open panel's rendered box. Panels that have not laid out
/// yet come back zero-sized and are skipped by the resolver.
pub fn measure_open_bounds(document: &web::Document, state: &SceneState) -> Vec<PanelBounds> {
    state
        .panels()
        .open_ids()
        .filter_map(|id| dom::measure_panel(document, id))
        .collect()
}
