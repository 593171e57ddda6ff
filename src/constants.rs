// DOM wiring for the overlay markup in index.html.

pub const CANVAS_ID: &str = "scene-canvas";
pub const HINT_SELECTOR: &str = ".hint";
pub const PANEL_ID_PREFIX: &str = "panel-";
pub const PANEL_CLOSE_SUFFIX: &str = "-close";

// Diamond trigger buttons and the sphere panel each one opens
pub const PANEL_TRIGGERS: [(&str, &str); 4] = [
    ("trigger-orange", "orange"),
    ("trigger-red", "red"),
    ("trigger-yellow", "yellow"),
    ("trigger-small-red", "small-red"),
];

// Seed for the float-phase rng so reloads replay the same motion
pub const SCENE_SEED: u64 = 42;

// Clamp for pathological frame gaps (tab switches)
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
