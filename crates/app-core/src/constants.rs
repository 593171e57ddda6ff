use glam::Vec3;

// Shared tuning constants for the scene, panel tracking and camera focus.

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.0, 8.0];
pub const CAMERA_FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const CAMERA_SWAY_RANGE: f32 = 2.0; // world units of eye travel at full pointer deflection
pub const CAMERA_SWAY_RATE: f32 = 3.0; // exponential approach rate (1/s)

// Projection / tracking
pub const PROJECT_MAX_DISTANCE: f32 = 50.0; // beyond this range an entity is treated as off-screen
pub const PROJECT_EMIT_INTERVAL_SEC: f32 = 0.033; // ~30 downstream updates per second
pub const PROJECT_EMIT_EPSILON_PX: f32 = 0.5; // ignore sub-pixel jitter

// Panel spring (slightly over critical: 2*sqrt(k*m) = 21.9)
pub const PANEL_SPRING_STIFFNESS: f32 = 120.0;
pub const PANEL_SPRING_DAMPING: f32 = 22.0;
pub const PANEL_SPRING_MASS: f32 = 1.0;
pub const PANEL_DIM_OPACITY: f32 = 0.8; // tracked but currently not visible

// Panel collision layout
pub const COLLIDE_MIN_GAP_PX: f32 = 180.0;
pub const COLLIDE_SETTLE_SEC: f32 = 0.1; // let DOM layout settle before measuring bounds
pub const VIEWPORT_PADDING_PX: f32 = 20.0;

// Panel centering
pub const CENTER_HOLD_SEC: f32 = 2.5;
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;
pub const MOBILE_ANCHOR_TOP_PX: f32 = 96.0; // below the page header at narrow widths

// Camera focus
pub const FOCUS_DURATION_SEC: f32 = 1.5;

// Sphere animation
pub const FLOAT_AMPLITUDE: f32 = 0.2;
pub const ROT_SPEED_X: f32 = 0.3; // rad/s
pub const ROT_SPEED_Y: f32 = 0.48;
pub const WIRE_PULSE_AMPLITUDE: f32 = 0.05;
pub const WIRE_PULSE_RATE: f32 = 2.0;
pub const HOVER_SCALE: f32 = 1.05;
pub const CLICK_SCALE: f32 = 1.1;
pub const CLICK_PULSE_SEC: f32 = 0.2;
pub const DECOR_FLOAT_AMPLITUDE: f32 = 0.03;
pub const DECOR_FLOAT_RATE: f32 = 0.3;
pub const DECOR_ROT_SPEED: f32 = 0.09;

/// Interactive sphere definition: id, world position, scale, color.
#[derive(Clone, Copy, Debug)]
pub struct SphereConfig {
    pub id: &'static str,
    pub position: [f32; 3],
    pub scale: f32,
    pub color: [f32; 3],
}

// The four clickable spheres of the landing scene
pub const DEFAULT_SPHERES: [SphereConfig; 4] = [
    SphereConfig {
        id: "orange",
        position: [-3.0, 2.0, 0.0],
        scale: 1.2,
        color: [1.0, 0.42, 0.208],
    },
    SphereConfig {
        id: "red",
        position: [0.0, 0.0, -2.0],
        scale: 2.5,
        color: [1.0, 0.188, 0.188],
    },
    SphereConfig {
        id: "yellow",
        position: [3.0, -2.0, 1.0],
        scale: 1.0,
        color: [1.0, 0.647, 0.0],
    },
    SphereConfig {
        id: "small-red",
        position: [4.0, 1.0, 2.0],
        scale: 0.6,
        color: [1.0, 0.25, 0.25],
    },
];

// Non-interactive background spheres (wireframe only)
pub const DEFAULT_DECOR: [SphereConfig; 3] = [
    SphereConfig {
        id: "dust-near",
        position: [-5.0, 3.0, -6.0],
        scale: 0.8,
        color: [0.6, 0.35, 0.2],
    },
    SphereConfig {
        id: "dust-far",
        position: [5.0, -3.0, -8.0],
        scale: 1.4,
        color: [0.5, 0.2, 0.2],
    },
    SphereConfig {
        id: "dust-low",
        position: [-2.0, -4.0, -5.0],
        scale: 0.5,
        color: [0.55, 0.45, 0.2],
    },
];

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::new(CAMERA_EYE[0], CAMERA_EYE[1], CAMERA_EYE[2])
}
