use app_core::{Camera, EntityId, Scene};
use glam::{Vec2, Vec3};
use web_sys as web;

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Pointer position in viewport CSS pixels (panels live in this space).
#[inline]
pub fn pointer_viewport_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Pointer position in NDC (-1..1, y up) for the camera sway.
#[inline]
pub fn pointer_ndc(px: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x > 0.0 && viewport.y > 0.0 {
        Vec2::new(
            (2.0 * px.x / viewport.x - 1.0).clamp(-1.0, 1.0),
            (1.0 - 2.0 * px.y / viewport.y).clamp(-1.0, 1.0),
        )
    } else {
        Vec2::ZERO
    }
}

/// Nearest sphere under the pointer, if any. Sphere meshes have unit radius
/// scaled by the entity's visual scale.
pub fn pick_entity(
    scene: &Scene,
    camera: &Camera,
    viewport: Vec2,
    px: Vec2,
) -> Option<EntityId> {
    let (ro, rd) = crate::camera::screen_to_world_ray(camera, px, viewport);
    let mut best: Option<(EntityId, f32)> = None;
    for e in &scene.entities {
        if let Some(t) = ray_sphere(ro, rd, e.world_position, e.scale) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((e.id, t)),
            }
        }
    }
    best.map(|(id, _)| id)
}
