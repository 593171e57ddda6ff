use app_core::Camera;
use glam::{Vec2, Vec3, Vec4};

/// Compute a world-space ray from viewport pixel coordinates using this
/// frame's camera snapshot.
///
/// Returns `(ray_origin, ray_direction)` in world space.
#[inline]
pub fn screen_to_world_ray(camera: &Camera, px: Vec2, viewport: Vec2) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * px.x / viewport.x.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * px.y / viewport.y.max(1.0));
    let inv = camera.view_projection().inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let far: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (far - ro).normalize();
    (ro, rd)
}
