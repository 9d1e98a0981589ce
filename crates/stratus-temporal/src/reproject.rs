//! CPU mirror of the shader's history reprojection math.
//!
//! The shader reconstructs a world position for each ray-marched pixel and
//! projects it with the previous frame's view-projection to find where that
//! point landed in the history buffer. These helpers compute the same
//! mapping on the CPU for tests and tooling.

use glam::{Mat4, Vec2, Vec3, Vec4, Vec4Swizzles};

/// UV coordinate in the history buffer where `world_pos` was visible last
/// frame, or `None` when the point projects behind the camera or outside
/// the frame (history miss; the shader falls back to the current sample).
pub fn history_uv(world_pos: Vec3, previous_view_projection: Mat4) -> Option<Vec2> {
    let clip = previous_view_projection * world_pos.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }

    let ndc = clip.xyz() / clip.w;
    let uv = Vec2::new(ndc.x * 0.5 + 0.5, 0.5 - ndc.y * 0.5);
    if !(0.0..=1.0).contains(&uv.x) || !(0.0..=1.0).contains(&uv.y) {
        return None;
    }
    Some(uv)
}

/// World position for a screen UV at a given clip-space depth, via the
/// inverse view-projection. Inverse of the mapping [`history_uv`] applies.
pub fn reconstruct_world(uv: Vec2, ndc_depth: f32, inverse_view_projection: Mat4) -> Vec3 {
    let ndc = Vec4::new(uv.x * 2.0 - 1.0, 1.0 - uv.y * 2.0, ndc_depth, 1.0);
    let world = inverse_view_projection * ndc;
    world.xyz() / world.w
}
