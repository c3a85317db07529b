use glam::Vec2;

/// Per-frame positional impulse pushing a particle away from the pointer.
///
/// Linear falloff: zero at `radius` and beyond, `strength` at distance
/// zero. The degenerate zero-distance case (particle exactly under the
/// pointer) has no defined direction and returns `Vec2::ZERO` instead of
/// dividing by zero; NaN must never enter particle state, since the
/// decay/respawn path cannot recover from it.
pub fn pointer_repulsion(pos: Vec2, pointer: Vec2, radius: f32, strength: f32) -> Vec2 {
    let away = pos - pointer;
    let dist = away.length();
    if dist >= radius || dist <= f32::EPSILON {
        return Vec2::ZERO;
    }
    let falloff = (radius - dist) / radius;
    away / dist * falloff * strength
}
