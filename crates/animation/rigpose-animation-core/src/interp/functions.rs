//! Interpolation helpers:
//! - lerp_f32 / lerp_color (component-wise linear blend)
//! - wrap_degrees (angle deltas onto the short arc)

use rigpose_skeleton_core::Color;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    Color {
        r: lerp_f32(a.r, b.r, t),
        g: lerp_f32(a.g, b.g, t),
        b: lerp_f32(a.b, b.b, t),
        a: lerp_f32(a.a, b.a, t),
    }
}

/// Map an angle in degrees into (-180, 180]. In-range inputs are returned
/// unchanged.
#[inline]
pub fn wrap_degrees(degrees: f32) -> f32 {
    if !degrees.is_finite() || (degrees > -180.0 && degrees <= 180.0) {
        return degrees;
    }
    let wrapped = (degrees + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 {
        180.0
    } else {
        wrapped
    }
}
