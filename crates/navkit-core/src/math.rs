//! Small vector helpers on top of `glam`.

pub type Vec3 = glam::Vec3;

/// Projection parameter of `value` onto the segment `a -> b`, clamped to `[0, 1]`.
///
/// A degenerate segment returns `0`.
pub fn inverse_lerp(a: Vec3, b: Vec3, value: Vec3) -> f32 {
    let ab = b - a;
    let denom = ab.dot(ab);
    if denom <= f32::EPSILON {
        return 0.0;
    }
    ((value - a).dot(ab) / denom).clamp(0.0, 1.0)
}

/// Round each axis to `decimals` digits and return the scaled integers.
///
/// Two vectors that print identically at that precision share a key.
pub fn quantize(v: Vec3, decimals: u32) -> [i32; 3] {
    let scale = 10f32.powi(decimals as i32);
    [
        (v.x * scale).round() as i32,
        (v.y * scale).round() as i32,
        (v.z * scale).round() as i32,
    ]
}

pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Horizontal (XZ) distance between two points.
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    flatten(a - b).length()
}
