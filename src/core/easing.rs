// Scalar shaping helpers shared by the progress driver, the strand and the door.

#[inline]
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Hermite step between `edge0` and `edge1`; flat outside the edges.
///
/// Degenerate edges (`edge1 <= edge0`) collapse to a hard step at `edge0`.
#[inline]
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge1 <= edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = clamp01((x - edge0) / (edge1 - edge0));
    t * t * (3.0 - 2.0 * t)
}

#[inline]
pub fn smoothstep_pair(edges: (f64, f64), x: f64) -> f64 {
    smoothstep(edges.0, edges.1, x)
}

#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// 0..1 intensity to an 8-bit channel value.
#[inline]
pub fn unit_to_byte(t: f64) -> u8 {
    (255.0 * clamp01(t)).round() as u8
}
