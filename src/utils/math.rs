// Scalar helpers shared by the shake evaluator.

/// Linearly interpolates between `from` and `to`.
///
/// Written as `(1 - t) * from + t * to` so that `t = 0` returns `from` and
/// `t = 1` returns `to` bit-for-bit.
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    (1.0 - t) * from + t * to
}
