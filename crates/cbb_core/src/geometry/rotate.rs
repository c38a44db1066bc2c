//! Display rotation: a fixed 90-degree transform applied uniformly to shot
//! points and overlay geometry so the baseline renders at the bottom.
//!
//! Orientation-only; classification never sees rotated coordinates.

/// Rotate a hoop-centered point for display: `(x, y) -> (y, -x)`.
///
/// Pure and invertible; applying it four times returns the original point
/// exactly.
#[inline]
pub fn rotate_for_display(x: f32, y: f32) -> (f32, f32) {
    (y, -x)
}
