use crate::foundation::core::Matrix4;

/// Linear blend between two values of the same type.
pub trait Lerp: Sized {
    /// `a + (b - a) * t`, with `t` left unclamped.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Matrix4 {
    // Element-wise. Rotations blend through the scaled chord, not along the arc.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let mut out = [[0.0; 4]; 4];
        for (row, (ra, rb)) in out.iter_mut().zip(a.0.iter().zip(b.0.iter())) {
            for (cell, (va, vb)) in row.iter_mut().zip(ra.iter().zip(rb.iter())) {
                *cell = f64::lerp(va, vb, t);
            }
        }
        Matrix4(out)
    }
}

/// Interpolate every cell of `start` toward `end` by `ratio`.
///
/// `ratio` is not clamped: values outside `[0, 1]` extrapolate.
pub fn interpolate(start: &Matrix4, end: &Matrix4, ratio: f64) -> Matrix4 {
    Matrix4::lerp(start, end, ratio)
}

#[cfg(test)]
#[path = "../../tests/unit/codec/lerp.rs"]
mod tests;
