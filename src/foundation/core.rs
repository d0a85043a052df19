use std::ops::{Index, IndexMut};

pub use kurbo::Affine;

/// Row-major 4x4 matrix in homogeneous coordinates, the value space of CSS `matrix3d(...)`.
///
/// Row 3 holds the translation (`[tx, ty, tz, 1]` for affine transforms). Codec operations never
/// mutate a matrix in place; they return a new value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Matrix4(pub [[f64; 4]; 4]);

impl Matrix4 {
    /// The identity transform.
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Build a matrix from four rows.
    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self(rows)
    }

    /// Build a matrix from 16 values in row-major order.
    pub fn from_cells(cells: [f64; 16]) -> Self {
        let mut rows = [[0.0; 4]; 4];
        for (i, v) in cells.into_iter().enumerate() {
            rows[i / 4][i % 4] = v;
        }
        Self(rows)
    }

    /// Embed a 2D `matrix(a, b, c, d, tx, ty)` into 3D space.
    pub const fn from_2d(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self([
            [a, b, 0.0, 0.0],
            [c, d, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [tx, ty, 0.0, 1.0],
        ])
    }

    /// Borrow the rows.
    pub fn rows(&self) -> &[[f64; 4]; 4] {
        &self.0
    }

    /// All 16 cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().flatten().copied()
    }

    /// Translation components `[tx, ty, tz]` (row 3, columns 0..=2).
    pub fn translation(&self) -> [f64; 3] {
        [self.0[3][0], self.0[3][1], self.0[3][2]]
    }

    /// Return `true` when every cell differs from `other` by at most `eps`.
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.cells().zip(other.cells()).all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<usize> for Matrix4 {
    type Output = [f64; 4];

    fn index(&self, row: usize) -> &Self::Output {
        &self.0[row]
    }
}

impl IndexMut<usize> for Matrix4 {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.0[row]
    }
}

impl From<[[f64; 4]; 4]> for Matrix4 {
    fn from(rows: [[f64; 4]; 4]) -> Self {
        Self(rows)
    }
}

impl From<Affine> for Matrix4 {
    /// Same embedding as the `matrix(...)` shorthand; kurbo's coefficient order matches CSS.
    fn from(affine: Affine) -> Self {
        let [a, b, c, d, tx, ty] = affine.as_coeffs();
        Self::from_2d(a, b, c, d, tx, ty)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
