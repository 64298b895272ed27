// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Mul, MulAssign};

use tracing::debug;

use crate::error::{AffineError, Result};
use crate::math::{Axis, Row};
use crate::tolerance::Tolerance;

/// Row‑major 4×4 affine matrix.
///
/// - Rows `x`, `y`, `z` hold the linear (rotation + scale) block; their 4th
///   column is conventionally `0`.
/// - Row `p` holds the translation, conventionally `(tx, ty, tz, 1)`.
/// - Any 16 floats are accepted; the conventions are only assumed by
///   [`Matrix::multiply`] and [`Matrix::mirror`].
///
/// The flat layout (`xx, xy, xz, xw, yx, …, pw`) is what host transform APIs
/// expect for a 16-float affine matrix, so [`Matrix::to_list`] and iteration
/// order are part of the public contract.
///
/// # Examples
/// ```
/// use warp_affine::{Axis, Matrix};
/// let m = Matrix::from_translation(1.0, 2.0, 3.0).mirrored(Axis::Y);
/// assert_eq!(m.translation(), [1.0, -2.0, 3.0]);
/// assert_eq!(m.rows()[1], [0.0, -1.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix {
    data: [f64; 16],
}

impl Matrix {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // x
                0.0, 1.0, 0.0, 0.0, // y
                0.0, 0.0, 1.0, 0.0, // z
                0.0, 0.0, 0.0, 1.0, // p
            ],
        }
    }

    /// Builds a pure translation.
    pub const fn from_translation(tx: f64, ty: f64, tz: f64) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // x
                0.0, 1.0, 0.0, 0.0, // y
                0.0, 0.0, 1.0, 0.0, // z
                tx, ty, tz, 1.0, // p
            ],
        }
    }

    /// Creates a matrix from row-major data (`x`, `y`, `z`, `p` rows).
    pub const fn new(data: [f64; 16]) -> Self {
        Self { data }
    }

    /// Creates a matrix from four rows in `x`, `y`, `z`, `p` order.
    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        let [x, y, z, p] = rows;
        Self {
            data: [
                x[0], x[1], x[2], x[3], //
                y[0], y[1], y[2], y[3], //
                z[0], z[1], z[2], z[3], //
                p[0], p[1], p[2], p[3],
            ],
        }
    }

    /// Returns the 16 values in row-major order.
    pub const fn to_list(&self) -> [f64; 16] {
        self.data
    }

    /// Returns an independent copy.
    pub const fn copy(&self) -> Self {
        *self
    }

    /// Iterates the 16 values in [`Matrix::to_list`] order.
    pub fn iter(&self) -> core::array::IntoIter<f64, 16> {
        self.data.into_iter()
    }

    const fn at(&self, row: usize, col: usize) -> f64 {
        self.data[row * 4 + col]
    }

    /// Returns one row.
    pub const fn row(&self, row: Row) -> [f64; 4] {
        let r = row.index();
        [
            self.at(r, 0),
            self.at(r, 1),
            self.at(r, 2),
            self.at(r, 3),
        ]
    }

    /// Returns the four rows in `x`, `y`, `z`, `p` order.
    pub const fn rows(&self) -> [[f64; 4]; 4] {
        [
            self.row(Row::X),
            self.row(Row::Y),
            self.row(Row::Z),
            self.row(Row::P),
        ]
    }

    /// Returns the four columns; column `i` is element `i` of every row.
    pub fn columns(&self) -> [[f64; 4]; 4] {
        core::array::from_fn(|col| core::array::from_fn(|row| self.at(row, col)))
    }

    /// First three entries of the translation row.
    pub const fn translation(&self) -> [f64; 3] {
        [self.at(3, 0), self.at(3, 1), self.at(3, 2)]
    }

    /// Negates the column selected by `axis` across all four rows.
    ///
    /// Mirroring twice on the same axis restores the original matrix.
    pub fn mirror(&mut self, axis: Axis) {
        let col = axis.index();
        for row in 0..4 {
            self.data[row * 4 + col] = -self.data[row * 4 + col];
        }
    }

    /// Like [`Matrix::mirror`], with the axis given as a `"x"`/`"y"`/`"z"` token.
    ///
    /// # Errors
    /// [`AffineError::UnrecognizedAxis`] for any other token; the matrix is
    /// left unchanged.
    pub fn mirror_named(&mut self, token: &str) -> Result<()> {
        self.mirror(token.parse()?);
        Ok(())
    }

    /// Returns a mirrored copy, leaving `self` untouched.
    pub fn mirrored(&self, axis: Axis) -> Self {
        let mut out = self.copy();
        out.mirror(axis);
        out
    }

    /// Token-based variant of [`Matrix::mirrored`].
    ///
    /// # Errors
    /// [`AffineError::UnrecognizedAxis`] for tokens other than `x`, `y`, `z`.
    pub fn mirrored_named(&self, token: &str) -> Result<Self> {
        Ok(self.mirrored(token.parse()?))
    }

    /// Composes two affine transforms (`self * rhs`).
    ///
    /// The linear blocks are multiplied as 3×3 matrices (the declared 4th
    /// column of both inputs is ignored and emitted as `0`). The translation
    /// row is the component-wise **sum** of both translations with `pw = 1`,
    /// not `t_self + L_self · t_rhs`; this matches the composition host
    /// bindings have always received and must not be "corrected" here.
    ///
    /// # Examples
    /// ```
    /// use warp_affine::Matrix;
    /// let a = Matrix::from_translation(1.0, 0.0, 0.0);
    /// let b = Matrix::from_translation(0.0, 2.0, 0.0);
    /// assert_eq!((a * b).translation(), [1.0, 2.0, 0.0]);
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..3 {
            for col in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[row * 4 + col] = sum;
            }
        }
        let [ax, ay, az] = self.translation();
        let [bx, by, bz] = rhs.translation();
        out[12] = ax + bx;
        out[13] = ay + by;
        out[14] = az + bz;
        out[15] = 1.0;
        Self::new(out)
    }

    /// Not supported for matrices.
    ///
    /// # Errors
    /// Always returns [`AffineError::NotImplemented`].
    #[allow(clippy::unused_self, clippy::needless_pass_by_ref_mut)]
    pub fn normalize(&mut self) -> Result<()> {
        debug!("Matrix::normalize requested");
        Err(AffineError::NotImplemented("Matrix::normalize"))
    }

    /// Not supported for matrices.
    ///
    /// # Errors
    /// Always returns [`AffineError::NotImplemented`].
    #[allow(clippy::unused_self)]
    pub fn normalized(&self) -> Result<Self> {
        debug!("Matrix::normalized requested");
        Err(AffineError::NotImplemented("Matrix::normalized"))
    }

    /// Element-wise comparison under `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: &Tolerance) -> bool {
        tolerance.eq_all(&self.data, &other.data)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f64; 16]> for Matrix {
    fn from(value: [f64; 16]) -> Self {
        Self { data: value }
    }
}

impl From<Matrix> for [f64; 16] {
    fn from(value: Matrix) -> Self {
        value.data
    }
}

impl Mul for Matrix {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<&Matrix> for Matrix {
    type Output = Self;
    fn mul(self, rhs: &Matrix) -> Self::Output {
        self.multiply(rhs)
    }
}

impl MulAssign for Matrix {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl IntoIterator for Matrix {
    type Item = f64;
    type IntoIter = core::array::IntoIter<f64, 16>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl IntoIterator for &Matrix {
    type Item = f64;
    type IntoIter = core::array::IntoIter<f64, 16>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix{:?}", self.data)
    }
}
