// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, Mul};

use tracing::debug;

use crate::error::{AffineError, Result};
use crate::tolerance::Tolerance;

/// Non-degenerate 3D vector.
///
/// * Components are finite `f64` values.
/// * The magnitude is always strictly positive: the zero vector cannot be
///   constructed, and every operation that produces or mutates a vector
///   re-checks this before committing.
/// * `x² + y² + z²` must be a normal, finite `f64`. Triples whose squared
///   magnitude underflows into the subnormal range (or to zero) or overflows
///   are rejected, so normalizing never loses precision.
/// * There is deliberately no `Default`; `(0, 0, 0)` is not a valid value.
///
/// # Examples
/// ```
/// use warp_affine::Vector3;
/// let v = Vector3::new(3, 0, 4)?;
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(v.as_tuple(), (3.0, 0.0, 4.0));
/// assert!(Vector3::new(0.0, 0.0, 0.0).is_err());
/// # Ok::<(), warp_affine::AffineError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector3 {
    data: [f64; 3],
}

impl Vector3 {
    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self {
        data: [1.0, 0.0, 0.0],
    };

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self {
        data: [0.0, 1.0, 0.0],
    };

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self {
        data: [0.0, 0.0, 1.0],
    };

    /// Creates a vector from components.
    ///
    /// Anything convertible to `f64` is accepted, so integer literals work.
    ///
    /// # Errors
    /// [`AffineError::NonFiniteComponent`] if a component is NaN or infinite;
    /// [`AffineError::DegenerateVector`] if the squared magnitude is below
    /// [`f64::MIN_POSITIVE`] or infinite.
    pub fn new(x: impl Into<f64>, y: impl Into<f64>, z: impl Into<f64>) -> Result<Self> {
        Self::from_components([x.into(), y.into(), z.into()])
    }

    fn from_components(data: [f64; 3]) -> Result<Self> {
        let [x, y, z] = data;
        if !data.iter().all(|c| c.is_finite()) {
            debug!(x, y, z, "rejected non-finite vector");
            return Err(AffineError::NonFiniteComponent { x, y, z });
        }
        let squared = squared_magnitude(data);
        if !(squared >= f64::MIN_POSITIVE && squared.is_finite()) {
            let magnitude = squared.sqrt();
            debug!(x, y, z, magnitude, "rejected degenerate vector");
            return Err(AffineError::DegenerateVector { magnitude });
        }
        Ok(Self { data })
    }

    /// X component.
    pub const fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f64 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f64 {
        self.data[2]
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f64; 3] {
        self.data
    }

    /// Returns the components as an `(x, y, z)` tuple.
    ///
    /// This is the translation triple handed to host transform APIs.
    pub const fn as_tuple(&self) -> (f64, f64, f64) {
        (self.data[0], self.data[1], self.data[2])
    }

    /// Iterates the components in `x, y, z` order.
    pub fn iter(&self) -> core::array::IntoIter<f64, 3> {
        self.data.into_iter()
    }

    /// Returns an independent copy.
    pub const fn copy(&self) -> Self {
        *self
    }

    /// Euclidean length `sqrt(x² + y² + z²)`; always strictly positive.
    pub fn magnitude(&self) -> f64 {
        squared_magnitude(self.data).sqrt()
    }

    /// Rescales the vector in place so its magnitude equals `value`.
    ///
    /// # Errors
    /// [`AffineError::InvalidMagnitude`] if `value` is not strictly positive
    /// and finite. [`AffineError::DegenerateVector`] if `value` is so small
    /// or so large that the rescaled vector leaves the valid range (roughly
    /// `1.5e-154 ..= 1.3e154`). The vector is left unchanged on error.
    /// `set_magnitude(1.0)` never fails.
    pub fn set_magnitude(&mut self, value: f64) -> Result<()> {
        if !(value > 0.0 && value.is_finite()) {
            debug!(value, "rejected target magnitude");
            return Err(AffineError::InvalidMagnitude { value });
        }
        // Unit components are bounded by 1; only `value` can leave the valid range.
        let magnitude = self.magnitude();
        *self = Self::from_components(self.data.map(|c| c / magnitude * value))?;
        Ok(())
    }

    /// Scales the vector in place to unit magnitude.
    ///
    /// Cannot fail: the squared magnitude is a normal float, so each
    /// component divides to a value bounded by 1 whose squares sum to ~1.
    pub fn normalize(&mut self) {
        let magnitude = self.magnitude();
        self.data = self.data.map(|c| c / magnitude);
    }

    /// Returns a unit-length copy, leaving `self` untouched.
    pub fn normalized(&self) -> Self {
        let mut out = self.copy();
        out.normalize();
        out
    }

    /// Multiplies each component by `scalar`.
    ///
    /// # Errors
    /// [`AffineError::NonFiniteComponent`] for a non-finite `scalar` or when a
    /// product overflows to infinity. [`AffineError::DegenerateVector`] when
    /// the product is the zero vector (e.g. `scalar == 0.0`) or its squared
    /// magnitude underflows or overflows.
    pub fn scale(&self, scalar: f64) -> Result<Self> {
        Self::from_components(self.data.map(|c| c * scalar))
    }

    /// Adds two vectors component-wise.
    ///
    /// # Errors
    /// [`AffineError::DegenerateVector`] when the sum cancels to zero (or
    /// nearly so), or its squared magnitude overflows.
    pub fn add(&self, other: &Self) -> Result<Self> {
        Self::from_components([
            self.data[0] + other.data[0],
            self.data[1] + other.data[1],
            self.data[2] + other.data[2],
        ])
    }

    /// Component-wise comparison under `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: &Tolerance) -> bool {
        tolerance.eq_all(&self.data, &other.data)
    }
}

fn squared_magnitude([x, y, z]: [f64; 3]) -> f64 {
    x * x + y * y + z * z
}

impl Mul<f64> for Vector3 {
    type Output = Result<Self>;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<i32> for Vector3 {
    type Output = Result<Self>;

    fn mul(self, rhs: i32) -> Self::Output {
        self.scale(f64::from(rhs))
    }
}

impl Add for Vector3 {
    type Output = Result<Self>;

    fn add(self, rhs: Self) -> Self::Output {
        Vector3::add(&self, &rhs)
    }
}

impl<'a> Add<&'a Vector3> for &'a Vector3 {
    type Output = Result<Vector3>;

    fn add(self, rhs: &'a Vector3) -> Self::Output {
        Vector3::add(self, rhs)
    }
}

impl IntoIterator for Vector3 {
    type Item = f64;
    type IntoIter = core::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl IntoIterator for &Vector3 {
    type Item = f64;
    type IntoIter = core::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<[f64; 3]> for Vector3 {
    type Error = AffineError;

    fn try_from(value: [f64; 3]) -> Result<Self> {
        Self::from_components(value)
    }
}

impl TryFrom<(f64, f64, f64)> for Vector3 {
    type Error = AffineError;

    fn try_from((x, y, z): (f64, f64, f64)) -> Result<Self> {
        Self::from_components([x, y, z])
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(value: Vector3) -> Self {
        value.data
    }
}

impl From<Vector3> for (f64, f64, f64) {
    fn from(value: Vector3) -> Self {
        value.as_tuple()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vector3(x={:?}, y={:?}, z={:?})",
            self.data[0], self.data[1], self.data[2]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_magnitude_must_stay_normal() {
        assert!(Vector3::new(1e-200, 0.0, 0.0).is_err());
        assert!(Vector3::new(1e300, 1e300, 0.0).is_err());
        assert!(Vector3::new(5e-324, 5e-324, 5e-324).is_err());
        let small = Vector3::new(1e-150, 0.0, 0.0).unwrap();
        assert!((small.normalized().magnitude() - 1.0).abs() <= 1e-12);
        let big = Vector3::new(1e150, 1e150, 0.0).unwrap();
        assert!((big.normalized().magnitude() - 1.0).abs() <= 1e-12);
    }

    #[test]
    fn set_magnitude_failure_leaves_receiver_intact() {
        let mut v = Vector3::new(1.0, 2.0, 2.0).unwrap();
        let before = v;
        for bad in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            assert!(v.set_magnitude(bad).is_err());
            assert_eq!(v, before);
        }
        assert!(v.set_magnitude(f64::MIN_POSITIVE * f64::EPSILON).is_err());
        assert_eq!(v, before);
    }

    #[test]
    fn display_names_type_and_components() {
        let v = Vector3::new(1, -2, 0.5).unwrap();
        assert_eq!(v.to_string(), "Vector3(x=1.0, y=-2.0, z=0.5)");
    }
}
