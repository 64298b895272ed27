// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Absolute/relative error bounds used by the `approx_eq` helpers.
///
/// The allowed error against a reference value `r` is
/// `max(absolute, relative * |r|)`.
///
/// # Examples
/// ```
/// use warp_affine::Tolerance;
/// let tol = Tolerance::default().with_absolute(1e-3);
/// assert!(tol.within(1.0, 1.0005));
/// assert!(!tol.within(1.0, 1.01));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerance {
    absolute: f64,
    relative: f64,
}

impl Tolerance {
    /// Default absolute bound.
    pub const DEFAULT_ABSOLUTE: f64 = 1e-9;

    /// Default relative bound.
    pub const DEFAULT_RELATIVE: f64 = 1e-9;

    /// Creates a tolerance from explicit bounds.
    ///
    /// Negative bounds are clamped to zero, which demands exact equality.
    pub fn new(absolute: f64, relative: f64) -> Self {
        Self {
            absolute: absolute.max(0.0),
            relative: relative.max(0.0),
        }
    }

    /// Returns a copy with a different absolute bound.
    pub fn with_absolute(self, absolute: f64) -> Self {
        Self::new(absolute, self.relative)
    }

    /// Returns a copy with a different relative bound.
    pub fn with_relative(self, relative: f64) -> Self {
        Self::new(self.absolute, relative)
    }

    /// Absolute bound.
    pub const fn absolute(&self) -> f64 {
        self.absolute
    }

    /// Relative bound.
    pub const fn relative(&self) -> f64 {
        self.relative
    }

    /// Largest error accepted when comparing against `reference`.
    pub fn allowed_error(&self, reference: f64) -> f64 {
        self.absolute.max(self.relative * reference.abs())
    }

    /// Whether `actual` lies within the allowed error of `expected`.
    pub fn within(&self, expected: f64, actual: f64) -> bool {
        (actual - expected).abs() <= self.allowed_error(expected)
    }

    pub(crate) fn eq_all(&self, expected: &[f64], actual: &[f64]) -> bool {
        expected.len() == actual.len()
            && expected.iter().zip(actual).all(|(e, a)| self.within(*e, *a))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: Self::DEFAULT_ABSOLUTE,
            relative: Self::DEFAULT_RELATIVE,
        }
    }
}
