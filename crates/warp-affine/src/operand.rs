// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Dynamically typed operator inputs for loosely typed callers.
//!
//! The typed operator impls (`Vector3 * f64`, `Vector3 + Vector3`,
//! `Matrix * Matrix`) reject mismatches at compile time. Host bindings and
//! scripted callers hand values over without static types, so [`Operand`]
//! performs the same checks at runtime and reports
//! [`AffineError::TypeMismatch`] instead of coercing.

use tracing::debug;

use crate::error::{AffineError, Result};
use crate::math::{Matrix, Vector3};

/// A value passed to an operator by a dynamically typed caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Integer scalar; converted to `f64` when used.
    Integer(i32),
    /// Floating-point scalar.
    Float(f64),
    /// A vector.
    Vector(Vector3),
    /// A matrix.
    Matrix(Matrix),
    /// Text; never a valid arithmetic operand.
    Text(String),
}

impl Operand {
    /// Short type name used in diagnostics.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Float(_) => "float",
            Self::Vector(_) => "Vector3",
            Self::Matrix(_) => "Matrix",
            Self::Text(_) => "str",
        }
    }

    /// Numeric value for scalar operands.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(f64::from(*v)),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Evaluates `self * rhs`.
    ///
    /// Supported pairings: vector × number (scale) and matrix × matrix
    /// (affine compose).
    ///
    /// # Errors
    /// [`AffineError::TypeMismatch`] for any other pairing, plus whatever the
    /// underlying operation reports (e.g. a zero scale factor).
    ///
    /// # Examples
    /// ```
    /// use warp_affine::{ErrorKind, Operand, Vector3};
    /// let v = Operand::from(Vector3::new(1.0, 2.0, 3.0)?);
    /// assert_eq!(v.mul(&Operand::from(2))?, Operand::from(Vector3::new(2.0, 4.0, 6.0)?));
    /// let err = v.mul(&Operand::from("two")).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    /// # Ok::<(), warp_affine::AffineError>(())
    /// ```
    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        match (self, rhs) {
            (Self::Vector(v), rhs) => match rhs.as_scalar() {
                Some(scalar) => v.scale(scalar).map(Self::Vector),
                None => Err(mismatch("*", self, rhs)),
            },
            (Self::Matrix(a), Self::Matrix(b)) => Ok(Self::Matrix(a.multiply(b))),
            _ => Err(mismatch("*", self, rhs)),
        }
    }

    /// Evaluates `self + rhs`. Only vector + vector is supported.
    ///
    /// # Errors
    /// [`AffineError::TypeMismatch`] for any other pairing, or
    /// [`AffineError::DegenerateVector`] when the sum cancels to zero.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        match (self, rhs) {
            (Self::Vector(a), Self::Vector(b)) => a.add(b).map(Self::Vector),
            _ => Err(mismatch("+", self, rhs)),
        }
    }
}

fn mismatch(op: &'static str, lhs: &Operand, rhs: &Operand) -> AffineError {
    let (lhs, rhs) = (lhs.type_name(), rhs.type_name());
    debug!(op, lhs, rhs, "operand type mismatch");
    AffineError::TypeMismatch { op, lhs, rhs }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Vector3> for Operand {
    fn from(value: Vector3) -> Self {
        Self::Vector(value)
    }
}

impl From<Matrix> for Operand {
    fn from(value: Matrix) -> Self {
        Self::Matrix(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
