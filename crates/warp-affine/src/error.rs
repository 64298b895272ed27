// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = core::result::Result<T, AffineError>;

/// Coarse classification of an [`AffineError`].
///
/// Bindings map these onto their host's native exception types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An input value was rejected (degenerate vector, unknown axis, ...).
    InvalidArgument,
    /// An operator was applied to an operand of an unsupported type.
    TypeMismatch,
    /// The operation exists on the type but has no implementation.
    NotImplemented,
}

/// Errors emitted by vector and matrix operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AffineError {
    /// A vector's magnitude would be zero, or would overflow to infinity.
    #[error("degenerate vector: magnitude {magnitude} must be finite and greater than 0.0")]
    DegenerateVector {
        /// Magnitude computed for the rejected components.
        magnitude: f64,
    },
    /// A vector component was NaN or infinite.
    #[error("non-finite vector component: ({x}, {y}, {z})")]
    NonFiniteComponent {
        /// Rejected x component.
        x: f64,
        /// Rejected y component.
        y: f64,
        /// Rejected z component.
        z: f64,
    },
    /// A requested magnitude was zero, negative, or non-finite.
    #[error("invalid target magnitude: {value}")]
    InvalidMagnitude {
        /// The rejected magnitude.
        value: f64,
    },
    /// A mirror axis token was not one of `x`, `y`, `z`.
    #[error("unrecognized mirror axis: {0:?}")]
    UnrecognizedAxis(String),
    /// An operator received an operand it does not accept.
    #[error("cannot apply '{op}' to {lhs} and {rhs}")]
    TypeMismatch {
        /// Operator symbol (`*` or `+`).
        op: &'static str,
        /// Type name of the left operand.
        lhs: &'static str,
        /// Type name of the right operand.
        rhs: &'static str,
    },
    /// The named operation is not implemented for this type.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

impl AffineError {
    /// Returns the coarse category of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DegenerateVector { .. }
            | Self::NonFiniteComponent { .. }
            | Self::InvalidMagnitude { .. }
            | Self::UnrecognizedAxis(_) => ErrorKind::InvalidArgument,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::NotImplemented(_) => ErrorKind::NotImplemented,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(
            AffineError::DegenerateVector { magnitude: 0.0 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            AffineError::UnrecognizedAxis("w".into()).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            AffineError::TypeMismatch {
                op: "*",
                lhs: "Vector3",
                rhs: "str"
            }
            .kind(),
            ErrorKind::TypeMismatch
        );
        assert_eq!(
            AffineError::NotImplemented("Matrix::normalize").kind(),
            ErrorKind::NotImplemented
        );
    }

    #[test]
    fn messages_name_the_offending_input() {
        let err = AffineError::UnrecognizedAxis("w".into());
        assert_eq!(err.to_string(), "unrecognized mirror axis: \"w\"");
        let err = AffineError::TypeMismatch {
            op: "+",
            lhs: "Vector3",
            rhs: "Matrix",
        };
        assert_eq!(err.to_string(), "cannot apply '+' to Vector3 and Matrix");
    }
}
