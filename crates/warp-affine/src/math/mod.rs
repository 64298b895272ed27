// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Vector and matrix primitives.
//!
//! All arithmetic is `f64`. Neither type depends on the other; there is no
//! vector-times-matrix operation here.

use core::fmt;
use core::str::FromStr;

use tracing::debug;

use crate::error::AffineError;

mod mat4;
mod vec3;

pub use mat4::Matrix;
pub use vec3::Vector3;

/// Cartesian axis used to select a matrix column for mirroring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// First column (`xx, yx, zx, px`).
    X,
    /// Second column (`xy, yy, zy, py`).
    Y,
    /// Third column (`xz, yz, zz, pz`).
    Z,
}

impl Axis {
    /// All mirrorable axes in column order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Column index addressed by this axis.
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Lower-case token accepted by [`Axis::from_str`].
    pub const fn token(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

impl FromStr for Axis {
    type Err = AffineError;

    /// Parses `"x"`, `"y"` or `"z"`. Tokens are case-sensitive.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            other => {
                debug!(token = other, "rejected mirror axis");
                Err(AffineError::UnrecognizedAxis(other.to_owned()))
            }
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Logical row of a [`Matrix`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Row {
    /// Linear row `x` (`xx, xy, xz, xw`).
    X,
    /// Linear row `y` (`yx, yy, yz, yw`).
    Y,
    /// Linear row `z` (`zx, zy, zz, zw`).
    Z,
    /// Translation row `p` (`px, py, pz, pw`).
    P,
}

impl Row {
    /// Rows in storage order.
    pub const ALL: [Self; 4] = [Self::X, Self::Y, Self::Z, Self::P];

    /// Index of the row in storage order.
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
            Self::P => 3,
        }
    }
}
