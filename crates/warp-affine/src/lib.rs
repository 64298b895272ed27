// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! warp-affine: non-degenerate 3D vectors and row-major affine matrices.
//!
//! The crate exposes two independent value types:
//!
//! - [`Vector3`]: an `f64` 3-vector whose magnitude is always strictly
//!   positive. Every constructor and mutator re-checks that invariant.
//! - [`Matrix`]: a row-major 4×4 matrix whose rows `x`, `y`, `z` hold the
//!   linear (rotation + scale) block and whose row `p` holds the translation.
//!
//! Host bindings consume the flattened views ([`Vector3::as_tuple`],
//! [`Matrix::to_list`]) positionally, so their ordering is stable API.
//!
//! Rejections are reported through [`AffineError`] and also emitted as
//! `tracing` debug events; the crate never installs a subscriber.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]

mod error;
pub mod math;
mod operand;
mod tolerance;

pub use error::{AffineError, ErrorKind, Result};
pub use math::{Axis, Matrix, Row, Vector3};
pub use operand::Operand;
pub use tolerance::Tolerance;
