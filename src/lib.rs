// Copyright 2025 the Vieta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed-form real roots of low-degree polynomials.
//!
//! Vieta solves linear, quadratic and cubic equations with real
//! coefficients, returning only the real roots. It is built for
//! high-frequency numeric callers such as geometry and physics
//! intersection tests: every solve is a pure, bounded-time computation
//! with no heap allocation, no panics for finite inputs, and no
//! iteration or convergence loop.
//!
//! Roots come back in a fixed-capacity [`Solution`], ascending, with
//! repeated roots reported once. A solver whose leading coefficient is
//! numerically zero defers to the next lower degree, so a flattened
//! cubic behaves exactly as its residual quadratic rather than as "no
//! solution".
//!
//! ```
//! use vieta::solve_cubic;
//!
//! let solution = solve_cubic(2.0, -4.0, -22.0, 24.0).unwrap();
//! let roots = solution.roots().unwrap();
//! assert_eq!(roots.len(), 3);
//! assert!((roots[0] + 3.0).abs() < 1e-9);
//! assert!((roots[1] - 1.0).abs() < 1e-9);
//! assert!((roots[2] - 4.0).abs() < 1e-9);
//! ```
//!
//! Degenerate inputs are reported, never panicked on:
//!
//! ```
//! use vieta::solve_linear;
//!
//! // 0·x + 0 = 0 holds for every real x.
//! assert!(solve_linear(0.0, 0.0).unwrap().is_indeterminate());
//! // NaN and infinite coefficients are rejected up front.
//! assert!(solve_linear(f64::NAN, 1.0).is_err());
//! ```
//!
//! The primary API works in `f64`; the [`f32`](crate::f32) module offers
//! the same three solvers with single-precision coefficients and roots.
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can
//! be disabled, as long as the `libm` feature is enabled. This is useful
//! for `no_std` environments; the crate never allocates either way.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names, clippy::excessive_precision)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("vieta requires either the `std` or `libm` feature");

mod cubic;
pub mod f32;
#[cfg(feature = "libm")]
mod libm_polyfill;
mod linear;
mod quadratic;
mod solution;

pub use crate::cubic::solve_cubic;
pub use crate::linear::solve_linear;
pub use crate::quadratic::solve_quadratic;
pub use crate::solution::{NonFiniteCoeff, Solution};

/// Absolute tolerance below which a coefficient or discriminant is
/// treated as zero.
///
/// Upstream geometric computations feed the solvers coefficients carrying
/// rounding noise, so degeneracy tests (vanishing leading coefficient,
/// vanishing discriminant) never use exact floating-point equality. The
/// value is a tunable covered by the continuity tests; `1e-9` suits `f64`
/// coefficients and `f32` coefficients widened to `f64` alike.
pub const EPSILON: f64 = 1e-9;

/// The zero test used on every classification path.
#[inline]
pub(crate) fn nearly_zero(x: f64) -> bool {
    x > -EPSILON && x < EPSILON
}
