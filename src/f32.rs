// Copyright 2025 the Vieta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-precision boundary API.
//!
//! The same three solvers as the crate root, taking and returning `f32`
//! uniformly. Intermediate arithmetic is carried out in `f64` — the
//! closed forms shed too many bits in single precision — and the results
//! are rounded back to `f32` at the boundary. A root that lands outside
//! `f32` range is dropped from the set, the same policy the `f64` API
//! applies to roots beyond its own range.

use arrayvec::ArrayVec;

use crate::{NonFiniteCoeff, Solution};

/// Round a double-precision solution down to the `f32` boundary width.
#[allow(clippy::cast_possible_truncation)] // the narrowing is the point
fn narrow<const N: usize>(solution: Solution<f64, N>) -> Solution<f32, N> {
    match solution {
        Solution::Roots(roots) => {
            let mut narrowed = ArrayVec::new();
            for root in roots {
                let root = root as f32;
                if root.is_finite() {
                    narrowed.push(root);
                }
            }
            Solution::Roots(narrowed)
        }
        Solution::AllReals => Solution::AllReals,
    }
}

/// Single-precision [`solve_linear`](crate::solve_linear).
///
/// # Errors
///
/// Returns [`NonFiniteCoeff`] if either coefficient is NaN or infinite.
pub fn solve_linear(a: f32, b: f32) -> Result<Solution<f32, 1>, NonFiniteCoeff> {
    crate::solve_linear(f64::from(a), f64::from(b)).map(narrow)
}

/// Single-precision [`solve_quadratic`](crate::solve_quadratic).
///
/// # Errors
///
/// Returns [`NonFiniteCoeff`] if any coefficient is NaN or infinite.
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> Result<Solution<f32, 2>, NonFiniteCoeff> {
    crate::solve_quadratic(f64::from(a), f64::from(b), f64::from(c)).map(narrow)
}

/// Single-precision [`solve_cubic`](crate::solve_cubic).
///
/// # Errors
///
/// Returns [`NonFiniteCoeff`] if any coefficient is NaN or infinite.
pub fn solve_cubic(a: f32, b: f32, c: f32, d: f32) -> Result<Solution<f32, 3>, NonFiniteCoeff> {
    crate::solve_cubic(f64::from(a), f64::from(b), f64::from(c), f64::from(d)).map(narrow)
}
