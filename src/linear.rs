// Copyright 2025 the Vieta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The degree-1 solver.

use arrayvec::ArrayVec;

use crate::{nearly_zero, NonFiniteCoeff, Solution};

/// Find the real root of the linear equation `a·x + b = 0`.
///
/// When `a` is numerically zero the equation has no root if `b` is
/// nonzero, and is satisfied by every real number if `b` is also zero;
/// the latter comes back as [`Solution::AllReals`].
///
/// # Errors
///
/// Returns [`NonFiniteCoeff`] if either coefficient is NaN or infinite.
pub fn solve_linear(a: f64, b: f64) -> Result<Solution<f64, 1>, NonFiniteCoeff> {
    if !a.is_finite() || !b.is_finite() {
        return Err(NonFiniteCoeff);
    }
    let mut roots = ArrayVec::new();
    if nearly_zero(a) {
        if nearly_zero(b) {
            return Ok(Solution::AllReals);
        }
        return Ok(Solution::Roots(roots));
    }
    let root = -b / a;
    // The quotient can overflow when a is near the tolerance and b is
    // huge; a root out of representable range is not reported.
    if root.is_finite() {
        roots.push(root);
    }
    Ok(Solution::Roots(roots))
}
