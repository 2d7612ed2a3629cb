// Copyright 2025 the Vieta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The degree-2 solver.

use arrayvec::ArrayVec;

use crate::{nearly_zero, solve_linear, NonFiniteCoeff, Solution};

#[cfg(feature = "libm")]
#[allow(unused_imports)] // unused if std and libm are both around
use crate::libm_polyfill::FloatFuncs as _;

/// Find the real roots of `a·x² + b·x + c = 0`, in ascending order.
///
/// A double root is reported once. When `a` is numerically zero the
/// equation collapses to its residual linear part and the result of
/// [`solve_linear`] is returned unchanged, including the
/// [`Solution::AllReals`] case.
///
/// When the two roots have very different magnitudes the naive quadratic
/// formula cancels catastrophically on the smaller one; this factors out
/// the sign of `b` and recovers the second root from the product, see
/// <https://math.stackexchange.com/questions/866331>.
///
/// # Errors
///
/// Returns [`NonFiniteCoeff`] if any coefficient is NaN or infinite.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Result<Solution<f64, 2>, NonFiniteCoeff> {
    if !a.is_finite() || !b.is_finite() || !c.is_finite() {
        return Err(NonFiniteCoeff);
    }
    if nearly_zero(a) {
        return Ok(solve_linear(b, c)?.widen());
    }
    // Normalize to x² + p·x + q = 0.
    let p = b / a;
    let q = c / a;
    if !p.is_finite() || !q.is_finite() {
        // The quadratic term is vanishingly small relative to the others;
        // the residual linear equation is the better model.
        return Ok(solve_linear(b, c)?.widen());
    }
    let mut roots = ArrayVec::new();
    let disc = p * p - 4.0 * q;
    if !disc.is_finite() {
        // p·p overflowed. One root from x² + p·x ≈ 0, the other from the
        // product of roots.
        let r0 = -p;
        let r1 = q / r0;
        push_ascending(&mut roots, r0, r1);
    } else if nearly_zero(disc) {
        // One double root, reported once.
        let root = -0.5 * p;
        if root.is_finite() {
            roots.push(root);
        }
    } else if disc > 0.0 {
        let t = -0.5 * (p + disc.sqrt().copysign(p));
        push_ascending(&mut roots, t, q / t);
    }
    // disc < -EPSILON: no real roots.
    Ok(Solution::Roots(roots))
}

/// Push up to two roots in ascending order, dropping non-finite values.
fn push_ascending(roots: &mut ArrayVec<f64, 2>, r0: f64, r1: f64) {
    if r0.is_finite() && r1.is_finite() {
        roots.push(r0.min(r1));
        roots.push(r0.max(r1));
    } else if r0.is_finite() {
        roots.push(r0);
    } else if r1.is_finite() {
        roots.push(r1);
    }
}
