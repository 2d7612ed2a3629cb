// Copyright 2025 the Vieta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The degree-3 solver.

use arrayvec::ArrayVec;

use crate::{nearly_zero, solve_quadratic, NonFiniteCoeff, Solution};

#[cfg(feature = "libm")]
#[allow(unused_imports)] // unused if std and libm are both around
use crate::libm_polyfill::FloatFuncs as _;

/// Find the real roots of `a·x³ + b·x² + c·x + d = 0`, in ascending order.
///
/// Every real root appears exactly once: a triple root yields a single
/// entry, a double root next to a simple root yields two. When `a` is
/// numerically zero the equation collapses to its residual quadratic and
/// the result of [`solve_quadratic`] is returned unchanged.
///
/// The equation is normalized and depressed with `x = t − A/3`, then the
/// sign of the discriminant selects between Cardano's formula (one real
/// root), the closed form for a repeated root, and Viète's trigonometric
/// form for three distinct real roots (casus irreducibilis).
///
/// # Errors
///
/// Returns [`NonFiniteCoeff`] if any coefficient is NaN or infinite.
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Result<Solution<f64, 3>, NonFiniteCoeff> {
    if !a.is_finite() || !b.is_finite() || !c.is_finite() || !d.is_finite() {
        return Err(NonFiniteCoeff);
    }
    if nearly_zero(a) {
        return Ok(solve_quadratic(b, c, d)?.widen());
    }
    // Normalize to x³ + A·x² + B·x + C = 0.
    let va = b / a;
    let vb = c / a;
    let vc = d / a;
    if !va.is_finite() || !vb.is_finite() || !vc.is_finite() {
        // The cubic term is vanishingly small relative to the others.
        return Ok(solve_quadratic(b, c, d)?.widen());
    }
    // Substitute x = t − A/3 to eliminate the quadratic term, scaled so
    // the depressed equation reads t³ + 3p·t + 2q = 0.
    // TODO: rescale the coefficients when these intermediates overflow;
    // roots of magnitude around 1e51 and up currently go unreported.
    let sq_a = va * va;
    let p = (1.0 / 3.0) * vb - (1.0 / 9.0) * sq_a;
    let q = (1.0 / 27.0) * va * sq_a - (1.0 / 6.0) * va * vb + 0.5 * vc;
    let disc = q * q + p * p * p;
    let shift = (1.0 / 3.0) * va;

    let mut roots = ArrayVec::new();
    if nearly_zero(disc) {
        if nearly_zero(q) {
            // One triple root at t = 0.
            roots.push(-shift);
        } else {
            // One double and one simple root, both from the cube root of
            // -q; re-deriving them through the general branches would
            // divide by a near-zero quantity.
            let u = (-q).cbrt();
            roots.push(2.0 * u - shift);
            roots.push(-u - shift);
        }
    } else if disc < 0.0 {
        // Casus irreducibilis: three distinct real roots, reachable only
        // through the trigonometric form. disc < 0 forces p < 0, so the
        // square roots below are well defined; the clamp absorbs rounding
        // drift just inside the branch boundary.
        let theta = (1.0 / 3.0) * (-q / (-(p * p * p)).sqrt()).clamp(-1.0, 1.0).acos();
        let r = 2.0 * (-p).sqrt();
        roots.push(r * theta.cos() - shift);
        roots.push(-r * (theta + core::f64::consts::FRAC_PI_3).cos() - shift);
        roots.push(-r * (theta - core::f64::consts::FRAC_PI_3).cos() - shift);
    } else {
        // One real root by Cardano's formula; the conjugate pair is
        // complex and discarded. Folding |q| into the cube root keeps the
        // two radicals from cancelling.
        let u = (disc.sqrt() + q.abs()).cbrt();
        let t = (u - p / u).copysign(-q);
        if t.is_finite() {
            roots.push(t - shift);
        }
    }
    roots.retain(|root| root.is_finite());
    roots.sort_unstable_by(|x, y| x.total_cmp(y));
    Ok(Solution::Roots(roots))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solve_linear;

    fn verify(solution: &Solution<f64, 3>, expected: &[f64]) {
        let roots = solution.roots().expect("expected a root listing");
        assert_eq!(roots.len(), expected.len(), "root count mismatch");
        for (root, want) in roots.iter().zip(expected) {
            assert!((root - want).abs() < 1e-9, "root {root} != {want}");
        }
    }

    #[test]
    fn three_distinct_roots() {
        verify(&solve_cubic(2.0, -4.0, -22.0, 24.0).unwrap(), &[-3.0, 1.0, 4.0]);
        // x³ - x = x(x-1)(x+1)
        verify(&solve_cubic(1.0, 0.0, -1.0, 0.0).unwrap(), &[-1.0, 0.0, 1.0]);
    }

    #[test]
    fn single_real_root() {
        verify(&solve_cubic(3.0, -10.0, 14.0, 27.0).unwrap(), &[-1.0]);
        verify(&solve_cubic(1.0, 0.0, 0.0, -5.0).unwrap(), &[5.0f64.cbrt()]);
        // Mirror image exercises the opposite sign of q.
        verify(&solve_cubic(1.0, 0.0, 0.0, 5.0).unwrap(), &[-(5.0f64.cbrt())]);
    }

    #[test]
    fn triple_root_reported_once() {
        // (x + 2)³
        verify(&solve_cubic(1.0, 6.0, 12.0, 8.0).unwrap(), &[-2.0]);
        // (x - 1)³, scaled
        verify(&solve_cubic(-3.0, 9.0, -9.0, 3.0).unwrap(), &[1.0]);
    }

    #[test]
    fn double_root_next_to_simple_root() {
        // (x - 1)²(x + 2) = x³ - 3x + 2; the repeated value appears once
        // and in order relative to the simple root.
        verify(&solve_cubic(1.0, 0.0, -3.0, 2.0).unwrap(), &[-2.0, 1.0]);
        // (x + 1)²(x - 3) = x³ - x² - 5x - 3
        verify(&solve_cubic(1.0, -1.0, -5.0, -3.0).unwrap(), &[-1.0, 3.0]);
    }

    #[test]
    fn collapses_to_quadratic() {
        assert_eq!(
            solve_cubic(0.0, 1.0, 0.0, -4.0).unwrap().roots(),
            solve_quadratic(1.0, 0.0, -4.0).unwrap().roots(),
        );
        // Collapse chains all the way down to the linear solver.
        assert_eq!(
            solve_cubic(0.0, 0.0, 2.0, -4.0).unwrap().roots(),
            solve_linear(2.0, -4.0).unwrap().roots(),
        );
        assert!(solve_cubic(0.0, 0.0, 0.0, 0.0).unwrap().is_indeterminate());
        assert_eq!(solve_cubic(0.0, 0.0, 0.0, 7.0).unwrap().count(), Some(0));
    }

    #[test]
    fn roots_are_strictly_ascending() {
        for (a, b, c, d) in [
            (2.0, -4.0, -22.0, 24.0),
            (1.0, 0.0, -3.0, 2.0),
            (-2.0, 4.0, 22.0, -24.0),
            (5.0, 1.0, -20.0, 3.0),
        ] {
            let solution = solve_cubic(a, b, c, d).unwrap();
            let roots = solution.roots().unwrap();
            for pair in roots.windows(2) {
                assert!(
                    pair[1] - pair[0] > crate::EPSILON,
                    "roots not strictly ascending: {roots:?}"
                );
            }
        }
    }

    #[test]
    fn count_stable_under_sub_tolerance_perturbation() {
        // A triple root sits on the boundary of both degenerate branches.
        for delta in [-1e-10, 0.0, 1e-10] {
            let solution = solve_cubic(1.0, 6.0, 12.0, 8.0 + delta).unwrap();
            assert_eq!(solution.count(), Some(1), "count flipped at delta {delta}");
        }
        // Well inside the three-root branch, perturbations this small
        // cannot change the count either.
        for delta in [-1e-10, 0.0, 1e-10] {
            let solution = solve_cubic(2.0, -4.0 + delta, -22.0, 24.0).unwrap();
            assert_eq!(solution.count(), Some(3), "count flipped at delta {delta}");
        }
    }

    #[test]
    fn rejects_non_finite_coefficients() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(solve_cubic(bad, 1.0, 1.0, 1.0), Err(NonFiniteCoeff));
            assert_eq!(solve_cubic(1.0, bad, 1.0, 1.0), Err(NonFiniteCoeff));
            assert_eq!(solve_cubic(1.0, 1.0, bad, 1.0), Err(NonFiniteCoeff));
            assert_eq!(solve_cubic(1.0, 1.0, 1.0, bad), Err(NonFiniteCoeff));
        }
    }

    #[test]
    fn random_coefficient_residuals() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..10_000 {
            let a = f64::from(rng.random_range(-100_i32..=100));
            let b = f64::from(rng.random_range(-100_i32..=100));
            let c = f64::from(rng.random_range(-100_i32..=100));
            let d = f64::from(rng.random_range(-100_i32..=100));
            let scale = a.abs().max(b.abs()).max(c.abs()).max(d.abs()).max(1.0);
            let solution = solve_cubic(a, b, c, d).unwrap();
            let Some(roots) = solution.roots() else {
                continue;
            };
            assert!(roots.len() <= 3, "count exceeds degree");
            for &x in roots {
                let residual = ((a * x + b) * x + c) * x + d;
                let tol = 1e-6 * scale * (1.0 + x.abs()).powi(3);
                assert!(
                    residual.abs() <= tol,
                    "residual {residual} at root {x} of ({a}, {b}, {c}, {d})"
                );
            }
        }
    }
}
