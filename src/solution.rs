// Copyright 2025 the Vieta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The root-set value type shared by all solvers.

use core::fmt;

use arrayvec::ArrayVec;

/// The real solutions of a polynomial equation.
///
/// `N` is the nominal degree of the solver that produced the value, so
/// the roots live inline on the stack and never spill to the heap. The
/// roots are in ascending order, every entry is finite, and a repeated
/// root (double or triple) appears exactly once.
///
/// The degenerate identity `0 = 0`, which every real number satisfies,
/// is reported as [`Solution::AllReals`] rather than being conflated
/// with an empty root set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Solution<T, const N: usize> {
    /// Every real root of the equation, ascending, each distinct value
    /// reported once. Empty when the equation has no real solution.
    Roots(ArrayVec<T, N>),
    /// The indeterminate case: every real number solves the equation.
    AllReals,
}

impl<T, const N: usize> Solution<T, N> {
    /// The roots as a slice, in ascending order.
    ///
    /// Returns `None` for [`Solution::AllReals`], which has no finite
    /// listing.
    #[inline]
    pub fn roots(&self) -> Option<&[T]> {
        match self {
            Self::Roots(roots) => Some(roots),
            Self::AllReals => None,
        }
    }

    /// The number of distinct real roots, at most `N`.
    ///
    /// Returns `None` for [`Solution::AllReals`].
    #[inline]
    pub fn count(&self) -> Option<usize> {
        self.roots().map(<[T]>::len)
    }

    /// Whether this is the indeterminate all-reals case.
    #[inline]
    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Self::AllReals)
    }

    /// Rehome into a root set of capacity `M >= N`.
    ///
    /// This is how a lower-degree solution passes unchanged through a
    /// degree-collapsed caller.
    pub(crate) fn widen<const M: usize>(self) -> Solution<T, M> {
        match self {
            Self::Roots(roots) => {
                let mut widened = ArrayVec::new();
                widened.extend(roots);
                Solution::Roots(widened)
            }
            Self::AllReals => Solution::AllReals,
        }
    }
}

/// Error returned when a coefficient is NaN or infinite.
///
/// Non-finite coefficients would otherwise flow silently through the
/// closed-form arithmetic and come out as plausible-looking garbage, so
/// the solvers reject them before doing any work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NonFiniteCoeff;

impl fmt::Display for NonFiniteCoeff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "polynomial coefficient is NaN or infinite")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NonFiniteCoeff {}
