// Copyright 2025 the Vieta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float methods that live in `std`, routed through `libm` for `no_std`
//! builds. When both features are enabled the inherent methods win and
//! this trait goes unused.

#![allow(dead_code)]

pub(crate) trait FloatFuncs: Sized {
    fn abs(self) -> Self;
    fn copysign(self, sign: Self) -> Self;
    fn sqrt(self) -> Self;
    fn cbrt(self) -> Self;
    fn acos(self) -> Self;
    fn cos(self) -> Self;
}

impl FloatFuncs for f64 {
    fn abs(self) -> Self {
        libm::fabs(self)
    }
    fn copysign(self, sign: Self) -> Self {
        libm::copysign(self, sign)
    }
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
    fn cbrt(self) -> Self {
        libm::cbrt(self)
    }
    fn acos(self) -> Self {
        libm::acos(self)
    }
    fn cos(self) -> Self {
        libm::cos(self)
    }
}
