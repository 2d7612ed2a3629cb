// Copyright 2025 the Vieta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Micro-benchmarks for the three solvers, one per discriminant branch
//! of the cubic.

#![feature(test)]
extern crate test;

use test::{black_box, Bencher};
use vieta::{solve_cubic, solve_linear, solve_quadratic};

#[bench]
fn bench_linear(bb: &mut Bencher) {
    bb.iter(|| solve_linear(black_box(2.0), black_box(-4.0)));
}

#[bench]
fn bench_quadratic_two_roots(bb: &mut Bencher) {
    bb.iter(|| solve_quadratic(black_box(1.0), black_box(0.0), black_box(-4.0)));
}

#[bench]
fn bench_cubic_three_roots(bb: &mut Bencher) {
    bb.iter(|| {
        solve_cubic(
            black_box(2.0),
            black_box(-4.0),
            black_box(-22.0),
            black_box(24.0),
        )
    });
}

#[bench]
fn bench_cubic_single_root(bb: &mut Bencher) {
    bb.iter(|| {
        solve_cubic(
            black_box(3.0),
            black_box(-10.0),
            black_box(14.0),
            black_box(27.0),
        )
    });
}

#[bench]
fn bench_cubic_triple_root(bb: &mut Bencher) {
    bb.iter(|| {
        solve_cubic(
            black_box(1.0),
            black_box(6.0),
            black_box(12.0),
            black_box(8.0),
        )
    });
}
