// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use abacus_core::command::{evaluate, OperandVector, Operation};
use abacus_core::engine::{log, power};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn bench_power(c: &mut Criterion) {
    let mut group = c.benchmark_group("power");
    // Worst cases: the longest in-range chain and an overflow after the
    // maximum number of doublings.
    for (a, b) in [(2i32, 30i32), (2, 1_000_000), (-3, 19), (46_340, 2)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{a}^{b}")),
            &(a, b),
            |bencher, &(a, b)| bencher.iter(|| power(black_box(a), black_box(b))),
        );
    }
    group.finish();
}

fn bench_log(c: &mut Criterion) {
    let mut group = c.benchmark_group("log");
    for (a, b) in [(i32::MAX, 2i32), (i32::MAX, 3), (1 << 30, 2), (15, 4)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("log_{b}({a})")),
            &(a, b),
            |bencher, &(a, b)| bencher.iter(|| log(black_box(a), black_box(b))),
        );
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let requests = [
        (Operation::Negate, [4i32, 0, 0]),
        (Operation::Add, [2, -5, 0]),
        (Operation::Divide, [200, -3, 0]),
        (Operation::Exponentiate, [-2, 3, 0]),
        (Operation::Logarithm, [i32::MAX, 2, 0]),
    ];
    for (op, slots) in requests {
        group.bench_with_input(BenchmarkId::from_parameter(op), &slots, |bencher, slots| {
            bencher.iter(|| {
                let mut v = OperandVector::from(*slots);
                evaluate(black_box(op.id()), &mut v)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_power, bench_log, bench_evaluate);
criterion_main!(benches);
