// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_motion` + `understory_scroll`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::vec::Vec;

use kurbo::Size;
use understory_motion::{PiecewiseTransform, SegmentFn, SymbolicLength, SymbolicRange, preprocess};
use understory_scroll::{MotionValue, Viewport, speed_transform, sticky_transform, trigger_on};

const VIEWPORT: Size = Size::new(1280.0, 800.0);

/// `count` adjacent `vh` ranges with a gap after every third one.
fn vh_pairs(count: u32) -> Vec<(SymbolicRange, SegmentFn)> {
    (0..count)
        .rev()
        .map(|i| {
            let start = i * 40;
            let end = if i % 3 == 2 { start + 30 } else { start + 40 };
            let range = SymbolicRange::new(SymbolicLength::vh(start), SymbolicLength::vh(end));
            let factor = f64::from(i % 5) * 0.25;
            (range, SegmentFn::new(move |v| -v * factor))
        })
        .collect()
}

fn bench_preprocess(c: &mut Criterion) {
    let mut group = c.benchmark_group("motion/preprocess");
    for count in [4_u32, 16, 64] {
        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            b.iter_batched(
                || vh_pairs(count),
                |pairs| black_box(preprocess(pairs)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("motion/evaluate");
    for count in [4_u32, 16, 64] {
        let transform = PiecewiseTransform::from_pairs(vh_pairs(count));
        let span = f64::from(count) * 0.4 * VIEWPORT.height;
        group.bench_function(BenchmarkId::new("sweep", count), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for step in 0..100 {
                    let v = span * f64::from(step) / 100.0;
                    acc += transform.evaluate(VIEWPORT, black_box(v));
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

fn bench_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll/set");

    group.bench_function("speed_sticky_trigger", |b| {
        let viewport = Viewport::new(VIEWPORT);
        let offset = MotionValue::new(0.0);
        let slow = speed_transform(&offset, &viewport, [(("0vh", "200vh"), 0.5)]);
        let pinned = sticky_transform(&offset, &viewport, [("100vh", "150vh")]);
        let _trigger = trigger_on(&offset, 0.0..=2_000.0, |d| {
            black_box(d);
        });
        let mut v = 0.0;
        b.iter(|| {
            v = (v + 7.0) % 2_400.0;
            offset.set(black_box(v));
            black_box((slow.get(), pinned.get()))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_preprocess, bench_evaluate, bench_scroll);
criterion_main!(benches);
