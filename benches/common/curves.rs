use criterion::{black_box, BenchmarkId, Criterion};
use nspline::{Curve, Samples};
use crate::common::samples::SPLINES;

pub fn point_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_at");
    for spline in SPLINES.iter() {
        let t = spline.max_t() / 2.0;
        group.bench_with_input(BenchmarkId::from_parameter(spline.kind()), spline, |b, spline| {
            b.iter(|| black_box(spline.point_at(black_box(t))))
        });
    }
    group.finish();
}

pub fn sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    for spline in SPLINES.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(spline.kind()), spline, |b, spline| {
            b.iter(|| {
                Samples::new(spline)
                    .unwrap()
                    .with_step_size(0.01)
                    .unwrap()
                    .for_each(|p| {
                        black_box(p);
                    })
            })
        });
    }
    group.finish();
}

pub fn all(c: &mut Criterion) {
    point_at(c);
    sweep(c);
}
