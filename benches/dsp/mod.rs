//! Benchmark groups for the DSP core.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ladder_lab::dsp::cascade::CascadeLadder;
use ladder_lab::dsp::decimate::decimate;
use ladder_lab::dsp::matrix::{expm_hyb, ladder_jacobian};
use ladder_lab::dsp::saturation::Tanh;
use ladder_lab::dsp::statespace::StateSpaceLadder;
use ladder_lab::dsp::tpt::TptLadder;

use crate::SIGNAL_LENGTHS;

fn test_signal(n: usize) -> (Vec<f64>, Vec<f64>) {
    let signal: Vec<f64> = (0..n)
        .map(|i| (i as f64 / n as f64) * 2.0 - 1.0)
        .collect();
    let cutoff = vec![0.1; n];
    (signal, cutoff)
}

pub fn bench_tpt(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/tpt");
    for &n in SIGNAL_LENGTHS {
        let (signal, cutoff) = test_signal(n);
        let mut filter = TptLadder::new(2.0);
        group.bench_with_input(BenchmarkId::new("process", n), &n, |b, _| {
            b.iter(|| filter.process(black_box(&signal), black_box(&cutoff)))
        });
    }
    group.finish();
}

pub fn bench_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/cascade");
    for &n in SIGNAL_LENGTHS {
        let (signal, cutoff) = test_signal(n);
        let mut filter = CascadeLadder::new(2.0, Tanh);
        group.bench_with_input(BenchmarkId::new("process", n), &n, |b, _| {
            b.iter(|| filter.process(black_box(&signal), black_box(&cutoff)))
        });
    }
    group.finish();
}

pub fn bench_statespace(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/statespace");
    for &n in SIGNAL_LENGTHS {
        let (signal, cutoff) = test_signal(n);
        let mut filter = StateSpaceLadder::new(2.0, Tanh);
        group.bench_with_input(BenchmarkId::new("process", n), &n, |b, _| {
            b.iter(|| filter.process(black_box(&signal), black_box(&cutoff)))
        });
    }
    group.finish();
}

pub fn bench_decimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/decimate");
    for &n in SIGNAL_LENGTHS {
        let input = vec![0.5; n];
        group.bench_with_input(BenchmarkId::new("by2", n), &n, |b, _| {
            b.iter(|| decimate(black_box(&input)))
        });
    }
    group.finish();
}

pub fn bench_expm(c: &mut Criterion) {
    let jacobian = ladder_jacobian(0.14, 3.0);
    c.bench_function("dsp/expm_hyb_5x5", |b| {
        b.iter(|| expm_hyb(black_box(&jacobian), 8, 8))
    });
}
