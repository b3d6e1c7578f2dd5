//! Benchmarks for spectrum lookup, resampling and integration.
//!
//! Run with: cargo bench -p colorimetry

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use colorimetry::{spectrum_to_rgb, spectrum_to_xyz, CmfId, IlluminantId, RgbColorSpace, SampledSpectrum};

fn bench_value_at(c: &mut Criterion) {
    let d65 = IlluminantId::D65.spectrum();

    c.bench_function("value_at_node", |bencher| {
        bencher.iter(|| d65.value_at(black_box(560.0)));
    });

    c.bench_function("value_at_between_nodes", |bencher| {
        bencher.iter(|| d65.value_at(black_box(561.3)));
    });
}

fn bench_resampling(c: &mut Criterion) {
    let d65 = IlluminantId::D65.spectrum();
    let mut target = SampledSpectrum::filled(400.0, 700.0, 1.0, 0.0).unwrap();
    let mut buffer = vec![0.0f32; 64];

    c.bench_function("interpolate_from_5nm_to_1nm", |bencher| {
        bencher.iter(|| target.interpolate_from(black_box(d65)));
    });

    c.bench_function("interpolate_onto_64", |bencher| {
        bencher.iter(|| d65.interpolate_onto(black_box(&mut buffer), 400.0, 720.0));
    });
}

fn bench_integration(c: &mut Criterion) {
    let cmf = CmfId::Cie1931TwoDegree.cmf();
    let srgb = RgbColorSpace::srgb();
    let grey = SampledSpectrum::filled(380.0, 740.0, 10.0, 0.18).unwrap();
    let fine = SampledSpectrum::filled(380.0, 780.0, 1.0, 0.5).unwrap();

    c.bench_function("spectrum_to_xyz_d65", |bencher| {
        bencher.iter(|| spectrum_to_xyz(black_box(IlluminantId::D65.spectrum()), cmf));
    });

    c.bench_function("spectrum_to_rgb_10nm", |bencher| {
        bencher.iter(|| spectrum_to_rgb(black_box(&grey), srgb));
    });

    c.bench_function("spectrum_to_rgb_1nm", |bencher| {
        bencher.iter(|| spectrum_to_rgb(black_box(&fine), srgb));
    });
}

criterion_group!(benches, bench_value_at, bench_resampling, bench_integration);
criterion_main!(benches);
