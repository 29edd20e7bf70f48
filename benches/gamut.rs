use criterion::{black_box, criterion_group, criterion_main, Criterion};
use perceptual_color::colors::CIELCHColor;
use perceptual_color::full_color::{FullColor, OutOfGamutBehaviour};
use perceptual_color::profile::ColorSpaceProfile;

pub fn run_benchmarks(c: &mut Criterion) {
    let profile = ColorSpaceProfile::srgb().expect("sRGB has a neutral axis");

    let mut group = c.benchmark_group("profile");
    group.sample_size(10);
    group.bench_function("srgb", |b| b.iter(ColorSpaceProfile::srgb));
    group.finish();

    let mut group = c.benchmark_group("full-color");
    group.bench_function("in-gamut", |b| {
        b.iter(|| {
            FullColor::from_lch(
                &profile,
                black_box(CIELCHColor::new(50., 20., 120.)),
                OutOfGamutBehaviour::SacrificeChroma,
                1.,
            )
        })
    });
    group.bench_function("sacrifice-chroma", |b| {
        b.iter(|| {
            FullColor::from_lch(
                &profile,
                black_box(CIELCHColor::new(50., 200., 0.)),
                OutOfGamutBehaviour::SacrificeChroma,
                1.,
            )
        })
    });
    group.bench_function("preserve", |b| {
        b.iter(|| {
            FullColor::from_lch(
                &profile,
                black_box(CIELCHColor::new(50., 200., 0.)),
                OutOfGamutBehaviour::Preserve,
                1.,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
