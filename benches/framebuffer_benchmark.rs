//! Benchmark for framebuffer operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pixelscene::color::Rgba;
use pixelscene::framebuffer::Framebuffer;
use pixelscene::render::blend;

fn framebuffer_clear_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("framebuffer_clear");

    for (width, height) in [(600, 600), (1920, 1080), (3840, 2160)] {
        let mut fb = Framebuffer::new(width, height).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &(width, height),
            |b, _| {
                b.iter(|| {
                    fb.clear(black_box(Rgba::RED));
                });
            },
        );
    }

    group.finish();
}

fn framebuffer_blend_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("framebuffer_blend");

    let mut fb = Framebuffer::new(600, 600).unwrap();
    fb.clear(Rgba::WHITE);

    let semi_transparent = Rgba::new(255, 0, 0, 128);

    group.bench_function("blend_600x600", |b| {
        b.iter(|| {
            for y in 0..600 {
                for x in 0..600 {
                    blend(&mut fb, black_box(x), black_box(y), semi_transparent);
                }
            }
        });
    });

    group.bench_function("argb_export_600x600", |b| {
        b.iter(|| black_box(fb.to_argb_pixels()));
    });

    group.finish();
}

criterion_group!(benches, framebuffer_clear_benchmark, framebuffer_blend_benchmark);
criterion_main!(benches);
