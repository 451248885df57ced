use chromaview::image::*;
use chromaview::imgproc::colorspace::ScaleFactors;
use chromaview::imgproc::compose::{compose, ViewTransform};
use chromaview::imgproc::{dithering, histogram, ColorMode};
use chromaview::palette::Palette;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn test_image(width: i32, height: i32) -> ImageBuffer {
    let mut img = ImageBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = ((x ^ y) & 0xff) as u8;
            img.put_pixel(x, y, pack_argb(0xff, v, v.wrapping_add(85), v.wrapping_add(170)));
        }
    }
    img
}

fn compose_bench(c: &mut Criterion) {
    c.bench_function("Compose YUV, 1k*1k", |b| {
        let src = test_image(1000, 1000);
        let mut canvas = ImageBuffer::new(2000, 1000);
        let scales = ScaleFactors::default();
        let palette = Palette::build();
        let view = ViewTransform::default();
        b.iter(|| {
            compose(
                &mut canvas,
                &src,
                (0, 0).into(),
                &view,
                ColorMode::Yuv,
                &scales,
                &palette,
            );
            black_box(canvas.pixel(0, 0))
        });
    });
}

fn dithering_bench(c: &mut Criterion) {
    c.bench_function("Floyd-Steinberg, 1k*1k", |b| {
        let src = test_image(1000, 1000);
        b.iter(|| black_box(dithering::floyd_steinberg(&src).unwrap()));
    });
}

fn histogram_bench(c: &mut Criterion) {
    c.bench_function("Histogram ARGB, 1k*1k", |b| {
        let src = test_image(1000, 1000);
        let scales = ScaleFactors::default();
        b.iter(|| black_box(histogram::compute(&src, ColorMode::Argb, &scales)));
    });
}

criterion_group!(benches, compose_bench, dithering_bench, histogram_bench);
criterion_main!(benches);
