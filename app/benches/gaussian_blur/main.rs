use criterion::{Criterion, criterion_group, criterion_main};
use gauss_blur::{ConvolutionStrategy, GaussianBlur, ThreadingPolicy};

fn gradient_image(width: usize, height: usize) -> Vec<u8> {
    let mut data = vec![0u8; width * height * 4];
    for (i, px) in data.chunks_exact_mut(4).enumerate() {
        let x = i % width;
        let y = i / width;
        px[0] = (x * 255 / width) as u8;
        px[1] = (y * 255 / height) as u8;
        px[2] = ((x + y) % 256) as u8;
        px[3] = 255;
    }
    data
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let (width, height) = (512usize, 384usize);
    let src = gradient_image(width, height);

    c.bench_function("Gaussian blur BGRA direct: sigma 2, radius 3", |b| {
        let blur = GaussianBlur::new(2.0, 3).unwrap();
        b.iter(|| {
            _ = blur.blur_bgra_slice(&src, width, height, width * 4).unwrap();
        })
    });

    c.bench_function("Gaussian blur BGRA separable: sigma 2, radius 3", |b| {
        let mut blur = GaussianBlur::new(2.0, 3).unwrap();
        blur.set_convolution_strategy(ConvolutionStrategy::Separable);
        b.iter(|| {
            _ = blur.blur_bgra_slice(&src, width, height, width * 4).unwrap();
        })
    });

    c.bench_function("Gaussian blur BGRA separable: sigma 6, radius 18", |b| {
        let mut blur = GaussianBlur::new(6.0, 18).unwrap();
        blur.set_convolution_strategy(ConvolutionStrategy::Separable);
        b.iter(|| {
            _ = blur.blur_bgra_slice(&src, width, height, width * 4).unwrap();
        })
    });

    c.bench_function("Gaussian blur BGRA direct adaptive threads: sigma 2, radius 3", |b| {
        let mut blur = GaussianBlur::new(2.0, 3).unwrap();
        blur.set_threading_policy(ThreadingPolicy::Adaptive);
        b.iter(|| {
            _ = blur.blur_bgra_slice(&src, width, height, width * 4).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
