#![no_main]

use arbitrary::Arbitrary;
use gauss_blur::{ConvolutionStrategy, GaussianBlur};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct BlurInput {
    width: u8,
    height: u8,
    padding: u8,
    sigma: u16,
    radius: i8,
    separable: bool,
    seed: u8,
}

fuzz_target!(|input: BlurInput| {
    blur_bgra(input);
});

fn blur_bgra(input: BlurInput) {
    let width = input.width as usize;
    let height = input.height as usize;
    let stride = width * 4 + input.padding as usize;
    let sigma = input.sigma as f64 / 64.;
    let radius = (input.radius % 33) as isize;

    let src: Vec<u8> = (0..stride * height)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add(input.seed))
        .collect();

    let Ok(mut blur) = GaussianBlur::new(sigma, radius) else {
        assert!(sigma <= 0. || radius < 0);
        return;
    };
    if input.separable {
        blur.set_convolution_strategy(ConvolutionStrategy::Separable);
    }
    let dst = blur.blur_bgra_slice(&src, width, height, stride).unwrap();
    assert_eq!(dst.len(), src.len());
    for row in dst.chunks_exact(stride.max(1)) {
        for px in row[..width * 4].chunks_exact(4) {
            assert_eq!(px[3], 255);
        }
    }
}
