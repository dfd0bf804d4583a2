mod bgra;
mod interactive;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use gauss_blur::{ConvolutionStrategy, GaussianBlur, ThreadingPolicy};
use image::{ColorType, ImageFormat};
use log::info;

use crate::bgra::swap_red_blue;

/// Gaussian blur for image files.
///
/// Without an input file the tool asks for sigma, radius and file name
/// interactively and keeps going until told to stop.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Image to blur
    input: Option<PathBuf>,

    /// Standard deviation of the Gaussian
    #[arg(short, long)]
    sigma: Option<f64>,

    /// Kernel half-width, the kernel is `2 * radius + 1` pixels wide
    #[arg(short, long, allow_negative_numbers = true)]
    radius: Option<isize>,

    /// Where the PNG result is written
    #[arg(short, long, default_value = "result-image.png")]
    output: PathBuf,

    /// Worker threads, 0 picks a count from the image size
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Use two 1D passes instead of the full 2D kernel
    #[arg(long)]
    separable: bool,
}

impl Args {
    fn configure(&self, blur: &mut GaussianBlur) {
        blur.set_threading_policy(match self.threads {
            0 => ThreadingPolicy::Adaptive,
            1 => ThreadingPolicy::Single,
            n => ThreadingPolicy::Fixed(n),
        });
        if self.separable {
            blur.set_convolution_strategy(ConvolutionStrategy::Separable);
        }
    }
}

/// Decodes `input`, blurs it and writes the result to `output` as PNG.
pub(crate) fn blur_file(blur: &GaussianBlur, input: &Path, output: &Path) -> Result<()> {
    let img = image::open(input)
        .with_context(|| format!("Failed to open image {}", input.display()))?;
    let transient = img.to_rgba8();
    let (width, height) = transient.dimensions();
    let mut pixels = transient.into_raw();
    swap_red_blue(&mut pixels);

    let start_time = Instant::now();
    let stride = width as usize * 4;
    let mut blurred = blur.blur_bgra_slice(&pixels, width as usize, height as usize, stride)?;
    info!(
        "Blurred {width}x{height} image in {:.2?}",
        start_time.elapsed()
    );

    swap_red_blue(&mut blurred);
    image::save_buffer_with_format(
        output,
        &blurred,
        width,
        height,
        ColorType::Rgba8,
        ImageFormat::Png,
    )
    .with_context(|| format!("Failed to save {}", output.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let Some(input) = &args.input else {
        return interactive::run(&args.output, |blur| args.configure(blur));
    };

    let (Some(sigma), Some(radius)) = (args.sigma, args.radius) else {
        bail!("--sigma and --radius are required when an input file is given");
    };
    let mut blur = GaussianBlur::new(sigma, radius)?;
    args.configure(&mut blur);
    blur_file(&blur, input, &args.output)?;
    println!("Saved {}", args.output.display());
    Ok(())
}
