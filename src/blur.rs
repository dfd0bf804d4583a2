/*
 * Copyright (c) Radzivon Bartoshyk. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::blur_error::{BlurError, try_vec};
use crate::convolve_direct::convolve_row_bgra_direct;
use crate::convolve_separable::{PLANE_CHANNELS, convolve_row_horizontal, convolve_row_vertical};
use crate::gaussian::{BlurParameters, GaussianKernel, make_gaussian_1d, make_gaussian_2d};
use crate::image_store::BgraImage;
use crate::kernel_bounds::axis_bounds;
use crate::threading_policy::ThreadingPolicy;
use log::debug;
use rayon::ThreadPool;
use rayon::prelude::*;

/// How the kernel is applied
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default)]
pub enum ConvolutionStrategy {
    /// Full 2D kernel per pixel, `O(w * h * (2r + 1)²)`
    #[default]
    Direct,
    /// Horizontal then vertical 1D pass, `O(w * h * (2r + 1))`.
    /// Matches [ConvolutionStrategy::Direct] up to floating point error.
    Separable,
}

/// Gaussian blur of 8-bit BGRA images.
///
/// Borders use truncated kernel support: taps that would sample outside the
/// image are skipped and the remaining weights are not renormalized. Pixels
/// closer than `radius` to an edge therefore come out slightly darker than a
/// mirrored or renormalized border would produce. Output alpha is always 255.
#[derive(Debug, Copy, Clone)]
pub struct GaussianBlur {
    parameters: BlurParameters,
    threading_policy: ThreadingPolicy,
    strategy: ConvolutionStrategy,
}

impl GaussianBlur {
    pub fn new(sigma: f64, radius: isize) -> Result<GaussianBlur, BlurError> {
        Ok(GaussianBlur::from_parameters(BlurParameters::new(
            sigma, radius,
        )?))
    }

    pub fn from_parameters(parameters: BlurParameters) -> GaussianBlur {
        GaussianBlur {
            parameters,
            threading_policy: ThreadingPolicy::default(),
            strategy: ConvolutionStrategy::default(),
        }
    }

    #[inline]
    pub fn parameters(&self) -> BlurParameters {
        self.parameters
    }

    pub fn set_threading_policy(&mut self, threading_policy: ThreadingPolicy) {
        self.threading_policy = threading_policy;
    }

    pub fn set_convolution_strategy(&mut self, strategy: ConvolutionStrategy) {
        self.strategy = strategy;
    }

    /// The normalized 2D kernel this blur applies
    pub fn kernel(&self) -> Result<GaussianKernel, BlurError> {
        make_gaussian_2d(&self.parameters)
    }

    /// Blurs `store` into a newly allocated image of the same geometry.
    ///
    /// Row padding bytes of the result are zero.
    pub fn blur_bgra(&self, store: &BgraImage) -> Result<BgraImage<'static>, BlurError> {
        let mut dst: Vec<u8> = try_vec![0u8; store.as_bytes().len()];

        if !store.size().is_empty() {
            let kernel_size = self.parameters.kernel_size();
            let pool = self
                .threading_policy
                .get_pool(store.size(), kernel_size.saturating_mul(kernel_size));

            debug!(
                "Blurring {}x{} BGRA image, stride {}, sigma {}, radius {}, {:?}, {} thread(s)",
                store.width,
                store.height,
                store.stride(),
                self.parameters.sigma(),
                self.parameters.radius(),
                self.strategy,
                pool.as_ref().map_or(1, |p| p.current_num_threads()),
            );

            match self.strategy {
                ConvolutionStrategy::Direct => self.blur_direct(store, &mut dst, &pool)?,
                ConvolutionStrategy::Separable => self.blur_separable(store, &mut dst, &pool)?,
            }
        }

        BgraImage::new(dst, store.width, store.height, store.stride())
    }

    /// Same as [GaussianBlur::blur_bgra] on a raw BGRA slice
    pub fn blur_bgra_slice(
        &self,
        src: &[u8],
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<Vec<u8>, BlurError> {
        let store = BgraImage::from_slice(src, width, height, stride)?;
        Ok(self.blur_bgra(&store)?.into_vec())
    }

    fn blur_direct(
        &self,
        store: &BgraImage,
        dst: &mut [u8],
        pool: &Option<ThreadPool>,
    ) -> Result<(), BlurError> {
        let kernel = make_gaussian_2d(&self.parameters)?;
        let src = store.as_bytes();
        let src_stride = store.stride();
        let (width, height) = (store.width, store.height);

        for_each_row(dst, src_stride, pool, |y, row| {
            convolve_row_bgra_direct(y, src, src_stride, width, height, &kernel, row);
        });
        Ok(())
    }

    fn blur_separable(
        &self,
        store: &BgraImage,
        dst: &mut [u8],
        pool: &Option<ThreadPool>,
    ) -> Result<(), BlurError> {
        let kernel = make_gaussian_1d::<f64>(&self.parameters)?;
        let radius = self.parameters.radius();
        let src = store.as_bytes();
        let src_stride = store.stride();
        let (width, height) = (store.width, store.height);

        let plane_stride = width * PLANE_CHANNELS;
        let plane_len = plane_stride
            .checked_mul(height)
            .ok_or(BlurError::OutOfMemory(usize::MAX))?;
        let mut plane: Vec<f64> = try_vec![0f64; plane_len];

        let horizontal_bounds = axis_bounds(radius, width);
        for_each_row(plane.as_mut_slice(), plane_stride, pool, |y, row| {
            convolve_row_horizontal(y, src, src_stride, width, &horizontal_bounds, &kernel, row);
        });

        let vertical_bounds = axis_bounds(radius, height);
        let plane = plane.as_slice();
        for_each_row(dst, src_stride, pool, |y, row| {
            convolve_row_vertical(y, plane, width, &vertical_bounds[y], &kernel, row);
        });
        Ok(())
    }
}

/// Runs `process_row` for every row, on `pool` when one is provided.
fn for_each_row<T: Send>(
    buffer: &mut [T],
    row_len: usize,
    pool: &Option<ThreadPool>,
    process_row: impl Fn(usize, &mut [T]) + Send + Sync,
) {
    if let Some(pool) = pool {
        pool.install(|| {
            buffer
                .par_chunks_exact_mut(row_len)
                .enumerate()
                .for_each(|(y, row)| process_row(y, row));
        });
    } else {
        buffer
            .chunks_exact_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| process_row(y, row));
    }
}

/// Gaussian blur of a raw BGRA buffer.
///
/// `source` holds `height` rows of `stride` bytes each, 4 bytes per pixel in
/// B, G, R, A order. Returns a new buffer of the same length with alpha forced
/// to 255.
///
/// # Errors
///
/// Parameter errors are reported before the buffer is inspected:
/// [BlurError::InvalidSigma], [BlurError::InvalidRadius], then
/// [BlurError::InvalidStride] when `stride < width * 4` and
/// [BlurError::BufferMismatch] when `source.len() != stride * height`.
pub fn convolve(
    source: &[u8],
    width: usize,
    height: usize,
    stride: usize,
    sigma: f64,
    radius: isize,
) -> Result<Vec<u8>, BlurError> {
    GaussianBlur::new(sigma, radius)?.blur_bgra_slice(source, width, height, stride)
}
