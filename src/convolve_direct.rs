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
use crate::color_group::ColorGroup;
use crate::gaussian::GaussianKernel;
use crate::image_store::BGRA_CHANNELS;
use crate::kernel_bounds::KernelBounds;

/// Convolves destination row `y` with the full 2D kernel.
///
/// For every pixel the kernel window is clipped to the image; the clipped
/// cells are dropped without redistributing their weight. Alpha of every
/// written pixel is 255. Row padding past `width * 4` is left untouched.
pub(crate) fn convolve_row_bgra_direct(
    y: usize,
    src: &[u8],
    src_stride: usize,
    width: usize,
    height: usize,
    kernel: &GaussianKernel,
    dst_row: &mut [u8],
) {
    let radius = kernel.radius();
    let y_bounds = KernelBounds::for_position(y, radius, height);

    for (x, dst) in dst_row[..width * BGRA_CHANNELS]
        .chunks_exact_mut(BGRA_CHANNELS)
        .enumerate()
    {
        let x_bounds = KernelBounds::for_position(x, radius, width);
        let mut sums = ColorGroup::<f64>::default();

        for ky in y_bounds.start..=y_bounds.limit {
            let kernel_row = kernel.row(ky);
            let src_row = (y as isize + ky) as usize * src_stride;
            for kx in x_bounds.start..=x_bounds.limit {
                let px = src_row + (x as isize + kx) as usize * BGRA_CHANNELS;
                let weight = kernel_row[(kx + radius as isize) as usize];
                sums += ColorGroup::from_bgra(src, px) * weight;
            }
        }

        sums.to_bgra_opaque(dst, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gaussian::build_kernel;

    #[test]
    fn single_row_image() {
        // 3x1 image, only the horizontal taps fall inside
        let src = [0u8, 0, 0, 9, 90, 90, 90, 9, 0, 0, 0, 9];
        let kernel = build_kernel(1.0, 1).unwrap();
        let mut dst = [0u8; 12];
        convolve_row_bgra_direct(0, &src, 12, 3, 1, &kernel, &mut dst);
        let center = (90. * kernel.weight(0, 0) + 1e-9) as u8;
        let side = (90. * kernel.weight(1, 0) + 1e-9) as u8;
        assert_eq!(&dst[4..8], &[center, center, center, 255]);
        assert_eq!(&dst[0..4], &[side, side, side, 255]);
        assert_eq!(&dst[8..12], &[side, side, side, 255]);
    }

    #[test]
    fn padding_is_not_written() {
        let src = vec![100u8; 12];
        let kernel = build_kernel(1.0, 0).unwrap();
        let mut dst = vec![7u8; 12];
        convolve_row_bgra_direct(0, &src, 12, 2, 1, &kernel, &mut dst);
        assert_eq!(&dst[..8], &[100, 100, 100, 255, 100, 100, 100, 255]);
        assert_eq!(&dst[8..], &[7, 7, 7, 7]);
    }
}
