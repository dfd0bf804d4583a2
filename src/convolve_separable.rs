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
use crate::image_store::BGRA_CHANNELS;
use crate::kernel_bounds::KernelBounds;

/// Channels kept in the intermediate plane: B, G, R
pub(crate) const PLANE_CHANNELS: usize = 3;

/// Horizontal pass for source row `y` into an unquantized B, G, R plane row.
///
/// Intermediate values stay in `f64` so the two passes reproduce the 2D
/// kernel product instead of rounding twice.
pub(crate) fn convolve_row_horizontal(
    y: usize,
    src: &[u8],
    src_stride: usize,
    width: usize,
    bounds: &[KernelBounds],
    kernel: &[f64],
    plane_row: &mut [f64],
) {
    let radius = kernel.len() / 2;
    let src_row = &src[y * src_stride..];

    for (x, bound) in bounds.iter().enumerate().take(width) {
        let mut sums = ColorGroup::<f64>::default();
        let first_px = bound.first_pixel(x);
        let taps = &kernel[bound.first_tap(radius)..][..bound.len()];
        for (j, &weight) in taps.iter().enumerate() {
            let px = (first_px + j) * BGRA_CHANNELS;
            sums += ColorGroup::from_bgra(src_row, px) * weight;
        }
        sums.to_plane(plane_row, x * PLANE_CHANNELS);
    }
}

/// Vertical pass producing destination row `y` from the intermediate plane.
pub(crate) fn convolve_row_vertical(
    y: usize,
    plane: &[f64],
    width: usize,
    bound: &KernelBounds,
    kernel: &[f64],
    dst_row: &mut [u8],
) {
    let radius = kernel.len() / 2;
    let plane_stride = width * PLANE_CHANNELS;
    let first_row = bound.first_pixel(y);
    let taps = &kernel[bound.first_tap(radius)..][..bound.len()];

    for (x, dst) in dst_row[..width * BGRA_CHANNELS]
        .chunks_exact_mut(BGRA_CHANNELS)
        .enumerate()
    {
        let mut sums = ColorGroup::<f64>::default();
        for (j, &weight) in taps.iter().enumerate() {
            let offset = (first_row + j) * plane_stride + x * PLANE_CHANNELS;
            sums += ColorGroup::from_plane(plane, offset) * weight;
        }
        sums.to_bgra_opaque(dst, 0);
    }
}
