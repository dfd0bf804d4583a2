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
use crate::saturate_narrow::SaturateNarrow;
use std::ops::{AddAssign, Mul};

/// Blue, green and red accumulators for one pixel. Alpha is never blended.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct ColorGroup<J: Copy> {
    pub(crate) b: J,
    pub(crate) g: J,
    pub(crate) r: J,
}

impl<J: Copy> ColorGroup<J> {
    #[inline(always)]
    pub(crate) fn from_components(b: J, g: J, r: J) -> ColorGroup<J> {
        ColorGroup { b, g, r }
    }
}

impl ColorGroup<f64> {
    /// Reads B, G, R starting at `offset`
    #[inline(always)]
    pub(crate) fn from_bgra(src: &[u8], offset: usize) -> ColorGroup<f64> {
        let px = &src[offset..offset + 3];
        ColorGroup::from_components(px[0] as f64, px[1] as f64, px[2] as f64)
    }

    /// Reads B, G, R from an interleaved three channel plane
    #[inline(always)]
    pub(crate) fn from_plane(src: &[f64], offset: usize) -> ColorGroup<f64> {
        let px = &src[offset..offset + 3];
        ColorGroup::from_components(px[0], px[1], px[2])
    }

    #[inline(always)]
    pub(crate) fn to_plane(self, dst: &mut [f64], offset: usize) {
        let px = &mut dst[offset..offset + 3];
        px[0] = self.b;
        px[1] = self.g;
        px[2] = self.r;
    }

    /// Writes the clamped color with an opaque alpha
    #[inline(always)]
    pub(crate) fn to_bgra_opaque(self, dst: &mut [u8], offset: usize) {
        let px = &mut dst[offset..offset + 4];
        px[0] = self.b.saturate_narrow();
        px[1] = self.g.saturate_narrow();
        px[2] = self.r.saturate_narrow();
        px[3] = 255;
    }
}

impl<J> Mul<J> for ColorGroup<J>
where
    J: Copy + Mul<Output = J>,
{
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: J) -> Self::Output {
        ColorGroup::from_components(self.b * rhs, self.g * rhs, self.r * rhs)
    }
}

impl<J> AddAssign for ColorGroup<J>
where
    J: Copy + AddAssign,
{
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.b += rhs.b;
        self.g += rhs.g;
        self.r += rhs.r;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_weighted_pixels() {
        let src = [10u8, 20, 30, 40, 100, 200, 250, 0];
        let mut sum = ColorGroup::<f64>::default();
        sum += ColorGroup::from_bgra(&src, 0) * 0.5;
        sum += ColorGroup::from_bgra(&src, 4) * 0.5;
        assert_eq!(sum, ColorGroup::from_components(55., 110., 140.));
        let mut dst = [0u8; 4];
        sum.to_bgra_opaque(&mut dst, 0);
        assert_eq!(dst, [55, 110, 140, 255]);
    }

    #[test]
    fn plane_round_trip_keeps_fraction() {
        let mut plane = [0f64; 6];
        ColorGroup::from_components(1.25, 2.5, 3.75).to_plane(&mut plane, 3);
        assert_eq!(plane, [0., 0., 0., 1.25, 2.5, 3.75]);
        let restored = ColorGroup::from_plane(&plane, 3);
        assert_eq!(restored.r, 3.75);
    }
}
