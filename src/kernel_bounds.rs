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

/// Range of kernel offsets, inclusive on both ends, that stay inside the image
/// along one axis.
///
/// Kernel cells outside of this range are skipped entirely and the remaining
/// weights are not renormalized, so pixels closer than `radius` to an edge
/// receive less than the full kernel mass.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub(crate) struct KernelBounds {
    pub start: isize,
    pub limit: isize,
}

impl KernelBounds {
    /// Bounds for pixel `position` on an axis of `extent` pixels.
    ///
    /// `extent` must be non-zero and `position < extent`.
    #[inline]
    pub(crate) fn for_position(position: usize, radius: usize, extent: usize) -> KernelBounds {
        let start = if position < radius {
            -(position as isize)
        } else {
            -(radius as isize)
        };
        let limit = if position + radius + 1 > extent {
            (extent - (position + 1)) as isize
        } else {
            radius as isize
        };
        KernelBounds { start, limit }
    }

    /// Number of kernel taps in range
    #[inline]
    pub(crate) fn len(&self) -> usize {
        (self.limit - self.start + 1) as usize
    }

    /// First pixel covered by the range
    #[inline]
    pub(crate) fn first_pixel(&self, position: usize) -> usize {
        (position as isize + self.start) as usize
    }

    /// First kernel tap, as an index into a `2 * radius + 1` kernel
    #[inline]
    pub(crate) fn first_tap(&self, radius: usize) -> usize {
        (self.start + radius as isize) as usize
    }
}

/// Precomputes bounds for every position along an axis
pub(crate) fn axis_bounds(radius: usize, extent: usize) -> Vec<KernelBounds> {
    (0..extent)
        .map(|position| KernelBounds::for_position(position, radius, extent))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_uses_full_kernel() {
        let bounds = KernelBounds::for_position(5, 2, 10);
        assert_eq!(bounds, KernelBounds { start: -2, limit: 2 });
        assert_eq!(bounds.len(), 5);
        assert_eq!(bounds.first_pixel(5), 3);
        assert_eq!(bounds.first_tap(2), 0);
    }

    #[test]
    fn edges_are_truncated() {
        let first = KernelBounds::for_position(0, 2, 10);
        assert_eq!(first, KernelBounds { start: 0, limit: 2 });
        assert_eq!(first.first_tap(2), 2);
        let second = KernelBounds::for_position(1, 2, 10);
        assert_eq!(second, KernelBounds { start: -1, limit: 2 });
        let last = KernelBounds::for_position(9, 2, 10);
        assert_eq!(last, KernelBounds { start: -2, limit: 0 });
        let before_last = KernelBounds::for_position(8, 2, 10);
        assert_eq!(before_last, KernelBounds { start: -2, limit: 1 });
    }

    #[test]
    fn radius_larger_than_axis() {
        let bounds = axis_bounds(7, 3);
        assert_eq!(bounds[0], KernelBounds { start: 0, limit: 2 });
        assert_eq!(bounds[1], KernelBounds { start: -1, limit: 1 });
        assert_eq!(bounds[2], KernelBounds { start: -2, limit: 0 });
        for (position, bound) in bounds.iter().enumerate() {
            assert_eq!(bound.len(), 3);
            assert_eq!(bound.first_pixel(position), 0);
        }
    }

    #[test]
    fn single_pixel_axis() {
        let bounds = KernelBounds::for_position(0, 4, 1);
        assert_eq!(bounds, KernelBounds { start: 0, limit: 0 });
        assert_eq!(bounds.first_tap(4), 4);
    }
}
