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
use crate::ImageSize;
use crate::blur_error::{BlurBufferMismatch, BlurError, try_vec};

/// Bytes per BGRA pixel
pub const BGRA_CHANNELS: usize = 4;

#[derive(Debug, Clone)]
pub(crate) enum BufferStore<'a> {
    Borrowed(&'a [u8]),
    Owned(Vec<u8>),
}

impl BufferStore<'_> {
    #[inline]
    pub(crate) fn borrow(&self) -> &[u8] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

/// 8-bit image with interleaved B, G, R, A channels and a row stride in bytes.
///
/// The stride may exceed `width * 4` when rows are padded. A store is always
/// consistent: its buffer holds exactly `stride * height` bytes.
#[derive(Debug, Clone)]
pub struct BgraImage<'a> {
    pub(crate) buffer: BufferStore<'a>,
    pub width: usize,
    pub height: usize,
    pub(crate) stride: usize,
}

impl BgraImage<'static> {
    /// Wraps an owned buffer after checking its geometry
    pub fn new(
        buffer: Vec<u8>,
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<BgraImage<'static>, BlurError> {
        validate_geometry(buffer.len(), width, height, stride)?;
        Ok(BgraImage {
            buffer: BufferStore::Owned(buffer),
            width,
            height,
            stride,
        })
    }

    /// Allocates a zeroed image, stride is `width * 4`
    pub fn alloc(width: usize, height: usize) -> Result<BgraImage<'static>, BlurError> {
        let stride = width
            .checked_mul(BGRA_CHANNELS)
            .ok_or(BlurError::OutOfMemory(usize::MAX))?;
        BgraImage::alloc_with_stride(width, height, stride)
    }

    pub(crate) fn alloc_with_stride(
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<BgraImage<'static>, BlurError> {
        let len = stride
            .checked_mul(height)
            .ok_or(BlurError::OutOfMemory(usize::MAX))?;
        let buffer = try_vec![0u8; len];
        BgraImage::new(buffer, width, height, stride)
    }
}

impl<'a> BgraImage<'a> {
    /// Borrows a caller buffer after checking its geometry
    pub fn from_slice(
        slice_ref: &'a [u8],
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<BgraImage<'a>, BlurError> {
        validate_geometry(slice_ref.len(), width, height, stride)?;
        Ok(BgraImage {
            buffer: BufferStore::Borrowed(slice_ref),
            width,
            height,
            stride,
        })
    }

    #[inline]
    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.width, self.height)
    }

    /// Row length in bytes
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.borrow()
    }

    /// Consumes the store, copying only when the buffer is borrowed
    pub fn into_vec(self) -> Vec<u8> {
        match self.buffer {
            BufferStore::Borrowed(p) => p.to_vec(),
            BufferStore::Owned(v) => v,
        }
    }

    /// B, G, R, A at `(x, y)`
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let offset = y * self.stride + x * BGRA_CHANNELS;
        let src = &self.as_bytes()[offset..offset + BGRA_CHANNELS];
        [src[0], src[1], src[2], src[3]]
    }
}

pub(crate) fn validate_geometry(
    len: usize,
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), BlurError> {
    let min_stride = width
        .checked_mul(BGRA_CHANNELS)
        .ok_or(BlurError::InvalidStride(usize::MAX, stride))?;
    if stride < min_stride {
        return Err(BlurError::InvalidStride(min_stride, stride));
    }
    let expected = stride.checked_mul(height);
    if expected != Some(len) {
        return Err(BlurError::BufferMismatch(BlurBufferMismatch {
            expected: expected.unwrap_or(usize::MAX),
            stride,
            height,
            slice_len: len,
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BlurErrorKind;

    #[test]
    fn accepts_padded_rows() {
        let data = vec![0u8; 20 * 3];
        let store = BgraImage::from_slice(&data, 4, 3, 20).unwrap();
        assert_eq!(store.stride(), 20);
        assert_eq!(store.size(), ImageSize::new(4, 3));
        assert_eq!(store.as_bytes().len(), 60);
    }

    #[test]
    fn rejects_short_stride() {
        let data = vec![0u8; 12 * 3];
        let err = BgraImage::from_slice(&data, 4, 3, 12).unwrap_err();
        assert_eq!(err, BlurError::InvalidStride(16, 12));
        assert_eq!(err.kind(), BlurErrorKind::InvalidBuffer);
    }

    #[test]
    fn rejects_length_mismatch() {
        let data = vec![0u8; 47];
        let err = BgraImage::from_slice(&data, 4, 3, 16).unwrap_err();
        assert_eq!(
            err,
            BlurError::BufferMismatch(BlurBufferMismatch {
                expected: 48,
                stride: 16,
                height: 3,
                slice_len: 47,
            })
        );
        let err = BgraImage::new(vec![0u8; 49], 4, 3, 16).unwrap_err();
        assert_eq!(err.kind(), BlurErrorKind::InvalidBuffer);
    }

    #[test]
    fn rejects_overflowing_geometry() {
        let err = BgraImage::from_slice(&[], usize::MAX, 1, usize::MAX).unwrap_err();
        assert_eq!(err.kind(), BlurErrorKind::InvalidBuffer);
        let err = BgraImage::from_slice(&[], 1, usize::MAX, 8).unwrap_err();
        assert_eq!(err.kind(), BlurErrorKind::InvalidBuffer);
    }

    #[test]
    fn alloc_is_zeroed() {
        let store = BgraImage::alloc(3, 2).unwrap();
        assert_eq!(store.stride(), 12);
        assert!(store.as_bytes().iter().all(|&x| x == 0));
        assert_eq!(store.into_vec().len(), 24);
    }

    #[test]
    fn reads_pixels() {
        let mut data = vec![0u8; 8 * 2];
        data[8 + 4..8 + 8].copy_from_slice(&[1, 2, 3, 4]);
        let store = BgraImage::from_slice(&data, 2, 2, 8).unwrap();
        assert_eq!(store.pixel(1, 1), [1, 2, 3, 4]);
        assert_eq!(store.pixel(0, 0), [0, 0, 0, 0]);
    }
}
