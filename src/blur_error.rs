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
use std::error::Error;
use std::fmt::Display;

/// Buffer mismatch error description
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlurBufferMismatch {
    pub expected: usize,
    pub stride: usize,
    pub height: usize,
    pub slice_len: usize,
}

/// Broad classification of [BlurError]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum BlurErrorKind {
    /// Sigma or radius is outside of its domain
    InvalidParameter,
    /// Buffer geometry does not describe the slice that was passed
    InvalidBuffer,
    OutOfMemory,
}

/// Error enumeration type
#[derive(Debug, Clone, PartialEq)]
pub enum BlurError {
    InvalidSigma(f64),
    InvalidRadius(isize),
    BufferMismatch(BlurBufferMismatch),
    InvalidStride(usize, usize),
    OutOfMemory(usize),
}

impl BlurError {
    /// Returns error as int code
    #[inline]
    pub fn code(&self) -> usize {
        match self {
            BlurError::InvalidSigma(_) => 1,
            BlurError::InvalidRadius(_) => 2,
            BlurError::BufferMismatch(_) => 3,
            BlurError::InvalidStride(_, _) => 4,
            BlurError::OutOfMemory(_) => 5,
        }
    }

    #[inline]
    pub fn kind(&self) -> BlurErrorKind {
        match self {
            BlurError::InvalidSigma(_) | BlurError::InvalidRadius(_) => {
                BlurErrorKind::InvalidParameter
            }
            BlurError::BufferMismatch(_) | BlurError::InvalidStride(_, _) => {
                BlurErrorKind::InvalidBuffer
            }
            BlurError::OutOfMemory(_) => BlurErrorKind::OutOfMemory,
        }
    }
}

impl Display for BlurError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlurError::InvalidSigma(sigma) => f.write_fmt(format_args!(
                "Sigma must be a finite number greater than 0, but received {sigma}"
            )),
            BlurError::InvalidRadius(radius) => f.write_fmt(format_args!(
                "Radius must be greater or equal to 0, but received {radius}"
            )),
            BlurError::BufferMismatch(buffer_mismatch) => f.write_fmt(format_args!(
                "Image buffer len expected to be {} [stride({})*h({})] but received {}",
                buffer_mismatch.expected,
                buffer_mismatch.stride,
                buffer_mismatch.height,
                buffer_mismatch.slice_len,
            )),
            BlurError::InvalidStride(min_stride, real_stride) => f.write_fmt(format_args!(
                "Stride must be at least {min_stride}, but received {real_stride}",
            )),
            BlurError::OutOfMemory(capacity) => f.write_fmt(format_args!(
                "There is no enough memory to allocate {capacity} elements"
            )),
        }
    }
}

impl Error for BlurError {}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::blur_error::BlurError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds() {
        assert_eq!(
            BlurError::InvalidSigma(0.).kind(),
            BlurErrorKind::InvalidParameter
        );
        assert_eq!(
            BlurError::InvalidRadius(-1).kind(),
            BlurErrorKind::InvalidParameter
        );
        assert_eq!(
            BlurError::InvalidStride(16, 8).kind(),
            BlurErrorKind::InvalidBuffer
        );
        assert_eq!(BlurError::OutOfMemory(1).kind(), BlurErrorKind::OutOfMemory);
    }

    #[test]
    fn error_messages() {
        let message = BlurError::InvalidStride(16, 8).to_string();
        assert_eq!(message, "Stride must be at least 16, but received 8");
        let message = BlurError::BufferMismatch(BlurBufferMismatch {
            expected: 48,
            stride: 16,
            height: 3,
            slice_len: 47,
        })
        .to_string();
        assert!(message.contains("48"));
        assert!(message.contains("47"));
    }

    #[test]
    fn try_vec_reports_out_of_memory() {
        fn alloc(n: usize) -> Result<Vec<u8>, BlurError> {
            Ok(try_vec![0u8; n])
        }
        assert_eq!(alloc(usize::MAX), Err(BlurError::OutOfMemory(usize::MAX)));
        assert_eq!(alloc(4).map(|v| v.len()), Ok(4));
    }
}
