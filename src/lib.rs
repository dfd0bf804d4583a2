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
#![deny(deprecated)]
#![allow(clippy::too_many_arguments)]
//! Gaussian blur of 8-bit BGRA images.
//!
//! A normalized `(2r + 1)²` Gaussian kernel is built from `sigma` and `radius`
//! and applied as a direct 2D convolution. Kernel taps falling outside the
//! image are skipped without renormalizing the rest, and output alpha is
//! always opaque.
//!
//! ```
//! let width = 4;
//! let height = 3;
//! let stride = width * 4;
//! let src = vec![128u8; stride * height];
//! let blurred = gauss_blur::convolve(&src, width, height, stride, 1.0, 1).unwrap();
//! assert_eq!(blurred.len(), src.len());
//! ```

mod blur;
mod blur_error;
mod color_group;
mod convolve_direct;
mod convolve_separable;
mod gaussian;
mod image_size;
mod image_store;
mod kernel_bounds;
mod saturate_narrow;
mod threading_policy;

pub use blur::{ConvolutionStrategy, GaussianBlur, convolve};
pub use blur_error::{BlurBufferMismatch, BlurError, BlurErrorKind};
pub use gaussian::{BlurParameters, GaussianKernel, build_kernel, build_kernel_1d};
pub use image_size::ImageSize;
pub use image_store::{BGRA_CHANNELS, BgraImage};
pub use threading_policy::ThreadingPolicy;
