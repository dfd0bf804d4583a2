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
use log::debug;
use num_traits::{AsPrimitive, Float, FloatConst};

/// Validated pair of blur parameters.
///
/// Construction is the only place where sigma and radius are checked, so every
/// kernel and every convolution downstream works with values in their domain.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BlurParameters {
    sigma: f64,
    radius: usize,
}

impl BlurParameters {
    /// Sigma must be finite and strictly positive, radius non-negative.
    pub fn new(sigma: f64, radius: isize) -> Result<BlurParameters, BlurError> {
        if !sigma.is_finite() || sigma <= 0. {
            return Err(BlurError::InvalidSigma(sigma));
        }
        if radius < 0 {
            return Err(BlurError::InvalidRadius(radius));
        }
        Ok(BlurParameters {
            sigma,
            radius: radius as usize,
        })
    }

    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    #[inline]
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Side length of the kernel, `2 * radius + 1`
    #[inline]
    pub fn kernel_size(&self) -> usize {
        self.radius * 2 + 1
    }
}

/// Square normalized 2D Gaussian kernel.
///
/// Weights are stored row-major, `kernel_size * kernel_size` of them, and are
/// addressed either by raw row/column or by offset relative to the center.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel {
    weights: Vec<f64>,
    radius: usize,
}

impl GaussianKernel {
    #[inline]
    pub fn radius(&self) -> usize {
        self.radius
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.radius * 2 + 1
    }

    /// Row-major weights
    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// One kernel row, `y` is relative to the center
    #[inline]
    pub fn row(&self, y: isize) -> &[f64] {
        let size = self.size();
        let start = (y + self.radius as isize) as usize * size;
        &self.weights[start..start + size]
    }

    /// Weight at offset `(x, y)` from the center, both in `[-radius, radius]`
    #[inline]
    pub fn weight(&self, x: isize, y: isize) -> f64 {
        let r = self.radius as isize;
        self.weights[((y + r) as usize) * self.size() + (x + r) as usize]
    }

    /// Weight at raw position, `row` and `column` in `[0, size)`
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.weights[row * self.size() + column]
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}

/// Divides every weight by the total so the set sums to 1.
///
/// A total that is zero or not finite means the weights are degenerate for
/// the requested sigma.
fn normalize<V: Float + 'static>(weights: &mut [V], total: V, sigma: f64) -> Result<(), BlurError> {
    if !(total.is_finite() && total > V::zero()) {
        return Err(BlurError::InvalidSigma(sigma));
    }
    for weight in weights.iter_mut() {
        *weight = *weight / total;
    }
    Ok(())
}

pub(crate) fn make_gaussian_1d<V: Float + FloatConst + 'static>(
    parameters: &BlurParameters,
) -> Result<Vec<V>, BlurError>
where
    f64: AsPrimitive<V>,
    isize: AsPrimitive<V>,
{
    let radius = parameters.radius as isize;
    let sigma: V = parameters.sigma.as_();
    let two: V = 2f64.as_();
    let mut kernel: Vec<V> = try_vec![V::zero(); parameters.kernel_size()];

    let c = V::one() / (sigma * (two * V::PI()).sqrt());
    let divisor = two * sigma * sigma;

    let mut total = V::zero();
    for i in -radius..=radius {
        let i_f: V = i.as_();
        let value = c * (-(i_f * i_f) / divisor).exp();
        kernel[(i + radius) as usize] = value;
        total = total + value;
    }

    normalize(&mut kernel, total, parameters.sigma)?;
    Ok(kernel)
}

pub(crate) fn make_gaussian_2d(parameters: &BlurParameters) -> Result<GaussianKernel, BlurError> {
    let radius = parameters.radius as isize;
    let sigma = parameters.sigma;
    let size = parameters.kernel_size();
    let area = size
        .checked_mul(size)
        .ok_or(BlurError::OutOfMemory(usize::MAX))?;
    let mut weights: Vec<f64> = try_vec![0f64; area];

    // product of two 1D gaussians f(x)f(y)
    let c = 1. / (2. * std::f64::consts::PI * sigma * sigma);
    let divisor = 2. * sigma * sigma;

    let mut total = 0f64;
    for (row, y) in weights.chunks_exact_mut(size).zip(-radius..=radius) {
        for (weight, x) in row.iter_mut().zip(-radius..=radius) {
            let distance = (x * x + y * y) as f64;
            *weight = c * (-distance / divisor).exp();
            total += *weight;
        }
    }

    normalize(&mut weights, total, sigma)?;

    debug!(
        "Built {size}x{size} gaussian kernel, sigma {sigma}, center weight {}",
        weights[area / 2]
    );

    Ok(GaussianKernel {
        weights,
        radius: parameters.radius,
    })
}

/// Builds a normalized `(2 * radius + 1)²` Gaussian kernel.
///
/// # Errors
///
/// [BlurError::InvalidSigma] when sigma is not a finite positive number,
/// [BlurError::InvalidRadius] when radius is negative.
pub fn build_kernel(sigma: f64, radius: isize) -> Result<GaussianKernel, BlurError> {
    let parameters = BlurParameters::new(sigma, radius)?;
    make_gaussian_2d(&parameters)
}

/// Builds a normalized 1D Gaussian of `2 * radius + 1` taps.
///
/// The outer product of this kernel with itself equals [build_kernel] for the
/// same parameters.
pub fn build_kernel_1d(sigma: f64, radius: isize) -> Result<Vec<f64>, BlurError> {
    let parameters = BlurParameters::new(sigma, radius)?;
    make_gaussian_1d::<f64>(&parameters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_sums_to_one() {
        for &sigma in &[0.1f64, 0.5, 1.0, 2.5, 10.0, 150.0] {
            for radius in 0..12 {
                let kernel = build_kernel(sigma, radius).unwrap();
                assert!(
                    (kernel.sum() - 1.0).abs() < 1e-9,
                    "sigma {sigma} radius {radius} sum {}",
                    kernel.sum()
                );
                let kernel_1d = build_kernel_1d(sigma, radius).unwrap();
                let sum_1d: f64 = kernel_1d.iter().sum();
                assert!((sum_1d - 1.0).abs() < 1e-9);
                assert!(kernel.weights().iter().all(|w| w.is_finite() && *w >= 0.));
            }
        }
    }

    #[test]
    fn kernel_is_radially_symmetric() {
        let kernel = build_kernel(1.7, 4).unwrap();
        assert_eq!(kernel.size(), 9);
        assert_eq!(kernel.weights().len(), 81);
        for y in -4isize..=4 {
            for x in -4isize..=4 {
                let w = kernel.weight(x, y);
                assert_eq!(w, kernel.weight(y, x));
                assert_eq!(w, kernel.weight(-x, -y));
                assert_eq!(w, kernel.weight(-x, y));
            }
        }
    }

    #[test]
    fn sigma_one_center_weight() {
        let kernel = build_kernel(1.0, 1).unwrap();
        assert!((kernel.weight(0, 0) - 0.2042).abs() < 1e-3);
        assert!((kernel.weight(1, 0) - 0.1238).abs() < 1e-3);
        assert!((kernel.weight(1, 1) - 0.0751).abs() < 1e-3);
        assert_eq!(kernel.get(1, 1), kernel.weight(0, 0));
        assert_eq!(kernel.row(0)[1], kernel.weight(0, 0));
    }

    #[test]
    fn radius_zero_is_identity() {
        let kernel = build_kernel(3.0, 0).unwrap();
        assert_eq!(kernel.weights(), &[1.0]);
        assert_eq!(build_kernel_1d(3.0, 0).unwrap(), vec![1.0]);
    }

    #[test]
    fn kernel_2d_is_outer_product_of_1d() {
        let radius = 5isize;
        let kernel = build_kernel(2.2, radius).unwrap();
        let kernel_1d = build_kernel_1d(2.2, radius).unwrap();
        for y in -radius..=radius {
            for x in -radius..=radius {
                let product = kernel_1d[(x + radius) as usize] * kernel_1d[(y + radius) as usize];
                assert!((kernel.weight(x, y) - product).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn f32_kernel_matches_f64() {
        let parameters = BlurParameters::new(1.3, 3).unwrap();
        let single = make_gaussian_1d::<f32>(&parameters).unwrap();
        let double = make_gaussian_1d::<f64>(&parameters).unwrap();
        for (a, b) in single.iter().zip(double.iter()) {
            assert!((*a as f64 - b).abs() < 1e-6);
        }
    }

    #[test]
    fn invalid_parameters() {
        assert_eq!(build_kernel(0.0, 1), Err(BlurError::InvalidSigma(0.0)));
        assert_eq!(build_kernel(-1.0, 1), Err(BlurError::InvalidSigma(-1.0)));
        assert!(matches!(
            build_kernel(f64::NAN, 1),
            Err(BlurError::InvalidSigma(_))
        ));
        assert_eq!(
            build_kernel(f64::INFINITY, 1),
            Err(BlurError::InvalidSigma(f64::INFINITY))
        );
        assert_eq!(build_kernel(1.0, -1), Err(BlurError::InvalidRadius(-1)));
        assert_eq!(build_kernel_1d(1.0, -3), Err(BlurError::InvalidRadius(-3)));
    }

    #[test]
    fn degenerate_sigma_is_rejected() {
        // 1 / (2 * pi * sigma²) overflows
        assert!(matches!(
            build_kernel(1e-200, 2),
            Err(BlurError::InvalidSigma(_))
        ));
    }
}
