//! Image standardization
//!
//! - **standardize**: global zero-mean, unit-variance scaling
//! - **local_standardize**: Gaussian-weighted local mean and deviation
//!   normalization, run before descriptor extraction to suppress
//!   illumination gradients

use mrelbp_core::{Error, Image, Result, StandardizationParams};
use tracing::debug;

use crate::filter::{convolve, gaussian_kernel};

/// Scale `image` to zero mean and unit (population) standard deviation.
///
/// # Errors
/// * [`Error::InvalidDimensions`] for an empty image
/// * [`Error::DegenerateInput`] if every sample is equal
pub fn standardize(image: &Image<f64>) -> Result<Image<f64>> {
    let (rows, cols) = image.shape();
    let (Some(mean), Some(std)) = (image.mean(), image.std_dev()) else {
        return Err(Error::InvalidDimensions { rows, cols });
    };
    if std == 0.0 || !std.is_finite() {
        return Err(Error::DegenerateInput);
    }
    Ok(image.map(|&v| (v - mean) / std))
}

/// Normalize `image` by its local Gaussian mean and deviation.
///
/// ```text
/// centered = image - G(ks1, sigma1) * image
/// result   = centered / (sqrt(G(ks2, sigma2) * centered²) + eps)
/// ```
pub fn local_standardize(image: &Image<f64>, params: &StandardizationParams) -> Result<Image<f64>> {
    if !params.eps.is_finite() || params.eps <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "eps",
            value: params.eps.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }

    let mean_kernel = gaussian_kernel(params.ks1, params.sigma1)?;
    let dev_kernel = gaussian_kernel(params.ks2, params.sigma2)?;
    debug!(
        ks1 = params.ks1,
        ks2 = params.ks2,
        policy = %params.policy,
        "local standardization"
    );

    let blurred = convolve(&mean_kernel, image, params.policy)?;
    let centered = Image::from_array(image.data() - blurred.data());

    let squared = centered.map(|&v| v * v);
    let variance = convolve(&dev_kernel, &squared, params.policy)?;

    let eps = params.eps;
    let out = ndarray::Zip::from(centered.data())
        .and(variance.data())
        .map_collect(|&c, &var| c / (var.max(0.0).sqrt() + eps));
    Ok(Image::from_array(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mrelbp_core::PaddingPolicy;

    #[test]
    fn test_standardize_moments() {
        let image = Image::from_fn(8, 9, |r, c| ((r * 3 + c * 5) % 11) as f64);
        let out = standardize(&image).unwrap();
        assert!(out.mean().unwrap().abs() < 1e-12);
        assert!((out.std_dev().unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_standardize_constant_is_degenerate() {
        let image = Image::filled(4, 4, 2.5);
        assert!(matches!(standardize(&image), Err(Error::DegenerateInput)));
    }

    #[test]
    fn test_standardize_empty() {
        let image: Image<f64> = Image::new(0, 3);
        assert!(matches!(standardize(&image), Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    fn test_local_standardize_constant_is_zero() {
        let image = Image::filled(20, 20, 7.0);
        let out = local_standardize(&image, &StandardizationParams::default()).unwrap();
        assert_eq!(out.shape(), (20, 20));
        assert!(out.data().iter().all(|v| v.abs() < 1e-9));
    }

    #[test]
    fn test_local_standardize_removes_offset() {
        let base = Image::from_fn(24, 24, |r, c| ((r * 7 + c * 3) % 5) as f64);
        let shifted = base.map(|&v| v + 100.0);
        let params = StandardizationParams {
            policy: PaddingPolicy::Reflect,
            ..Default::default()
        };
        let a = local_standardize(&base, &params).unwrap();
        let b = local_standardize(&shifted, &params).unwrap();
        for (x, y) in a.data().iter().zip(b.data().iter()) {
            assert!((x - y).abs() < 1e-6, "{} vs {}", x, y);
        }
    }

    #[test]
    fn test_local_standardize_rejects_bad_kernels() {
        let image = Image::filled(20, 20, 1.0);
        let params = StandardizationParams {
            ks2: 8,
            ..Default::default()
        };
        assert!(matches!(
            local_standardize(&image, &params),
            Err(Error::KernelWidth { width: 8 })
        ));

        let small = Image::filled(4, 4, 1.0);
        assert!(matches!(
            local_standardize(&small, &StandardizationParams::default()),
            Err(Error::KernelTooLarge { .. })
        ));
    }
}
