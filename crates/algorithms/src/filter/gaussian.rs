//! Gaussian kernel generation

use crate::maybe_rayon::map_pixels;
use mrelbp_core::{Error, Result};

use super::Kernel;

/// Build a normalized `size x size` Gaussian kernel.
///
/// Each cell holds `exp(-(dr² + dc²) / (2σ²))` for its offset from the
/// centre; cells are evaluated independently and the kernel is then scaled
/// to sum to one.
pub fn gaussian_kernel(size: usize, sigma: f64) -> Result<Kernel> {
    if size % 2 == 0 {
        return Err(Error::KernelWidth { width: size });
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "sigma",
            value: sigma.to_string(),
            reason: "sigma must be positive and finite".to_string(),
        });
    }

    let center = (size / 2) as f64;
    let denom = 2.0 * sigma * sigma;
    let cells = map_pixels(size, size, |r, c| {
        let dr = r as f64 - center;
        let dc = c as f64 - center;
        (-(dr * dr + dc * dc) / denom).exp()
    })?;

    let sum: f64 = cells.data().sum();
    Kernel::new(cells.into_array().mapv(|v| v / sum))
}
