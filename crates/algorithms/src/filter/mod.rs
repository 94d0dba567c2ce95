//! Sliding-window filters
//!
//! - **padding**: boundary extension by a fixed margin
//! - **convolve**: square-kernel correlation, same-size output
//! - **median**: square-window median, zero padded
//! - **gaussian**: normalized Gaussian kernels for blurring

mod convolve;
mod gaussian;
mod median;
mod padding;

pub use convolve::{convolve, Convolution, ConvolutionParams, Kernel};
pub use gaussian::gaussian_kernel;
pub use median::{median_filter, MedianFilter};
pub use padding::pad;

use mrelbp_core::{Error, Result};

/// Validate a square kernel of `width` against a `rows x cols` image and
/// return its radius.
pub(crate) fn kernel_radius(width: usize, rows: usize, cols: usize) -> Result<usize> {
    if width % 2 == 0 {
        return Err(Error::KernelWidth { width });
    }
    let radius = (width - 1) / 2;
    if radius > rows || radius > cols {
        return Err(Error::KernelTooLarge { radius, rows, cols });
    }
    Ok(radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_radius() {
        assert_eq!(kernel_radius(1, 4, 4).unwrap(), 0);
        assert_eq!(kernel_radius(13, 6, 6).unwrap(), 6);
        assert!(matches!(kernel_radius(0, 4, 4), Err(Error::KernelWidth { width: 0 })));
        assert!(matches!(kernel_radius(15, 6, 6), Err(Error::KernelTooLarge { radius: 7, .. })));
        assert!(matches!(kernel_radius(5, 10, 1), Err(Error::KernelTooLarge { .. })));
    }
}
