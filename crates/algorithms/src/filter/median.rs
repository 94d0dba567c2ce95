//! Square-window median filter
//!
//! The image is zero padded by the window radius, so samples near the
//! border are pulled towards zero. Descriptor margins account for this.

use crate::maybe_rayon::map_pixels;
use mrelbp_core::{Algorithm, Error, Image, PaddingPolicy, Result};
use ndarray::s;

use super::{kernel_radius, pad};

/// Median filter with an odd square window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedianFilter {
    kernel: usize,
}

impl Default for MedianFilter {
    fn default() -> Self {
        Self { kernel: 5 }
    }
}

impl MedianFilter {
    /// Filter with a `kernel x kernel` window.
    ///
    /// The width is validated when filtering, against the image it is
    /// applied to.
    pub fn new(kernel: usize) -> Self {
        Self { kernel }
    }

    /// Window width
    pub fn kernel(&self) -> usize {
        self.kernel
    }

    /// Window radius, `(kernel - 1) / 2`
    pub fn distance(&self) -> usize {
        self.kernel.saturating_sub(1) / 2
    }

    /// Replace every sample with the median of its window.
    ///
    /// # Errors
    /// * [`Error::KernelWidth`] if the width is even
    /// * [`Error::KernelTooLarge`] if the radius exceeds either dimension
    pub fn filter(&self, image: &Image<f64>) -> Result<Image<f64>> {
        let (rows, cols) = image.shape();
        let distance = kernel_radius(self.kernel, rows, cols)?;
        let k = self.kernel;
        let mid = (k * k) / 2;

        let padded = pad(image, distance, PaddingPolicy::Zero);
        let padded = padded.data();

        map_pixels(rows, cols, |row, col| {
            let mut window: Vec<f64> = padded
                .slice(s![row..row + k, col..col + k])
                .iter()
                .copied()
                .collect();
            window.sort_unstable_by(|a, b| a.total_cmp(b));
            window[mid]
        })
    }
}

impl Algorithm for MedianFilter {
    type Input = Image<f64>;
    type Output = Image<f64>;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "MedianFilter"
    }

    fn description(&self) -> &'static str {
        "Square-window median filter with zero padding"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        self.filter(&input)
    }
}

/// Median-filter `image` with a `kernel x kernel` window
pub fn median_filter(image: &Image<f64>, kernel: usize) -> Result<Image<f64>> {
    MedianFilter::new(kernel).filter(image)
}
