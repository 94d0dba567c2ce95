//! 2D convolution with a square kernel
//!
//! The kernel is applied as a centred correlation without flipping, which
//! matches convolution for the symmetric kernels used here (box, Gaussian).

use crate::maybe_rayon::map_pixels;
use mrelbp_core::{Algorithm, Error, Image, PaddingPolicy, Result};
use ndarray::{s, Array2};

use super::{kernel_radius, pad};

/// Square weight matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    weights: Array2<f64>,
}

impl Kernel {
    /// Wrap a square, non-empty weight matrix
    pub fn new(weights: Array2<f64>) -> Result<Self> {
        let (rows, cols) = weights.dim();
        if rows == 0 || rows != cols {
            return Err(Error::InvalidParameter {
                name: "kernel",
                value: format!("{}x{}", rows, cols),
                reason: "kernel must be square and non-empty".to_string(),
            });
        }
        Ok(Self { weights })
    }

    /// Kernel from row-major weights
    pub fn from_vec(width: usize, weights: Vec<f64>) -> Result<Self> {
        let array = Array2::from_shape_vec((width, width), weights).map_err(|e| {
            Error::InvalidParameter {
                name: "kernel",
                value: format!("width {}", width),
                reason: e.to_string(),
            }
        })?;
        Self::new(array)
    }

    /// All-zero kernel with a single `1` in the centre
    pub fn identity(width: usize) -> Self {
        let mut weights = Array2::zeros((width, width));
        if width > 0 {
            weights[(width / 2, width / 2)] = 1.0;
        }
        Self { weights }
    }

    /// Box kernel of ones
    pub fn ones(width: usize) -> Self {
        Self {
            weights: Array2::ones((width, width)),
        }
    }

    /// Side length
    pub fn width(&self) -> usize {
        self.weights.nrows()
    }

    pub fn weights(&self) -> &Array2<f64> {
        &self.weights
    }

    /// Sum of all weights
    pub fn sum(&self) -> f64 {
        self.weights.sum()
    }
}

/// Parameters for [`Convolution`]
#[derive(Debug, Clone)]
pub struct ConvolutionParams {
    pub kernel: Kernel,
    pub policy: PaddingPolicy,
}

impl Default for ConvolutionParams {
    fn default() -> Self {
        Self {
            kernel: Kernel::identity(3),
            policy: PaddingPolicy::Nearest,
        }
    }
}

/// Convolution algorithm
#[derive(Debug, Clone, Default)]
pub struct Convolution;

impl Algorithm for Convolution {
    type Input = Image<f64>;
    type Output = Image<f64>;
    type Params = ConvolutionParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Convolution"
    }

    fn description(&self) -> &'static str {
        "Square-kernel convolution with boundary padding"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        convolve(&params.kernel, &input, params.policy)
    }
}

/// Convolve `image` with `kernel`, padding by the kernel radius.
///
/// Every output pixel is the sum of element-wise products between the
/// kernel and the padded window centred on that pixel.
///
/// # Errors
/// * [`Error::KernelWidth`] if the kernel width is even
/// * [`Error::KernelTooLarge`] if the kernel radius exceeds either dimension
pub fn convolve(kernel: &Kernel, image: &Image<f64>, policy: PaddingPolicy) -> Result<Image<f64>> {
    let (rows, cols) = image.shape();
    let radius = kernel_radius(kernel.width(), rows, cols)?;
    let width = kernel.width();

    let padded = pad(image, radius, policy);
    let padded = padded.data();
    let weights = kernel.weights();

    map_pixels(rows, cols, |row, col| {
        let window = padded.slice(s![row..row + width, col..col + width]);
        let mut acc = 0.0;
        for (w, v) in weights.iter().zip(window.iter()) {
            acc += w * v;
        }
        acc
    })
}
