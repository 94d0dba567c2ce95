//! # MRELBP Algorithms
//!
//! Texture descriptor algorithms built on `mrelbp-core`.
//!
//! ## Modules
//!
//! - **filter**: Boundary padding, convolution, median filter, Gaussian kernels
//! - **standardize**: Global and local (Gaussian) standardization
//! - **lbp**: Uniform mapping, ring sampling, LBP/MRELBP descriptors, histograms

pub mod filter;
pub mod lbp;
pub mod standardize;

pub(crate) mod maybe_rayon;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::filter::{
        convolve, gaussian_kernel, median_filter, pad, Convolution, ConvolutionParams, Kernel,
        MedianFilter,
    };
    pub use crate::lbp::{
        histogram, lbp, lbp_with_mapping, mrelbp, mrelbp_with_mapping, DescriptorImage, Lbp,
        LbpOutput, MappingTable, Mrelbp, MrelbpOutput,
    };
    pub use crate::standardize::{local_standardize, standardize};
    pub use mrelbp_core::prelude::*;
}
