//! # MRELBP Core
//!
//! Core types, configuration and I/O for LBP and MRELBP texture descriptors.
//!
//! This crate provides:
//! - `Image<T>`: generic 2D sample grid shared by every pipeline stage
//! - `PaddingPolicy`: boundary rules for sliding-window operations
//! - `Parameters` / `StandardizationParams`: descriptor configuration
//! - The `Algorithm` trait for a consistent API
//! - Grayscale TIFF I/O

pub mod error;
pub mod image;
pub mod io;
pub mod params;

pub use error::{Error, Result};
pub use image::{Image, PaddingPolicy, Pixel};
pub use params::{Parameters, StandardizationParams};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::{Image, PaddingPolicy, Pixel};
    pub use crate::params::{Parameters, StandardizationParams};
    pub use crate::Algorithm;
}

/// Common interface of the filters and descriptors.
///
/// An implementation never mutates its input: it consumes an image and
/// returns freshly allocated results.
pub trait Algorithm {
    /// What the algorithm consumes, usually an `Image<f64>`
    type Input;
    /// Filtered image or descriptor output
    type Output;
    /// Configuration, `()` when the algorithm value carries it already
    type Params: Default;
    type Error: std::error::Error;

    /// Short display name
    fn name(&self) -> &'static str;

    /// One-line summary for listings
    fn description(&self) -> &'static str;

    /// Run on `input` with `params`
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
