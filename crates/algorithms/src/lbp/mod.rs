//! Local binary pattern descriptors
//!
//! - **mapping**: rotation-invariant uniform mapping of raw codes
//! - **sampling**: circular neighbour rings with bilinear interpolation
//! - **descriptor**: per-pixel LBP and MRELBP codes
//! - **histogram**: bin counts of mapped descriptor images
//! - **pipeline**: `lbp` / `mrelbp` entry points

mod descriptor;
mod histogram;
mod mapping;
mod pipeline;
mod sampling;

pub use descriptor::{
    center_histogram, lbp_descriptor, median_filtered, mrelbp_descriptors, valid_extent,
    DescriptorImage, FilteredImages, MreDescriptors,
};
pub use histogram::histogram;
pub use mapping::{transitions, MappingTable};
pub use pipeline::{
    lbp, lbp_with_mapping, mrelbp, mrelbp_with_mapping, Lbp, LbpOutput, Mrelbp, MrelbpHistograms,
    MrelbpOutput,
};
pub use sampling::Ring;
