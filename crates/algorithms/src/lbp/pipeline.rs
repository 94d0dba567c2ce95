//! LBP and MRELBP entry points
//!
//! Each run builds (or borrows) the mapping table, computes descriptor
//! images and aggregates their histograms. Inputs are never modified.

use std::time::Instant;

use mrelbp_core::{Algorithm, Error, Image, Parameters, Result};
use serde::Serialize;
use tracing::{debug, info};

use super::descriptor::{
    center_histogram, lbp_descriptor, median_filtered, mrelbp_descriptors, valid_extent,
    DescriptorImage,
};
use super::histogram::histogram;
use super::mapping::MappingTable;

/// Result of a plain LBP run
#[derive(Debug, Clone, PartialEq)]
pub struct LbpOutput {
    pub descriptor: DescriptorImage,
    /// Length `neighbours + 2`
    pub histogram: Vec<u64>,
}

impl LbpOutput {
    /// Mapped descriptor image
    pub fn mapped(&self) -> &Image<u32> {
        &self.descriptor.mapped
    }
}

/// Result of an MRELBP run
#[derive(Debug, Clone, PartialEq)]
pub struct MrelbpOutput {
    pub large: DescriptorImage,
    pub small: DescriptorImage,
    pub radial: DescriptorImage,
    pub hist_large: Vec<u64>,
    pub hist_small: Vec<u64>,
    pub hist_radial: Vec<u64>,
    /// Two bins: centre samples at or above the mean, and below it
    pub hist_center: Vec<u64>,
}

/// Histograms of an MRELBP run, without the descriptor images
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MrelbpHistograms {
    pub center: Vec<u64>,
    pub small: Vec<u64>,
    pub large: Vec<u64>,
    pub radial: Vec<u64>,
}

impl MrelbpOutput {
    /// Centre, small, large and radial histograms joined end to end
    pub fn feature_vector(&self) -> Vec<u64> {
        [
            &self.hist_center,
            &self.hist_small,
            &self.hist_large,
            &self.hist_radial,
        ]
        .into_iter()
        .flat_map(|h| h.iter().copied())
        .collect()
    }

    /// [`feature_vector`](Self::feature_vector) with every histogram
    /// divided by its own total
    pub fn normalized_feature_vector(&self) -> Vec<f64> {
        [
            &self.hist_center,
            &self.hist_small,
            &self.hist_large,
            &self.hist_radial,
        ]
        .into_iter()
        .flat_map(|h| {
            let total = h.iter().sum::<u64>();
            h.iter().map(move |&count| {
                if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64
                }
            })
        })
        .collect()
    }

    pub fn histograms(&self) -> MrelbpHistograms {
        MrelbpHistograms {
            center: self.hist_center.clone(),
            small: self.hist_small.clone(),
            large: self.hist_large.clone(),
            radial: self.hist_radial.clone(),
        }
    }
}

/// Plain LBP descriptor and histogram of `image`
pub fn lbp(image: &Image<f64>, params: &Parameters) -> Result<LbpOutput> {
    params.validate_lbp()?;
    let table = MappingTable::build(params.neighbours)?;
    lbp_with_mapping(image, params, &table)
}

/// Plain LBP with a prebuilt mapping table
pub fn lbp_with_mapping(
    image: &Image<f64>,
    params: &Parameters,
    table: &MappingTable,
) -> Result<LbpOutput> {
    params.validate_lbp()?;
    let start = Instant::now();
    debug!(
        rows = image.rows(),
        cols = image.cols(),
        margin = params.lbp_margin(),
        neighbours = params.neighbours,
        "lbp"
    );

    let descriptor = lbp_descriptor(image, params, table)?;
    let histogram = histogram(&descriptor.mapped, table.max_bin())?;

    let (rows, cols) = descriptor.shape();
    info!(rows, cols, elapsed_ms = start.elapsed().as_millis() as u64, "lbp complete");
    Ok(LbpOutput {
        descriptor,
        histogram,
    })
}

/// MRELBP descriptors and histograms of `image`
pub fn mrelbp(image: &Image<f64>, params: &Parameters) -> Result<MrelbpOutput> {
    params.validate_mre()?;
    let table = MappingTable::build(params.neighbours)?;
    mrelbp_with_mapping(image, params, &table)
}

/// MRELBP with a prebuilt mapping table
pub fn mrelbp_with_mapping(
    image: &Image<f64>,
    params: &Parameters,
    table: &MappingTable,
) -> Result<MrelbpOutput> {
    params.validate_mre()?;
    let margin = params.mre_margin();
    debug!(
        rows = image.rows(),
        cols = image.cols(),
        margin,
        neighbours = params.neighbours,
        "mrelbp"
    );
    valid_extent(image.shape(), margin)?;

    let start = Instant::now();
    let filtered = median_filtered(image, params)?;
    debug!(elapsed_ms = start.elapsed().as_millis() as u64, "median filters done");

    let hist_center = center_histogram(&filtered.center, margin, params.eps1)?;

    let stage = Instant::now();
    let descriptors = mrelbp_descriptors(&filtered, params, table)?;
    debug!(elapsed_ms = stage.elapsed().as_millis() as u64, "descriptors done");

    let max_bin = table.max_bin();
    let hist_small = histogram(&descriptors.small.mapped, max_bin)?;
    let hist_large = histogram(&descriptors.large.mapped, max_bin)?;
    let hist_radial = histogram(&descriptors.radial.mapped, max_bin)?;

    let (rows, cols) = descriptors.small.shape();
    info!(rows, cols, elapsed_ms = start.elapsed().as_millis() as u64, "mrelbp complete");

    Ok(MrelbpOutput {
        large: descriptors.large,
        small: descriptors.small,
        radial: descriptors.radial,
        hist_large,
        hist_small,
        hist_radial,
        hist_center,
    })
}

/// Plain LBP as an [`Algorithm`]
#[derive(Debug, Clone, Default)]
pub struct Lbp;

impl Algorithm for Lbp {
    type Input = Image<f64>;
    type Output = LbpOutput;
    type Params = Parameters;
    type Error = Error;

    fn name(&self) -> &'static str {
        "LBP"
    }

    fn description(&self) -> &'static str {
        "Rotation-invariant uniform local binary patterns"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        lbp(&input, &params)
    }
}

/// MRELBP as an [`Algorithm`]
#[derive(Debug, Clone, Default)]
pub struct Mrelbp;

impl Algorithm for Mrelbp {
    type Input = Image<f64>;
    type Output = MrelbpOutput;
    type Params = Parameters;
    type Error = Error;

    fn name(&self) -> &'static str {
        "MRELBP"
    }

    fn description(&self) -> &'static str {
        "Median-robust extended local binary patterns (centre, small, large and radial)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        mrelbp(&input, &params)
    }
}
