//! Per-pixel descriptor codes
//!
//! Plain LBP thresholds each ring sample against the centre pixel. MRELBP
//! samples two rings on median-filtered images and emits three codes per
//! pixel: small ring, large ring and the radial difference between them.

use mrelbp_core::params::MAX_NEIGHBOURS;
use mrelbp_core::{Error, Image, Parameters, Result};
use ndarray::Array2;

use super::mapping::MappingTable;
use super::sampling::Ring;
use crate::filter::{kernel_radius, MedianFilter};
use crate::maybe_rayon::map_indexed;

/// Raw codes and their mapped bins over the valid region
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptorImage {
    /// `neighbours`-bit codes, bit `k` from the `k`-th ring sample
    pub codes: Image<u32>,
    /// Codes after rotation-invariant uniform mapping
    pub mapped: Image<u32>,
}

impl DescriptorImage {
    fn from_codes(codes: Image<u32>, table: &MappingTable) -> Self {
        let mapped = codes.map(|&code| table.map(code));
        Self { codes, mapped }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.codes.shape()
    }
}

/// The three median-filtered variants MRELBP samples from
#[derive(Debug, Clone)]
pub struct FilteredImages {
    /// Filtered with `w_c`, thresholded for the centre histogram
    pub center: Image<f64>,
    /// Filtered with `w_r0`, sampled on the large ring
    pub large: Image<f64>,
    /// Filtered with `w_r1`, sampled on the small ring
    pub small: Image<f64>,
}

/// Small, large and radial descriptors of one image
#[derive(Debug, Clone, PartialEq)]
pub struct MreDescriptors {
    pub small: DescriptorImage,
    pub large: DescriptorImage,
    pub radial: DescriptorImage,
}

/// Median-filter `image` with all three MRELBP kernels.
///
/// Every kernel is checked against the image before any filtering starts.
pub fn median_filtered(image: &Image<f64>, params: &Parameters) -> Result<FilteredImages> {
    let (rows, cols) = image.shape();
    for width in [params.w_c, params.w_r0, params.w_r1] {
        kernel_radius(width, rows, cols)?;
    }

    Ok(FilteredImages {
        center: MedianFilter::new(params.w_c).filter(image)?,
        large: MedianFilter::new(params.w_r0).filter(image)?,
        small: MedianFilter::new(params.w_r1).filter(image)?,
    })
}

/// Two-bin histogram of the centre image over the valid region.
///
/// The cropped region is shifted to zero mean; samples `>= -eps1` count
/// towards bin 0, the rest towards bin 1.
pub fn center_histogram(center: &Image<f64>, margin: usize, eps1: f64) -> Result<Vec<u64>> {
    let (rows, cols) = valid_extent(center.shape(), margin)?;
    let region = center.crop(margin, margin, rows, cols)?;
    let mean = region.data().iter().sum::<f64>() / region.len() as f64;

    let above = region
        .data()
        .iter()
        .filter(|&&v| v - mean >= -eps1)
        .count() as u64;
    Ok(vec![above, region.len() as u64 - above])
}

/// Plain LBP codes over `(rows - 2r) x (cols - 2r)`, `r = radius`.
pub fn lbp_descriptor(
    image: &Image<f64>,
    params: &Parameters,
    table: &MappingTable,
) -> Result<DescriptorImage> {
    check_table(params, table)?;
    let margin = params.lbp_margin();
    let (rows, cols) = valid_extent(image.shape(), margin)?;

    let ring = Ring::new(params.radius as f64, params.neighbours, params.eps1, params.eps2);
    check_reach(&ring, margin)?;

    let data = image.data();
    let eps1 = params.eps1;
    let codes = map_indexed(rows, cols, |r, c| {
        let (i, j) = (r + margin, c + margin);
        let threshold = data[(i, j)] - eps1;
        let mut buf = [0.0; MAX_NEIGHBOURS];
        let samples = ring.sample_into(data, i, j, &mut buf);
        encode(samples.iter().map(|&v| v >= threshold))
    });

    let codes = to_image(rows, cols, codes)?;
    Ok(DescriptorImage::from_codes(codes, table))
}

/// MRELBP small, large and radial codes over the valid region
/// `(rows - 2d) x (cols - 2d)`, `d = large_radius + (w_r0 - 1) / 2`.
pub fn mrelbp_descriptors(
    filtered: &FilteredImages,
    params: &Parameters,
    table: &MappingTable,
) -> Result<MreDescriptors> {
    check_table(params, table)?;
    let margin = params.mre_margin();
    let shape = filtered.small.shape();
    if filtered.large.shape() != shape {
        return Err(Error::Algorithm(format!(
            "filtered images differ in shape: {:?} vs {:?}",
            filtered.large.shape(),
            shape
        )));
    }
    let (rows, cols) = valid_extent(shape, margin)?;

    let small_ring = Ring::new(params.radius as f64, params.neighbours, params.eps1, params.eps2);
    let large_ring = Ring::new(
        params.large_radius as f64,
        params.neighbours,
        params.eps1,
        params.eps2,
    );
    check_reach(&small_ring, margin)?;
    check_reach(&large_ring, margin)?;

    let small_data = filtered.small.data();
    let large_data = filtered.large.data();
    let eps1 = params.eps1;

    let triples = map_indexed(rows, cols, |r, c| {
        let (i, j) = (r + margin, c + margin);
        let mut small_buf = [0.0; MAX_NEIGHBOURS];
        let mut large_buf = [0.0; MAX_NEIGHBOURS];
        let small = small_ring.sample_into(small_data, i, j, &mut small_buf);
        let large = large_ring.sample_into(large_data, i, j, &mut large_buf);

        let radial = encode(large.iter().zip(small).map(|(l, s)| l - s >= -eps1));
        let small_mean = mean(small);
        let large_mean = mean(large);
        let small = encode(small.iter().map(|v| v - small_mean >= -eps1));
        let large = encode(large.iter().map(|v| v - large_mean >= -eps1));
        (small, large, radial)
    });

    let mut small = Vec::with_capacity(triples.len());
    let mut large = Vec::with_capacity(triples.len());
    let mut radial = Vec::with_capacity(triples.len());
    for (s, l, r) in triples {
        small.push(s);
        large.push(l);
        radial.push(r);
    }

    Ok(MreDescriptors {
        small: DescriptorImage::from_codes(to_image(rows, cols, small)?, table),
        large: DescriptorImage::from_codes(to_image(rows, cols, large)?, table),
        radial: DescriptorImage::from_codes(to_image(rows, cols, radial)?, table),
    })
}

/// Size of the region whose rings stay `margin` pixels inside the image
pub fn valid_extent(shape: (usize, usize), margin: usize) -> Result<(usize, usize)> {
    let (rows, cols) = shape;
    if rows <= 2 * margin || cols <= 2 * margin {
        return Err(Error::InvalidDimensions { rows, cols });
    }
    Ok((rows - 2 * margin, cols - 2 * margin))
}

/// Bit `k` set when the `k`-th flag is true
fn encode(bits: impl Iterator<Item = bool>) -> u32 {
    bits.enumerate()
        .fold(0u32, |code, (k, bit)| code | ((bit as u32) << k))
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn check_table(params: &Parameters, table: &MappingTable) -> Result<()> {
    if table.neighbours() != params.neighbours {
        return Err(Error::InvalidParameter {
            name: "neighbours",
            value: params.neighbours.to_string(),
            reason: format!("mapping table was built for {}", table.neighbours()),
        });
    }
    Ok(())
}

fn check_reach(ring: &Ring, margin: usize) -> Result<()> {
    if ring.reach() > margin {
        return Err(Error::Algorithm(format!(
            "ring of radius {} reaches {} pixels, beyond margin {}",
            ring.radius(),
            ring.reach(),
            margin
        )));
    }
    Ok(())
}

fn to_image(rows: usize, cols: usize, codes: Vec<u32>) -> Result<Image<u32>> {
    let array = Array2::from_shape_vec((rows, cols), codes).map_err(|e| Error::Other(e.to_string()))?;
    Ok(Image::from_array(array))
}
