//! Outputs must not depend on the number of worker threads.

use mrelbp_algorithms::filter::{convolve, gaussian_kernel, median_filter};
use mrelbp_algorithms::lbp::{lbp, mrelbp};
use mrelbp_algorithms::standardize::local_standardize;
use mrelbp_core::{Image, PaddingPolicy, Parameters, StandardizationParams};
use mrelbp_parallel::ProcessingMode;

const MODES: [ProcessingMode; 4] = [
    ProcessingMode::Sequential,
    ProcessingMode::ParallelWith(2),
    ProcessingMode::ParallelWith(4),
    ProcessingMode::Parallel,
];

/// Deterministic pseudo-random texture
fn texture(rows: usize, cols: usize) -> Image<f64> {
    Image::from_fn(rows, cols, |r, c| {
        let mut h = (r as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
            ^ (c as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
        h ^= h >> 29;
        h = h.wrapping_mul(0xBF58_476D_1CE4_E5B9);
        h ^= h >> 32;
        (h % 1000) as f64 / 100.0
    })
}

#[test]
fn mrelbp_is_identical_for_every_mode() {
    let image = texture(48, 40);
    let params = Parameters::default();

    let reference = ProcessingMode::Sequential
        .install(|| mrelbp(&image, &params))
        .unwrap()
        .unwrap();

    for mode in MODES {
        let out = mode.install(|| mrelbp(&image, &params)).unwrap().unwrap();
        assert_eq!(out, reference, "mode {:?}", mode);
        assert_eq!(out.feature_vector(), reference.feature_vector());
    }
}

#[test]
fn lbp_is_identical_for_every_mode() {
    let image = texture(32, 32);
    let params = Parameters {
        radius: 2,
        neighbours: 12,
        ..Default::default()
    };

    let reference = lbp(&image, &params).unwrap();
    for mode in MODES {
        let out = mode.install(|| lbp(&image, &params)).unwrap().unwrap();
        assert_eq!(out, reference, "mode {:?}", mode);
    }
}

#[test]
fn filters_are_identical_for_every_mode() {
    let image = texture(30, 25);
    let kernel = gaussian_kernel(7, 2.0).unwrap();

    let conv = convolve(&kernel, &image, PaddingPolicy::Reflect).unwrap();
    let med = median_filter(&image, 5).unwrap();
    let std = local_standardize(&image, &StandardizationParams::default()).unwrap();

    for mode in MODES {
        let (c, m, s) = mode
            .install(|| {
                (
                    convolve(&kernel, &image, PaddingPolicy::Reflect).unwrap(),
                    median_filter(&image, 5).unwrap(),
                    local_standardize(&image, &StandardizationParams::default()).unwrap(),
                )
            })
            .unwrap();
        assert_eq!(c, conv, "convolution, mode {:?}", mode);
        assert_eq!(m, med, "median, mode {:?}", mode);
        assert_eq!(s, std, "standardization, mode {:?}", mode);
    }
}

#[test]
fn zero_threads_is_rejected() {
    let image = texture(24, 24);
    let result = ProcessingMode::ParallelWith(0).install(|| mrelbp(&image, &Parameters::default()));
    assert!(result.is_err());
}
