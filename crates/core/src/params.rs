//! Descriptor and preprocessing configuration

use crate::error::{Error, Result};
use crate::image::PaddingPolicy;
use serde::{Deserialize, Serialize};

/// Parameters for LBP and MRELBP descriptors.
///
/// Kernel widths follow the median-filter naming of the MRELBP paper:
/// `w_c` filters the center image, `w_r0` the large ring and `w_r1` the
/// small ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Small ring radius in pixels
    pub radius: usize,
    /// Large ring radius in pixels (MRELBP only)
    pub large_radius: usize,
    /// Samples per ring; also the bit width of a descriptor code
    pub neighbours: usize,
    /// Median kernel width for the center image
    pub w_c: usize,
    /// Median kernel width for the large-ring image
    pub w_r0: usize,
    /// Median kernel width for the small-ring image
    pub w_r1: usize,
    /// Threshold tolerance and integer-grid detection tolerance
    pub eps1: f64,
    /// Single-axis alignment tolerance for bilinear interpolation
    pub eps2: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            radius: 3,
            large_radius: 9,
            neighbours: 8,
            w_c: 5,
            w_r0: 5,
            w_r1: 3,
            eps1: 1e-6,
            eps2: 1e-4,
        }
    }
}

/// Largest supported `neighbours`; the mapping table holds `2^neighbours` bins.
pub const MAX_NEIGHBOURS: usize = 24;

impl Parameters {
    /// Sampling margin for plain LBP
    pub fn lbp_margin(&self) -> usize {
        self.radius
    }

    /// Sampling margin for MRELBP.
    ///
    /// The large ring reaches `large_radius` pixels out, and the
    /// zero-padded median filter contaminates another `(w_r0 - 1) / 2`.
    pub fn mre_margin(&self) -> usize {
        self.large_radius + self.w_r0.saturating_sub(1) / 2
    }

    /// Check the fields plain LBP reads: `radius`, `neighbours` and the
    /// tolerances
    pub fn validate_lbp(&self) -> Result<()> {
        if self.neighbours == 0 || self.neighbours > MAX_NEIGHBOURS {
            return Err(Error::InvalidParameter {
                name: "neighbours",
                value: self.neighbours.to_string(),
                reason: format!("must be in 1..={MAX_NEIGHBOURS}"),
            });
        }
        if self.radius == 0 {
            return Err(Error::InvalidParameter {
                name: "radius",
                value: "0".to_string(),
                reason: "radius must be at least 1".to_string(),
            });
        }
        for (name, eps) in [("eps1", self.eps1), ("eps2", self.eps2)] {
            if !eps.is_finite() || eps < 0.0 {
                return Err(Error::InvalidParameter {
                    name,
                    value: eps.to_string(),
                    reason: "tolerance must be finite and non-negative".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Everything [`validate_lbp`](Self::validate_lbp) checks, plus the
    /// large ring and the three median kernel widths
    pub fn validate_mre(&self) -> Result<()> {
        self.validate_lbp()?;
        if self.large_radius < self.radius {
            return Err(Error::InvalidParameter {
                name: "large_radius",
                value: self.large_radius.to_string(),
                reason: format!("must not be smaller than radius ({})", self.radius),
            });
        }
        for width in [self.w_c, self.w_r0, self.w_r1] {
            if width % 2 == 0 {
                return Err(Error::KernelWidth { width });
            }
        }
        Ok(())
    }
}

/// Parameters for local standardization.
///
/// Two Gaussian blurs: the first estimates the local mean, the second the
/// local standard deviation of the mean-subtracted image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardizationParams {
    /// Kernel width of the mean-estimating Gaussian
    pub ks1: usize,
    /// Sigma of the mean-estimating Gaussian
    pub sigma1: f64,
    /// Kernel width of the deviation-estimating Gaussian
    pub ks2: usize,
    /// Sigma of the deviation-estimating Gaussian
    pub sigma2: f64,
    /// Boundary policy for both blurs
    pub policy: PaddingPolicy,
    /// Added to the local deviation before division
    pub eps: f64,
}

impl Default for StandardizationParams {
    fn default() -> Self {
        Self {
            ks1: 13,
            sigma1: 9.0,
            ks2: 9,
            sigma2: 5.0,
            policy: PaddingPolicy::Nearest,
            eps: 1e-3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_margins() {
        let p = Parameters::default();
        assert_eq!(p.lbp_margin(), 3);
        assert_eq!(p.mre_margin(), 11);
        assert!(p.validate_lbp().is_ok());
        assert!(p.validate_mre().is_ok());
    }

    #[test]
    fn test_validate_rejects_even_kernel() {
        let p = Parameters {
            w_r1: 4,
            ..Default::default()
        };
        assert!(matches!(p.validate_mre(), Err(Error::KernelWidth { width: 4 })));
    }

    #[test]
    fn test_validate_rejects_bad_neighbours() {
        for neighbours in [0, 25] {
            let p = Parameters {
                neighbours,
                ..Default::default()
            };
            for result in [p.validate_lbp(), p.validate_mre()] {
                assert!(matches!(
                    result,
                    Err(Error::InvalidParameter { name: "neighbours", .. })
                ));
            }
        }
    }

    #[test]
    fn test_validate_rejects_zero_radius() {
        let p = Parameters {
            radius: 0,
            ..Default::default()
        };
        assert!(matches!(
            p.validate_lbp(),
            Err(Error::InvalidParameter { name: "radius", .. })
        ));
        assert!(matches!(
            p.validate_mre(),
            Err(Error::InvalidParameter { name: "radius", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_tolerances() {
        for bad in [-1e-6, f64::NAN, f64::INFINITY] {
            let p = Parameters {
                eps1: bad,
                ..Default::default()
            };
            assert!(matches!(
                p.validate_lbp(),
                Err(Error::InvalidParameter { name: "eps1", .. })
            ));

            let p = Parameters {
                eps2: bad,
                ..Default::default()
            };
            assert!(matches!(
                p.validate_mre(),
                Err(Error::InvalidParameter { name: "eps2", .. })
            ));
        }

        let p = Parameters {
            eps1: 0.0,
            eps2: 0.0,
            ..Default::default()
        };
        assert!(p.validate_lbp().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_radii() {
        let p = Parameters {
            radius: 5,
            large_radius: 2,
            ..Default::default()
        };
        assert!(matches!(
            p.validate_mre(),
            Err(Error::InvalidParameter { name: "large_radius", .. })
        ));
    }

    #[test]
    fn test_lbp_ignores_median_and_large_ring_fields() {
        let p = Parameters {
            radius: 10,
            large_radius: 2,
            w_c: 4,
            w_r0: 4,
            w_r1: 0,
            ..Default::default()
        };
        assert!(p.validate_lbp().is_ok());
        assert!(p.validate_mre().is_err());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let p: Parameters = serde_json::from_str(r#"{"radius": 2, "neighbours": 16}"#).unwrap();
        assert_eq!(p.radius, 2);
        assert_eq!(p.neighbours, 16);
        assert_eq!(p.large_radius, 9);

        let s: StandardizationParams = serde_json::from_str(r#"{"policy": "Reflect"}"#).unwrap();
        assert_eq!(s.policy, PaddingPolicy::Reflect);
        assert_eq!(s.ks1, 13);
    }
}
