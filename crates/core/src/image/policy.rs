//! Boundary policies for sliding-window operations

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rule for synthesizing samples outside the image.
///
/// Identifiers follow the reference numeric library: `"Nearest"`,
/// `"Reflect"` and the empty string for zero fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddingPolicy {
    /// Replicate the edge sample
    Nearest,
    /// Mirror about the edge sample without repeating it
    Reflect,
    /// Fill with zeros
    #[default]
    #[serde(rename = "")]
    Zero,
}

impl PaddingPolicy {
    /// Map a possibly out-of-range index onto `[0, len)`.
    ///
    /// Returns `None` when the sample must be synthesized as zero.
    /// `Reflect` is periodic with period `2 * len - 2`, so margins larger
    /// than the axis keep bouncing between both edges.
    pub fn map_index(self, i: isize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        match self {
            PaddingPolicy::Zero => {
                if i < 0 || i >= len as isize {
                    None
                } else {
                    Some(i as usize)
                }
            }
            PaddingPolicy::Nearest => {
                if i < 0 {
                    Some(0)
                } else {
                    Some((i as usize).min(len - 1))
                }
            }
            PaddingPolicy::Reflect => {
                if len == 1 {
                    return Some(0);
                }
                let period = (2 * len - 2) as isize;
                let r = i.rem_euclid(period) as usize;
                if r < len {
                    Some(r)
                } else {
                    Some((2 * len - 2) - r)
                }
            }
        }
    }

    /// The identifier accepted by [`FromStr`]
    pub fn as_str(self) -> &'static str {
        match self {
            PaddingPolicy::Nearest => "Nearest",
            PaddingPolicy::Reflect => "Reflect",
            PaddingPolicy::Zero => "",
        }
    }
}

impl FromStr for PaddingPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Nearest" => Ok(PaddingPolicy::Nearest),
            "Reflect" => Ok(PaddingPolicy::Reflect),
            "" => Ok(PaddingPolicy::Zero),
            other => Err(Error::UnsupportedPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for PaddingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
