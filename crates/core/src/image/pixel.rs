//! Pixel element trait for generic image samples

use num_traits::{NumCast, Zero};
use std::fmt::Debug;

/// Trait for types that can be stored in an image cell.
///
/// Grayscale inputs and filtered intermediates use `f64`; descriptor code
/// images use `u32`.
pub trait Pixel:
    Copy + Clone + Debug + PartialOrd + PartialEq + NumCast + Zero + Send + Sync + 'static
{
    /// Convert self to f64
    fn to_f64(self) -> Option<f64> {
        NumCast::from(self)
    }
}

impl Pixel for u32 {}
impl Pixel for f64 {}
