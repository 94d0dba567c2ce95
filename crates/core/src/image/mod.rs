//! Image data structures and boundary policies

mod grid;
mod pixel;
mod policy;

pub use grid::{Image, ImageStatistics};
pub use pixel::Pixel;
pub use policy::PaddingPolicy;
