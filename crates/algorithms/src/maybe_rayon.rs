/// Rayon/sequential execution shim.
///
/// With the `parallel` feature this re-exports rayon's prelude; without it a
/// sequential `into_par_iter` stand-in lets the same iterator chains compile
/// and run on the calling thread.
#[cfg(feature = "parallel")]
pub use rayon::prelude::*;

#[cfg(not(feature = "parallel"))]
mod sequential {
    /// Sequential stand-in for `rayon::prelude::IntoParallelIterator`.
    pub trait IntoParallelIterator {
        type Iter;
        type Item;
        fn into_par_iter(self) -> Self::Iter;
    }

    impl<I: IntoIterator> IntoParallelIterator for I {
        type Iter = I::IntoIter;
        type Item = I::Item;
        fn into_par_iter(self) -> Self::Iter {
            self.into_iter()
        }
    }
}

#[cfg(not(feature = "parallel"))]
pub use sequential::*;

use mrelbp_core::{Error, Image, Pixel, Result};
use ndarray::Array2;

/// Evaluate `f(row, col)` for every cell of a `rows x cols` grid.
///
/// Cells are independent tasks. Results are collected in row-major index
/// order, so the output does not depend on the number of worker threads.
pub fn map_indexed<T, F>(rows: usize, cols: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize, usize) -> T + Sync + Send,
{
    (0..rows * cols)
        .into_par_iter()
        .map(|idx| f(idx / cols, idx % cols))
        .collect()
}

/// Build a `rows x cols` image where each cell is `f(row, col)`.
pub fn map_pixels<T, F>(rows: usize, cols: usize, f: F) -> Result<Image<T>>
where
    T: Pixel,
    F: Fn(usize, usize) -> T + Sync + Send,
{
    let data = map_indexed(rows, cols, f);
    let array = Array2::from_shape_vec((rows, cols), data).map_err(|e| Error::Other(e.to_string()))?;
    Ok(Image::from_array(array))
}
