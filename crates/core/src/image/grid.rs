//! Main Image type

use crate::error::{Error, Result};
use crate::image::Pixel;
use ndarray::{s, Array2};

/// A 2D grid of samples indexed `[row, col]`.
///
/// `Image<T>` is the unit of exchange between every stage of the
/// descriptor pipeline. Stages never mutate their inputs; each one
/// allocates and returns a new image.
///
/// # Example
///
/// ```ignore
/// use mrelbp_core::Image;
///
/// let mut image: Image<f64> = Image::new(28, 28);
/// image.set(3, 4, 1.0)?;
/// let value = image.get(3, 4)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T: Pixel> {
    /// Samples stored in row-major order (row, col)
    data: Array2<T>,
}

impl<T: Pixel> Image<T> {
    /// Create a new image filled with zeros
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// Create a new image filled with a specific value
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: Array2::from_elem((rows, cols), value),
        }
    }

    /// Create an image from row-major samples
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::InvalidDimensions { rows, cols });
        }

        let array = Array2::from_shape_vec((rows, cols), data)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self { data: array })
    }

    /// Create an image from an ndarray
    pub fn from_array(data: Array2<T>) -> Self {
        Self { data }
    }

    /// Create an image by evaluating `f(row, col)` for every cell
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self {
            data: Array2::from_shape_fn((rows, cols), |(r, c)| f(r, c)),
        }
    }

    // Dimensions

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the image is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Data access

    /// Get value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Get value at (row, col) without bounds checking
    ///
    /// # Safety
    /// Caller must ensure row < self.rows() and col < self.cols()
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> T {
        unsafe { *self.data.uget((row, col)) }
    }

    /// Set value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.data[(row, col)] = value;
        Ok(())
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array2<T> {
        &self.data
    }

    /// Consume the image and return the underlying array
    pub fn into_array(self) -> Array2<T> {
        self.data
    }

    /// Copy the `rows x cols` window whose top-left corner is `(row, col)`
    pub fn crop(&self, row: usize, col: usize, rows: usize, cols: usize) -> Result<Self> {
        if row + rows > self.rows() || col + cols > self.cols() {
            return Err(Error::IndexOutOfBounds {
                row: row + rows,
                col: col + cols,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        let window = self.data.slice(s![row..row + rows, col..col + cols]);
        Ok(Self {
            data: window.to_owned(),
        })
    }

    /// Apply `f` to every sample, producing a new image
    pub fn map<U: Pixel, F>(&self, f: F) -> Image<U>
    where
        F: FnMut(&T) -> U,
    {
        Image {
            data: self.data.map(f),
        }
    }

    // Statistics

    /// Calculate basic statistics over all samples
    pub fn statistics(&self) -> ImageStatistics<T> {
        let mut min: Option<T> = None;
        let mut max: Option<T> = None;
        let mut sum: f64 = 0.0;
        let mut count: usize = 0;

        for &value in self.data.iter() {
            if min.is_none_or(|m| value < m) {
                min = Some(value);
            }
            if max.is_none_or(|m| value > m) {
                max = Some(value);
            }
            if let Some(v) = value.to_f64() {
                sum += v;
                count += 1;
            }
        }

        let mean = (count > 0).then(|| sum / count as f64);

        ImageStatistics {
            min,
            max,
            mean,
            count,
        }
    }

    /// Arithmetic mean of all samples, `None` for an empty image
    pub fn mean(&self) -> Option<f64> {
        self.statistics().mean
    }

    /// Population standard deviation of all samples
    pub fn std_dev(&self) -> Option<f64> {
        let mean = self.mean()?;
        let n = self.len() as f64;
        let var = self
            .data
            .iter()
            .filter_map(|v| v.to_f64())
            .map(|v| (v - mean) * (v - mean))
            .sum::<f64>()
            / n;
        Some(var.sqrt())
    }
}

/// Basic statistics for an image
#[derive(Debug, Clone)]
pub struct ImageStatistics<T> {
    pub min: Option<T>,
    pub max: Option<T>,
    pub mean: Option<f64>,
    pub count: usize,
}
