//! Boundary padding

use mrelbp_core::{Image, PaddingPolicy, Pixel};

/// Extend `image` by `margin` rows and columns on every side.
///
/// Out-of-range samples are synthesized with `policy`. Any margin is
/// accepted, including margins larger than the image itself.
pub fn pad<T: Pixel>(image: &Image<T>, margin: usize, policy: PaddingPolicy) -> Image<T> {
    let (rows, cols) = image.shape();
    let m = margin as isize;

    Image::from_fn(rows + 2 * margin, cols + 2 * margin, |r, c| {
        let src_r = policy.map_index(r as isize - m, rows);
        let src_c = policy.map_index(c as isize - m, cols);
        match (src_r, src_c) {
            // SAFETY: `map_index` only returns indices in `[0, len)`.
            (Some(sr), Some(sc)) => unsafe { image.get_unchecked(sr, sc) },
            _ => T::zero(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Image<f64> {
        Image::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap()
    }

    #[test]
    fn test_zero_margin_is_copy() {
        let image = ramp();
        assert_eq!(pad(&image, 0, PaddingPolicy::Reflect), image);
    }

    #[test]
    fn test_zero_fill() {
        let padded = pad(&ramp(), 1, PaddingPolicy::Zero);
        assert_eq!(padded.shape(), (4, 5));
        assert_eq!(padded.get(0, 0).unwrap(), 0.0);
        assert_eq!(padded.get(1, 1).unwrap(), 1.0);
        assert_eq!(padded.get(2, 3).unwrap(), 6.0);
        assert_eq!(padded.get(3, 4).unwrap(), 0.0);
    }

    #[test]
    fn test_nearest_replicates_edges() {
        let padded = pad(&ramp(), 2, PaddingPolicy::Nearest);
        assert_eq!(padded.shape(), (6, 7));
        assert_eq!(padded.get(0, 0).unwrap(), 1.0);
        assert_eq!(padded.get(0, 6).unwrap(), 3.0);
        assert_eq!(padded.get(5, 0).unwrap(), 4.0);
        assert_eq!(padded.get(5, 6).unwrap(), 6.0);
    }

    #[test]
    fn test_reflect_skips_edge() {
        let padded = pad(&ramp(), 1, PaddingPolicy::Reflect);
        // row -1 mirrors row 1, col -1 mirrors col 1
        assert_eq!(padded.get(0, 0).unwrap(), 5.0);
        assert_eq!(padded.get(1, 0).unwrap(), 2.0);
        assert_eq!(padded.get(1, 4).unwrap(), 2.0);
        assert_eq!(padded.get(3, 2).unwrap(), 2.0);
    }

    #[test]
    fn test_margin_beyond_extent() {
        let image = Image::from_vec(vec![1.0, 2.0, 3.0], 1, 3).unwrap();
        let padded = pad(&image, 5, PaddingPolicy::Reflect);
        assert_eq!(padded.shape(), (11, 13));
        let row: Vec<f64> = (0..13).map(|c| padded.get(5, c).unwrap()).collect();
        assert_eq!(
            row,
            vec![2.0, 1.0, 2.0, 3.0, 2.0, 1.0, 2.0, 3.0, 2.0, 1.0, 2.0, 3.0, 2.0]
        );
        // single-row axis replicates
        assert_eq!(padded.get(0, 5).unwrap(), 1.0);
    }
}
