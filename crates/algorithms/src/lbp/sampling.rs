//! Circular neighbour sampling
//!
//! A ring of `n` points at a given radius is laid out once; every pixel
//! then reuses the same taps. Points that fall on the integer grid (within
//! `eps1`) are read directly, the rest are bilinearly interpolated.

use std::f64::consts::PI;

use ndarray::Array2;

/// How a single ring point is read, relative to the centre pixel
#[derive(Debug, Clone, Copy, PartialEq)]
enum Tap {
    /// Exactly on the grid
    Grid { dr: isize, dc: isize },
    /// Row offset is integral; interpolate between two columns
    AlongCols { dr: isize, dc: isize, ty: f64 },
    /// Column offset is integral; interpolate between two rows
    AlongRows { dr: isize, dc: isize, tx: f64 },
    /// Full 2x2 bilinear interpolation
    Bilinear { dr: isize, dc: isize, tx: f64, ty: f64 },
}

/// Sampling pattern for one ring of neighbours
#[derive(Debug, Clone)]
pub struct Ring {
    radius: f64,
    taps: Vec<Tap>,
}

impl Ring {
    /// Lay out `neighbours` points at `radius`, starting at angle zero and
    /// stepping by `-2π / neighbours`.
    ///
    /// For point `k` the row offset is `radius * cos(kθ)` and the column
    /// offset `radius * sin(kθ)`.
    pub fn new(radius: f64, neighbours: usize, eps1: f64, eps2: f64) -> Self {
        let theta = -2.0 * PI / neighbours as f64;
        let taps = (0..neighbours)
            .map(|k| {
                let angle = theta * k as f64;
                let x = radius * angle.cos();
                let y = radius * angle.sin();
                make_tap(x, y, eps1, eps2)
            })
            .collect();
        Self { radius, taps }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Number of points on the ring
    pub fn len(&self) -> usize {
        self.taps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }

    /// How far (in whole pixels) any tap reaches from the centre
    pub fn reach(&self) -> usize {
        self.taps
            .iter()
            .map(|tap| match *tap {
                Tap::Grid { dr, dc } => dr.unsigned_abs().max(dc.unsigned_abs()),
                Tap::AlongCols { dr, dc, .. } => dr.unsigned_abs().max(reach(dc)),
                Tap::AlongRows { dr, dc, .. } => reach(dr).max(dc.unsigned_abs()),
                Tap::Bilinear { dr, dc, .. } => reach(dr).max(reach(dc)),
            })
            .max()
            .unwrap_or(0)
    }

    /// Sample the ring around `(row, col)` into the first [`len`](Self::len)
    /// slots of `out` and return them.
    ///
    /// The caller guarantees that `(row, col)` lies at least
    /// [`reach`](Self::reach) pixels inside `image`.
    ///
    /// # Panics
    /// If `out` is shorter than the ring.
    pub fn sample_into<'a>(
        &self,
        image: &Array2<f64>,
        row: usize,
        col: usize,
        out: &'a mut [f64],
    ) -> &'a [f64] {
        let out = &mut out[..self.taps.len()];
        for (slot, tap) in out.iter_mut().zip(&self.taps) {
            *slot = sample_tap(image, row, col, *tap);
        }
        out
    }
}

/// Farthest pixel touched along one axis when the lower corner is `d`
fn reach(d: isize) -> usize {
    d.unsigned_abs().max((d + 1).unsigned_abs())
}

fn make_tap(x: f64, y: f64, eps1: f64, eps2: f64) -> Tap {
    let rx = x.round();
    let ry = y.round();
    if (x - rx).abs() < eps1 && (y - ry).abs() < eps1 {
        return Tap::Grid {
            dr: rx as isize,
            dc: ry as isize,
        };
    }

    let fx = x.floor();
    let fy = y.floor();
    let tx = x - fx;
    let ty = y - fy;
    let dr = fx as isize;
    let dc = fy as isize;

    if tx < eps2 {
        Tap::AlongCols { dr, dc, ty }
    } else if ty < eps2 {
        Tap::AlongRows { dr, dc, tx }
    } else {
        Tap::Bilinear { dr, dc, tx, ty }
    }
}

fn sample_tap(image: &Array2<f64>, row: usize, col: usize, tap: Tap) -> f64 {
    let at = |dr: isize, dc: isize| {
        let r = (row as isize + dr) as usize;
        let c = (col as isize + dc) as usize;
        image[(r, c)]
    };

    match tap {
        Tap::Grid { dr, dc } => at(dr, dc),
        Tap::AlongCols { dr, dc, ty } => (1.0 - ty) * at(dr, dc) + ty * at(dr, dc + 1),
        Tap::AlongRows { dr, dc, tx } => (1.0 - tx) * at(dr, dc) + tx * at(dr + 1, dc),
        Tap::Bilinear { dr, dc, tx, ty } => {
            (1.0 - tx) * (1.0 - ty) * at(dr, dc)
                + (1.0 - tx) * ty * at(dr, dc + 1)
                + tx * (1.0 - ty) * at(dr + 1, dc)
                + tx * ty * at(dr + 1, dc + 1)
        }
    }
}
