//! Sampled height-field grid types

use serde::{Deserialize, Serialize};

/// Half-width of the fallback surface domain
pub const FALLBACK_EXTENT: f64 = 3.0;

/// Sample count per axis of the fallback surface
pub const FALLBACK_RESOLUTION: usize = 20;

/// A two-dimensional scalar field with row-major storage
///
/// Shape is `rows × cols`; sample `(row, col)` lives at `row * cols + col`.
/// Fields are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarField {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl ScalarField {
    /// Build a field from row-major samples
    ///
    /// `data.len()` must equal `rows * cols`.
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total sample count
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the field holds no samples
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sample at `(row, col)`
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Row-major view of all samples
    #[inline]
    pub fn samples(&self) -> &[f64] {
        &self.data
    }

    /// Apply `f` to every sample, producing a field of the same shape
    pub fn map(&self, f: impl Fn(f64) -> f64) -> ScalarField {
        ScalarField {
            data: self.data.iter().map(|&v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Combine two same-shaped fields element-wise
    ///
    /// Callers must ensure matching shapes; both operands of every surface
    /// evaluation come from one mesh.
    pub fn zip_with(&self, other: &ScalarField, f: impl Fn(f64, f64) -> f64) -> ScalarField {
        debug_assert_eq!(self.shape(), other.shape());
        ScalarField {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

/// `count` evenly spaced samples over `[start, stop]`, endpoints included
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut points: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            // Pin the endpoint exactly, matching linspace semantics
            points[count - 1] = stop;
            points
        }
    }
}

/// Coordinate fields over the symmetric domain, `resolution` samples per axis
///
/// Outer-broadcast mesh in `xy` convention: the column index walks the x
/// samples and the row index walks the y samples, so `x.get(i, j) == xs[j]`
/// and `y.get(i, j) == ys[i]`.
pub fn mesh(x_extent: f64, y_extent: f64, resolution: usize) -> (ScalarField, ScalarField) {
    let xs = linspace(-x_extent, x_extent, resolution);
    let ys = linspace(-y_extent, y_extent, resolution);

    let mut x = Vec::with_capacity(resolution * resolution);
    let mut y = Vec::with_capacity(resolution * resolution);
    for &yv in &ys {
        for &xv in &xs {
            x.push(xv);
            y.push(yv);
        }
    }

    (
        ScalarField::from_vec(x, resolution, resolution),
        ScalarField::from_vec(y, resolution, resolution),
    )
}

/// A sampled height field: coordinate arrays and computed heights
///
/// All three fields share one shape. Grids are created fresh per successful
/// evaluation and never mutated afterwards; the engine shares them by `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// X coordinates per sample
    pub x: ScalarField,
    /// Y coordinates per sample
    pub y: ScalarField,
    /// Computed heights per sample
    pub z: ScalarField,
}

impl Grid {
    /// Assemble a grid from same-shaped fields
    pub fn new(x: ScalarField, y: ScalarField, z: ScalarField) -> Self {
        debug_assert_eq!(x.shape(), z.shape());
        debug_assert_eq!(y.shape(), z.shape());
        Self { x, y, z }
    }

    /// Samples per axis
    #[inline]
    pub fn resolution(&self) -> usize {
        self.z.rows()
    }

    /// Shape of all three arrays
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.z.shape()
    }

    /// The fixed fallback surface: `sin(x)·cos(y)` on a 20×20 mesh over
    /// `[-3,3]×[-3,3]`, substituted whenever evaluation fails
    pub fn fallback() -> Grid {
        let (x, y) = mesh(FALLBACK_EXTENT, FALLBACK_EXTENT, FALLBACK_RESOLUTION);
        let z = x.zip_with(&y, |xv, yv| xv.sin() * yv.cos());
        Grid { x, y, z }
    }
}
