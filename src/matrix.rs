//! Dense row-major `f64` matrix storage and random generation.
//!
//! Matrices are backed by a single flat buffer with a row stride, so rows can
//! never be jagged and every constructor validates its shape up front. The
//! random generator takes a caller-supplied [`rand::Rng`] instead of reaching
//! for a process-wide source, which keeps test runs deterministic when a
//! seeded generator is passed in.

use rand::Rng;

use crate::error::{invalid_dimension, shape_error, Result};

/// A dense `rows x cols` matrix of `f64` values in row-major order.
///
/// The backing buffer always holds exactly `rows * cols` elements and both
/// dimensions are at least 1; every constructor enforces this. The element at
/// `(i, j)` lives at offset `i * cols + j`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a matrix from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MatbenchError::InvalidDimension`](crate::error::MatbenchError::InvalidDimension)
    /// if either dimension is zero, and
    /// [`MatbenchError::ShapeError`](crate::error::MatbenchError::ShapeError)
    /// if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        Self::check_dims(rows, cols)?;
        if data.len() != rows * cols {
            return Err(shape_error(
                rows,
                cols,
                data.len(),
                "buffer length does not match shape",
            ));
        }
        Ok(Matrix { data, rows, cols })
    }

    /// Creates a matrix with every cell set to `0.0`.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::check_dims(rows, cols)?;
        Ok(Matrix {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        })
    }

    /// Creates the `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Creates a matrix whose cells are drawn independently from the uniform
    /// distribution over `[0, 1)`.
    ///
    /// The generator is owned by the caller: pass `rand::rng()` for a fresh
    /// unseeded matrix, or a seeded `StdRng` for reproducible content.
    pub fn random<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        Self::check_dims(rows, cols)?;
        let data = (0..rows * cols).map(|_| rng.random::<f64>()).collect();
        Ok(Matrix { data, rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Bounds-checked cell access. Returns `None` when `(i, j)` is outside
    /// the matrix.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.data[self.at(i, j)])
        } else {
            None
        }
    }

    /// The flat row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Largest elementwise absolute difference between two matrices, or
    /// `None` when their shapes differ.
    pub fn max_abs_diff(&self, other: &Matrix) -> Option<f64> {
        if self.rows != other.rows || self.cols != other.cols {
            return None;
        }
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(None, |acc, d| Some(acc.map_or(d, |m: f64| m.max(d))))
    }

    /// Flat offset of `(i, j)` in the row-major buffer.
    #[inline(always)]
    fn at(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    fn check_dims(rows: usize, cols: usize) -> Result<()> {
        if rows < 1 || cols < 1 {
            return Err(invalid_dimension(
                rows,
                cols,
                "both dimensions must be at least 1",
            ));
        }
        Ok(())
    }
}
