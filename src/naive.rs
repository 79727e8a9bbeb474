//! Naive triple-loop matrix multiplication, the benchmark baseline.

use crate::error::{dimension_mismatch, Result};
use crate::matrix::Matrix;

/// Computes `A * B` with the elementary `i j k` triple loop.
///
/// Every output cell `(i, j)` starts at `0.0` and accumulates
/// `sum over k of A[i][k] * B[k][j]` in `f64`, for exactly
/// `A.rows * A.cols * B.cols` multiply-adds. No blocking, no tiling, no SIMD:
/// this is intentionally the slow path the optimized routine is compared
/// against. Deterministic for deterministic inputs, and the only side effect
/// is allocating the result.
///
/// # Errors
///
/// Returns [`MatbenchError::DimensionMismatch`](crate::error::MatbenchError::DimensionMismatch)
/// when `a.cols() != b.rows()`; the operands are never indexed in that case.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols() != b.rows() {
        return Err(dimension_mismatch(
            a.cols(),
            b.rows(),
            "inner dimensions must agree for multiplication",
        ));
    }

    let (n, m, p) = (a.rows(), a.cols(), b.cols());
    let a_data = a.as_slice();
    let b_data = b.as_slice();

    let mut c = vec![0.0; n * p];
    for i in 0..n {
        for j in 0..p {
            let mut sum = 0.0;
            for k in 0..m {
                sum += a_data[i * m + k] * b_data[k * p + j];
            }
            c[i * p + j] = sum;
        }
    }

    Matrix::from_vec(n, p, c)
}
