//! Optimized matrix multiplication via ndarray, the comparison target.
//!
//! The routine itself is treated as a black box: both operands are wrapped in
//! ndarray views over the existing row-major buffers (no copies) and handed
//! to [`ndarray::ArrayView2::dot`].

use ndarray::ArrayView2;

use crate::error::{dimension_mismatch, shape_error, Result};
use crate::matrix::Matrix;

/// Computes `A * B` with ndarray's dense matrix product.
///
/// Validates the same precondition as [`crate::naive::multiply`] so both
/// multipliers fail identically on malformed input.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols() != b.rows() {
        return Err(dimension_mismatch(
            a.cols(),
            b.rows(),
            "inner dimensions must agree for multiplication",
        ));
    }

    let a_view = view_of(a)?;
    let b_view = view_of(b)?;
    let c = a_view.dot(&b_view);

    let (rows, cols) = (a.rows(), b.cols());
    let (data, _offset) = c.into_raw_vec_and_offset();
    Matrix::from_vec(rows, cols, data)
}

fn view_of(m: &Matrix) -> Result<ArrayView2<'_, f64>> {
    ArrayView2::from_shape((m.rows(), m.cols()), m.as_slice()).map_err(|e| {
        shape_error(
            m.rows(),
            m.cols(),
            m.as_slice().len(),
            format!("ndarray rejected the buffer: {}", e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatbenchError;
    use crate::naive;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_concrete_2x2_product() {
        let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_agrees_with_naive() {
        let mut rng = StdRng::seed_from_u64(11);
        for (n, m, p) in [(1, 1, 1), (3, 4, 5), (10, 10, 10), (7, 2, 9)] {
            let a = Matrix::random(n, m, &mut rng).unwrap();
            let b = Matrix::random(m, p, &mut rng).unwrap();
            let fast = multiply(&a, &b).unwrap();
            let slow = naive::multiply(&a, &b).unwrap();
            let diff = fast.max_abs_diff(&slow).unwrap();
            assert!(
                diff < 1e-9,
                "naive and ndarray disagree by {:.3e} for {}x{} * {}x{}",
                diff,
                n,
                m,
                m,
                p
            );
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let mut rng = StdRng::seed_from_u64(12);
        let a = Matrix::random(2, 3, &mut rng).unwrap();
        let b = Matrix::random(4, 2, &mut rng).unwrap();
        let err = multiply(&a, &b).unwrap_err();
        assert!(matches!(err, MatbenchError::DimensionMismatch { .. }));
    }
}
