//! Error types for matbench operations.
//!
//! This module defines custom error types that provide better error handling
//! than panicking, allowing callers to handle invalid benchmark input and
//! malformed matrices gracefully.

use std::fmt;

/// Errors that can occur during matbench operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatbenchError {
    /// A matrix dimension outside the valid range was requested.
    InvalidDimension {
        /// The requested number of rows.
        rows: usize,
        /// The requested number of columns.
        cols: usize,
        /// Human-readable error message.
        message: String,
    },
    /// Inner dimensions of a matrix product disagree.
    DimensionMismatch {
        /// Column count of the left operand.
        left_cols: usize,
        /// Row count of the right operand.
        right_rows: usize,
        /// Human-readable error message.
        message: String,
    },
    /// A flat buffer's length does not match the requested shape.
    ShapeError {
        /// The requested number of rows.
        rows: usize,
        /// The requested number of columns.
        cols: usize,
        /// The actual buffer length.
        len: usize,
        /// Human-readable error message.
        message: String,
    },
    /// An operation was refused because it exceeds a configured size budget.
    ResourceExhausted {
        /// The requested problem size.
        size: usize,
        /// The configured size limit.
        limit: usize,
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for MatbenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatbenchError::InvalidDimension {
                rows,
                cols,
                message,
            } => write!(
                f,
                "Invalid dimension: {} (requested {} x {})",
                message, rows, cols
            ),
            MatbenchError::DimensionMismatch {
                left_cols,
                right_rows,
                message,
            } => write!(
                f,
                "Dimension mismatch: {} (left has {} columns, right has {} rows)",
                message, left_cols, right_rows
            ),
            MatbenchError::ShapeError {
                rows,
                cols,
                len,
                message,
            } => write!(
                f,
                "Shape error: {} ({} x {} needs {} elements, got {})",
                message,
                rows,
                cols,
                rows * cols,
                len
            ),
            MatbenchError::ResourceExhausted {
                size,
                limit,
                message,
            } => write!(
                f,
                "Resource budget exceeded: {} (size {} over limit {})",
                message, size, limit
            ),
        }
    }
}

impl std::error::Error for MatbenchError {}

/// Result type alias for matbench operations.
pub type Result<T> = std::result::Result<T, MatbenchError>;

/// Creates an invalid-dimension error.
pub fn invalid_dimension(rows: usize, cols: usize, message: impl Into<String>) -> MatbenchError {
    MatbenchError::InvalidDimension {
        rows,
        cols,
        message: message.into(),
    }
}

/// Creates a dimension-mismatch error.
pub fn dimension_mismatch(
    left_cols: usize,
    right_rows: usize,
    message: impl Into<String>,
) -> MatbenchError {
    MatbenchError::DimensionMismatch {
        left_cols,
        right_rows,
        message: message.into(),
    }
}

/// Creates a shape error.
pub fn shape_error(
    rows: usize,
    cols: usize,
    len: usize,
    message: impl Into<String>,
) -> MatbenchError {
    MatbenchError::ShapeError {
        rows,
        cols,
        len,
        message: message.into(),
    }
}

/// Creates a resource-exhausted error.
pub fn resource_exhausted(size: usize, limit: usize, message: impl Into<String>) -> MatbenchError {
    MatbenchError::ResourceExhausted {
        size,
        limit,
        message: message.into(),
    }
}
