//! matbench: naive vs. optimized dense matrix multiplication benchmark.
//!
//! Generates two uniform random `size x size` matrices, multiplies them with
//! the elementary triple-loop algorithm and with ndarray's optimized routine,
//! and reports wall-clock time plus (on Linux) peak resident memory for each.
//!
//! The naive path is guarded by a configurable size limit so impractically
//! long cubic runs are skipped and reported rather than attempted.

pub mod bench;
pub mod error;
pub mod harness;
pub mod matrix;
pub mod naive;
pub mod reference;
pub mod report;

/// Default largest size at which the naive multiplier still runs.
pub const DEFAULT_NAIVE_LIMIT: usize = 1000;
