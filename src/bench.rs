//! Benchmark runner: generate inputs, time both multipliers, collect results.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{invalid_dimension, resource_exhausted, Result};
use crate::harness::{measure, Measurement, MemorySampler, ProcStatusSampler};
use crate::matrix::Matrix;
use crate::{naive, reference, DEFAULT_NAIVE_LIMIT};

/// Configuration for one benchmark invocation.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Square matrix dimension.
    pub size: usize,
    /// Seed for the input matrices; `None` draws fresh entropy from the OS.
    pub seed: Option<u64>,
    /// Largest size at which the naive multiplier still runs.
    pub naive_limit: usize,
    /// Whether to sample peak resident memory around each multiplier.
    pub sample_memory: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            size: 0,
            seed: None,
            naive_limit: DEFAULT_NAIVE_LIMIT,
            sample_memory: true,
        }
    }
}

/// Checks the naive multiplier's size budget.
///
/// The cubic algorithm becomes impractically slow past the limit, so callers
/// refuse up front instead of attempting the run and failing mid-way.
pub fn check_naive_budget(size: usize, limit: usize) -> Result<()> {
    if size > limit {
        return Err(resource_exhausted(
            size,
            limit,
            "cubic multiply would exceed the time budget",
        ));
    }
    Ok(())
}

/// Runs the full benchmark once and returns one [`Measurement`] per
/// multiplier, naive first.
///
/// Two fresh `size x size` uniform random matrices are generated, then each
/// multiplier runs sequentially against the same pair. When `size` exceeds
/// `naive_limit` the naive path is skipped and reported as such; the
/// reference path always runs.
pub fn run(config: &BenchConfig) -> Result<Vec<Measurement>> {
    if config.size < 1 {
        return Err(invalid_dimension(
            config.size,
            config.size,
            "benchmark size must be at least 1",
        ));
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let a = Matrix::random(config.size, config.size, &mut rng)?;
    let b = Matrix::random(config.size, config.size, &mut rng)?;

    let proc_sampler = ProcStatusSampler;
    let sampler: Option<&dyn MemorySampler> = if config.sample_memory {
        Some(&proc_sampler)
    } else {
        None
    };

    let mut results = Vec::with_capacity(2);

    match check_naive_budget(config.size, config.naive_limit) {
        Ok(()) => {
            let (m, product) = measure("Naive", sampler, || naive::multiply(&a, &b));
            product?;
            results.push(m);
        }
        // Deliberate, reported skip: the measurement stays in the output
        // with placeholder fields.
        Err(_) => results.push(Measurement::skipped("Naive")),
    }

    let (m, product) = measure("ndarray", sampler, || reference::multiply(&a, &b));
    product?;
    results.push(m);

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatbenchError;

    #[test]
    fn test_run_produces_two_measurements() {
        let config = BenchConfig {
            size: 8,
            seed: Some(42),
            ..BenchConfig::default()
        };
        let results = run(&config).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "Naive");
        assert_eq!(results[1].name, "ndarray");
        assert!(results[0].elapsed.is_some());
        assert!(results[1].elapsed.is_some());
    }

    #[test]
    fn test_run_rejects_zero_size() {
        let config = BenchConfig {
            size: 0,
            ..BenchConfig::default()
        };
        let err = run(&config).unwrap_err();
        assert!(matches!(err, MatbenchError::InvalidDimension { .. }));
    }

    #[test]
    fn test_naive_skipped_over_limit() {
        // Guard semantics are relative to the configured limit, so a small
        // limit exercises the same path as the default 1000 at size 2001.
        let config = BenchConfig {
            size: 6,
            seed: Some(7),
            naive_limit: 4,
            ..BenchConfig::default()
        };
        let results = run(&config).unwrap();
        assert_eq!(results[0].elapsed, None);
        assert_eq!(results[0].peak_rss_bytes, None);
        assert!(results[1].elapsed.is_some());
    }

    #[test]
    fn test_check_naive_budget() {
        assert!(check_naive_budget(1000, 1000).is_ok());
        let err = check_naive_budget(1001, 1000).unwrap_err();
        assert!(matches!(
            err,
            MatbenchError::ResourceExhausted {
                size: 1001,
                limit: 1000,
                ..
            }
        ));
    }

    #[test]
    fn test_memory_sampling_disabled() {
        let config = BenchConfig {
            size: 4,
            seed: Some(1),
            sample_memory: false,
            ..BenchConfig::default()
        };
        let results = run(&config).unwrap();
        assert_eq!(results[0].peak_rss_bytes, None);
        assert_eq!(results[1].peak_rss_bytes, None);
    }
}
