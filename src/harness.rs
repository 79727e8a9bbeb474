//! Wall-clock timing and best-effort peak-memory sampling.

use std::fs;
use std::time::{Duration, Instant};

/// Capability for reading the process's peak resident memory.
///
/// Sampling is best effort: implementations return `None` when the figure is
/// unavailable rather than failing the measurement.
pub trait MemorySampler {
    /// Peak resident set size of the current process, in bytes.
    fn peak_rss_bytes(&self) -> Option<u64>;
}

/// Reads the `VmHWM` high-water mark from `/proc/self/status`.
///
/// Only meaningful on Linux; on other platforms (or when the file cannot be
/// parsed) it reports `None` and the reporter prints a placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcStatusSampler;

impl MemorySampler for ProcStatusSampler {
    fn peak_rss_bytes(&self) -> Option<u64> {
        #[cfg(target_os = "linux")]
        {
            let status = fs::read_to_string("/proc/self/status").ok()?;
            for line in status.lines() {
                if line.starts_with("VmHWM:") {
                    // Format: "VmHWM:   123456 kB"
                    let kb = line.split_whitespace().nth(1)?.parse::<u64>().ok()?;
                    return Some(kb * 1024);
                }
            }
            None
        }
        #[cfg(not(target_os = "linux"))]
        {
            None
        }
    }
}

/// Outcome of one timed operation.
///
/// `elapsed == None` marks a deliberately skipped run (the naive path above
/// its size limit); `peak_rss_bytes == None` means memory sampling was
/// unavailable or disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// Operation name as shown in the report.
    pub name: String,
    /// Wall-clock duration, or `None` when the run was skipped.
    pub elapsed: Option<Duration>,
    /// Peak resident memory observed after the run, in bytes.
    pub peak_rss_bytes: Option<u64>,
}

impl Measurement {
    /// Record for an operation that was skipped rather than executed.
    pub fn skipped(name: &str) -> Self {
        Measurement {
            name: name.to_string(),
            elapsed: None,
            peak_rss_bytes: None,
        }
    }
}

/// Runs `op` to completion, timing it and sampling peak memory afterwards
/// when a sampler is supplied.
///
/// The start timestamp is taken immediately before the call and the end
/// timestamp immediately after; nothing else runs in between, so the two
/// multipliers being compared never interfere with each other's timings.
pub fn measure<T>(
    name: &str,
    sampler: Option<&dyn MemorySampler>,
    op: impl FnOnce() -> T,
) -> (Measurement, T) {
    let start = Instant::now();
    let result = op();
    let elapsed = start.elapsed();

    let peak_rss_bytes = sampler.and_then(|s| s.peak_rss_bytes());

    (
        Measurement {
            name: name.to_string(),
            elapsed: Some(elapsed),
            peak_rss_bytes,
        },
        result,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSampler(u64);

    impl MemorySampler for FixedSampler {
        fn peak_rss_bytes(&self) -> Option<u64> {
            Some(self.0)
        }
    }

    #[test]
    fn test_measure_returns_operation_result() {
        let (m, value) = measure("square", None, || 6 * 7);
        assert_eq!(value, 42);
        assert_eq!(m.name, "square");
        assert!(m.elapsed.is_some());
        assert_eq!(m.peak_rss_bytes, None);
    }

    #[test]
    fn test_measure_with_sampler() {
        let sampler = FixedSampler(2048);
        let (m, _) = measure("noop", Some(&sampler), || ());
        assert_eq!(m.peak_rss_bytes, Some(2048));
    }

    #[test]
    fn test_skipped_measurement() {
        let m = Measurement::skipped("Naive");
        assert_eq!(m.name, "Naive");
        assert_eq!(m.elapsed, None);
        assert_eq!(m.peak_rss_bytes, None);
    }

    #[test]
    fn test_proc_status_sampler_on_linux() {
        let sampler = ProcStatusSampler;
        if cfg!(target_os = "linux") {
            // A running process always has a nonzero high-water mark.
            assert!(sampler.peak_rss_bytes().unwrap() > 0);
        } else {
            assert_eq!(sampler.peak_rss_bytes(), None);
        }
    }
}
