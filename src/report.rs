//! Human-readable formatting of benchmark results.

use crate::harness::Measurement;

/// Placeholder printed for a skipped run or an unavailable memory figure.
pub const PLACEHOLDER: &str = "-NA-";

/// Formats the size header and one line per measurement.
///
/// Elapsed time is printed to 4 decimal places in seconds and peak memory to
/// 2 decimal places in MB; [`PLACEHOLDER`] stands in for either when absent.
pub fn format_report(size: usize, results: &[Measurement]) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("Matrix Size: {}x{}\n", size, size));
    for r in results {
        let time = match r.elapsed {
            Some(d) => format!("{:>7.4}s", d.as_secs_f64()),
            None => PLACEHOLDER.to_string(),
        };
        let mem = match r.peak_rss_bytes {
            Some(bytes) => format!("{:>6.2} MB", bytes as f64 / (1024.0 * 1024.0)),
            None => PLACEHOLDER.to_string(),
        };
        out.push_str(&format!(
            "{:<14}: Time = {}, Peak Mem = {}\n",
            r.name, time, mem
        ));
    }
    out
}

/// Writes the formatted report to standard output.
pub fn print_report(size: usize, results: &[Measurement]) {
    print!("{}", format_report(size, results));
}
