//! matbench CLI: benchmark naive vs. ndarray matrix multiplication.

use clap::Parser;

use matbench::bench::{run, BenchConfig};
use matbench::report::print_report;
use matbench::DEFAULT_NAIVE_LIMIT;

#[derive(Parser)]
#[command(
    name = "matbench",
    about = "Benchmark naive triple-loop matrix multiplication against ndarray",
    version
)]
struct Args {
    /// Square matrix dimension
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    size: u64,
    /// Seed for the random matrices; omit for fresh entropy per run
    #[arg(long)]
    seed: Option<u64>,
    /// Largest size at which the naive multiplier still runs
    #[arg(long, default_value_t = DEFAULT_NAIVE_LIMIT)]
    naive_limit: usize,
    /// Disable peak-memory sampling
    #[arg(long)]
    no_mem: bool,
}

fn main() {
    let args = Args::parse();

    let config = BenchConfig {
        size: args.size as usize,
        seed: args.seed,
        naive_limit: args.naive_limit,
        sample_memory: !args.no_mem,
    };

    match run(&config) {
        Ok(results) => print_report(config.size, &results),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
