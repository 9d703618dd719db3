use anyhow::{Result, bail, ensure};
use rayon::prelude::*;
use std::time::{Duration, Instant};

use crate::sieve;
use crate::stats::LatencyStats;

pub fn run_benchmark(limit: usize, runs: usize) -> Result<()> {
    ensure!(runs > 0, "benchmark needs at least one run");

    println!("Sieving up to {} ({} runs)...", limit, runs);
    println!("Starting Benchmark (Parallel - Rayon)...");
    let start_bench = Instant::now();

    // Every run owns its own bit array, nothing is shared between tasks.
    let samples: Vec<(usize, Duration)> = (0..runs)
        .into_par_iter()
        .map(|_| -> Result<(usize, Duration)> {
            let start = Instant::now();
            let count = sieve::count_primes(limit)?;
            Ok((count, start.elapsed()))
        })
        .collect::<Result<_>>()?;

    let duration = start_bench.elapsed();
    let seconds = duration.as_secs_f64();
    let throughput = runs as f64 / seconds;

    let primes = samples[0].0;
    if let Some(&(other, _)) = samples.iter().find(|(count, _)| *count != primes) {
        bail!("runs disagree on the prime count: {} vs {}", primes, other);
    }

    let mut stats = LatencyStats::new();
    for &(_, elapsed) in &samples {
        stats.record(elapsed);
    }

    println!("Results");
    println!("Primes: {}", primes);
    println!("Time: {:.4} s", seconds);
    println!("Throughput: {:.2} runs/s", throughput);
    stats.print_report();

    Ok(())
}
