mod bench;
mod sieve;
mod stats;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(about = "Prime counting on a bit-packed boolean array")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count the primes in [0, N]
    Primes {
        /// Inclusive upper limit
        n: usize,
    },
    /// Run the sieve repeatedly in parallel and report latencies
    Bench {
        #[arg(short, long, default_value_t = 1_000_000)]
        limit: usize,
        #[arg(short, long, default_value_t = 64)]
        runs: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Primes { n } => {
            println!("Calculating the number of primes up to {}", n);
            println!("{}", sieve::count_primes(n)?);
        }
        Commands::Bench { limit, runs } => {
            bench::run_benchmark(limit, runs)?;
        }
    }
    Ok(())
}
