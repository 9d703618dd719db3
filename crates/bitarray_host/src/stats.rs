//! Latency statistics for repeated sieve runs.
//!
//! Collects per-run wall-clock latencies and reports minimum, maximum,
//! average, and a bucketed distribution so that the cost of the bit array
//! operations under a real workload can be compared between builds.

use std::time::Duration;

/// Width of one histogram bucket.
pub const BUCKET_NANOS: u64 = 1_000_000;

/// Number of histogram buckets. The last one collects everything slower.
pub const BUCKET_COUNT: usize = 20;

/// Tracks latency statistics with minimal overhead.
///
/// Accumulates latency measurements and computes summary statistics including
/// min, max, average, and histogram distribution. Buckets are
/// [`BUCKET_NANOS`] wide; anything beyond the last bucket is clamped into it.
#[derive(Debug, Clone)]
pub struct LatencyStats {
    pub min: u64,
    pub max: u64,
    pub sum: u64,
    pub count: u64,
    pub buckets: [u64; BUCKET_COUNT],
}

impl Default for LatencyStats {
    fn default() -> Self {
        Self::new()
    }
}

impl LatencyStats {
    /// Creates a new latency statistics tracker with empty state.
    ///
    /// Min starts at u64::MAX so the first measurement becomes the minimum.
    pub fn new() -> Self {
        Self {
            min: u64::MAX,
            max: 0,
            sum: 0,
            count: 0,
            buckets: [0; BUCKET_COUNT],
        }
    }

    /// Records a latency measurement in nanoseconds.
    ///
    /// # Arguments
    ///
    /// * `nanos` - Latency measurement in nanoseconds
    pub fn update(&mut self, nanos: u64) {
        self.min = self.min.min(nanos);
        self.max = self.max.max(nanos);
        self.sum = self.sum.saturating_add(nanos);
        self.count += 1;

        let idx = ((nanos / BUCKET_NANOS) as usize).min(BUCKET_COUNT - 1);
        self.buckets[idx] += 1;
    }

    /// Records a measured duration, saturating at u64::MAX nanoseconds.
    pub fn record(&mut self, elapsed: Duration) {
        self.update(u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX));
    }

    /// Average latency in nanoseconds, or 0.0 if nothing was recorded.
    pub fn avg(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }

    /// Prints a formatted report of latency statistics.
    ///
    /// Values are shown in ns, us or ms depending on the magnitude of the
    /// average, followed by the non-empty histogram buckets in milliseconds.
    pub fn print_report(&self) {
        println!("\nLatency Metrics (per run)");
        println!("Count: {}", self.count);
        if self.count == 0 {
            return;
        }

        let avg_ns = self.avg();
        let (scale, unit) = if avg_ns < 1_000.0 {
            (1.0, "ns")
        } else if avg_ns < 1_000_000.0 {
            (1_000.0, "us")
        } else {
            (1_000_000.0, "ms")
        };
        println!("Min:   {:.2} {}", self.min as f64 / scale, unit);
        println!("Avg:   {:.2} {}", avg_ns / scale, unit);
        println!("Max:   {:.2} {}", self.max as f64 / scale, unit);

        println!("Distribution (1ms buckets):");
        for (i, &count) in self.buckets.iter().enumerate() {
            if count > 0 {
                let range_end = if i == BUCKET_COUNT - 1 { ">" } else { "" };
                println!("[{:3}-{:3}{} ms]: {}", i, i + 1, range_end, count);
            }
        }
    }
}
