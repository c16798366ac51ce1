//! Benchmark report: human-readable table or JSON

use std::time::Duration;

use rangecache::StatsSnapshot;
use rangedb::{ReplayOutcome, WorkloadConfig};
use serde::Serialize;

/// Timing and result of one replay pass
#[derive(Debug, Clone, Serialize)]
pub struct PassReport {
    /// Wall-clock seconds for the full replay
    pub seconds: f64,
    /// Counts and checksum of the pass
    pub outcome: ReplayOutcome,
}

impl PassReport {
    /// Build from a measured duration and the pass outcome
    pub fn new(elapsed: Duration, outcome: ReplayOutcome) -> Self {
        Self {
            seconds: elapsed.as_secs_f64(),
            outcome,
        }
    }
}

/// Full result of a benchmark run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Seed for both the workload and the array contents
    pub seed: u64,
    /// Generator parameters
    pub workload: WorkloadConfig,
    /// Cache capacity (number of ranges)
    pub capacity: usize,
    /// Direct linear-sum pass
    pub uncached: PassReport,
    /// LRU-cached pass
    pub cached: PassReport,
    /// Counters of the cached pass
    pub cache_stats: StatsSnapshot,
}

impl Report {
    /// Uncached time over cached time
    pub fn speedup(&self) -> f64 {
        if self.cached.seconds > 0.0 {
            self.uncached.seconds / self.cached.seconds
        } else {
            f64::INFINITY
        }
    }

    /// Two-line comparison table
    pub fn render_table(&self) -> String {
        format!(
            "{:<9} : {:.6} s\n{:<9} : {:.6} s (speed-up x{:.1})",
            "No cache",
            self.uncached.seconds,
            "LRU cache",
            self.cached.seconds,
            self.speedup()
        )
    }

    /// Pretty-printed JSON report, including the speed-up
    pub fn render_json(&self) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct WithSpeedup<'a> {
            #[serde(flatten)]
            report: &'a Report,
            speedup: f64,
        }

        serde_json::to_string_pretty(&WithSpeedup {
            report: self,
            speedup: self.speedup(),
        })
    }
}
