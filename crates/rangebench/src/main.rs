//! rangebench - replay a skewed workload through uncached and LRU-cached range-sum engines

mod report;

use std::time::Instant;

use anyhow::{bail, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rangecache::RangeCache;
use rangedb::{replay, RangeArray, Workload, WorkloadConfig};
use tracing::info;

use crate::report::{PassReport, Report};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Array length
    #[arg(short = 'n', long, default_value_t = 100_000)]
    size: usize,

    /// Number of operations to replay
    #[arg(short, long, default_value_t = 50_000)]
    queries: usize,

    /// Cache capacity (number of ranges)
    #[arg(short, long, default_value_t = 1000)]
    capacity: usize,

    /// Number of hot ranges
    #[arg(long, default_value_t = 30)]
    hot_pool: usize,

    /// Probability a range query hits the hot pool
    #[arg(long, default_value_t = 0.95)]
    hot_prob: f64,

    /// Probability an operation is an update
    #[arg(long, default_value_t = 0.03)]
    update_prob: f64,

    /// RNG seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print a JSON report instead of the table
    #[arg(long)]
    json: bool,
}

impl Args {
    fn workload_config(&self) -> WorkloadConfig {
        WorkloadConfig {
            size: self.size,
            queries: self.queries,
            hot_pool: self.hot_pool,
            hot_probability: self.hot_prob,
            update_probability: self.update_prob,
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let report = run(&args.workload_config(), args.capacity, seed)?;

    if args.json {
        println!("{}", report.render_json()?);
    } else {
        println!("{}", report.render_table());
    }
    Ok(())
}

fn run(config: &WorkloadConfig, capacity: usize, seed: u64) -> Result<Report> {
    info!("Starting rangebench v{}", env!("CARGO_PKG_VERSION"));
    info!("Seed: {}", seed);
    info!(
        "Array size: {}, operations: {}, cache capacity: {}",
        config.size, config.queries, capacity
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let workload = Workload::generate(config, &mut rng)?;
    let array = RangeArray::random(config.size, &mut rng);
    info!(
        "Generated {} ranges and {} updates over {} hot ranges",
        workload.range_count(),
        workload.update_count(),
        workload.hot_pool.len()
    );

    // Each pass gets its own copy of the array
    let mut plain = array.clone();
    let mut cached = RangeCache::new(array, capacity)?;

    let start = Instant::now();
    let plain_outcome = replay(&mut plain, &workload.operations)?;
    let uncached = PassReport::new(start.elapsed(), plain_outcome);

    let start = Instant::now();
    let cached_outcome = replay(&mut cached, &workload.operations)?;
    let cached_pass = PassReport::new(start.elapsed(), cached_outcome);

    if plain_outcome != cached_outcome {
        bail!(
            "cached replay diverged: {:?} vs uncached {:?}",
            cached_outcome,
            plain_outcome
        );
    }

    let stats = cached.stats().snapshot();
    info!(
        "Cache hits: {}, misses: {}, evictions: {}, invalidations: {}, hit ratio: {:.3}",
        stats.hits, stats.misses, stats.evictions, stats.invalidations, stats.hit_ratio
    );

    Ok(Report {
        seed,
        workload: config.clone(),
        capacity,
        uncached,
        cached: cached_pass,
        cache_stats: stats,
    })
}
