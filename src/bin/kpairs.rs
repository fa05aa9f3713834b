//! Timing driver for K-closest-pairs queries on random datasets.
//!
//! ```text
//! cargo run --release --bin kpairs -- -k 3
//! cargo run --release --bin kpairs -- --size 5000 -k 10 --strategy brute-force
//! cargo run --release --bin kpairs -- --size 20000 -k 50 --compare --seed 7
//! ```

use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use closest_pairs::{QueryConfig, ResultSet, SearchStrategy, closest_k_pairs_with_config, dataset};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
enum StrategyArg {
    BruteForce,
    DivideAndConquer,
    /// Brute force below a size threshold, divide and conquer above.
    #[default]
    Auto,
}

impl StrategyArg {
    fn override_strategy(self) -> Option<SearchStrategy> {
        match self {
            StrategyArg::BruteForce => Some(SearchStrategy::BruteForce),
            StrategyArg::DivideAndConquer => Some(SearchStrategy::DivideAndConquer),
            StrategyArg::Auto => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "kpairs")]
#[command(about = "Find the K closest pairs in a random planar dataset and time the query")]
struct Args {
    /// Number of points. Drawn from --min-size..=--max-size when omitted.
    #[arg(long)]
    size: Option<usize>,

    #[arg(long, default_value = "100000")]
    min_size: usize,

    #[arg(long, default_value = "2000000")]
    max_size: usize,

    /// Coordinates are drawn from [0, extent). Defaults to the dataset size.
    #[arg(long)]
    extent: Option<i32>,

    /// Number of pairs to report.
    #[arg(short, default_value = "3")]
    k: usize,

    #[arg(short, long, value_enum, default_value_t = StrategyArg::Auto)]
    strategy: StrategyArg,

    /// Seed for the dataset generator. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Split recursion across threads.
    #[arg(long)]
    parallel: bool,

    /// Run both strategies and check that they agree.
    #[arg(long)]
    compare: bool,
}

fn timed_query(points: &[closest_pairs::Point], k: usize, config: &QueryConfig) -> closest_pairs::Result<(ResultSet, Duration)> {
    let start = Instant::now();
    let result = closest_k_pairs_with_config(points, k, config)?;
    Ok((result, start.elapsed()))
}

fn print_pairs(result: &ResultSet) {
    for (i, pair) in result.iter().enumerate() {
        println!("Pair {}: {}", i + 1, pair);
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    if args.min_size > args.max_size {
        error!(min = args.min_size, max = args.max_size, "--min-size is larger than --max-size");
        return ExitCode::FAILURE;
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let size = args
        .size
        .unwrap_or_else(|| dataset::random_size(&mut rng, args.min_size..=args.max_size));
    let extent = args
        .extent
        .unwrap_or_else(|| i32::try_from(size.max(1)).unwrap_or(i32::MAX));
    if extent <= 0 {
        error!(extent, "--extent must be positive");
        return ExitCode::FAILURE;
    }

    println!("Size of dataset: {}", size);
    let points = dataset::random_points(&mut rng, size, extent);

    let base = QueryConfig {
        strategy_override: args.strategy.override_strategy(),
        parallel: args.parallel,
        ..QueryConfig::default()
    };

    if !args.compare {
        info!(strategy = %base.resolve_strategy(points.len()), k = args.k, "running query");
        return match timed_query(&points, args.k, &base) {
            Ok((result, elapsed)) => {
                println!("Elapsed time: {:.6} s", elapsed.as_secs_f64());
                print_pairs(&result);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("{}", e);
                ExitCode::FAILURE
            }
        };
    }

    let mut results = Vec::with_capacity(2);
    for strategy in [SearchStrategy::BruteForce, SearchStrategy::DivideAndConquer] {
        let config = QueryConfig { strategy_override: Some(strategy), ..base.clone() };
        match timed_query(&points, args.k, &config) {
            Ok((result, elapsed)) => {
                println!("{} elapsed time: {:.6} s", strategy, elapsed.as_secs_f64());
                results.push(result);
            }
            Err(e) => {
                error!(%strategy, "{}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    print_pairs(&results[1]);
    if results[0] == results[1] {
        println!("Strategies agree on all {} pairs", results[1].len());
        ExitCode::SUCCESS
    } else {
        error!("brute-force and divide-and-conquer results differ");
        ExitCode::FAILURE
    }
}
