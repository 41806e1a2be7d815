use anyhow::Result;
use clap::Parser;

use coverage_planner::config::Config;
use coverage_planner::coverage::CoverageEngine;
use coverage_planner::data;
use coverage_planner::graph::{algorithms, GraphBuilder};
use coverage_planner::report::{self, Format};

#[derive(Parser, Debug)]
#[clap(
    name = "coverage-planner",
    about = "Place facility centers on a chain of locations so every location is within X hops"
)]
struct Cli {
    /// Number of locations in the chain
    #[clap(long, default_value = "10")]
    locations: usize,

    /// Population at each location (comma-separated, one per location)
    #[clap(long)]
    populations: Option<String>,

    /// Population used for every location when --populations is omitted
    #[clap(long, default_value = "10")]
    default_population: u64,

    /// Coverage distance in hops
    #[clap(long, short = 'x', default_value = "2", allow_hyphen_values = true)]
    radius: i64,

    /// Output format
    #[clap(long, value_enum, default_value = "text")]
    format: Format,

    /// Graph size at which the candidate scan runs in parallel
    #[clap(long, default_value = "1000")]
    parallel_threshold: usize,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    // Set number of threads
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        num_cpus::get()
    };

    log::debug!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    let config = Config::new(
        args.locations,
        args.default_population,
        args.radius,
        args.parallel_threshold,
    );

    // 1. Read populations
    let populations = match args.populations.as_deref() {
        Some(text) => data::parse_populations(text, config.locations)?,
        None => data::default_populations(config.locations, config.default_population),
    };

    // 2. Build the chain
    let graph = GraphBuilder::chain(&populations)?.build()?;
    log::info!(
        "Built chain with {} locations and {} links ({} bytes)",
        graph.node_count,
        graph.edge_count(),
        graph.memory_usage()
    );
    log::debug!(
        "Graph has {} connected components",
        algorithms::connected_components(&graph).len()
    );

    // 3. Place centers
    let result = CoverageEngine::new(&graph, config.radius)?
        .with_parallel_threshold(config.parallel_threshold)
        .run()?;

    // 4. Report
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_report(&result, args.format, &mut out)?;

    Ok(())
}
