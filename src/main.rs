use std::io;
use std::process;
use std::time::Instant;

use clap::Parser;
use log::info;

use persistence::{scan, Config, PowerTable, Reporter, SearchError};
use persistence::{DEFAULT_MAX_SIZE, DEFAULT_THRESHOLD};

/// Search for integers with record multiplicative persistence.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Search depth bound for each digit count.
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE)]
    max_size: u32,

    /// Worker thread count; defaults to the available CPU count.
    #[arg(long)]
    workers: Option<usize>,

    /// Report discoveries whose step count exceeds this.
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: u32,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run() -> Result<(), SearchError> {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config {
        max_size: cli.max_size,
        workers: cli.workers.unwrap_or_else(num_cpus::get),
        threshold: cli.threshold,
    };

    let build_start = Instant::now();
    let powers = PowerTable::build(config.max_size);
    info!("power table built in {:.2?}", build_start.elapsed());

    let reporter = Reporter::new(io::stdout());
    let scan_start = Instant::now();
    scan(&config, &powers, &reporter)?;
    info!("scan finished in {:.2?}", scan_start.elapsed());

    println!("Finished.");
    Ok(())
}
