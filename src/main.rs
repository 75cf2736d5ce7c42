use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cellmatch::config::Settings;
use cellmatch::core::{match_all, Matcher};
use cellmatch::error::CellMatchError;
use cellmatch::io::{output_file_name, read_sites, write_matches};

/// Find in-beam nearest neighbour cells between two cell-site CSV exports
#[derive(Parser, Debug)]
#[command(name = "cellmatch")]
#[command(about = "Find in-beam nearest neighbour cells between two cell-site CSV exports")]
struct Args {
    /// CSV with the cells to find neighbours for
    source: PathBuf,

    /// CSV with the candidate neighbour cells
    target: PathBuf,

    /// Total beam width in degrees centered on each cell's azimuth
    #[arg(long)]
    beamwidth: Option<f64>,

    /// Directory the results file is written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Worker threads (defaults to half the available cores)
    #[arg(long)]
    workers: Option<usize>,
}

fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "plain".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    let args = Args::parse();

    match run(args) {
        Ok(path) => info!("Results written to {}", path.display()),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<PathBuf, CellMatchError> {
    let settings = Settings::load()?;

    let beamwidth_deg = args.beamwidth.unwrap_or(settings.matching.beamwidth_deg);
    let workers = args
        .workers
        .or(settings.runtime.workers)
        .unwrap_or_else(default_workers)
        .max(1);

    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build_global()
    {
        // Happens only if a pool was already installed; results are unaffected
        info!("Using existing thread pool: {}", e);
    }

    info!(
        "Matching with beamwidth {}°, up to {} neighbours per cell, {} workers",
        beamwidth_deg, settings.matching.max_neighbors, workers
    );

    let sources = read_sites(&args.source)?;
    let targets = read_sites(&args.target)?;

    info!(
        "Loaded {} source cells and {} target cells",
        sources.len(),
        targets.len()
    );

    let matcher = Matcher::new(beamwidth_deg, settings.matching.max_neighbors);
    let matches = match_all(&matcher, &sources, &targets);

    info!("Found {} neighbour relations", matches.len());

    let output_path = args.output_dir.join(output_file_name(chrono::Local::now()));
    write_matches(&output_path, &matches)?;

    Ok(output_path)
}

/// Half the available cores, to avoid oversubscription on shared hosts
fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get() / 2)
        .unwrap_or(1)
        .max(1)
}
