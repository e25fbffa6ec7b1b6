//! `life` binary for the Life simulation.
//!
//! This is the entry point that wires configuration, the seed file, the
//! bordered grid and the generation loop together.
//!
//! # Startup Sequence
//!
//! 1. Resolve configuration: `life-config.yaml`, environment, arguments
//! 2. Initialize structured logging (tracing, to stderr)
//! 3. Open the seed file
//! 4. Create the bordered grid
//! 5. Populate the interior from the seed
//! 6. Print generations `0..=N` to stdout
//! 7. Log the result
//!
//! Every failure is fatal: the message goes to stderr and the process exits
//! with a non-zero status.

mod args;
mod error;

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use life_core::config::{LifeConfig, LogFormat, LoggingConfig};
use life_core::{runner, seed};
use life_grid::Grid;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::CliArgs;
use crate::error::EngineError;

/// Config file looked up in the working directory.
const CONFIG_FILE: &str = "life-config.yaml";

/// Environment variable naming an explicit config file.
const ENV_CONFIG: &str = "LIFE_CONFIG";

/// Application entry point.
fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("life: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), EngineError> {
    // 1. Resolve configuration.
    let explicit = std::env::var_os(ENV_CONFIG).map(PathBuf::from);
    let (mut config, config_path) = load_config(explicit)?;
    config.apply_env_overrides()?;
    CliArgs::parse(std::env::args().skip(1))?.apply(&mut config);
    config.validate()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!(
        config_file = ?config_path,
        rows = config.grid.rows,
        cols = config.grid.cols,
        generations = config.simulation.generations,
        seed_file = %config.simulation.seed_file.display(),
        output = ?config.output.format,
        "Configuration loaded"
    );

    // 3. Open the seed file before building the world.
    let file = open_seed(&config.simulation.seed_file)?;

    // 4. Create the bordered grid.
    let mut grid = Grid::with_interior(config.grid.rows, config.grid.cols)?;
    info!(
        total_rows = grid.rows(),
        total_cols = grid.cols(),
        "Grid created"
    );

    // 5. Populate the interior. The file closes when the reader drops.
    let summary = seed::load_seed(BufReader::new(file), &mut grid)?;
    info!(
        rows_read = summary.rows_read,
        live_cells = summary.live_cells,
        "Grid seeded"
    );

    // 6. Run the generation loop.
    let stdout = BufWriter::new(io::stdout().lock());
    let mut sink = config.output.format.sink(stdout);
    let generations = config.simulation.generations;
    let result = runner::run_simulation(&mut grid, generations, sink.as_mut())?;

    // 7. Log results.
    runner::log_simulation_end(&result);

    Ok(())
}

/// Load the base configuration.
///
/// An `explicit` path (from `LIFE_CONFIG`) must exist. Otherwise
/// `life-config.yaml` in the working directory is used when present, and
/// defaults when not.
fn load_config(explicit: Option<PathBuf>) -> Result<(LifeConfig, Option<PathBuf>), EngineError> {
    if let Some(path) = explicit {
        let config = LifeConfig::from_file(&path)?;
        return Ok((config, Some(path)));
    }

    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        let config = LifeConfig::from_file(path)?;
        Ok((config, Some(path.to_path_buf())))
    } else {
        Ok((LifeConfig::default(), None))
    }
}

/// Open the seed file for reading.
fn open_seed(path: &Path) -> Result<File, EngineError> {
    File::open(path).map_err(|source| EngineError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// Install the global tracing subscriber. Logs go to stderr so they never
/// interleave with the printed generations.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr);

    match config.format {
        LogFormat::Pretty => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }
}
