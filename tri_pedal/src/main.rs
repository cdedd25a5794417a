//! # tri86 Pedal Evaluator
//!
//! Loads and validates the pedal calibration, then replays JSON-lines
//! samples through the evaluator and prints one command per cycle.
//!
//! ```text
//! tri_pedal --config pedal.toml --input capture.jsonl > commands.jsonl
//! tri_pedal --config pedal.toml --check-config
//! ```

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;
use tri_common::consts::DEFAULT_CONFIG_PATH;
use tri_pedal::config::{LoadedConfig, load_config};
use tri_pedal::replay::run_replay;

/// tri86 pedal evaluator: replay samples into motor setpoints
#[derive(Parser, Debug)]
#[command(name = "tri_pedal")]
#[command(version)]
#[command(about = "Pedal fault detection and motor setpoint calculation")]
struct Args {
    /// Path to the pedal configuration TOML.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// JSON-lines sample file (default: stdin).
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Validate the configuration and exit.
    #[arg(long)]
    check_config: bool,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    // Config is read before the subscriber exists so its log level applies.
    let loaded = load_config(&args.config);
    let level = match (&loaded, args.verbose) {
        (_, true) => Level::DEBUG,
        (Ok(cfg), false) => cfg.shared.log_level.into(),
        (Err(_), false) => Level::INFO,
    };
    setup_tracing(&args, level);

    info!("tri86 pedal evaluator v{} starting...", env!("CARGO_PKG_VERSION"));

    let result = loaded
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
        .and_then(|loaded| run(&args, loaded));
    if let Err(e) = result {
        error!("FATAL: {e}");
        process::exit(1);
    }
}

fn run(args: &Args, loaded: LoadedConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        "Config OK ({}): pedal travel A={} B={}, regen travel={}",
        loaded.shared.service_name,
        loaded.calibration.pedal_a.travel(),
        loaded.calibration.pedal_b.travel(),
        loaded.calibration.regen.travel(),
    );

    if args.check_config {
        return Ok(());
    }

    let mut evaluator = loaded.evaluator();
    let stdout = io::stdout().lock();

    match args.input {
        Some(ref path) => {
            info!("Replaying samples from {}", path.display());
            let file = File::open(path)?;
            run_replay(&mut evaluator, BufReader::new(file), stdout)?;
        }
        None => {
            info!("Replaying samples from stdin");
            run_replay(&mut evaluator, io::stdin().lock(), stdout)?;
        }
    }

    Ok(())
}

/// Setup tracing subscriber based on CLI arguments.
///
/// Logs go to stderr so stdout carries only command output.
fn setup_tracing(args: &Args, level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .compact()
            .init();
    }
}
