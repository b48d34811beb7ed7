//! planar-creepage: IPC-2221 creepage distance calculator
//!
//! Prints the minimum creepage distance for a voltage and conductor
//! classification.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

use planar_creepage::config::{self, Config};
use planar_creepage::ipc2221::{
    creepage_lookup, Classification, CREEPAGE_TABLE, MAX_TABULATED_VOLTAGE, PER_VOLT_TABLE,
};

/// IPC-2221 creepage distance calculator.
///
/// Computes the minimum creepage distance (in metres) between two conductors
/// for an RMS voltage and conductor classification.
#[derive(Parser, Debug)]
#[command(name = "planar-creepage")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// RMS voltage between the conductors, in volts
    #[arg(value_name = "VOLTAGE")]
    voltage: f64,

    /// Conductor classification: ordinal 1-7 or code (B1, B2, B3, B4, A5, A6, A7)
    #[arg(short, long, value_name = "CLASS")]
    classification: Option<Classification>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Print the whole table column for the classification
    #[arg(long)]
    table: bool,

    /// Path to configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints each table row for `classification`, then the extrapolation rate.
fn print_table(classification: Classification) {
    println!("{} ({})", classification, classification.code());
    for row in &CREEPAGE_TABLE {
        println!("  <= {:>5} V  {:.6} m", row.voltage, row.distance(classification));
    }
    println!(
        "  > {:>5} V  + {:e} m/V",
        MAX_TABULATED_VOLTAGE,
        PER_VOLT_TABLE[classification.column()]
    );
}

fn run(args: &Args, cfg: &Config) -> Result<(), String> {
    let classification = match args.classification {
        Some(c) => c,
        None => cfg.calculation.classification().map_err(|e| e.to_string())?,
    };

    debug!(voltage = args.voltage, %classification, "Calculating creepage");

    if args.table {
        print_table(classification);
        return Ok(());
    }

    let lookup = creepage_lookup(args.voltage, classification).map_err(|e| e.to_string())?;

    if args.json || cfg.output.is_json() {
        let json = serde_json::to_string_pretty(&lookup).map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        println!("{}", lookup.classification);
        println!("{}", lookup.distance);
    }

    Ok(())
}

/// Entry point for the planar-creepage calculator.
fn main() -> ExitCode {
    let args = Args::parse();

    let cfg = match config::load_config_or_default(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    match run(&args, &cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
