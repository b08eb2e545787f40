//!
//! Command-line interface for building detector efficiency maps.
#![allow(clippy::uninlined_format_args)]

use clap::{Parser, Subcommand};

use effmap_core::Category;
use effmap_geometry::DetectorModel;
use effmap_io::{dump_raw_counts, EventFileReader, CALIBRATED_DATA_LABEL};
use effmap_pipeline::{
    EfficiencyModule, Module, ModuleConfig, ModuleRegistry, ProcessStatus,
};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("event I/O error: {0}")]
    EventIo(#[from] effmap_io::Error),

    #[error("pipeline error: {0}")]
    Pipeline(#[from] effmap_pipeline::Error),
}

/// Detector efficiency map builder.
#[derive(Parser)]
#[command(name = "effmap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an efficiency map from an event file
    Process {
        /// Input event file (one JSON event record per line)
        input: PathBuf,

        /// Output file path
        #[arg(short, long, default_value = "/tmp/efficiency.dat")]
        output: PathBuf,

        /// Label of the event bank to count hits from
        #[arg(long, default_value = CALIBRATED_DATA_LABEL)]
        bank_label: String,

        /// Detector module number
        #[arg(long, default_value = "0")]
        module: u16,

        /// Dump raw per-channel counts to stderr after finalize
        #[arg(long)]
        dump_raw: bool,
    },

    /// Show information about an event file
    Info {
        /// Input event file
        input: PathBuf,
    },

    /// List registered processing modules
    Modules,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Process {
            input,
            output,
            bank_label,
            module,
            dump_raw,
        } => process(&input, &output, bank_label, module, dump_raw),
        Commands::Info { input } => info(&input),
        Commands::Modules => {
            for name in ModuleRegistry::with_builtins().names() {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn process(
    input: &PathBuf,
    output: &PathBuf,
    bank_label: String,
    module_number: u16,
    dump_raw: bool,
) -> Result<()> {
    let geometry = DetectorModel::demonstrator(module_number);
    let config = ModuleConfig::new()
        .with_bank_label(bank_label)
        .with_output_path(output);

    let mut module = EfficiencyModule::new();
    module.initialize(&config, &geometry)?;

    let mut processed = 0usize;
    let mut stopped = 0usize;
    for event in EventFileReader::open(input)? {
        match module.process(&event?)? {
            ProcessStatus::Continue => processed += 1,
            ProcessStatus::Stop => stopped += 1,
        }
    }
    module.finalize()?;

    if dump_raw {
        let mut err = std::io::stderr().lock();
        for category in Category::ALL {
            dump_raw_counts(&mut err, module.snapshot(category)?)?;
        }
    }

    eprintln!(
        "Processed {} event(s) ({} stopped), efficiency map written to {}",
        processed,
        stopped,
        output.display()
    );
    Ok(())
}

fn info(input: &PathBuf) -> Result<()> {
    let mut events = 0usize;
    let mut calorimeter_hits = 0usize;
    let mut tracker_hits = 0usize;

    for event in EventFileReader::open(input)? {
        let event = event?;
        events += 1;
        if let Some(bank) = event.bank(CALIBRATED_DATA_LABEL) {
            calorimeter_hits += bank.calorimeter_hits.len();
            tracker_hits += bank.tracker_hits.len();
        }
    }

    println!("Events:           {events}");
    println!("Calorimeter hits: {calorimeter_hits}");
    println!("Tracker hits:     {tracker_hits}");
    Ok(())
}
