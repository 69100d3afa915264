use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use prepnotes::{load_config, BatchConfig, BatchRunner, Config, ConsoleReporter};

#[derive(Debug, Parser)]
#[command(
    name = "prepnotes",
    version,
    about = "Fills in brief sample-preparation notes for published materials",
    long_about = "Fills in brief sample-preparation notes for published materials. Without arguments, rewrites materials_rows.csv in the current directory.",
    after_help = "Set RUST_LOG=debug for per-record diagnostics on stderr."
)]
struct Cli {
    /// JSON config (input_path, output_path, eligible_status, dry_run).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report changes without writing the table.
    #[arg(short = 'n', long, default_value_t = false)]
    dry_run: bool,

    /// Materials table to rewrite in place.
    #[arg(value_name = "TABLE")]
    table: Option<PathBuf>,
}

fn main() {
    init_tracing();

    if let Err(err) = run() {
        eprintln!("{}: {err}", env!("CARGO_PKG_NAME"));
        process::exit(1);
    }
}

/// Diagnostics go to stderr so stdout carries only the change log.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run() -> prepnotes::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                return Ok(());
            }
            _ => return Err(err.into()),
        },
    };

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    let mut batch = BatchConfig::from_config(&config);
    if let Some(table) = cli.table {
        // A table given on the command line is rewritten in place unless the
        // config names a separate output.
        if cli.config.is_none() || config.output_path.is_none() {
            batch.output_path = table.clone();
        }
        batch.input_path = table;
    }
    if cli.dry_run {
        batch.dry_run = true;
    }

    BatchRunner::new(batch).run(&ConsoleReporter)?;
    Ok(())
}
