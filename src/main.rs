use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use spendlog::cli::{handle_command, Commands};
use spendlog::config::SpendlogPaths;
use spendlog::store::CsvStore;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Personal expense tracker for the command line",
    long_about = "spendlog records expenses in a flat CSV file and lets you \
                  list them, update or delete them by id, and total them \
                  overall or for a month of the current year."
)]
struct Cli {
    /// Path to the expenses CSV file (defaults to the data directory)
    #[arg(long, global = true, env = "SPENDLOG_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file = match cli.file {
        Some(file) => file,
        None => {
            let paths = SpendlogPaths::new()?;
            paths.ensure_directories()?;
            paths.expenses_file()
        }
    };

    let mut store = CsvStore::open(file)?;
    handle_command(&mut store, cli.command)?;

    Ok(())
}
