//! Import command - append quotes from a JSON file.
//!
//! The file must hold a JSON array of `{"text", "category"}` objects, the
//! format written by `quotebook export`. An invalid file imports nothing.

use anyhow::{Context, Result};
use colored::Colorize;
use quotebook::quotes::QuoteStore;
use std::path::PathBuf;

/// Arguments for the import command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    quotebook import quotes.json    Append every quote from quotes.json")]
pub struct Args {
    /// JSON file to import
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Executes the import command.
pub fn run(args: Args) -> Result<()> {
    let mut store = QuoteStore::open_default()?;

    let rt = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let count = rt.block_on(store.import_file(&args.file))?;

    println!(
        "{}",
        format!("Quotes imported successfully! ({count} added)").green()
    );
    println!(
        "{}",
        format!("Categories: {}", store.distinct_categories().join(", ")).dimmed()
    );
    Ok(())
}
