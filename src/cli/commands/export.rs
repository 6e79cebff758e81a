//! Export command - write the whole book as a JSON array.
//!
//! The output is the same format the book is stored in, so it can be fed
//! back through `quotebook import`.

use anyhow::Result;
use quotebook::config::Config;
use quotebook::quotes::QuoteStore;
use std::path::PathBuf;

/// Arguments for the export command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    quotebook export                  Write quotes.json (or the configured file)\n    \
    quotebook export -o backup.json   Write to a specific file\n    \
    quotebook export --stdout         Print the JSON instead")]
pub struct Args {
    /// Write output to this file instead of the configured export file
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the JSON to stdout
    #[arg(long)]
    pub stdout: bool,
}

/// Executes the export command.
pub fn run(args: Args) -> Result<()> {
    let store = QuoteStore::open_default()?;

    if args.stdout {
        println!("{}", store.export_json()?);
        return Ok(());
    }

    let path = match args.output {
        Some(path) => path,
        None => PathBuf::from(Config::load_or_default().export_file),
    };

    store.export_file(&path)?;
    eprintln!("Exported {} quotes to: {}", store.len(), path.display());
    Ok(())
}
