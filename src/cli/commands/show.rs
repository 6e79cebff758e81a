//! Show command - display a random quote.
//!
//! Picks a quote from the categories allowed by the saved filter.

use anyhow::Result;
use quotebook::quotes::QuoteStore;

use crate::cli::format::{format_quote, OutputFormat};

/// Arguments for the show command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    quotebook show                 Random quote from the current filter\n    \
    quotebook show --format json   Print the quote as JSON")]
pub struct Args {
    /// Output format: text (default) or json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Executes the show command.
pub fn run(args: Args) -> Result<()> {
    let mut store = QuoteStore::open_default()?;
    let quote = store.show_quote()?;
    println!("{}", format_quote(quote.as_ref(), args.format)?);
    Ok(())
}
