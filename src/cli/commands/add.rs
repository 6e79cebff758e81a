//! Add command - add a quote to the book.
//!
//! The quote is saved before a fresh random quote is shown, so the new one
//! is already eligible.

use anyhow::Result;
use colored::Colorize;
use quotebook::quotes::QuoteStore;

use crate::cli::format::render_quote;

/// Arguments for the add command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    quotebook add \"Simplicity is prerequisite for reliability.\" --category Engineering")]
pub struct Args {
    /// The quotation text
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Category to file the quote under
    #[arg(short, long)]
    pub category: String,
}

/// Executes the add command.
pub fn run(args: Args) -> Result<()> {
    let mut store = QuoteStore::open_default()?;
    let count = store.add_quote(&args.text, &args.category)?.len();

    println!("{}", "Quote added successfully!".green());
    println!("{}", format!("The book now holds {count} quotes.").dimmed());
    println!();

    let quote = store.show_quote()?;
    println!("{}", render_quote(quote.as_ref()));
    Ok(())
}
