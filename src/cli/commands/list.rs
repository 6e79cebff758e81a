//! List command - print every quote in book order.

use anyhow::Result;
use colored::Colorize;
use quotebook::quotes::QuoteStore;

use crate::cli::format::{OutputFormat, NO_QUOTES};

/// Arguments for the list command.
#[derive(clap::Args)]
pub struct Args {
    /// Only list quotes in this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Output format: text (default) or json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Executes the list command.
pub fn run(args: Args) -> Result<()> {
    let store = QuoteStore::open_default()?;
    let quotes: Vec<_> = store
        .quotes()
        .iter()
        .enumerate()
        .filter(|(_, q)| args.category.as_ref().is_none_or(|c| &q.category == c))
        .collect();

    match args.format {
        OutputFormat::Json => {
            let items: Vec<_> = quotes.iter().map(|(_, q)| q).collect();
            println!("{}", serde_json::to_string(&items)?);
        }
        OutputFormat::Text => {
            if quotes.is_empty() {
                println!("{}", NO_QUOTES.dimmed());
                return Ok(());
            }

            for (index, quote) in &quotes {
                println!(
                    "{:>4}  {}  {}",
                    (index + 1).to_string().dimmed(),
                    quote.text,
                    format!("[{}]", quote.category).cyan()
                );
            }
            println!();
            println!(
                "{}",
                format!("{} of {} quotes", quotes.len(), store.len()).dimmed()
            );
        }
    }

    Ok(())
}
