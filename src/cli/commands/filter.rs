//! Filter command - show or change the category filter.
//!
//! The filter is remembered between runs. Changing it shows a quote from
//! the newly selected category straight away.

use anyhow::{bail, Result};
use colored::Colorize;
use quotebook::quotes::QuoteStore;

use crate::cli::format::render_quote;

/// Arguments for the filter command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    quotebook filter           Print the current filter\n    \
    quotebook filter Life      Only show quotes from 'Life'\n    \
    quotebook filter all       Show quotes from every category")]
pub struct Args {
    /// Category to select, or 'all'
    #[arg(value_name = "CATEGORY")]
    pub category: Option<String>,
}

/// Executes the filter command.
pub fn run(args: Args) -> Result<()> {
    let mut store = QuoteStore::open_default()?;

    let Some(category) = args.category else {
        println!("{}", store.get_filter()?);
        return Ok(());
    };

    select(&mut store, &category)?;
    println!("{}", format!("Filter set to '{category}'").green());
    println!();

    let quote = store.show_quote()?;
    println!("{}", render_quote(quote.as_ref()));
    Ok(())
}

/// Stores `category` as the filter if it is one of the offered choices.
pub(crate) fn select(store: &mut QuoteStore, category: &str) -> Result<()> {
    let options = store.filter_options();
    if !options.contains(&category) {
        bail!(
            "Unknown category '{}'. Choose one of: {}",
            category,
            options.join(", ")
        );
    }

    store.set_filter(category)?;
    Ok(())
}
