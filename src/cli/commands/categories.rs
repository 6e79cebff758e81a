//! Categories command - list filter choices and mark the selected one.

use anyhow::Result;
use colored::Colorize;
use quotebook::quotes::QuoteStore;

/// Executes the categories command.
pub fn run() -> Result<()> {
    let store = QuoteStore::open_default()?;
    let selected = store.get_filter()?;

    for option in store.filter_options() {
        if option == selected {
            println!("{} {}", "●".green(), option.bold());
        } else {
            println!("{} {}", "○".dimmed(), option);
        }
    }

    if !store.filter_options().contains(&selected.as_str()) {
        println!();
        println!(
            "{}",
            format!("Saved filter '{selected}' matches no quotes.").yellow()
        );
    }
    Ok(())
}
