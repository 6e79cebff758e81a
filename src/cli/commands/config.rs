//! Config command - manage configuration

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use quotebook::config::{Config, CONFIG_KEYS};
use quotebook::storage::db::default_db_path;

#[derive(clap::Args)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<ConfigCommand>,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
}

pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(ConfigCommand::Show) | None => show_config(),
        Some(ConfigCommand::Get { key }) => get_config(&key),
        Some(ConfigCommand::Set { key, value }) => set_config(&key, &value),
    }
}

fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Quotebook Configuration".bold());
    println!();
    println!(
        "  {}  {}",
        "Config file:".dimmed(),
        Config::config_path()?.display()
    );

    let db_path = match &config.database_path {
        Some(path) => path.clone(),
        None => default_db_path()?,
    };
    println!("  {}     {}", "Database:".dimmed(), db_path.display());

    println!();
    for key in CONFIG_KEYS {
        println!("  {} = {}", key.cyan(), config.get(key)?);
    }

    Ok(())
}

fn get_config(key: &str) -> Result<()> {
    println!("{}", Config::load()?.get(key)?);
    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    println!("{}", format!("Set {key} = {value}").green());
    Ok(())
}
