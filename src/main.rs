use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::commands;
use quotebook::config::Config;

/// The main CLI command line interface.
#[derive(Parser)]
#[command(name = "quotebook")]
#[command(version)]
#[command(about = "A book of quotations - show, add, filter, import and export")]
#[command(long_about = "Quotebook keeps an ordered collection of quotations, each filed\n\
    under a category. Show a random quote, narrow the choice with a\n\
    category filter that is remembered between runs, and move the\n\
    whole book in and out as JSON.")]
#[command(after_help = "EXAMPLES:\n    \
    quotebook show                          Show a random quote\n    \
    quotebook add \"Be kind.\" -c Life        Add a quote\n    \
    quotebook filter Life                   Only show 'Life' quotes\n    \
    quotebook export -o backup.json         Save the book as JSON\n    \
    quotebook import backup.json            Append quotes from JSON\n    \
    quotebook shell                         Interactive session\n\n\
    For more information about a command, run 'quotebook <command> --help'.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Show a random quote from the current filter
    Show(commands::show::Args),

    /// Add a quote to the book
    #[command(long_about = "Appends a quote to the end of the book and saves it.\n\
        Both the text and the category must be non-empty.")]
    Add(commands::add::Args),

    /// List every quote in book order
    List(commands::list::Args),

    /// List filter choices, marking the selected one
    Categories,

    /// Show or change the category filter
    #[command(long_about = "Without an argument, prints the saved filter. With a category\n\
        (or 'all'), saves it as the new filter and shows a matching quote.")]
    Filter(commands::filter::Args),

    /// Export the book as a JSON array
    Export(commands::export::Args),

    /// Append quotes from a JSON file
    #[command(long_about = "Reads a JSON array of {\"text\", \"category\"} objects and appends\n\
        every element to the book. If the file is not an array or any\n\
        element is invalid, nothing is imported.")]
    Import(commands::import::Args),

    /// View and manage configuration settings
    #[command(long_about = "Provides subcommands to show, get, and set configuration values.\n\
        Configuration is stored in ~/.quotebook/config.yaml.")]
    Config(commands::config::Args),

    /// Start an interactive session
    Shell,

    /// Generate shell completion scripts
    Completions(commands::completions::Args),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "quotebook=debug"
    } else {
        "quotebook=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if !matches!(cli.command, Commands::Config(_)) && !Config::load_or_default().color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Show(args) => commands::show::run(args),
        Commands::Add(args) => commands::add::run(args),
        Commands::List(args) => commands::list::run(args),
        Commands::Categories => commands::categories::run(),
        Commands::Filter(args) => commands::filter::run(args),
        Commands::Export(args) => commands::export::run(args),
        Commands::Import(args) => commands::import::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Shell => commands::shell::run(),
        Commands::Completions(args) => {
            commands::completions::generate_completions(&mut Cli::command(), args.shell);
            Ok(())
        }
    }
}
