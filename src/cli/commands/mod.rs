//! CLI commands for Quotebook.
//!
//! Each submodule implements a single CLI command with its argument
//! parsing and execution logic.

/// Add a quote to the book.
pub mod add;

/// List the filter choices.
pub mod categories;

/// Generate shell completion scripts.
pub mod completions;

/// Configuration viewing and management.
pub mod config;

/// Write the book to a JSON file.
pub mod export;

/// Show or change the category filter.
pub mod filter;

/// Append quotes from a JSON file.
pub mod import;

/// List every quote.
pub mod list;

/// Interactive session.
pub mod shell;

/// Show a random quote.
pub mod show;
