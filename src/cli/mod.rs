//! Command-line interface for Quotebook.
//!
//! The CLI is the presentation layer over [`quotebook::quotes::QuoteStore`]:
//! it reads user input, calls the store, and renders the result.

/// Individual CLI command implementations.
pub mod commands;

/// Output formatting shared by commands.
pub mod format;
