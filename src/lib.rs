//! Quotebook - a small book of quotations
//!
//! Keeps an ordered collection of quotes, shows a random one (optionally
//! restricted to a category), and imports or exports the collection as JSON.

pub mod config;
pub mod quotes;
pub mod storage;
