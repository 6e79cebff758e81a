//! Storage layer for Quotebook
//!
//! Quotes and the selected filter go to a durable SQLite database. The last
//! viewed quote goes to a [`MemoryStore`] that lives as long as one session.

pub mod db;
pub mod memory;
pub mod models;

use anyhow::Result;

pub use db::Database;
pub use memory::MemoryStore;
pub use models::*;

/// A string-to-string key-value store.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
