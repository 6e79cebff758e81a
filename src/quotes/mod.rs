//! Quote selection, filtering and JSON import/export.
//!
//! [`QuoteStore`] owns the collection and writes it through a
//! [`KeyValueStore`](crate::storage::KeyValueStore) on every change.
//! Randomness is injected through [`RandomSource`] so that selection can be
//! scripted in tests.

pub mod error;
pub mod random;
pub mod store;

pub use error::QuoteError;
pub use random::{RandomSource, ScriptedRandom, ThreadRandom};
pub use store::{
    distinct_categories, QuoteStore, ALL_CATEGORIES, FILTER_KEY, LAST_VIEWED_KEY, QUOTES_KEY,
};
