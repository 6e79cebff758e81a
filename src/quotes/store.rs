//! The quote store: an ordered book of quotes plus the user's filter.

use std::path::Path;

use serde_json::Value;

use super::error::QuoteError;
use super::random::{RandomSource, ThreadRandom};
use crate::storage::{default_quotes, Database, KeyValueStore, MemoryStore, Quote};

/// Durable key holding the JSON array of quotes.
pub const QUOTES_KEY: &str = "quotes";

/// Durable key holding the selected category filter.
pub const FILTER_KEY: &str = "lastSelectedFilter";

/// Session key holding the last picked quote.
pub const LAST_VIEWED_KEY: &str = "lastViewedQuote";

/// Filter value that disables category restriction.
pub const ALL_CATEGORIES: &str = "all";

/// Categories in order of first occurrence, without duplicates.
pub fn distinct_categories(quotes: &[Quote]) -> Vec<&str> {
    let mut categories: Vec<&str> = Vec::new();
    for quote in quotes {
        if !categories.contains(&quote.category.as_str()) {
            categories.push(&quote.category);
        }
    }
    categories
}

/// Holds the quote collection and persists it through a durable store.
///
/// Every mutation is written to durable storage before the method returns,
/// so a caller can refresh its views as soon as it gets control back. A
/// failed write leaves the in-memory collection untouched.
pub struct QuoteStore {
    quotes: Vec<Quote>,
    durable: Box<dyn KeyValueStore>,
    session: Box<dyn KeyValueStore>,
    random: Box<dyn RandomSource>,
}

impl QuoteStore {
    /// Loads the collection from `durable`, falling back to the built-in
    /// quotes when nothing usable is stored.
    pub fn load(
        durable: impl KeyValueStore + 'static,
        session: impl KeyValueStore + 'static,
    ) -> Result<Self, QuoteError> {
        let quotes = match durable.get(QUOTES_KEY)? {
            None => {
                tracing::debug!("No saved quotes, using the built-in set");
                default_quotes()
            }
            Some(raw) => match serde_json::from_str::<Vec<Quote>>(&raw) {
                Ok(quotes) => quotes,
                Err(e) => {
                    tracing::warn!("Saved quotes are unreadable ({e}), using the built-in set");
                    default_quotes()
                }
            },
        };

        Ok(Self {
            quotes,
            durable: Box::new(durable),
            session: Box::new(session),
            random: Box::new(ThreadRandom),
        })
    }

    /// Opens the default database with a fresh session.
    pub fn open_default() -> Result<Self, QuoteError> {
        Self::load(Database::open_default()?, MemoryStore::new())
    }

    /// Replaces the random source used by [`pick_random`](Self::pick_random).
    pub fn with_random(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Box::new(random);
        self
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Writes the whole collection to durable storage.
    pub fn save(&self) -> Result<(), QuoteError> {
        self.persist(&self.quotes)
    }

    fn persist(&self, quotes: &[Quote]) -> Result<(), QuoteError> {
        let json = serde_json::to_string(quotes)?;
        self.durable.set(QUOTES_KEY, &json)?;
        tracing::debug!("Saved {} quotes", quotes.len());
        Ok(())
    }

    /// Appends a quote and persists the collection.
    ///
    /// Both fields must be non-empty. Whitespace-only values are accepted.
    pub fn add_quote(&mut self, text: &str, category: &str) -> Result<&[Quote], QuoteError> {
        let quote = Quote::new(text, category);
        if let Some(field) = quote.first_empty_field() {
            return Err(QuoteError::Validation { field });
        }

        self.append(vec![quote])?;
        Ok(&self.quotes)
    }

    fn append(&mut self, new_quotes: Vec<Quote>) -> Result<(), QuoteError> {
        let mut updated = Vec::with_capacity(self.quotes.len() + new_quotes.len());
        updated.extend_from_slice(&self.quotes);
        updated.extend(new_quotes);

        self.persist(&updated)?;
        self.quotes = updated;
        Ok(())
    }

    /// Picks a random quote from the subset matching `filter`.
    ///
    /// `None` or `"all"` selects from the whole book; any other value must
    /// equal a quote's category exactly. Returns `Ok(None)` when the subset
    /// is empty. The picked quote is remembered for the session.
    pub fn pick_random(&mut self, filter: Option<&str>) -> Result<Option<Quote>, QuoteError> {
        let subset: Vec<&Quote> = match filter {
            None | Some(ALL_CATEGORIES) => self.quotes.iter().collect(),
            Some(category) => self
                .quotes
                .iter()
                .filter(|q| q.category == category)
                .collect(),
        };

        if subset.is_empty() {
            tracing::debug!("No quotes match filter {:?}", filter);
            return Ok(None);
        }

        let index = self.random.next_index(subset.len());
        let quote = subset[index].clone();

        self.session
            .set(LAST_VIEWED_KEY, &serde_json::to_string(&quote)?)?;
        Ok(Some(quote))
    }

    /// Picks a quote using the stored filter.
    pub fn show_quote(&mut self) -> Result<Option<Quote>, QuoteError> {
        let filter = self.get_filter()?;
        self.pick_random(Some(&filter))
    }

    /// The quote last picked in this session, if any.
    pub fn last_viewed(&self) -> Result<Option<Quote>, QuoteError> {
        let Some(raw) = self.session.get(LAST_VIEWED_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(quote) => Ok(Some(quote)),
            Err(e) => {
                tracing::debug!("Ignoring unreadable last viewed quote: {e}");
                Ok(None)
            }
        }
    }

    pub fn distinct_categories(&self) -> Vec<&str> {
        distinct_categories(&self.quotes)
    }

    /// Choices for the filter selector: `"all"` then every category.
    pub fn filter_options(&self) -> Vec<&str> {
        let mut options = vec![ALL_CATEGORIES];
        options.extend(self.distinct_categories());
        options
    }

    pub fn set_filter(&mut self, category: &str) -> Result<(), QuoteError> {
        self.durable.set(FILTER_KEY, category)?;
        tracing::debug!("Filter set to {category}");
        Ok(())
    }

    /// The stored filter, or `"all"` when none was saved.
    pub fn get_filter(&self) -> Result<String, QuoteError> {
        Ok(self
            .durable
            .get(FILTER_KEY)?
            .unwrap_or_else(|| ALL_CATEGORIES.to_string()))
    }

    /// The collection as a compact JSON array.
    pub fn export_json(&self) -> Result<String, QuoteError> {
        Ok(serde_json::to_string(&self.quotes)?)
    }

    /// Writes [`export_json`](Self::export_json) to `path`.
    pub fn export_file(&self, path: &Path) -> Result<(), QuoteError> {
        let json = self.export_json()?;
        std::fs::write(path, json).map_err(|source| QuoteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Exported {} quotes to {}", self.quotes.len(), path.display());
        Ok(())
    }

    /// Appends every quote of a JSON array and persists the collection.
    ///
    /// The whole import is rejected if the text is not a JSON array or any
    /// element is not a quote with non-empty `text` and `category`. An empty
    /// array is accepted and still saved. Returns the number appended.
    pub fn import_json(&mut self, text: &str) -> Result<usize, QuoteError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| QuoteError::Import(format!("invalid JSON: {e}")))?;

        let Value::Array(items) = value else {
            return Err(QuoteError::Import(
                "expected a JSON array of quotes".to_string(),
            ));
        };

        let imported = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| parse_imported(index, item))
            .collect::<Result<Vec<_>, _>>()?;

        let count = imported.len();
        self.append(imported)?;
        tracing::info!("Imported {count} quotes");
        Ok(count)
    }

    /// Reads `path` and imports its contents.
    pub async fn import_file(&mut self, path: &Path) -> Result<usize, QuoteError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| QuoteError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        self.import_json(&text)
    }
}

fn parse_imported(index: usize, item: Value) -> Result<Quote, QuoteError> {
    let quote: Quote = serde_json::from_value(item)
        .map_err(|e| QuoteError::Import(format!("element {index}: {e}")))?;

    if let Some(field) = quote.first_empty_field() {
        return Err(QuoteError::Import(format!(
            "element {index}: {field} must not be empty"
        )));
    }
    Ok(quote)
}
