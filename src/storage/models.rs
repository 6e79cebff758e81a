//! Core data models for Quotebook

use serde::{Deserialize, Deserializer, Serialize};

/// A quotation and the category it is filed under.
///
/// Quotes carry no identifier. Two quotes with the same text and category
/// are distinct entries, told apart only by their position in the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// The quotation body
    pub text: String,

    /// Category label (e.g., "Inspiration", "Life")
    pub category: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Name of the first required field that is empty, if any.
    ///
    /// Only the empty string counts as empty; whitespace is accepted.
    pub fn first_empty_field(&self) -> Option<&'static str> {
        if self.text.is_empty() {
            Some("text")
        } else if self.category.is_empty() {
            Some("category")
        } else {
            None
        }
    }
}

/// Reads a quote from a map with string `text` and `category` entries.
/// Sequences such as `[text, category]` are rejected.
impl<'de> Deserialize<'de> for Quote {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Fields {
            text: String,
            category: String,
        }

        let map = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        let fields: Fields = serde_json::from_value(serde_json::Value::Object(map))
            .map_err(serde::de::Error::custom)?;
        Ok(Self::new(fields.text, fields.category))
    }
}

/// The built-in book used when nothing has been saved yet.
pub fn default_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "The only way to do great work is to love what you do.",
            "Inspiration",
        ),
        Quote::new(
            "Life is what happens when you're busy making other plans.",
            "Life",
        ),
        Quote::new("Get busy living or get busy dying.", "Motivation"),
    ]
}
