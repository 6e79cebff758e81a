//! Output formatting utilities for CLI commands.
//!
//! Provides the `OutputFormat` switch and the shared rendering of quotes,
//! so `show`, `add`, `filter` and the shell print them the same way.

use clap::ValueEnum;
use colored::Colorize;
use quotebook::storage::Quote;

/// Output format options for CLI commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default).
    #[default]
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Message shown when the current filter matches nothing.
pub const NO_QUOTES: &str = "No quotes available.";

/// Renders a pick result as terminal text.
pub fn render_quote(quote: Option<&Quote>) -> String {
    match quote {
        Some(quote) => format!(
            "\"{}\"\n{}",
            quote.text.bold(),
            format!("Category: {}", quote.category).italic().dimmed()
        ),
        None => NO_QUOTES.dimmed().to_string(),
    }
}

/// Renders a pick result in the requested format.
pub fn format_quote(quote: Option<&Quote>, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_quote(quote)),
        OutputFormat::Json => Ok(serde_json::to_string(&quote)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        let format = OutputFormat::default();
        assert_eq!(format, OutputFormat::Text);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(
            OutputFormat::from_str("text", false).unwrap(),
            OutputFormat::Text
        );
        assert_eq!(
            OutputFormat::from_str("json", false).unwrap(),
            OutputFormat::Json
        );
        assert!(OutputFormat::from_str("markdown", false).is_err());
    }

    #[test]
    fn test_render_quote_contains_text_and_category() {
        let quote = Quote::new("Keep going.", "Motivation");
        let rendered = render_quote(Some(&quote));
        assert!(rendered.contains("Keep going."));
        assert!(rendered.contains("Category: Motivation"));
    }

    #[test]
    fn test_render_empty_result() {
        assert!(render_quote(None).contains(NO_QUOTES));
    }

    #[test]
    fn test_format_quote_json() {
        let quote = Quote::new("Hi", "Life");
        assert_eq!(
            format_quote(Some(&quote), OutputFormat::Json).unwrap(),
            r#"{"text":"Hi","category":"Life"}"#
        );
        assert_eq!(format_quote(None, OutputFormat::Json).unwrap(), "null");
    }
}
