//! Rendering of command results

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

mod formatters;
mod table;

pub use formatters::{JsonFormatter, PlainFormatter};
pub use table::TableFormatter;

/// How a command prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Aligned tables with colored notes
    #[default]
    Table,
    /// One line per record
    Plain,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

/// Terminal styling for table output. Honors `colored`'s global override.
pub mod style {
    use colored::Colorize;

    pub fn heading(text: &str) -> String {
        text.bold().to_string()
    }

    pub fn note(text: &str) -> String {
        text.dimmed().to_string()
    }

    pub fn warn(text: &str) -> String {
        text.yellow().to_string()
    }

    pub fn ok(text: &str) -> String {
        text.green().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names_match_cli_values() {
        for format in OutputFormat::value_variants() {
            let parsed = OutputFormat::from_str(&format.to_string(), true).unwrap();
            assert_eq!(parsed, *format);
        }
        assert_eq!(OutputFormat::default().to_string(), "table");
    }

    #[test]
    fn test_format_serde_name() {
        let parsed: OutputFormat = serde_json::from_str("\"plain\"").unwrap();
        assert_eq!(parsed, OutputFormat::Plain);
    }

    #[test]
    fn test_style_without_color_is_plain_text() {
        colored::control::set_override(false);
        assert_eq!(style::warn("careful"), "careful");
        assert_eq!(style::heading("Scenarios"), "Scenarios");
    }
}
