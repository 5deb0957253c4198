//! Output formatters

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

/// JSON formatter
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format a value as pretty JSON
    pub fn format<T: Serialize>(value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

/// Plain text formatter
pub struct PlainFormatter;

impl PlainFormatter {
    /// Format a value as `dotted.key = value` lines, one per leaf
    pub fn format<T: Serialize>(value: &T) -> Result<String> {
        let json = serde_json::to_value(value)?;
        let mut lines = Vec::new();
        Self::flatten(&json, String::new(), &mut lines);
        Ok(lines.join("\n"))
    }

    fn flatten(value: &Value, prefix: String, lines: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    Self::flatten(child, path, lines);
                }
            }
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate() {
                    Self::flatten(child, format!("{}[{}]", prefix, index), lines);
                }
            }
            Value::String(s) => lines.push(format!("{} = {}", prefix, s)),
            other => lines.push(format!("{} = {}", prefix, other)),
        }
    }
}
