//! Table formatting utilities

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, *};

/// Table formatter
pub struct TableFormatter;

impl TableFormatter {
    /// Empty table with rounded UTF-8 borders that wraps to the terminal width
    pub fn styled() -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    /// Render a table whose columns from `first_numeric` onwards are right aligned
    pub fn numeric(headers: &[&str], rows: Vec<Vec<String>>, first_numeric: usize) -> String {
        let mut table = Self::styled();
        table.set_header(headers.to_vec());

        for row in rows {
            table.add_row(row);
        }
        for index in first_numeric..headers.len() {
            if let Some(column) = table.column_mut(index) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }

        table.to_string()
    }

    /// Render a two-column key-value table
    pub fn key_value(items: Vec<(&str, String)>) -> String {
        let mut table = Self::styled();
        table.set_header(vec!["Setting", "Value"]);

        for (key, value) in items {
            table.add_row(vec![key, &value]);
        }

        table.to_string()
    }
}
