//! Rendering of query results as terminal tables or JSON.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use techjobs_model::Row;

/// Printed instead of an empty table.
pub const NO_RESULTS: &str = "No results.";

/// Output format for query results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rounded UTF-8 table sized to the terminal.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Renders a list of column values under a single `header`.
pub fn render_values(
    header: &str,
    values: &[String],
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(values),
        OutputFormat::Table => {
            if values.is_empty() {
                return Ok(NO_RESULTS.to_string());
            }
            let mut table = Table::new();
            table.set_header(vec![header_cell(header)]);
            apply_table_style(&mut table);
            for value in values {
                table.add_row(vec![value.as_str()]);
            }
            Ok(table.to_string())
        }
    }
}

/// Renders rows with one table column per header, in `columns` order.
///
/// JSON output is an array of objects keyed by column name.
pub fn render_rows(
    columns: &[String],
    rows: &[Row],
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(rows),
        OutputFormat::Table => {
            if rows.is_empty() {
                return Ok(NO_RESULTS.to_string());
            }
            let mut table = Table::new();
            table.set_header(columns.iter().map(|column| header_cell(column)));
            apply_table_style(&mut table);
            for row in rows {
                table.add_row(
                    columns
                        .iter()
                        .map(|column| row.get(column).unwrap_or_default()),
                );
            }
            Ok(format!("{table}\n{} listing(s)", rows.len()))
        }
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}
