//! Output formatting for CLI commands.

use comfy_table::{Cell, Color, ContentArrangement, Table};
use serde::Serialize;

/// Output format selection.
#[derive(Clone, Copy)]
pub enum Format {
    Table,
    Json,
}

impl From<crate::OutputFormat> for Format {
    fn from(f: crate::OutputFormat) -> Self {
        match f {
            crate::OutputFormat::Table => Format::Table,
            crate::OutputFormat::Json => Format::Json,
        }
    }
}

/// Print data as pretty JSON unless quiet.
pub fn print_json<T: Serialize>(data: &T, quiet: bool) -> anyhow::Result<()> {
    if !quiet {
        println!("{}", serde_json::to_string_pretty(data)?);
    }
    Ok(())
}

/// Create a styled table with consistent formatting.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.load_preset(comfy_table::presets::UTF8_FULL_CONDENSED);
    table
}

/// Add a header row to a table.
pub fn add_header(table: &mut Table, headers: &[&str]) {
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
}

/// Print a key-value table.
pub fn print_key_value_table(items: &[(&str, String)], quiet: bool) {
    if quiet {
        return;
    }
    let mut table = create_table();
    add_header(&mut table, &["Property", "Value"]);
    for (key, value) in items {
        table.add_row(vec![Cell::new(key).fg(Color::Green), Cell::new(value)]);
    }
    println!("{table}");
}

/// Print a table unless quiet.
pub fn print_table(table: &Table, quiet: bool) {
    if !quiet {
        println!("{table}");
    }
}

/// Print a status message (respects quiet mode).
pub fn status(msg: &str, quiet: bool) {
    if !quiet {
        println!("{msg}");
    }
}

/// Print a success message.
pub fn success(msg: &str, quiet: bool) {
    if !quiet {
        println!("✓ {msg}");
    }
}

/// Format nanoseconds with a readable unit.
pub fn format_nanos(ns: u64) -> String {
    const US: u64 = 1_000;
    const MS: u64 = US * 1_000;
    const S: u64 = MS * 1_000;

    if ns >= S {
        format!("{:.2} s", ns as f64 / S as f64)
    } else if ns >= MS {
        format!("{:.2} ms", ns as f64 / MS as f64)
    } else if ns >= US {
        format!("{:.2} µs", ns as f64 / US as f64)
    } else {
        format!("{ns} ns")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_nanos() {
        assert_eq!(format_nanos(999), "999 ns");
        assert_eq!(format_nanos(1_500), "1.50 µs");
        assert_eq!(format_nanos(2_000_000), "2.00 ms");
        assert_eq!(format_nanos(3_250_000_000), "3.25 s");
    }
}
