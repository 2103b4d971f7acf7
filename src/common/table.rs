//! Plain-text table output for the introspection commands.

use console::{Style, measure_text_width};

/// Format a table with a header row, a dashed separator and one line per row
///
/// Columns are left-aligned and padded to the widest cell, separated by two
/// spaces. Trailing whitespace is trimmed from every line.
pub fn format_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(idx, title)| {
            rows.iter()
                .filter_map(|row| row.get(idx))
                .map(|cell| measure_text_width(cell))
                .chain(std::iter::once(measure_text_width(title)))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(header.iter().copied(), &widths));
    lines.push(format_row(widths.iter().map(|w| "-".repeat(*w)), &widths));
    for row in rows {
        lines.push(format_row(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn format_row<S: AsRef<str>>(cells: impl Iterator<Item = S>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let cell = cell.as_ref();
            let pad = width.saturating_sub(measure_text_width(cell));
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// Print a table to stdout with a bold header
pub fn print_table(header: &[&str], rows: &[Vec<String>]) {
    let table = format_table(header, rows);
    let mut lines = table.lines();
    if let Some(first) = lines.next() {
        println!("{}", Style::new().bold().apply_to(first));
    }
    for line in lines {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| (*c).to_string()).collect()
    }

    #[test]
    fn test_format_table_pads_columns() {
        let table = format_table(
            &["Name", "Location"],
            &[
                row(&["babel_bundle", "unchained::bundles::babel::bundle::BabelBundle"]),
                row(&["app", "app::App"]),
            ],
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Name          Location");
        assert!(lines[1].starts_with("------------  --------"));
        assert_eq!(lines[3], "app           app::App");
    }

    #[test]
    fn test_format_table_empty_rows() {
        let table = format_table(&["Config Key", "Value"], &[]);
        assert_eq!(table, "Config Key  Value\n----------  -----");
    }
}
