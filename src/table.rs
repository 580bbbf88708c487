//! Plain-text layout for tabular and key/value output.

use std::borrow::Cow;
use std::fmt::Write as _;

/// Left-aligned columns separated by two spaces, with a dashed rule under
/// the header row.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths = headers
        .iter()
        .map(|h| h.chars().count().max(3))
        .collect::<Vec<_>>();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(sanitize_cell(cell).chars().count());
        }
    }

    let rule = widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>();
    let mut output = String::new();
    for line in std::iter::once(headers)
        .chain(std::iter::once(rule.as_slice()))
        .chain(rows.iter().map(Vec::as_slice))
    {
        let _ = writeln!(output, "{}", format_row(line, &widths));
    }
    output
}

pub fn print_table(headers: &[String], rows: &[Vec<String>]) {
    print!("{}", render_table(headers, rows));
}

/// `label:` column padded to the longest label, followed by the value.
pub fn render_key_values(items: &[(String, String)]) -> String {
    let width = items
        .iter()
        .map(|(label, _)| label.chars().count() + 1)
        .max()
        .unwrap_or(0);
    let mut output = String::new();
    for (label, value) in items {
        let key = format!("{label}:");
        let _ = writeln!(output, "{key:<width$}  {}", sanitize_cell(value));
    }
    output
}

fn format_row(values: &[String], widths: &[usize]) -> String {
    let line = values
        .iter()
        .zip(widths)
        .map(|(value, &width)| format!("{:<width$}", sanitize_cell(value)))
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

fn sanitize_cell(value: &str) -> Cow<'_, str> {
    if value.contains(['\n', '\r', '\t']) {
        Cow::Owned(value.replace(['\n', '\r', '\t'], " "))
    } else {
        Cow::Borrowed(value)
    }
}
