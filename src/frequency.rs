use std::collections::BTreeMap;

use crate::{
    error::Result,
    records::RecordTable,
    schema::{self, DEPARTMENT, MARITAL_STATUS},
};

/// Row counts grouped by the raw cell text of `column`. Values differing only
/// in case or whitespace form separate groups.
pub fn value_counts(table: &RecordTable, column: &str) -> Result<BTreeMap<String, usize>> {
    schema::require_columns(table, &[column])?;
    let mut counts = BTreeMap::new();
    for value in table.column(column).into_iter().flatten() {
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }
    Ok(counts)
}

pub fn department_counts(table: &RecordTable) -> Result<BTreeMap<String, usize>> {
    value_counts(table, DEPARTMENT)
}

pub fn marital_status_counts(table: &RecordTable) -> Result<BTreeMap<String, usize>> {
    value_counts(table, MARITAL_STATUS)
}

/// Groups ordered by count descending, ties broken by value ascending.
pub fn ranked(counts: &BTreeMap<String, usize>) -> Vec<(String, usize)> {
    let mut items = counts
        .iter()
        .map(|(value, count)| (value.clone(), *count))
        .collect::<Vec<_>>();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    items
}

/// Table rows of `value, count, percent` for display, most frequent first.
pub fn render_rows(counts: &BTreeMap<String, usize>) -> Vec<Vec<String>> {
    let total: usize = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }
    ranked(counts)
        .into_iter()
        .map(|(value, count)| {
            let percent = (count as f64 / total as f64) * 100.0;
            let value = if value.is_empty() {
                String::from("<empty>")
            } else {
                value
            };
            vec![value, count.to_string(), format!("{percent:.2}%")]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn departments(values: &[&str]) -> RecordTable {
        RecordTable::new(
            vec![DEPARTMENT.to_string()],
            values.iter().map(|v| vec![v.to_string()]).collect(),
        )
    }

    #[test]
    fn counts_group_by_raw_value() {
        let table = departments(&["A", "B", "A", "A ", "a"]);
        let counts = department_counts(&table).expect("counts");
        assert_eq!(counts.len(), 4);
        assert_eq!(counts["A"], 2);
        assert_eq!(counts["A "], 1);
        assert_eq!(counts["a"], 1);
        assert_eq!(counts["B"], 1);
    }

    #[test]
    fn missing_column_is_a_schema_error() {
        let table = departments(&["A"]);
        match marital_status_counts(&table) {
            Err(Error::Schema { missing }) => assert_eq!(missing, vec!["MaritalStatus"]),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn ranked_orders_by_count_then_value() {
        let table = departments(&["Cardiology", "ICU", "ICU", "Maternity", "Cardiology", "ER"]);
        let ranked = ranked(&department_counts(&table).expect("counts"));
        assert_eq!(
            ranked,
            vec![
                ("Cardiology".to_string(), 2),
                ("ICU".to_string(), 2),
                ("ER".to_string(), 1),
                ("Maternity".to_string(), 1),
            ]
        );
    }

    #[test]
    fn render_rows_formats_percentages() {
        let table = departments(&["A", "B", "A", ""]);
        let rows = render_rows(&department_counts(&table).expect("counts"));
        assert_eq!(rows[0], vec!["A", "2", "50.00%"]);
        assert_eq!(rows[1], vec!["<empty>", "1", "25.00%"]);
        assert_eq!(rows[2], vec!["B", "1", "25.00%"]);
    }
}
