//! Descriptive statistics over a harmonized workforce table.
//!
//! [`summarize`] is a pure function: it renames legacy headers on a copy,
//! validates the canonical columns, then computes every metric in one pass
//! per column. A table with zero rows still
//! summarizes; the numeric statistics come back as `None` because there is no
//! minimum, maximum, or mean to report.

use std::collections::BTreeMap;

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    frequency, harmonize,
    records::RecordTable,
    schema::{
        self, AGE, ATTRITION, DEPARTMENT, DISTANCE_FROM_HOME, GENDER, HOURLY_RATE, MARITAL_STATUS,
        WORK_LIFE_BALANCE,
    },
};

/// Attrition value counted as a departure, compared after trimming.
pub const ATTRITION_YES: &str = "Yes";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_employees: usize,
    pub unique_departments: Vec<String>,
    pub employees_per_department: BTreeMap<String, usize>,
    pub gender_counts: BTreeMap<String, usize>,
    pub age_stats: Option<NumericStats>,
    pub distance_from_home_stats: Option<NumericStats>,
    pub hourly_rate_stats: Option<NumericStats>,
    pub marital_status_percent: BTreeMap<String, f64>,
    pub avg_work_life_balance: Option<f64>,
    pub total_attritions: usize,
}

/// Computes the summary for `table`. Legacy headers are harmonized on a copy;
/// the caller's table is left untouched.
pub fn summarize(table: &RecordTable) -> Result<Summary> {
    let harmonized = harmonize::harmonized(table);
    let table: &RecordTable = &harmonized;
    schema::validate(table)?;
    let total_employees = table.len();

    let employees_per_department = frequency::value_counts(table, DEPARTMENT)?;
    let unique_departments = employees_per_department.keys().cloned().collect();
    let gender_counts = frequency::value_counts(table, GENDER)?;

    let age_stats = numeric_column(table, AGE)?.stats();
    let distance_from_home_stats = numeric_column(table, DISTANCE_FROM_HOME)?.stats();
    let hourly_rate_stats = numeric_column(table, HOURLY_RATE)?.stats();
    let avg_work_life_balance = numeric_column(table, WORK_LIFE_BALANCE)?
        .mean()
        .map(round2);

    let marital_status_percent = frequency::value_counts(table, MARITAL_STATUS)?
        .into_iter()
        .map(|(status, count)| {
            let percent = count as f64 / total_employees as f64 * 100.0;
            (status, round2(percent))
        })
        .collect();

    let total_attritions = table
        .column(ATTRITION)
        .into_iter()
        .flatten()
        .filter(|value| is_attrition(value))
        .count();

    info!("Summarized {total_employees} employee record(s)");
    Ok(Summary {
        total_employees,
        unique_departments,
        employees_per_department,
        gender_counts,
        age_stats,
        distance_from_home_stats,
        hourly_rate_stats,
        marital_status_percent,
        avg_work_life_balance,
        total_attritions,
    })
}

/// Exact, case-sensitive match against [`ATTRITION_YES`] after trimming.
pub fn is_attrition(value: &str) -> bool {
    value.trim() == ATTRITION_YES
}

/// Rounds half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        value
    }
}

/// Running min, max, and mean. `sum` gives exact half-way cases for
/// [`round2`]; `running_mean` takes over once the sum overflows.
#[derive(Debug, Default)]
struct NumericAccumulator {
    count: usize,
    sum: f64,
    running_mean: f64,
    min: Option<f64>,
    max: Option<f64>,
}

impl NumericAccumulator {
    fn add_value(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        let n = self.count as f64;
        self.running_mean += value / n - self.running_mean / n;
        self.min = Some(self.min.map_or(value, |current| current.min(value)));
        self.max = Some(self.max.map_or(value, |current| current.max(value)));
    }

    fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        let mean = self.sum / self.count as f64;
        Some(if mean.is_finite() {
            mean
        } else {
            self.running_mean
        })
    }

    fn stats(&self) -> Option<NumericStats> {
        Some(NumericStats {
            min: self.min?,
            max: self.max?,
            avg: round2(self.mean()?),
        })
    }
}

fn numeric_column(table: &RecordTable, column: &str) -> Result<NumericAccumulator> {
    let mut accumulator = NumericAccumulator::default();
    for (row_idx, raw) in table.column(column).into_iter().flatten().enumerate() {
        let value = parse_numeric(raw).ok_or_else(|| Error::TypeConversion {
            column: column.to_string(),
            row: row_idx + 1,
            value: raw.to_string(),
        })?;
        accumulator.add_value(value);
    }
    Ok(accumulator)
}

fn parse_numeric(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
