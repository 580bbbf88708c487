//! Canonical column set and the validation gate in front of summarization.

use crate::{
    error::{Error, Result},
    records::RecordTable,
};

pub const EMP_ID: &str = "EmpID";
pub const AGE: &str = "Age";
pub const GENDER: &str = "Gender";
pub const MARITAL_STATUS: &str = "MaritalStatus";
pub const EDUCATION: &str = "Education";
pub const DEPARTMENT: &str = "Department";
pub const JOB_ROLE: &str = "JobRole";
pub const HOURLY_RATE: &str = "HourlyRate";
pub const YEARS_AT_COMPANY: &str = "YearsAtCompany";
pub const YEARS_IN_CURRENT_ROLE: &str = "YearsInCurrentRole";
pub const DISTANCE_FROM_HOME: &str = "DistanceFromHome";
pub const WORK_LIFE_BALANCE: &str = "WorkLifeBalance";
pub const YEARS_LAST_PROMOTION: &str = "YearsLastPromotion";
pub const YEARS_CURR_MANAGER: &str = "YearsCurrManager";
pub const ATTRITION: &str = "Attrition";

/// Columns every summarizable table must expose, in display order.
pub const CANONICAL_COLUMNS: [&str; 15] = [
    EMP_ID,
    AGE,
    GENDER,
    MARITAL_STATUS,
    EDUCATION,
    DEPARTMENT,
    JOB_ROLE,
    HOURLY_RATE,
    YEARS_AT_COMPANY,
    YEARS_IN_CURRENT_ROLE,
    DISTANCE_FROM_HOME,
    WORK_LIFE_BALANCE,
    YEARS_LAST_PROMOTION,
    YEARS_CURR_MANAGER,
    ATTRITION,
];

/// Canonical columns absent from `table`, in canonical order.
pub fn missing_columns(table: &RecordTable) -> Vec<&'static str> {
    CANONICAL_COLUMNS
        .iter()
        .copied()
        .filter(|name| !table.has_column(name))
        .collect()
}

pub fn validate(table: &RecordTable) -> Result<()> {
    require_columns(table, &CANONICAL_COLUMNS)
}

/// Fails with [`Error::Schema`] listing whichever of `columns` the table lacks.
pub fn require_columns(table: &RecordTable, columns: &[&str]) -> Result<()> {
    let missing = columns
        .iter()
        .copied()
        .filter(|name| !table.has_column(name))
        .collect::<Vec<_>>();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::missing(&missing))
    }
}
