//! Legacy column names and their canonical replacements.

use std::borrow::Cow;

use log::{debug, warn};

use crate::{records::RecordTable, schema};

/// `(legacy, canonical)` header pairs recognised by [`harmonize`].
pub const SYNONYMS: [(&str, &str); 2] = [
    ("EmployeeID", schema::EMP_ID),
    ("YearsInCurrRole", schema::YEARS_IN_CURRENT_ROLE),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Legacy column renamed to the canonical name.
    Rename,
    /// Both names present; the canonical column wins and the legacy column
    /// is kept as extra data.
    CanonicalWins,
    /// Canonical column present, legacy absent.
    AlreadyCanonical,
    /// Neither name present.
    Absent,
}

/// Precedence rule for a single synonym pair.
pub fn resolve(has_legacy: bool, has_canonical: bool) -> Resolution {
    match (has_legacy, has_canonical) {
        (true, false) => Resolution::Rename,
        (true, true) => Resolution::CanonicalWins,
        (false, true) => Resolution::AlreadyCanonical,
        (false, false) => Resolution::Absent,
    }
}

/// Renames legacy headers in place and returns the pairs that were applied.
pub fn harmonize(table: &mut RecordTable) -> Vec<(&'static str, &'static str)> {
    let mut applied = Vec::new();
    for (legacy, canonical) in SYNONYMS {
        match resolve(table.has_column(legacy), table.has_column(canonical)) {
            Resolution::Rename => {
                table.rename_column(legacy, canonical);
                debug!("Renamed column '{legacy}' to '{canonical}'");
                applied.push((legacy, canonical));
            }
            Resolution::CanonicalWins => {
                warn!("Both '{legacy}' and '{canonical}' present; keeping '{canonical}'");
            }
            Resolution::AlreadyCanonical | Resolution::Absent => {}
        }
    }
    applied
}

/// Borrows `table` when no synonym applies, otherwise returns a renamed copy.
pub fn harmonized(table: &RecordTable) -> Cow<'_, RecordTable> {
    let needs_rename = SYNONYMS.iter().any(|(legacy, canonical)| {
        resolve(table.has_column(legacy), table.has_column(canonical)) == Resolution::Rename
    });
    if !needs_rename {
        return Cow::Borrowed(table);
    }
    let mut renamed = table.clone();
    harmonize(&mut renamed);
    Cow::Owned(renamed)
}
