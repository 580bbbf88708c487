use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Row {row} in {path:?} is not valid {encoding} text")]
    Decode {
        path: PathBuf,
        row: usize,
        encoding: &'static str,
    },

    #[error("The following columns are missing: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("Column '{column}' expects numeric values but row {row} contains '{value}'")]
    TypeConversion {
        column: String,
        row: usize,
        value: String,
    },

    #[error("No data loaded; load a CSV file first")]
    NotLoaded,

    #[error("Unable to serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Unable to render {chart} chart: {message}")]
    Render { chart: String, message: String },
}

impl Error {
    pub(crate) fn missing(columns: &[&str]) -> Self {
        Error::Schema {
            missing: columns.iter().map(|c| c.to_string()).collect(),
        }
    }
}
