//! In-memory record table loaded from a CSV file.
//!
//! Cells are kept as the text that appeared in the file. Numeric columns are
//! parsed later, when a summary is requested, so loading never fails on the
//! content of an individual cell.

use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use log::{debug, info};

use crate::{
    error::{Error, Result},
    io_utils,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RecordTable {
    /// Builds a table from a header row and data rows. Rows shorter than the
    /// header are padded with empty cells; longer rows are truncated.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cells of the named column in row order.
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str> + use<'a>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row[idx].as_str()))
    }

    /// Renames the first column called `from`. Returns `false` when no such
    /// column exists.
    pub(crate) fn rename_column(&mut self, from: &str, to: &str) -> bool {
        match self.column_index(from) {
            Some(idx) => {
                self.headers[idx] = to.to_string();
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    pub delimiter: Option<u8>,
    pub encoding: &'static Encoding,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: None,
            encoding: UTF_8,
        }
    }
}

/// Reads a headed CSV file into memory using UTF-8 and the delimiter implied
/// by the file extension.
pub fn load_table(path: &Path) -> Result<RecordTable> {
    load_table_with(path, &LoadOptions::default())
}

pub fn load_table_with(path: &Path, options: &LoadOptions) -> Result<RecordTable> {
    let delimiter = io_utils::resolve_input_delimiter(path, options.delimiter);
    debug!(
        "Reading {:?} with delimiter '{}' and encoding {}",
        path,
        io_utils::printable_delimiter(delimiter),
        options.encoding.name()
    );
    let mut reader = io_utils::open_csv_reader_from_path(path, delimiter)?;
    let csv_error = |source: csv::Error| csv_to_error(path, source);

    let header_record = reader.byte_headers().map_err(csv_error)?.clone();
    let mut headers = io_utils::decode_record(&header_record, options.encoding).ok_or_else(|| {
        Error::Decode {
            path: path.to_path_buf(),
            row: 1,
            encoding: options.encoding.name(),
        }
    })?;
    io_utils::strip_header_bom(&mut headers);

    let mut rows = Vec::new();
    for (row_idx, record) in reader.byte_records().enumerate() {
        let record = record.map_err(csv_error)?;
        let decoded =
            io_utils::decode_record(&record, options.encoding).ok_or_else(|| Error::Decode {
                path: path.to_path_buf(),
                row: row_idx + 2,
                encoding: options.encoding.name(),
            })?;
        rows.push(decoded);
    }

    info!("Loaded data: {} record(s) from {:?}", rows.len(), path);
    Ok(RecordTable { headers, rows })
}

fn csv_to_error(path: &Path, source: csv::Error) -> Error {
    let path = path.to_path_buf();
    if source.is_io_error() {
        Error::Io {
            path,
            source: source.into(),
        }
    } else {
        Error::Csv { path, source }
    }
}
