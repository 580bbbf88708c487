//! Per-run state: the loaded table and the most recent summary.

use std::path::Path;

use log::{debug, info};

use crate::{
    chart::{self, ChartData, ChartKind},
    error::{Error, Result},
    harmonize,
    records::{self, LoadOptions, RecordTable},
    report,
    summary::{self, Summary},
};

#[derive(Debug, Default)]
pub struct Session {
    options: LoadOptions,
    table: Option<RecordTable>,
    summary: Option<Summary>,
}

impl Session {
    pub fn new(options: LoadOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Loads `path`, replacing the current table and discarding the summary
    /// computed from it. A failed load leaves the session unchanged.
    pub fn load(&mut self, path: &Path) -> Result<usize> {
        let table = records::load_table_with(path, &self.options)?;
        let rows = table.len();
        self.set_table(table);
        Ok(rows)
    }

    pub fn set_table(&mut self, table: RecordTable) {
        self.table = Some(table);
        self.summary = None;
    }

    pub fn table(&self) -> Option<&RecordTable> {
        self.table.as_ref()
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    /// Harmonizes, validates, and summarizes the current table. On success
    /// the harmonized table replaces the loaded one; on failure the previous
    /// summary, if any, is kept.
    pub fn process(&mut self) -> Result<&Summary> {
        let mut table = self.table.clone().ok_or(Error::NotLoaded)?;
        let renamed = harmonize::harmonize(&mut table);
        debug!("Harmonized {} column(s)", renamed.len());
        let summary = summary::summarize(&table)?;
        info!("Processed summary successfully");
        self.table = Some(table);
        Ok(&*self.summary.insert(summary))
    }

    /// Headline metrics, computing the summary first when none exists.
    pub fn dashboard(&mut self) -> Result<Vec<(String, String)>> {
        if self.summary.is_none() {
            self.process()?;
        }
        let summary = self.summary.as_ref().ok_or(Error::NotLoaded)?;
        report::dashboard_items(summary)
    }

    pub fn chart(&self, kind: ChartKind) -> Result<ChartData> {
        let table = self.table.as_ref().ok_or(Error::NotLoaded)?;
        match kind {
            ChartKind::Pie => chart::department_pie(table),
            ChartKind::Bar => chart::marital_bar(table),
        }
    }
}
