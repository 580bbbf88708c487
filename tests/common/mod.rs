#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};

pub const CANONICAL_HEADER: &str = "EmpID,Age,Gender,MaritalStatus,Education,Department,JobRole,HourlyRate,YearsAtCompany,YearsInCurrentRole,DistanceFromHome,WorkLifeBalance,YearsLastPromotion,YearsCurrManager,Attrition";

/// Returns the absolute path to a fixture under `tests/data`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// The staff fixture with the two legacy header names.
pub fn legacy_staff_csv() -> String {
    let contents = std::fs::read_to_string(fixture_path("staff.csv")).expect("read staff fixture");
    let mut lines = contents.lines();
    let header = lines
        .next()
        .expect("header")
        .replace("EmpID", "EmployeeID")
        .replace("YearsInCurrentRole", "YearsInCurrRole");
    std::iter::once(header)
        .chain(lines.map(str::to_string))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a fresh scratch directory for the current test case.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    /// Returns the root path for all files owned by this workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }
}
