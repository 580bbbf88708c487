mod common;

use common::{TestWorkspace, fixture_path};
use encoding_rs::WINDOWS_1252;
use workforce_stats::{
    Error, load_table,
    records::{LoadOptions, load_table_with},
};

#[test]
fn load_table_reads_staff_fixture() {
    let table = load_table(&fixture_path("staff.csv")).expect("load staff");
    assert_eq!(table.len(), 8);
    assert_eq!(table.headers().len(), 15);
    let departments: Vec<&str> = table.column("Department").expect("Department").collect();
    assert_eq!(departments[5], "Emergency, Trauma");
    let attrition: Vec<&str> = table.column("Attrition").expect("Attrition").collect();
    assert_eq!(attrition[4], " Yes ");
}

#[test]
fn missing_file_is_an_io_error() {
    let workspace = TestWorkspace::new();
    let path = workspace.path().join("absent.csv");
    match load_table(&path) {
        Err(Error::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn ragged_rows_are_malformed_csv() {
    let workspace = TestWorkspace::new();
    let path = workspace.write("ragged.csv", "a,b\n1,2\n3\n");
    assert!(matches!(load_table(&path), Err(Error::Csv { .. })));
}

#[test]
fn tsv_extension_switches_delimiter() {
    let workspace = TestWorkspace::new();
    let path = workspace.write("staff.tsv", "Department\tGender\nICU\tFemale\n");
    let table = load_table(&path).expect("load tsv");
    assert_eq!(table.headers(), ["Department", "Gender"]);
    assert_eq!(table.rows()[0], vec!["ICU", "Female"]);
}

#[test]
fn explicit_delimiter_overrides_extension() {
    let workspace = TestWorkspace::new();
    let path = workspace.write("staff.csv", "Department;Gender\n\"ICU; North\";Male\n");
    let options = LoadOptions {
        delimiter: Some(b';'),
        ..LoadOptions::default()
    };
    let table = load_table_with(&path, &options).expect("load semicolon");
    assert_eq!(table.rows()[0][0], "ICU; North");
}

#[test]
fn single_byte_encodings_decode_on_request() {
    let workspace = TestWorkspace::new();
    let path = workspace.path().join("latin.csv");
    std::fs::write(&path, b"Department\nPediatr\xeda\n").expect("write latin file");

    match load_table(&path) {
        Err(Error::Decode { row, .. }) => assert_eq!(row, 2),
        other => panic!("expected decode error, got {other:?}"),
    }

    let options = LoadOptions {
        encoding: WINDOWS_1252,
        ..LoadOptions::default()
    };
    let table = load_table_with(&path, &options).expect("load latin");
    assert_eq!(table.rows()[0][0], "Pediatría");
}

#[test]
fn utf16_mark_in_a_cell_is_a_decode_error() {
    let workspace = TestWorkspace::new();
    let path = workspace.path().join("marked.csv");
    std::fs::write(&path, b"Department,Gender\n\xff\xfeAB,F\n").expect("write marked file");

    match load_table(&path) {
        Err(Error::Decode { row, encoding, .. }) => {
            assert_eq!(row, 2);
            assert_eq!(encoding, "UTF-8");
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn utf8_bom_is_dropped_from_the_header() {
    let workspace = TestWorkspace::new();
    let path = workspace.write("bom.csv", "\u{feff}Department,Gender\nICU,F\n");
    let table = load_table(&path).expect("load bom file");
    assert_eq!(table.headers(), ["Department", "Gender"]);
    assert!(table.has_column("Department"));
    assert_eq!(table.rows()[0], vec!["ICU", "F"]);
}
