//! JSON export of fixture runs

use ywmarkup::interchange::{ExportFormat, InterchangeError, Json, export_to_path};

use crate::helpers::source_fixtures::extract_fixture;

#[test]
fn test_export_fixture_to_json_file() {
    let extraction = extract_fixture("clean_data.py");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clean_data.json");

    export_to_path(&extraction, &path).unwrap();

    let written: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    let channels = written["model"]["channels"].as_array().unwrap();
    assert_eq!(channels.len(), 1);
    assert_eq!(
        written["model"]["programs"].as_array().map(Vec::len),
        Some(extraction.model().programs().len())
    );
}

#[test]
fn test_export_rejects_unknown_extension() {
    let extraction = extract_fixture("clean_data.py");
    let dir = tempfile::tempdir().unwrap();
    let err = export_to_path(&extraction, &dir.path().join("out.xmi")).unwrap_err();
    assert!(matches!(err, InterchangeError::Unsupported(_)));
}

#[test]
fn test_compact_and_pretty_agree() {
    let extraction = extract_fixture("create_demo.py");
    let compact: serde_json::Value =
        serde_json::from_slice(&Json::default().write(&extraction).unwrap()).unwrap();
    let pretty: serde_json::Value =
        serde_json::from_slice(&Json::pretty().write(&extraction).unwrap()).unwrap();
    assert_eq!(compact, pretty);
    assert_eq!(Json::default().extensions(), ["json"]);
}
