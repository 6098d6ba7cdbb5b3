#![allow(clippy::unwrap_used, clippy::expect_used)]

use apisurf_core::model::ObjectKind;
use apisurf_core::ExErrorKind;
use apisurf_store::load_program;
use serde_json::json;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_program_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("model.json");
    let model = json!({
        "packages": [{
            "path": "example.com/geo",
            "name": "geo",
            "objects": [
                {"name": "Origin", "decl": {"kind": "var", "ty": {"type": "named", "package": {"path": "example.com/geo", "name": "geo"}, "name": "Point"}}},
                {"name": "New", "decl": {"kind": "func", "signature": {"results": [{"type": "basic", "kind": "int", "name": "int"}]}}}
            ]
        }]
    });
    fs::write(&path, serde_json::to_string_pretty(&model).unwrap()).unwrap();

    let program = load_program(&path).unwrap();
    let pkg = &program.packages[0];
    assert_eq!(pkg.path, "example.com/geo");
    assert!(matches!(pkg.objects[1].decl, ObjectKind::Func { .. }));
}

#[test]
fn test_missing_model_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = load_program(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Io);
}

#[test]
fn test_malformed_model_is_invalid_model() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("model.json");
    fs::write(&path, "{\"packages\": [").unwrap();
    let err = load_program(&path).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidModel);
}
