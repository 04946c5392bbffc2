//! End-to-end tests for the CLI command runner.
//!
//! Vector files are written to a temporary directory and fed back
//! through `parse_args` + `run`, the same path `main` takes.

use std::fs;
use std::path::{Path, PathBuf};

use holo_cli::{parse_args, run, USAGE};
use holo_core::{HoloError, HoloVector};

fn invoke(args: &[&str]) -> Result<String, HoloError> {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    run(&parse_args(&args)?)
}

fn encode_to(dir: &Path, label: &str, dim: &str) -> PathBuf {
    let out = invoke(&["encode", "--label", label, "--dim", dim]).unwrap();
    let path = dir.join(format!("{label}.json"));
    fs::write(&path, out).unwrap();
    path
}

fn path_str(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn help_prints_usage() {
    assert_eq!(invoke(&["--help"]).unwrap(), USAGE);
}

#[test]
fn bind_then_unbind_recovers_filler() {
    let dir = tempfile::tempdir().unwrap();
    let agent = encode_to(dir.path(), "agent", "512");
    let cat = encode_to(dir.path(), "cat", "512");

    let bound = invoke(&["bind", path_str(&agent), path_str(&cat)]).unwrap();
    let bound_path = dir.path().join("bound.json");
    fs::write(&bound_path, &bound).unwrap();
    assert_eq!(
        HoloVector::from_json(&bound).unwrap().semantic_binding,
        "bind(agent,cat)"
    );

    let recovered = invoke(&["unbind", path_str(&bound_path), path_str(&agent)]).unwrap();
    let recovered_path = dir.path().join("recovered.json");
    fs::write(&recovered_path, recovered).unwrap();

    let out = invoke(&["similarity", path_str(&recovered_path), path_str(&cat)]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let similarity = value["similarity"].as_f64().unwrap();
    assert!(similarity > 0.9, "similarity {similarity}");
}

#[test]
fn superpose_infers_dimension_from_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let a = encode_to(dir.path(), "a", "64");
    let b = encode_to(dir.path(), "b", "64");
    let out = invoke(&["superpose", path_str(&a), path_str(&b)]).unwrap();
    let v = HoloVector::from_json(&out).unwrap();
    assert_eq!(v.len(), 64);
    assert_eq!(v.semantic_binding, "superpose(a,b)");
}

#[test]
fn mismatched_inputs_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let a = encode_to(dir.path(), "a", "64");
    let b = encode_to(dir.path(), "b", "32");
    let err = invoke(&["bind", path_str(&a), path_str(&b)]).unwrap_err();
    assert_eq!(
        err,
        HoloError::DimensionMismatch {
            expected: 64,
            actual: 32
        }
    );
}

#[test]
fn bind_without_inputs_is_empty_operand_error() {
    let err = invoke(&["bind", "--dim", "8"]).unwrap_err();
    assert!(matches!(err, HoloError::EmptyOperandSet { .. }));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let err = invoke(&["superpose", path_str(&missing)]).unwrap_err();
    assert!(matches!(err, HoloError::Io { .. }));
}

#[test]
fn config_file_sets_backend_and_flags_override() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("engine.json");
    fs::write(&config, r#"{"dimension": 16, "backend": "naive"}"#).unwrap();

    let out = invoke(&["encode", "--label", "x", "--config", path_str(&config)]).unwrap();
    assert_eq!(HoloVector::from_json(&out).unwrap().len(), 16);

    let out = invoke(&[
        "encode",
        "--label",
        "x",
        "--config",
        path_str(&config),
        "--dim",
        "8",
    ])
    .unwrap();
    assert_eq!(HoloVector::from_json(&out).unwrap().len(), 8);
}
