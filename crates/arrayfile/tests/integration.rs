use arrayfile::{exit_code, run_with_args, ExitStatus};
use arrayfile_codec::{decode, decode_with, IntegerArray, Layout};
use std::{ffi::OsString, fs, path::Path};

fn temp_dir() -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix("arrayfile_cli")
        .tempdir()
        .unwrap()
}

fn args(path: &Path, rest: &[&str]) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["arrayfile".into(), "--path".into(), path.into()];
    args.extend(rest.iter().map(OsString::from));
    args
}

/// Without a subcommand the demonstration roundtrip of nine elements is performed.
#[test]
fn default_roundtrip() {
    let dir = temp_dir();
    let path = dir.path().join("test.txt");

    let result = run_with_args(args(&path, &[]));
    assert_eq!(result.as_ref().unwrap(), &ExitStatus::Success);
    assert_eq!(exit_code(&result), 0);

    assert_eq!(fs::metadata(&path).unwrap().len(), 76);
    assert_eq!(decode(&path).unwrap(), IntegerArray::ascending(9));
}

#[test]
fn roundtrip_with_length_and_layout() {
    let dir = temp_dir();
    let path = dir.path().join("padded.bin");

    let result = run_with_args(args(
        &path,
        &["--layout", "padded", "roundtrip", "--length", "3"],
    ));
    assert_eq!(result.unwrap(), ExitStatus::Success);

    assert_eq!(fs::metadata(&path).unwrap().len(), 8 + 8 * 3);
    assert_eq!(
        decode_with(&path, Layout::PADDED).unwrap(),
        IntegerArray::ascending(3)
    );
}

#[test]
fn write_then_dump() {
    let dir = temp_dir();
    let path = dir.path().join("values.bin");

    let result = run_with_args(args(&path, &["write", "5", "-12", "0"]));
    assert_eq!(result.unwrap(), ExitStatus::Success);
    assert_eq!(decode(&path).unwrap().as_slice(), &[5, -12, 0]);

    let result = run_with_args(args(&path, &["dump"]));
    assert_eq!(result.unwrap(), ExitStatus::Success);
}

#[test]
fn dump_missing_file() {
    let dir = temp_dir();
    let path = dir.path().join("missing.bin");

    let result = run_with_args(args(&path, &["dump"]));
    assert_eq!(exit_code(&result), 1);

    let message = format!("{:#}", result.unwrap_err());
    let prefix = format!("could not open '{}' for reading: ", path.display());
    assert!(message.starts_with(&prefix), "{message}");
    assert!(!message[prefix.len()..].contains(": "), "{message}");
}

#[test]
fn dump_truncated_file() {
    let dir = temp_dir();
    let path = dir.path().join("truncated.bin");

    run_with_args(args(&path, &["write", "1", "2", "3"])).unwrap();
    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..bytes.len() - 1]).unwrap();

    let result = run_with_args(args(&path, &["dump"]));
    assert_eq!(exit_code(&result), 3);

    let message = format!("{:#}", result.unwrap_err());
    let prefix = format!(
        "array file '{}': failed to read the element 2: ",
        path.display()
    );
    assert!(message.starts_with(&prefix), "{message}");
    assert!(!message[prefix.len()..].contains(": "), "{message}");
}

#[test]
fn dump_padded_file_with_compact_layout() {
    let dir = temp_dir();
    let path = dir.path().join("padded.bin");

    run_with_args(args(&path, &["--layout", "padded", "write", "1", "2"])).unwrap();

    let result = run_with_args(args(&path, &["dump"]));
    assert_eq!(exit_code(&result), 3);

    let result = run_with_args(args(&path, &["--layout", "padded", "dump"]));
    assert_eq!(result.unwrap(), ExitStatus::Success);
}

#[test]
fn exit_codes_of_statuses() {
    assert_eq!(exit_code(&Ok(ExitStatus::Success)), 0);
    assert_eq!(exit_code(&Ok(ExitStatus::Error)), 1);
    assert_eq!(exit_code(&Err(anyhow::anyhow!("unrelated failure"))), 1);
}
