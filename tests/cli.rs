//! Exit-code and output contract of the vtk2ascii binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::tempdir;
use vtkio::Vtk;

fn vtk2ascii() -> Command {
    Command::new(env!("CARGO_BIN_EXE_vtk2ascii"))
}

const TUBE: &str = "\
# vtk DataFile Version 2.0
tube centerline
ASCII
DATASET POLYDATA
POINTS 4 float
0.0 0.0 0.0
1.0 0.5 0.0
2.0 1.5 0.25
3.0 3.0 0.75
LINES 1 5
4 0 1 2 3
POINT_DATA 4
SCALARS radius float 1
LOOKUP_TABLE default
1.0 1.25 1.5 2.0
";

fn binary_fixture(dir: &Path) -> PathBuf {
    let vtk = Vtk::parse_legacy_be(TUBE.as_bytes()).expect("Failed to parse sample dataset");
    let path = dir.join("tube.vtk");
    vtk.export_be(&path).expect("Failed to write binary fixture");
    path
}

#[cfg(not(windows))]
#[test]
fn test_no_arguments_prints_usage() {
    let out = vtk2ascii().output().expect("Failed to run binary");
    assert!(!out.status.success(), "Missing arguments should exit non-zero");

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage:"), "Expected usage on stderr, got: {}", stderr);
}

#[cfg(not(windows))]
#[test]
fn test_one_argument_prints_usage() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = binary_fixture(dir.path());

    let out = vtk2ascii().arg(&input).output().expect("Failed to run binary");
    assert!(!out.status.success(), "One argument should exit non-zero");

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage:"), "Expected usage on stderr, got: {}", stderr);
}

#[test]
fn test_missing_input_fails_without_output() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("tube_ascii.vtk");

    let out = vtk2ascii()
        .arg(dir.path().join("no_such.vtk"))
        .arg(&output)
        .output()
        .expect("Failed to run binary");
    assert!(!out.status.success(), "Missing input should exit non-zero");

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no_such.vtk"), "Error should name the input, got: {}", stderr);
    assert!(!output.exists(), "No output file should be created");
}

#[test]
fn test_unwritable_output_fails_after_read() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = binary_fixture(dir.path());
    let output = dir.path().join("missing_dir").join("tube_ascii.vtk");

    let out = vtk2ascii().arg(&input).arg(&output).output().expect("Failed to run binary");
    assert!(!out.status.success(), "Unwritable output should exit non-zero");

    // The read phase completed before the failure
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Reading:"), "Read should start before the write fails");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("write"), "Expected a write-class message, got: {}", stderr);
}

#[test]
fn test_successful_conversion() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = binary_fixture(dir.path());
    let output = dir.path().join("tube_ascii.vtk");

    let out = vtk2ascii().arg(&input).arg(&output).output().expect("Failed to run binary");
    assert!(out.status.success(), "Conversion should exit 0");

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Reading:"));
    assert!(stdout.contains("Writing ASCII VTK:"));
    assert!(stdout.contains("Conversion finished successfully."));

    let text = fs::read_to_string(&output).expect("Output should be valid UTF-8 text");
    assert!(text.starts_with("# vtk"), "Output should begin with the legacy VTK header");
    assert!(text.contains("ASCII"), "Output should declare the ASCII encoding");
}

#[test]
fn test_extra_arguments_are_ignored() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = binary_fixture(dir.path());
    let output = dir.path().join("tube_ascii.vtk");

    let out = vtk2ascii()
        .arg(&input)
        .arg(&output)
        .arg(dir.path().join("ignored.vtk"))
        .output()
        .expect("Failed to run binary");
    assert!(out.status.success(), "Extra positionals should not fail the run");
    assert!(output.exists());
}

#[test]
fn test_rerun_overwrites_same_output() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = binary_fixture(dir.path());
    let output = dir.path().join("tube_ascii.vtk");

    let first_run = vtk2ascii().arg(&input).arg(&output).output().expect("Failed to run binary");
    assert!(first_run.status.success());
    let first = fs::read(&output).expect("Failed to read first output");

    let second_run = vtk2ascii().arg(&input).arg(&output).output().expect("Failed to run binary");
    assert!(second_run.status.success());
    let second = fs::read(&output).expect("Failed to read second output");

    assert_eq!(first, second, "Re-running should overwrite with identical content");
}

#[test]
fn test_help_flag() {
    let out = vtk2ascii().arg("--help").output().expect("Failed to run binary");
    assert!(out.status.success(), "--help should exit 0");

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("USAGE:"));
    assert!(stdout.contains("vtk2ascii"));
    assert!(stdout.contains("built"), "Help should carry the build date");
}
