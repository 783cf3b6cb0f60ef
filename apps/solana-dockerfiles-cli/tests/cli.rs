use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

const USAGE: &str = "Usage: solana-dockerfiles <csv_file_path>";

fn workspace(csv: &str) -> TempDir {
    let dir = tempdir().expect("tempdir should be created");
    fs::write(dir.path().join("versions.csv"), csv).expect("fixture write should succeed");
    dir
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_solana-dockerfiles"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("command should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_generates_dockerfile_per_row() {
    let dir = workspace(
        "version,dockerfile_path,base_image,additional_deps\n\
         1.14.23,ignored,ubuntu:22.04,\n\
         1.16.0,x,,\"RUN apt-get install -y jq\"\n",
    );

    let output = run_in(dir.path(), &["versions.csv"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let first = fs::read_to_string(dir.path().join("docker/v1.14.23.Dockerfile"))
        .expect("first Dockerfile should exist");
    assert!(first.starts_with("FROM ubuntu:22.04\n"));
    assert_eq!(first.matches("v1.14.23").count(), 2);

    let second = fs::read_to_string(dir.path().join("docker/v1.16.0.Dockerfile"))
        .expect("second Dockerfile should exist");
    assert!(second.starts_with("FROM ubuntu:20.04\n"));
    assert!(second.contains("\nRUN apt-get install -y jq\n"));

    let log = stderr(&output);
    assert!(log.contains("Loaded 2 versions from CSV"), "stderr: {log}");
    assert!(log.contains("Generated Dockerfile: docker/v1.14.23.Dockerfile"));
}

#[test]
fn test_second_run_is_byte_identical() {
    let dir = workspace("version,dockerfile_path\n1.18.2,x\n");
    let path = dir.path().join("docker/v1.18.2.Dockerfile");

    assert!(run_in(dir.path(), &["versions.csv"]).status.success());
    let first = fs::read(&path).expect("Dockerfile should exist");

    assert!(run_in(dir.path(), &["versions.csv"]).status.success());
    let second = fs::read(&path).expect("Dockerfile should exist");

    assert_eq!(first, second);
}

#[test]
fn test_invalid_version_writes_nothing() {
    let dir = workspace("version,dockerfile_path\n1.16.0,a\n1.14,x\n");

    let output = run_in(dir.path(), &["versions.csv"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("docker").exists());
    let log = stderr(&output);
    assert!(log.contains("Row 2: Invalid version format '1.14'"), "stderr: {log}");
    assert!(log.contains("CSV validation failed"));
}

#[test]
fn test_missing_required_field_fails() {
    let dir = workspace("version,base_image\n1.16.0,ubuntu:22.04\n");

    let output = run_in(dir.path(), &["versions.csv"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Row 1: Missing required field 'dockerfile_path'"));
    assert!(!dir.path().join("docker").exists());
}

#[test]
fn test_missing_input_file_fails_without_output() {
    let dir = tempdir().expect("tempdir should be created");

    let output = run_in(dir.path(), &["missing.csv"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("CSV file not found: missing.csv"));
    assert!(!dir.path().join("docker").exists());
}

#[test]
fn test_unequal_row_length_fails() {
    let dir = workspace("version,dockerfile_path,base_image\n1.16.0,x\n");

    let output = run_in(dir.path(), &["versions.csv"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error processing CSV"));
    assert!(!dir.path().join("docker").exists());
}

#[test]
fn test_wrong_argument_count_prints_usage() {
    let dir = tempdir().expect("tempdir should be created");

    for args in [&[][..], &["a.csv", "b.csv"][..]] {
        let output = run_in(dir.path(), args);
        assert_eq!(output.status.code(), Some(1));
        assert_eq!(stdout(&output).trim_end(), USAGE);
    }
}

#[test]
fn test_output_dir_and_base_image_options() {
    let dir = workspace("version,dockerfile_path\n1.17.3,x\n");

    let output = run_in(
        dir.path(),
        &[
            "versions.csv",
            "--output-dir",
            "build/images",
            "--base-image",
            "debian:bookworm",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let content = fs::read_to_string(dir.path().join("build/images/v1.17.3.Dockerfile"))
        .expect("Dockerfile should exist");
    assert!(content.starts_with("FROM debian:bookworm\n"));
    assert!(!dir.path().join("docker").exists());
}

#[test]
fn test_help_exits_zero() {
    let dir = tempdir().expect("tempdir should be created");
    let output = run_in(dir.path(), &["--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("csv_file_path") || stdout(&output).contains("CSV_FILE_PATH"));
}
