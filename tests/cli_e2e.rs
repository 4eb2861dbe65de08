//! End-to-end CLI tests for numpack.
//!
//! Each test runs the real binary inside its own temporary directory, so the
//! default `output.<format>` artifact lands there.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

fn numpack_cmd(dir: &TempDir) -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_numpack"));
    let mut cmd = Command::from_std(cmd);
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn file_count(dir: &TempDir) -> usize {
    fs::read_dir(dir.path()).unwrap().count()
}

// ============================================================================
// Argument Input
// ============================================================================

mod argument_input {
    use super::*;

    #[test]
    fn test_text_output() {
        let dir = tempdir().unwrap();

        numpack_cmd(&dir)
            .args(["5,3,9,1", "text"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Numbers sorted and persisted in text format at output.text",
            ));

        let content = fs::read_to_string(dir.path().join("output.text")).unwrap();
        assert_eq!(content, "9,5,3,1");
    }

    #[test]
    fn test_json_output() {
        let dir = tempdir().unwrap();

        numpack_cmd(&dir)
            .args(["5,3,9,1", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("at output.json"));

        let content = fs::read_to_string(dir.path().join("output.json")).unwrap();
        assert_eq!(content, "[9,5,3,1]");
    }

    #[test]
    fn test_xml_output() {
        let dir = tempdir().unwrap();

        numpack_cmd(&dir)
            .args(["5,3,9,1", "xml"])
            .assert()
            .success();

        let content = fs::read_to_string(dir.path().join("output.xml")).unwrap();
        assert_eq!(
            content,
            "<Numbers><Number>9</Number><Number>5</Number><Number>3</Number><Number>1</Number></Numbers>"
        );
    }

    #[test]
    fn test_format_case_insensitive() {
        let dir = tempdir().unwrap();

        for name in ["JSON", "json", "Json"] {
            numpack_cmd(&dir)
                .args(["2,10,-1", name])
                .assert()
                .success()
                .stdout(predicate::str::contains(format!(
                    "persisted in {} format at output.json",
                    name
                )));

            let content = fs::read_to_string(dir.path().join("output.json")).unwrap();
            assert_eq!(content, "[10,2,-1]");
        }
        assert_eq!(file_count(&dir), 1);
    }

    #[test]
    fn test_negative_numbers() {
        let dir = tempdir().unwrap();

        numpack_cmd(&dir)
            .args(["-5,3,-9,0", "text"])
            .assert()
            .success();

        let content = fs::read_to_string(dir.path().join("output.text")).unwrap();
        assert_eq!(content, "3,0,-5,-9");
    }

    #[test]
    fn test_extra_arguments_ignored() {
        let dir = tempdir().unwrap();

        numpack_cmd(&dir)
            .args(["1,3,2", "text", "whatever", "else"])
            .assert()
            .success();

        let content = fs::read_to_string(dir.path().join("output.text")).unwrap();
        assert_eq!(content, "3,2,1");
        assert_eq!(file_count(&dir), 1);
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("output.text"), "old,contents,here,1,2,3").unwrap();

        numpack_cmd(&dir).args(["4,8", "text"]).assert().success();

        let content = fs::read_to_string(dir.path().join("output.text")).unwrap();
        assert_eq!(content, "8,4");
    }

    #[test]
    fn test_output_dir_flag() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("exports")).unwrap();

        numpack_cmd(&dir)
            .args(["--output-dir", "exports", "1,2", "xml"])
            .assert()
            .success();

        assert!(dir.path().join("exports").join("output.xml").exists());
        assert!(!dir.path().join("output.xml").exists());
    }
}

// ============================================================================
// Interactive Input
// ============================================================================

mod interactive_input {
    use super::*;

    #[test]
    fn test_prompt_and_line() {
        let dir = tempdir().unwrap();

        numpack_cmd(&dir)
            .write_stdin("5,3,9,1 json\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Enter numbers separated by commas:"))
            .stdout(predicate::str::contains("at output.json"));

        let content = fs::read_to_string(dir.path().join("output.json")).unwrap();
        assert_eq!(content, "[9,5,3,1]");
    }

    #[test]
    fn test_single_argument_prompts() {
        let dir = tempdir().unwrap();

        numpack_cmd(&dir)
            .arg("5,3,9,1")
            .write_stdin("7,1 text\n")
            .assert()
            .success();

        let content = fs::read_to_string(dir.path().join("output.text")).unwrap();
        assert_eq!(content, "7,1");
    }

    #[test]
    fn test_single_argument_usage() {
        let dir = tempdir().unwrap();

        numpack_cmd(&dir)
            .arg("5,3,9,1")
            .write_stdin("5,3,9,1\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage: numpack <numbers> <format>"));

        assert_eq!(file_count(&dir), 0);
    }

    #[test]
    fn test_empty_stdin_usage() {
        let dir = tempdir().unwrap();

        numpack_cmd(&dir)
            .write_stdin("")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));

        assert_eq!(file_count(&dir), 0);
    }

    #[test]
    fn test_spaces_after_commas_fail() {
        let dir = tempdir().unwrap();

        numpack_cmd(&dir)
            .write_stdin("5, 3, 9 json\n")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid number"));

        assert_eq!(file_count(&dir), 0);
    }
}

// ============================================================================
// Error Handling
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_invalid_number() {
        let dir = tempdir().unwrap();

        numpack_cmd(&dir)
            .args(["5,abc,1", "text"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"))
            .stderr(predicate::str::contains("'abc'"));

        assert_eq!(file_count(&dir), 0);
    }

    #[test]
    fn test_unsupported_format() {
        let dir = tempdir().unwrap();

        numpack_cmd(&dir)
            .args(["5,3,9,1", "yaml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unsupported format: 'yaml'"));

        assert_eq!(file_count(&dir), 0);
    }

    #[test]
    fn test_empty_format() {
        let dir = tempdir().unwrap();

        numpack_cmd(&dir)
            .args(["5,3", ""])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unsupported format"));

        assert_eq!(file_count(&dir), 0);
    }

    #[test]
    fn test_missing_output_dir() {
        let dir = tempdir().unwrap();

        numpack_cmd(&dir)
            .args(["--output-dir", "nope", "1", "text"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("IO error"));
    }

    #[test]
    fn test_stdout_clean_on_failure() {
        let dir = tempdir().unwrap();

        numpack_cmd(&dir)
            .args(["1,2", "csv"])
            .assert()
            .failure()
            .stdout(predicate::str::is_empty());
    }
}

// ============================================================================
// Flags
// ============================================================================

mod flags {
    use super::*;

    #[test]
    fn test_help() {
        let dir = tempdir().unwrap();

        numpack_cmd(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--output-dir"))
            .stdout(predicate::str::contains("EXAMPLES"));
    }

    #[test]
    fn test_version() {
        let dir = tempdir().unwrap();

        numpack_cmd(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_verbose_logs_to_stderr() {
        let dir = tempdir().unwrap();

        numpack_cmd(&dir)
            .args(["-v", "3,1,2", "text"])
            .assert()
            .success()
            .stderr(predicate::str::contains("persisted numbers"))
            .stdout(predicate::str::contains("persisted in text format"));
    }
}
