//! Golden tests for wordcount
//!
//! These tests verify that output files match the expected golden files
//! byte for byte, so key order, indentation and counting rules stay stable.

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn text(name: &str) -> PathBuf {
    fixtures_dir().join("texts").join(name)
}

fn expected(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join("expected").join(name)).expect("golden file")
}

/// Create a command for running the wordcount binary
fn wordcount_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("wordcount"));
    cmd.env_remove("WORDCOUNT_OUTPUT_DIR").arg("--no-color");
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_record_case_insensitive() {
        let temp = tempdir().unwrap();
        wordcount_cmd()
            .arg("--silent")
            .arg("--path")
            .arg(temp.path())
            .arg(text("pride.txt"))
            .arg(text("contractions.txt"))
            .assert()
            .success();

        assert_eq!(
            fs::read_to_string(temp.path().join("pride_counts.json")).unwrap(),
            expected("pride_counts.json")
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("contractions_counts.json")).unwrap(),
            expected("contractions_counts.json")
        );
    }

    #[test]
    fn golden_record_case_sensitive() {
        let temp = tempdir().unwrap();
        wordcount_cmd()
            .arg("--silent")
            .arg("--case-sensitive")
            .arg("--path")
            .arg(temp.path())
            .arg(text("pride.txt"))
            .arg(text("contractions.txt"))
            .assert()
            .success();

        assert_eq!(
            fs::read_to_string(temp.path().join("pride_counts.json")).unwrap(),
            expected("pride_cs_counts.json")
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("contractions_counts.json")).unwrap(),
            expected("contractions_cs_counts.json")
        );
    }

    #[test]
    fn golden_status_block() {
        let temp = tempdir().unwrap();
        let assert = wordcount_cmd()
            .arg("--path")
            .arg(temp.path())
            .arg(text("pride.txt"))
            .assert()
            .success();

        let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
        assert!(stdout.starts_with("\nCompleted 1 of 1\n"));
        assert!(stdout.contains("  Lines:  14\n"));
        assert!(stdout.contains("  Words:  125\n"));
        assert!(stdout.contains("  Unique: 89\n"));
        assert!(stdout.contains("pride_counts.json"));
        assert!(stdout.contains("1 Completed. 0 Failed. 1 Total. Took: "));
    }

    #[test]
    fn golden_top_words_flat() {
        let temp = tempdir().unwrap();
        wordcount_cmd()
            .arg("--silent")
            .args(["--top", "3", "--format", "flat", "--compact"])
            .arg("--path")
            .arg(temp.path())
            .arg(text("pride.txt"))
            .assert()
            .success();

        assert_eq!(
            fs::read_to_string(temp.path().join("pride_counts.json")).unwrap(),
            r#"{"a":6,"is":5,"of":6}"#
        );
    }

    #[test]
    fn golden_trailing_word_without_newline() {
        let temp = tempdir().unwrap();
        wordcount_cmd()
            .arg("--silent")
            .args(["--format", "flat", "--compact"])
            .arg("--path")
            .arg(temp.path())
            .arg(text("contractions.txt"))
            .assert()
            .success();

        let written = fs::read_to_string(temp.path().join("contractions_counts.json")).unwrap();
        assert!(written.contains(r#""words":1"#));
    }
}
