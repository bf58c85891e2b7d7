use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn write_pair(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let left = dir.join("en.txt");
    let right = dir.join("fr.txt");
    fs::write(&left, "Hello\nWorld\n").unwrap();
    fs::write(&right, "Bonjour\nMonde\n").unwrap();
    (left, right)
}

fn tandem(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tandem").unwrap();
    cmd.env("TANDEM_CONFIG_DIR", config_dir);
    cmd
}

#[test]
fn show_renders_both_columns() {
    let temp_dir = tempfile::tempdir().unwrap();
    let (left, right) = write_pair(temp_dir.path());

    tandem(temp_dir.path())
        .arg("show")
        .arg(&left)
        .arg(&right)
        .arg("--left-lang")
        .arg("English")
        .assert()
        .success()
        .stdout(predicates::str::contains("English"))
        .stdout(predicates::str::contains("Hello"))
        .stdout(predicates::str::contains("Bonjour"))
        .stdout(predicates::str::contains("Monde"));
}

#[test]
fn show_window_pages_rows() {
    let temp_dir = tempfile::tempdir().unwrap();
    let left = temp_dir.path().join("l.txt");
    let right = temp_dir.path().join("r.txt");
    let lines: Vec<String> = (1..=20).map(|i| format!("line {}", i)).collect();
    fs::write(&left, lines.join("\n")).unwrap();
    fs::write(&right, lines.join("\n")).unwrap();

    tandem(temp_dir.path())
        .arg("show")
        .arg(&left)
        .arg(&right)
        .arg("--from")
        .arg("4")
        .arg("--count")
        .arg("2")
        .assert()
        .success()
        .stdout(predicates::str::contains("line 5"))
        .stdout(predicates::str::contains("line 6"))
        .stdout(predicates::str::contains("line 7").not());
}

#[test]
fn stats_counts_lines_and_words() {
    let temp_dir = tempfile::tempdir().unwrap();
    let left = temp_dir.path().join("l.txt");
    let right = temp_dir.path().join("r.txt");
    fs::write(&left, "a b\nc\n").unwrap();
    fs::write(&right, "d\n").unwrap();

    tandem(temp_dir.path())
        .arg("stats")
        .arg(&left)
        .arg(&right)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicates::str::contains("\"line_count\": 2"))
        .stdout(predicates::str::contains("\"word_count\": 3"))
        .stdout(predicates::str::contains("\"word_count\": 1"));
}

#[test]
fn search_finds_case_insensitive_matches() {
    let temp_dir = tempfile::tempdir().unwrap();
    let (left, right) = write_pair(temp_dir.path());

    tandem(temp_dir.path())
        .arg("search")
        .arg("mond")
        .arg(&left)
        .arg(&right)
        .assert()
        .success()
        .stdout(predicates::str::contains("right"))
        .stdout(predicates::str::contains("Monde"));
}

#[test]
fn search_miss_reports_no_matches_and_succeeds() {
    let temp_dir = tempfile::tempdir().unwrap();
    let (left, right) = write_pair(temp_dir.path());

    tandem(temp_dir.path())
        .arg("search")
        .arg("xyzzy")
        .arg(&left)
        .arg(&right)
        .assert()
        .success()
        .stdout(predicates::str::contains("No matches"));
}

#[test]
fn delete_removes_row_from_both_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    let (left, right) = write_pair(temp_dir.path());

    tandem(temp_dir.path())
        .arg("delete")
        .arg("1")
        .arg(&left)
        .arg(&right)
        .assert()
        .success()
        .stdout(predicates::str::contains("Saved"));

    assert_eq!(fs::read_to_string(&left).unwrap(), "Hello");
    assert_eq!(fs::read_to_string(&right).unwrap(), "Bonjour");
}

#[test]
fn move_swaps_rows_in_lockstep() {
    let temp_dir = tempfile::tempdir().unwrap();
    let (left, right) = write_pair(temp_dir.path());

    tandem(temp_dir.path())
        .arg("move")
        .arg("0")
        .arg("1")
        .arg(&left)
        .arg(&right)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&left).unwrap(), "World\nHello");
    assert_eq!(fs::read_to_string(&right).unwrap(), "Monde\nBonjour");
}

#[test]
fn edit_changes_one_side_only() {
    let temp_dir = tempfile::tempdir().unwrap();
    let (left, right) = write_pair(temp_dir.path());

    tandem(temp_dir.path())
        .arg("edit")
        .arg("0")
        .arg("left")
        .arg("Hi")
        .arg(&left)
        .arg(&right)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&left).unwrap(), "Hi\nWorld");
    assert_eq!(fs::read_to_string(&right).unwrap(), "Bonjour\nMonde");
}

#[test]
fn insert_pads_both_files_and_mismatched_input_is_equalized() {
    let temp_dir = tempfile::tempdir().unwrap();
    let left = temp_dir.path().join("l.txt");
    let right = temp_dir.path().join("r.txt");
    fs::write(&left, "one\ntwo\nthree\n").unwrap();
    fs::write(&right, "uno\n").unwrap();

    tandem(temp_dir.path())
        .arg("insert")
        .arg("0")
        .arg(&left)
        .arg(&right)
        .assert()
        .success();

    // shorter file was padded to 3 rows at load, then one row inserted
    assert_eq!(fs::read_to_string(&left).unwrap(), "\none\ntwo\nthree");
    assert_eq!(fs::read_to_string(&right).unwrap(), "\nuno\n\n");
}

#[test]
fn delete_out_of_range_fails_with_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let (left, right) = write_pair(temp_dir.path());

    tandem(temp_dir.path())
        .arg("delete")
        .arg("9")
        .arg(&left)
        .arg(&right)
        .assert()
        .failure()
        .stderr(predicates::str::contains("out of range"));
}

#[test]
fn copy_writes_single_column_to_new_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    let (left, right) = write_pair(temp_dir.path());
    let out = temp_dir.path().join("export.txt");

    tandem(temp_dir.path())
        .arg("copy")
        .arg("right")
        .arg(&out)
        .arg(&left)
        .arg(&right)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&out).unwrap(), "Bonjour\nMonde");
    // source files untouched
    assert_eq!(fs::read_to_string(&left).unwrap(), "Hello\nWorld\n");
}

#[test]
fn missing_file_reports_io_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let (left, _) = write_pair(temp_dir.path());

    tandem(temp_dir.path())
        .arg("stats")
        .arg(&left)
        .arg(temp_dir.path().join("absent.txt"))
        .assert()
        .failure()
        .stderr(predicates::str::contains("Error:"));
}

#[test]
fn config_set_then_get_round_trips() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_dir = temp_dir.path().join("config");

    tandem(&config_dir)
        .arg("config")
        .arg("left-lang")
        .arg("English")
        .assert()
        .success();

    tandem(&config_dir)
        .arg("config")
        .arg("left-lang")
        .assert()
        .success()
        .stdout(predicates::str::contains("English"));
}

#[test]
fn config_rejects_unknown_key() {
    let temp_dir = tempfile::tempdir().unwrap();

    tandem(temp_dir.path())
        .arg("config")
        .arg("bogus-key")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Unknown config key"));
}
