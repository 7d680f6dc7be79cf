use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Input {
    _dir: TempDir,
    path: PathBuf,
}

impl Input {
    fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("create tempdir");
        let path = dir.path().join("measurements.txt");
        fs::write(&path, contents).expect("write input");
        Self { _dir: dir, path }
    }
}

fn station_stats() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_station_stats"));
    cmd.env_remove("INPUT_FILE").env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    station_stats()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--block-size"));
}

#[test]
fn prints_sorted_lines() {
    let input = Input::new("A;5.0\nB;3.0\nA;7.0\n");
    station_stats()
        .arg(&input.path)
        .assert()
        .success()
        .stdout("A=5.0/7.0/6.0\nB=3.0/3.0/3.0\n");
}

#[test]
fn reads_the_path_from_the_environment() {
    let input = Input::new("Oslo;-1.5\nOslo;2.5\n");
    station_stats()
        .env("INPUT_FILE", &input.path)
        .assert()
        .success()
        .stdout("Oslo=-1.5/2.5/0.5\n");
}

#[test]
fn braces_format() {
    let input = Input::new("b;1.0\na;2.0\n");
    station_stats()
        .args(["--format", "braces"])
        .arg(&input.path)
        .assert()
        .success()
        .stdout("{a=2.0/2.0/2.0, b=1.0/1.0/1.0}\n");
}

#[test]
fn small_blocks_give_the_same_output() {
    let input = Input::new("Hamburg;12.0\nBulawayo;8.9\nPalembang;38.8\nHamburg;34.2\n");
    station_stats()
        .args(["--block-size", "16"])
        .arg(&input.path)
        .assert()
        .success()
        .stdout("Bulawayo=8.9/8.9/8.9\nHamburg=12.0/34.2/23.1\nPalembang=38.8/38.8/38.8\n");
}

#[test]
fn unterminated_last_record_filling_a_block_is_accepted() {
    let input = Input::new("A;1\nB;22");
    station_stats()
        .args(["--block-size", "4"])
        .arg(&input.path)
        .assert()
        .success()
        .stdout("A=1.0/1.0/1.0\nB=22.0/22.0/22.0\n");
}

#[test]
fn oversized_block_size_reads_a_small_file() {
    let input = Input::new("A;1.0\n");
    station_stats()
        .args(["--block-size", "64G"])
        .arg(&input.path)
        .assert()
        .success()
        .stdout("A=1.0/1.0/1.0\n");
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    station_stats()
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn block_smaller_than_a_record_fails() {
    let input = Input::new("Abcdefg;1.0\n");
    station_stats()
        .args(["--block-size", "2"])
        .arg(&input.path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no line break"));
}

#[test]
fn malformed_measurement_fails_without_partial_output() {
    let input = Input::new("A;1.0\nA;abc\n");
    station_stats()
        .arg(&input.path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid measurement \"abc\""));
}

#[test]
fn zero_block_size_is_rejected() {
    let input = Input::new("A;1.0\n");
    station_stats()
        .args(["--block-size", "0"])
        .arg(&input.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));
}

#[test]
fn file_size_is_logged_on_request() {
    let input = Input::new("A;1.0\n");
    station_stats()
        .env("RUST_LOG", "station_stats=info")
        .arg(&input.path)
        .assert()
        .success()
        .stdout("A=1.0/1.0/1.0\n")
        .stderr(predicate::str::contains("File is: 6 bytes"));
}
