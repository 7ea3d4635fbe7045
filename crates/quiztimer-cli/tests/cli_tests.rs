//! CLI integration tests using assert_cmd.

use std::io::Write;
use std::path::Path;
use std::process::{Command as StdCommand, Stdio};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quiztimer() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quiztimer").unwrap()
}

/// Three questions, two of which are answered by "2", so any shuffle
/// scores the same for the same input.
const QUIZ_CSV: &str = "1+1,2\n0+2,2\n\"capital of France, in French\",Paris\n";

/// Every answer is "2": a single "2" scores exactly one point in any order.
const ALL_TWOS_CSV: &str = "1+1,2\n0+2,2\n2+0,2\n";

fn write_quiz(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn completes_with_piped_answers() {
    let dir = TempDir::new().unwrap();
    let quiz = write_quiz(dir.path(), "quiz.csv", QUIZ_CSV);

    quiztimer()
        .arg("--path")
        .arg(&quiz)
        .write_stdin("2\n2\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Math quiz. Complete 3 questions in 20 seconds",
        ))
        .stdout(predicate::str::contains("1+1 = "))
        .stdout(predicate::str::contains(
            "2/3 of the questions were correctly answered. Your score is 66",
        ))
        .stdout(predicate::str::contains("Times up").not());
}

#[test]
fn whitespace_around_answers_is_ignored() {
    let dir = TempDir::new().unwrap();
    let quiz = write_quiz(dir.path(), "quiz.csv", "1+1,2\n0+2,2\n");

    quiztimer()
        .arg("--path")
        .arg(&quiz)
        .write_stdin("  2 \n\t2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2/2 of the questions were correctly answered. Your score is 100",
        ));
}

#[test]
fn closed_input_counts_remaining_as_unanswered() {
    let dir = TempDir::new().unwrap();
    let quiz = write_quiz(dir.path(), "quiz.csv", ALL_TWOS_CSV);

    quiztimer()
        .arg("--path")
        .arg(&quiz)
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1/3 of the questions were correctly answered. Your score is 33",
        ));
}

#[test]
fn times_out_while_waiting_for_input() {
    let dir = TempDir::new().unwrap();
    let quiz = write_quiz(dir.path(), "quiz.csv", ALL_TWOS_CSV);

    let mut child = StdCommand::new(env!("CARGO_BIN_EXE_quiztimer"))
        .arg("--path")
        .arg(&quiz)
        .arg("--timeout")
        .arg("500ms")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // Answer one question, then keep the pipe open without writing more.
    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(b"2\n").unwrap();
    stdin.flush().unwrap();

    let output = child.wait_with_output().unwrap();
    drop(stdin);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("\nTimes up, 1/3 of the questions were correctly answered. Your score is 33"),
        "unexpected stdout: {stdout}"
    );
}

#[test]
fn missing_quiz_file() {
    quiztimer()
        .arg("--path")
        .arg("nonexistent.csv")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Math quiz").not())
        .stderr(predicate::str::contains("failed reading the quiz file"))
        .stderr(predicate::str::contains("nonexistent.csv"));
}

#[test]
fn empty_quiz_file() {
    let dir = TempDir::new().unwrap();
    let quiz = write_quiz(dir.path(), "empty.csv", "");

    quiztimer()
        .arg("--path")
        .arg(&quiz)
        .assert()
        .failure()
        .stderr(predicate::str::contains("quiz contains no questions"));
}

#[test]
fn malformed_row() {
    let dir = TempDir::new().unwrap();
    let quiz = write_quiz(dir.path(), "bad.csv", "1+1,2\n2+2\n");

    quiztimer()
        .arg("--path")
        .arg(&quiz)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed row at line 2"));
}

#[test]
fn invalid_timeout_is_rejected() {
    quiztimer()
        .arg("--timeout")
        .arg("soon")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid duration"));
}

#[test]
fn default_path_is_resources_problems_csv() {
    let dir = TempDir::new().unwrap();
    write_quiz(dir.path(), "resources/problems.csv", "1+1,2\n");

    quiztimer()
        .current_dir(dir.path())
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1/1 of the questions were correctly answered. Your score is 100",
        ));
}

#[test]
fn config_file_in_working_directory() {
    let dir = TempDir::new().unwrap();
    write_quiz(dir.path(), "quizzes/quiz.csv", ALL_TWOS_CSV);
    std::fs::write(
        dir.path().join("quiztimer.toml"),
        "path = \"quizzes/quiz.csv\"\ntimeout = \"45s\"\nseed = 3\n",
    )
    .unwrap();

    quiztimer()
        .current_dir(dir.path())
        .write_stdin("2\n2\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Complete 3 questions in 45 seconds"))
        .stdout(predicate::str::contains("Your score is 100"));
}

#[test]
fn flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let quiz = write_quiz(dir.path(), "quiz.csv", "1+1,2\n");
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "timeout = 45\npath = \"missing.csv\"\n").unwrap();

    quiztimer()
        .arg("--config")
        .arg(&config)
        .arg("--path")
        .arg(&quiz)
        .arg("--timeout")
        .arg("1m30s")
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Complete 1 questions in 90 seconds"));
}

#[test]
fn missing_config_file() {
    quiztimer()
        .arg("--config")
        .arg("no_such_config.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn help_output() {
    quiztimer()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Timed command-line quiz"))
        .stdout(predicate::str::contains("--timeout"))
        .stdout(predicate::str::contains("--path"));
}

#[test]
fn version_output() {
    quiztimer()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quiztimer"));
}
