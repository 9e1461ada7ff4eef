use assert_cmd::Command;
use predicates::prelude::*;
use std::error::Error;
use std::fs;

fn f() -> Command {
    Command::cargo_bin("f").unwrap()
}

#[test]
fn picks_second_field() {
    f().arg("2")
        .write_stdin("a b  c\td\n")
        .assert()
        .success()
        .stdout("b\n");
}

#[test]
fn negative_and_reversed_specs() {
    f().args(["-1", "1", "4:2"])
        .write_stdin("a b c d e\n")
        .assert()
        .success()
        .stdout("e a d c b\n");
}

#[test]
fn negative_range_spec_is_not_a_flag() {
    f().args(["-2:-1"])
        .write_stdin("a b c\n")
        .assert()
        .success()
        .stdout("b c\n");
}

#[test]
fn join_option() {
    f().args(["-j", "-", ":"])
        .write_stdin("a b c\n")
        .assert()
        .success()
        .stdout("a-b-c\n");
}

#[test]
fn field_separators_option() {
    f().args(["-F", ":", "-j", ",", "1", "-1"])
        .write_stdin("root:x:0:0::/root:/bin/sh\nnobody:x:65534\n")
        .assert()
        .success()
        .stdout("root,/bin/sh\nnobody,65534\n");
}

#[test]
fn last_line_without_newline_is_processed() {
    f().arg("1")
        .write_stdin("a\nb")
        .assert()
        .success()
        .stdout("a\nb\n");
}

#[test]
fn empty_line_yields_empty_output_line() {
    f().arg("1")
        .write_stdin("\nx\n")
        .assert()
        .success()
        .stdout("\nx\n");
}

#[test]
fn json_output() {
    f().args(["--json", "2:"])
        .write_stdin("a b c\n")
        .assert()
        .success()
        .stdout("[\"b\",\"c\"]\n");
}

#[test]
fn invalid_spec_fails_before_reading() {
    f().args(["1", "1:2:3"])
        .write_stdin("a b c\n")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("invalid field specification '1:2:3'"));
}

#[test]
fn input_files_are_read_in_order() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let first = dir.path().join("one.txt");
    let second = dir.path().join("two.txt");
    fs::write(&first, "1 2 3\n")?;
    fs::write(&second, "4 5 6\n")?;

    f().args(["-i", first.to_str().unwrap(), "-i", second.to_str().unwrap(), "3:1"])
        .assert()
        .success()
        .stdout("3 2 1\n6 5 4\n");
    Ok(())
}

#[test]
fn missing_input_names_the_file() {
    f().args(["-i", "/nonexistent/f-missing.txt", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("/nonexistent/f-missing.txt"));
}

#[test]
fn help_exits_zero() {
    f().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("SPEC"));
}

#[test]
fn json_conflicts_with_join() {
    f().args(["--json", "-j", ",", "1"])
        .write_stdin("a\n")
        .assert()
        .failure();
}
