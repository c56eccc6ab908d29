use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn cli_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("courses"))
}

fn course_file() -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("tempfile");
    writeln!(f, "courseId,courseName,preReq1,preReq2").unwrap();
    writeln!(f, "100,CS100").unwrap();
    writeln!(f, "105,CS105,100").unwrap();
    writeln!(f, "ABC,Placement").unwrap();
    f
}

#[test]
fn list_in_bucket_order() {
    let f = course_file();
    let path = f.path().to_str().unwrap();
    cli_cmd()
        .args(["list", "--file", path, "--table-size", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "0 : 100 | CS100 |  , \n0 : 105 | CS105 | 100 , \n0 : ABC | Placement |  , \n",
        ))
        .stderr(predicate::str::contains("columns: courseId | courseName | preReq1 | preReq2"));
}

#[test]
fn show_hit_and_miss() {
    let f = course_file();
    let path = f.path().to_str().unwrap();
    cli_cmd()
        .args(["show", "--file", path, "--id", "105"])
        .assert()
        .success()
        .stdout(predicate::str::contains("105 : CS105 | 100 , "));

    cli_cmd()
        .args(["show", "--file", path, "--id", "999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Course Id 999 not found."));

    cli_cmd()
        .args(["show", "--file", path, "--id", "999", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("null\n"));
}

#[test]
fn stats_as_json() {
    let f = course_file();
    let path = f.path().to_str().unwrap();
    cli_cmd()
        .args(["stats", "--file", path, "--table-size", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"longest_chain\": 3"))
        .stdout(predicate::str::contains("\"entries\": 3"));
}

#[test]
fn strict_mode_fails_on_letters() {
    let f = course_file();
    let path = f.path().to_str().unwrap();
    cli_cmd()
        .args(["list", "--file", path, "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ABC"));
}

#[test]
fn zero_table_size_is_rejected() {
    let f = course_file();
    let path = f.path().to_str().unwrap();
    cli_cmd()
        .args(["list", "--file", path, "--table-size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));
}

#[test]
fn menu_session() {
    let f = course_file();
    let path = f.path().to_str().unwrap();
    cli_cmd()
        .args(["menu", "--file", path])
        .write_stdin("1\n3\n100\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("100 : CS100 |  , "))
        .stdout(predicate::str::contains("Good bye."));
}

#[test]
fn menu_rejects_zero_table_size_up_front() {
    let f = course_file();
    let path = f.path().to_str().unwrap();
    cli_cmd()
        .args(["menu", "--file", path, "--table-size", "0"])
        .write_stdin("9\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Welcome").not())
        .stderr(predicate::str::contains("greater than zero"));
}
