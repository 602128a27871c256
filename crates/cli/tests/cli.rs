use assert_cmd::Command;
use predicates::prelude::*;

fn tly() -> Command {
    Command::cargo_bin("tly").unwrap()
}

#[test]
fn test_version() {
    tly()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_bar_per_line() {
    tly()
        .args(["--total", "2", "--width", "10", "--percent", "--count"])
        .write_stdin("first\nsecond\n")
        .assert()
        .success()
        .stdout("[          ] 0% 0/2\r[#####     ] 50% 1/2\r[##########] 100% 2/2\n");
}

#[test]
fn test_unfinished_bar_ends_line() {
    tly()
        .args(["--total", "4", "--width", "8"])
        .write_stdin("only one\n")
        .assert()
        .success()
        .stdout("[        ]  \r[##      ]  \r\n");
}

#[test]
fn test_custom_delim_and_layout() {
    tly()
        .args([
            "--total", "3", "--width", "3", "--delim", ",", "--caps", "<>", "--fill", "=",
            "--template", "{count} {bar}", "--count",
        ])
        .write_stdin("a,b,c")
        .assert()
        .success()
        .stdout("0/3 <   >\r1/3 <=  >\r2/3 <== >\r3/3 <===>\n");
}

#[test]
fn test_style_overrides_fill() {
    tly()
        .args(["--total", "1", "--width", "2", "--fill", "=", "--style", "balloon"])
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("[**]  \n"));
}

#[test]
fn test_zero_total() {
    tly()
        .args(["--total", "0"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn test_bad_caps() {
    tly()
        .args(["--total", "5", "--caps", "["])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected exactly two characters"));
}
