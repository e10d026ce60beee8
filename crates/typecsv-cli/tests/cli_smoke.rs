use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn csv_file(contents: &str) -> Result<NamedTempFile, Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", contents)?;
    Ok(tmp)
}

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("typecsv-cli"))
        .arg("--help")
        .assert()
        .success();
    Ok(())
}

#[test]
fn records_print_as_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = csv_file("a,1,-1.5,TRUE,null\r\n\"x,y\",\"\"\"q\"\"\"\n")?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("typecsv-cli"))
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    let lines: Vec<serde_json::Value> = out
        .lines()
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()?;
    assert_eq!(lines, vec![
        serde_json::json!(["a", 1, -1.5, true, null]),
        serde_json::json!(["x,y", "\"q\""]),
    ]);
    Ok(())
}

#[test]
fn recode_switches_dialect() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = csv_file("a;it's;3\n")?;

    Command::new(assert_cmd::cargo::cargo_bin!("typecsv-cli"))
        .args(["--separator", "semicolon", "--recode"])
        .args(["--out-separator", "tab", "--out-delimiter", "single"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("'a'\t'it''s'\t'3'\n");
    Ok(())
}

#[test]
fn count_and_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = csv_file("1\n2\r\n3\r4\n")?;

    Command::new(assert_cmd::cargo::cargo_bin!("typecsv-cli"))
        .arg("--count")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("4\n");

    Command::new(assert_cmd::cargo::cargo_bin!("typecsv-cli"))
        .arg("--lines")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("4\n");
    Ok(())
}

#[test]
fn strict_rejects_malformed_records() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = csv_file("ok\n\"broken\"tail\n")?;

    Command::new(assert_cmd::cargo::cargo_bin!("typecsv-cli"))
        .arg(tmp.path())
        .assert()
        .success();

    Command::new(assert_cmd::cargo::cargo_bin!("typecsv-cli"))
        .arg("--strict")
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("record 2 is malformed"));
    Ok(())
}

#[test]
fn rejects_unknown_separator() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("typecsv-cli"))
        .args(["--separator", "pipe"])
        .assert()
        .failure();
    Ok(())
}
