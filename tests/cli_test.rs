use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "dollars, cents")?;
    writeln!(file, "1, 23")?;
    writeln!(file, "3, 45")?;
    writeln!(file, "6, 78")?;
    writeln!(file, "7, 89")?;

    let mut cmd = Command::new(cargo_bin!("invoice-stats"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("invoices,rejected,mean,median"))
        .stdout(predicate::str::contains("4,0,4.84,5.11"));

    Ok(())
}

#[test]
fn test_cli_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "dollars,cents")?;
    writeln!(file, "1,23")?;
    writeln!(file, "3,45")?;
    writeln!(file, "6,78")?;
    writeln!(file, "7,88")?;

    let output = Command::new(cargo_bin!("invoice-stats"))
        .arg(file.path())
        .arg("--format")
        .arg("json")
        .output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["invoices"], 4);
    assert_eq!(json["mean"], "4.83");
    assert_eq!(json["median"], "5.11");

    Ok(())
}

#[test]
fn test_cli_empty_input_has_no_statistics() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "dollars,cents").unwrap();

    let mut cmd = Command::new(cargo_bin!("invoice-stats"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0,0,,"));
}

#[test]
fn test_cli_missing_input_fails() {
    let mut cmd = Command::new(cargo_bin!("invoice-stats"));
    cmd.arg("does/not/exist.csv");

    cmd.assert().failure();
}
