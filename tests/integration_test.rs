use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use anyhow::{anyhow, Result};
use tempfile::TempDir;

fn run_ledger(data_file: &Path, args: &[&str]) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_account-ledger");

    let output = Command::new(binary_path)
        .arg("--data-file")
        .arg(data_file)
        .args(args)
        .env_remove("ACCOUNT_LEDGER_LOG")
        .output()?;

    Ok(output)
}

fn run_menu(data_file: &Path, script: &str) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_account-ledger");

    let mut child = Command::new(binary_path)
        .arg("--data-file")
        .arg(data_file)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    child.stdin.take()
        .ok_or_else(|| anyhow!("stdin was not captured"))?
        .write_all(script.as_bytes())?;

    Ok(child.wait_with_output()?)
}

#[test]
fn test_cli_opens_accounts_and_persists_records() -> Result<()> {
    let directory = TempDir::new()?;
    let data_file = directory.path().join("accounts.txt");

    let output = run_ledger(&data_file, &["open", "--type", "S", "--owner", "Alice", "--deposit", "100"])?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?.trim(), "Account created successfully. Account Number: 1001");

    let output = run_ledger(&data_file, &["open", "--type", "C", "--owner", "Bob"])?;

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&data_file)?, "1001|S|Alice|100.00\n1002|C|Bob|0.00\n");

    Ok(())
}

#[test]
fn test_cli_applies_overdraft_rules_across_runs() -> Result<()> {
    let directory = TempDir::new()?;
    let data_file = directory.path().join("accounts.txt");

    assert!(run_ledger(&data_file, &["open", "-t", "C", "-o", "Bob"])?.status.success());
    assert!(run_ledger(&data_file, &["withdraw", "1001", "400"])?.status.success());

    let refused = run_ledger(&data_file, &["withdraw", "1001", "200"])?;

    assert!(!refused.status.success());
    assert!(String::from_utf8(refused.stderr)?.contains("overdraft limit"));

    let show = run_ledger(&data_file, &["show", "1001"])?;
    let stdout = String::from_utf8(show.stdout)?;

    assert!(show.status.success());
    assert!(stdout.contains("Account No: 1001 (Current)"));
    assert!(stdout.contains("Balance   : -400.00"));
    assert!(stdout.contains("Overdraft : 500.00"));

    Ok(())
}

#[test]
fn test_cli_reports_unknown_accounts() -> Result<()> {
    let directory = TempDir::new()?;
    let data_file = directory.path().join("accounts.txt");

    let output = run_ledger(&data_file, &["deposit", "9999", "50"])?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("Account [9999] was not found"));

    Ok(())
}

#[test]
fn test_cli_numbering_continues_after_existing_records() -> Result<()> {
    let directory = TempDir::new()?;
    let data_file = directory.path().join("accounts.txt");
    fs::write(&data_file, "1001|S|Alice|100.00\n1042|C|Bob|-20.00\n")?;

    let output = run_ledger(&data_file, &["open", "-t", "S", "-o", "Carol", "-d", "5"])?;

    assert!(String::from_utf8(output.stdout)?.contains("Account Number: 1043"));

    let listing = run_ledger(&data_file, &["list"])?;

    assert_eq!(
        String::from_utf8(listing.stdout)?,
        "[S] 1001 - Alice (100.00)\n[C] 1042 - Bob (-20.00)\n[S] 1043 - Carol (5.00)\n"
    );

    Ok(())
}

#[test]
fn test_menu_session_over_stdin() -> Result<()> {
    let directory = TempDir::new()?;
    let data_file = directory.path().join("accounts.txt");

    let output = run_menu(&data_file, "1\nAlice\nS\n100\n2\n1001\n50\n5\n6\n")?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert!(stdout.contains("Account created successfully. Account Number: 1001"));
    assert!(stdout.contains("[S] 1001 - Alice (150.00)"));
    assert_eq!(fs::read_to_string(&data_file)?, "1001|S|Alice|150.00\n");

    Ok(())
}
