use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use anyhow::Result;
use rusqlite::Connection;
use tempfile::TempDir;

fn run_generator(working_directory: &Path) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_bank-transaction-generator");

    Ok(Command::new(binary_path)
        .arg("error")
        .current_dir(working_directory)
        .output()?)
}

fn read_table(database_path: &Path) -> Result<Vec<(u32, String, f64, f64)>> {
    let connection = Connection::open(database_path)?;
    let mut statement = connection.prepare(
        "SELECT id, transaction_date, amount, balance_after FROM bank_transactions ORDER BY id"
    )?;

    let rows = statement
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

#[test]
fn test_cli_writes_database_and_insert_script() -> Result<()> {
    let directory = TempDir::new()?;
    let output = run_generator(directory.path())?;

    assert!(output.status.success());

    let rows = read_table(&directory.path().join("bank_transactions.db"))?;

    assert_eq!(rows.len(), 100);
    assert!(rows.iter().enumerate().all(|(index, row)| row.0 as usize == index + 1));
    assert_eq!(rows[0].1, "2024-01-04");
    assert_eq!(rows[99].1, "2024-10-27");

    let script = fs::read_to_string(directory.path().join("bank_transactions_inserts.sql"))?;
    let statements: Vec<&str> = script.lines().collect();

    assert!(script.ends_with(";\n"));
    assert_eq!(statements.len(), 100);
    assert!(statements.iter().all(|line| line.starts_with("INSERT INTO bank_transactions (") && line.ends_with(");")));

    Ok(())
}

#[test]
fn test_cli_artifacts_agree_on_amounts_and_balances() -> Result<()> {
    let directory = TempDir::new()?;

    assert!(run_generator(directory.path())?.status.success());

    let rows = read_table(&directory.path().join("bank_transactions.db"))?;
    let script = fs::read_to_string(directory.path().join("bank_transactions_inserts.sql"))?;

    let mut previous_balance = 5000.0;

    for (statement, (id, date, amount, balance_after)) in script.lines().zip(&rows) {
        let expected_prefix = format!("VALUES ({id}, '{date}', ");

        assert!(statement.contains(&expected_prefix), "{statement} does not start with {expected_prefix}");
        assert!(statement.contains(&format!(", {amount:.2}, '")));
        assert!(statement.contains(&format!(", {balance_after:.2}, '")));
        assert!((-1500.0..=3000.0).contains(amount));
        assert_eq!(format!("{:.2}", previous_balance + amount), format!("{balance_after:.2}"));

        previous_balance = *balance_after;
    }

    Ok(())
}

#[test]
fn test_cli_rerun_is_reproducible_and_replaces_rows() -> Result<()> {
    let directory = TempDir::new()?;

    assert!(run_generator(directory.path())?.status.success());

    let first_script = fs::read_to_string(directory.path().join("bank_transactions_inserts.sql"))?;
    let first_rows = read_table(&directory.path().join("bank_transactions.db"))?;

    assert!(run_generator(directory.path())?.status.success());

    let second_script = fs::read_to_string(directory.path().join("bank_transactions_inserts.sql"))?;
    let second_rows = read_table(&directory.path().join("bank_transactions.db"))?;

    assert_eq!(first_script, second_script);
    assert_eq!(first_rows, second_rows);

    let other = TempDir::new()?;

    assert!(run_generator(other.path())?.status.success());
    assert_eq!(
        fs::read_to_string(other.path().join("bank_transactions_inserts.sql"))?,
        first_script
    );

    Ok(())
}

#[test]
fn test_cli_fails_when_database_path_is_unwritable() -> Result<()> {
    let directory = TempDir::new()?;
    fs::create_dir(directory.path().join("bank_transactions.db"))?;

    let output = run_generator(directory.path())?;

    assert!(!output.status.success());
    assert!(!directory.path().join("bank_transactions_inserts.sql").exists());

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("bank_transactions.db"), "unexpected stderr: {stderr}");

    Ok(())
}
