#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, params};
use serde_json::Value;
use tally_client::{ClientResult, SuccessEnvelope};
use tempfile::{Builder, TempDir};

pub fn temp_home_in_tmp(prefix: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = Builder::new().prefix(prefix).tempdir_in("/tmp")?;
    let home = dir.path().join("ledger-home");
    fs::create_dir_all(&home)?;
    Ok((dir, home))
}

/// Initializes the ledger at `home` and returns a direct connection for
/// seeding rows. The statistics layer never writes, so tests populate the
/// store the way the external CRUD layer would.
pub fn seeded_ledger(home: &Path) -> Connection {
    let setup = tally_client::setup::ensure_initialized_at(home);
    assert!(setup.is_ok(), "ledger init failed: {setup:?}");

    Connection::open(home.join("ledger.db")).expect("open seeded ledger")
}

pub fn seed_account(connection: &Connection, account_id: &str, name: &str) {
    let result = connection.execute(
        "INSERT INTO accounts (account_id, name, account_type) VALUES (?1, ?2, 'checking')",
        params![account_id, name],
    );
    assert!(result.is_ok(), "seed account failed: {result:?}");
}

pub fn seed_category(connection: &Connection, category_id: &str, name: &str) {
    let result = connection.execute(
        "INSERT INTO categories (category_id, name, category_type) VALUES (?1, ?2, 'expense')",
        params![category_id, name],
    );
    assert!(result.is_ok(), "seed category failed: {result:?}");
}

pub fn seed_expense(
    connection: &Connection,
    txn_id: &str,
    account_id: &str,
    category_id: &str,
    amount: i64,
    posted_at: &str,
) {
    seed_transaction(
        connection, txn_id, account_id, None, category_id, amount, "expense", posted_at,
    );
}

pub fn seed_income(
    connection: &Connection,
    txn_id: &str,
    account_id: &str,
    category_id: &str,
    amount: i64,
    posted_at: &str,
) {
    seed_transaction(
        connection, txn_id, account_id, None, category_id, amount, "income", posted_at,
    );
}

pub fn seed_transfer(
    connection: &Connection,
    txn_id: &str,
    account_id: &str,
    destination_account_id: &str,
    category_id: &str,
    amount: i64,
    posted_at: &str,
) {
    seed_transaction(
        connection,
        txn_id,
        account_id,
        Some(destination_account_id),
        category_id,
        amount,
        "transfer",
        posted_at,
    );
}

pub fn delete_transaction(connection: &Connection, txn_id: &str) {
    let result = connection.execute("DELETE FROM transactions WHERE txn_id = ?1", [txn_id]);
    assert!(result.is_ok(), "delete transaction failed: {result:?}");
}

#[allow(clippy::too_many_arguments)]
fn seed_transaction(
    connection: &Connection,
    txn_id: &str,
    account_id: &str,
    destination_account_id: Option<&str>,
    category_id: &str,
    amount: i64,
    kind: &str,
    posted_at: &str,
) {
    let result = connection.execute(
        "INSERT INTO transactions
            (txn_id, account_id, destination_account_id, category_id, amount, kind, posted_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            txn_id,
            account_id,
            destination_account_id,
            category_id,
            amount,
            kind,
            posted_at
        ],
    );
    assert!(result.is_ok(), "seed transaction failed: {result:?}");
}

#[allow(clippy::too_many_arguments)]
pub fn seed_budget(
    connection: &Connection,
    budget_id: &str,
    name: &str,
    account_id: Option<&str>,
    category_id: Option<&str>,
    amount_limit: i64,
    period_start: &str,
    period_end: &str,
    status: &str,
) {
    let result = connection.execute(
        "INSERT INTO budgets
            (budget_id, name, account_id, category_id, amount_limit, period_start, period_end, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            budget_id,
            name,
            account_id,
            category_id,
            amount_limit,
            period_start,
            period_end,
            status
        ],
    );
    assert!(result.is_ok(), "seed budget failed: {result:?}");
}

/// Unwraps a command result into its JSON envelope for assertions.
pub fn payload(result: ClientResult<SuccessEnvelope>) -> Value {
    assert!(result.is_ok(), "command failed: {result:?}");
    if let Ok(success) = result {
        let value = serde_json::to_value(success);
        assert!(value.is_ok());
        if let Ok(envelope) = value {
            return envelope;
        }
    }
    Value::Null
}

pub fn data(result: ClientResult<SuccessEnvelope>) -> Value {
    payload(result)["data"].clone()
}

pub fn error_code(result: ClientResult<SuccessEnvelope>) -> String {
    assert!(result.is_err(), "expected an error, got: {result:?}");
    result.err().map(|error| error.code).unwrap_or_default()
}
