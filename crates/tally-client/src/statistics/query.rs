use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};

use crate::ClientResult;
use crate::state::map_sqlite_error;
use crate::statistics::range::{ReportingRange, format_instant, parse_stored_instant};
use crate::statistics::types::{
    BudgetRecord, BudgetStatus, LedgerTransaction, Scope, TransactionKind,
};

/// Checks that the scoping account or category id exists at all. Every
/// statistics command fails uniformly with `scope_not_found` when it does
/// not, composite and per-dimension calls alike.
pub fn scope_exists(
    connection: &Connection,
    db_path: &Path,
    scope: &Scope,
) -> ClientResult<bool> {
    let sql = match scope {
        Scope::Account(_) => "SELECT 1 FROM accounts WHERE account_id = ?1 LIMIT 1",
        Scope::Category(_) => "SELECT 1 FROM categories WHERE category_id = ?1 LIMIT 1",
    };

    let exists = connection
        .query_row(sql, [scope.id()], |_row| Ok(true))
        .optional()
        .map_err(|error| map_sqlite_error(db_path, &error))?
        .unwrap_or(false);

    Ok(exists)
}

/// Fetches the transaction set for one scope within an inclusive window.
/// Account scope sees the account's side of the ledger: rows it originated
/// plus transfers arriving at it. Category scope sees the category across
/// every account. An empty result is not an error.
pub fn fetch_transactions(
    connection: &Connection,
    db_path: &Path,
    scope: &Scope,
    range: &ReportingRange,
) -> ClientResult<Vec<LedgerTransaction>> {
    fetch_transactions_between(connection, db_path, scope, range.from, range.to)
}

pub fn fetch_transactions_between(
    connection: &Connection,
    db_path: &Path,
    scope: &Scope,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> ClientResult<Vec<LedgerTransaction>> {
    let scope_filter = match scope {
        Scope::Account(_) => "(account_id = ?1 OR destination_account_id = ?1)",
        Scope::Category(_) => "category_id = ?1",
    };
    let sql = format!(
        "SELECT
            txn_id,
            account_id,
            destination_account_id,
            category_id,
            amount,
            kind,
            posted_at
         FROM transactions
         WHERE {scope_filter}
           AND posted_at >= ?2
           AND posted_at <= ?3
         ORDER BY posted_at ASC, txn_id ASC"
    );

    let mut statement = connection
        .prepare(&sql)
        .map_err(|error| map_sqlite_error(db_path, &error))?;

    let rows_iter = statement
        .query_map(
            params![scope.id(), format_instant(&from), format_instant(&to)],
            |row| {
                let txn_id: String = row.get(0)?;
                let account_id: String = row.get(1)?;
                let destination_account_id: Option<String> = row.get(2)?;
                let category_id: String = row.get(3)?;
                let amount: i64 = row.get(4)?;
                let kind: String = row.get(5)?;
                let posted_at: String = row.get(6)?;
                Ok((
                    txn_id,
                    account_id,
                    destination_account_id,
                    category_id,
                    amount,
                    kind,
                    posted_at,
                ))
            },
        )
        .map_err(|error| map_sqlite_error(db_path, &error))?;

    let mut rows: Vec<LedgerTransaction> = Vec::new();
    for row in rows_iter {
        let (txn_id, account_id, destination_account_id, category_id, amount, kind, posted_at) =
            row.map_err(|error| map_sqlite_error(db_path, &error))?;
        let Some(parsed_kind) = TransactionKind::parse(&kind) else {
            continue;
        };
        let Some(parsed_posted_at) = parse_stored_instant(&posted_at) else {
            continue;
        };

        rows.push(LedgerTransaction {
            txn_id,
            account_id,
            destination_account_id,
            category_id,
            amount,
            kind: parsed_kind,
            posted_at: parsed_posted_at,
        });
    }

    Ok(rows)
}

/// Fetches budgets applicable to a statistics call: scoped to the same
/// account or category, with a period overlapping the query window.
pub fn fetch_budgets(
    connection: &Connection,
    db_path: &Path,
    scope: &Scope,
    range: &ReportingRange,
) -> ClientResult<Vec<BudgetRecord>> {
    let scope_filter = match scope {
        Scope::Account(_) => "account_id = ?1",
        Scope::Category(_) => "category_id = ?1",
    };
    let sql = format!(
        "SELECT
            budget_id,
            name,
            account_id,
            category_id,
            amount_limit,
            period_start,
            period_end,
            status
         FROM budgets
         WHERE {scope_filter}
           AND period_start <= ?3
           AND period_end >= ?2
         ORDER BY period_start ASC, budget_id ASC"
    );

    let mut statement = connection
        .prepare(&sql)
        .map_err(|error| map_sqlite_error(db_path, &error))?;

    let rows_iter = statement
        .query_map(
            params![
                scope.id(),
                format_instant(&range.from),
                format_instant(&range.to)
            ],
            |row| {
                let budget_id: String = row.get(0)?;
                let name: String = row.get(1)?;
                let account_id: Option<String> = row.get(2)?;
                let category_id: Option<String> = row.get(3)?;
                let amount_limit: i64 = row.get(4)?;
                let period_start: String = row.get(5)?;
                let period_end: String = row.get(6)?;
                let status: String = row.get(7)?;
                Ok((
                    budget_id,
                    name,
                    account_id,
                    category_id,
                    amount_limit,
                    period_start,
                    period_end,
                    status,
                ))
            },
        )
        .map_err(|error| map_sqlite_error(db_path, &error))?;

    let mut budgets: Vec<BudgetRecord> = Vec::new();
    for row in rows_iter {
        let (budget_id, name, account_id, category_id, amount_limit, period_start, period_end, status) =
            row.map_err(|error| map_sqlite_error(db_path, &error))?;
        let Some(parsed_start) = parse_stored_instant(&period_start) else {
            continue;
        };
        let Some(parsed_end) = parse_stored_instant(&period_end) else {
            continue;
        };
        let Some(parsed_status) = BudgetStatus::parse(&status) else {
            continue;
        };

        budgets.push(BudgetRecord {
            budget_id,
            name,
            account_id,
            category_id,
            amount_limit,
            period_start: parsed_start,
            period_end: parsed_end,
            status: parsed_status,
        });
    }

    Ok(budgets)
}

/// Resolves account ids to display names for distribution labeling.
/// Unknown ids are simply absent from the map.
pub fn fetch_account_names(
    connection: &Connection,
    db_path: &Path,
    account_ids: &[String],
) -> ClientResult<BTreeMap<String, String>> {
    let mut statement = connection
        .prepare("SELECT name FROM accounts WHERE account_id = ?1 LIMIT 1")
        .map_err(|error| map_sqlite_error(db_path, &error))?;

    let mut names: BTreeMap<String, String> = BTreeMap::new();
    for account_id in account_ids {
        if names.contains_key(account_id) {
            continue;
        }
        let name = statement
            .query_row([account_id], |row| row.get::<_, String>(0))
            .optional()
            .map_err(|error| map_sqlite_error(db_path, &error))?;
        if let Some(value) = name {
            names.insert(account_id.clone(), value);
        }
    }

    Ok(names)
}
