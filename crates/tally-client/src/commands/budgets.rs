use std::path::{Path, PathBuf};

use chrono::Utc;
use rusqlite::Connection;

use crate::commands::common::{
    load_setup, parse_range, range_strings, resolve_scope, scope_descriptor,
};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{
    BudgetHealthData, BudgetPeriodRow, BudgetUtilizationData, BudgetUtilizationRow,
};
use crate::state::open_connection;
use crate::statistics::budgets::{budget_health, budget_utilization};
use crate::statistics::query::{fetch_budgets, fetch_transactions_between, scope_exists};
use crate::statistics::range::{DayBound, ReportingRange, format_instant, parse_bound_instant};
use crate::statistics::types::{BudgetRecord, Scope};
use crate::{ClientError, ClientResult};

const HEALTH_COMMAND: &str = "budget health";
const UTILIZATION_COMMAND: &str = "budget utilization";

#[derive(Debug, Default)]
pub struct BudgetRunOptions<'a> {
    pub account: Option<String>,
    pub category: Option<String>,
    pub from: String,
    pub to: String,
    pub as_of: Option<String>,
    pub home_override: Option<&'a Path>,
}

pub fn run_health(
    account: Option<&str>,
    category: Option<&str>,
    from: &str,
    to: &str,
    as_of: Option<&str>,
) -> ClientResult<SuccessEnvelope> {
    run_health_with_options(BudgetRunOptions {
        account: account.map(str::to_string),
        category: category.map(str::to_string),
        from: from.to_string(),
        to: to.to_string(),
        as_of: as_of.map(str::to_string),
        home_override: None,
    })
}

#[doc(hidden)]
pub fn run_health_with_options(options: BudgetRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let loaded = load_budget_context(&options, HEALTH_COMMAND)?;

    let as_of = match options.as_of.as_deref() {
        Some(raw) => parse_bound_instant(raw, DayBound::End).ok_or_else(|| {
            ClientError::invalid_argument_for_command(
                &format!("Invalid --as-of value `{raw}`. Use YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ."),
                Some(HEALTH_COMMAND),
            )
        })?,
        None => Utc::now(),
    };

    let health = budget_health(&loaded.budgets, as_of);
    let (from, to) = range_strings(&loaded.range);

    let data = BudgetHealthData {
        scope: scope_descriptor(&loaded.scope),
        from,
        to,
        as_of: format_instant(&as_of),
        active: health.active.iter().map(budget_period_row).collect(),
        past: health.past.iter().map(budget_period_row).collect(),
    };

    success(HEALTH_COMMAND, data)
}

pub fn run_utilization(
    account: Option<&str>,
    category: Option<&str>,
    from: &str,
    to: &str,
) -> ClientResult<SuccessEnvelope> {
    run_utilization_with_options(BudgetRunOptions {
        account: account.map(str::to_string),
        category: category.map(str::to_string),
        from: from.to_string(),
        to: to.to_string(),
        as_of: None,
        home_override: None,
    })
}

#[doc(hidden)]
pub fn run_utilization_with_options(
    options: BudgetRunOptions<'_>,
) -> ClientResult<SuccessEnvelope> {
    let loaded = load_budget_context(&options, UTILIZATION_COMMAND)?;
    let rows = utilization_rows(
        &loaded.connection,
        &loaded.db_path,
        &loaded.scope,
        &loaded.budgets,
    )?;
    let (from, to) = range_strings(&loaded.range);

    let data = BudgetUtilizationData {
        scope: scope_descriptor(&loaded.scope),
        from,
        to,
        budgets: rows,
    };

    success(UTILIZATION_COMMAND, data)
}

struct BudgetContext {
    scope: Scope,
    range: ReportingRange,
    budgets: Vec<BudgetRecord>,
    connection: Connection,
    db_path: PathBuf,
}

fn load_budget_context(
    options: &BudgetRunOptions<'_>,
    command_hint: &str,
) -> ClientResult<BudgetContext> {
    let scope = resolve_scope(
        options.account.as_deref(),
        options.category.as_deref(),
        command_hint,
    )?;
    let range = parse_range(&options.from, &options.to, command_hint)?;

    let setup = load_setup(options.home_override)?;
    let db_path = PathBuf::from(&setup.db_path);
    let connection = open_connection(&db_path)?;

    if !scope_exists(&connection, &db_path, &scope)? {
        return Err(ClientError::scope_not_found(scope.kind(), scope.id()));
    }

    let budgets = fetch_budgets(&connection, &db_path, &scope, &range)?;

    Ok(BudgetContext {
        scope,
        range,
        budgets,
        connection,
        db_path,
    })
}

/// Spend is measured over each budget's own period, which can reach
/// outside the query window, so the transaction read widens to the
/// envelope of all matched budget periods.
pub(crate) fn utilization_rows(
    connection: &Connection,
    db_path: &Path,
    scope: &Scope,
    budgets: &[BudgetRecord],
) -> ClientResult<Vec<BudgetUtilizationRow>> {
    if budgets.is_empty() {
        return Ok(Vec::new());
    }

    let mut envelope_from = budgets[0].period_start;
    let mut envelope_to = budgets[0].period_end;
    for budget in budgets {
        envelope_from = envelope_from.min(budget.period_start);
        envelope_to = envelope_to.max(budget.period_end);
    }

    let rows = fetch_transactions_between(connection, db_path, scope, envelope_from, envelope_to)?;

    Ok(budget_utilization(budgets, &rows)
        .into_iter()
        .map(|row| BudgetUtilizationRow {
            budget_id: row.budget_id,
            name: row.name,
            limit: row.limit,
            spent: row.spent,
            utilization: row.utilization,
        })
        .collect())
}

fn budget_period_row(budget: &BudgetRecord) -> BudgetPeriodRow {
    BudgetPeriodRow {
        budget_id: budget.budget_id.clone(),
        name: budget.name.clone(),
        limit: budget.amount_limit,
        period_start: format_instant(&budget.period_start),
        period_end: format_instant(&budget.period_end),
        status: budget.status.as_str().to_string(),
    }
}
