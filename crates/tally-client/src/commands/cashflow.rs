use crate::ClientResult;
use crate::commands::common::{ScopeQueryOptions, load_scope_snapshot, range_strings, scope_descriptor};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{CashFlowData, DailyBalanceRow};
use crate::statistics::burn::cash_flow_pulse;

const COMMAND: &str = "stats cashflow";

#[derive(Debug, Default)]
pub struct CashFlowRunOptions<'a> {
    pub query: ScopeQueryOptions<'a>,
    pub opening_balance: i64,
}

pub fn run(
    account: Option<&str>,
    category: Option<&str>,
    from: &str,
    to: &str,
    opening_balance: i64,
) -> ClientResult<SuccessEnvelope> {
    run_with_options(CashFlowRunOptions {
        query: ScopeQueryOptions {
            account: account.map(str::to_string),
            category: category.map(str::to_string),
            from: from.to_string(),
            to: to.to_string(),
            home_override: None,
        },
        opening_balance,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: CashFlowRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let snapshot = load_scope_snapshot(&options.query, COMMAND)?;
    let pulse = cash_flow_pulse(
        &snapshot.transactions,
        &snapshot.scope,
        options.opening_balance,
    );
    let (from, to) = range_strings(&snapshot.range);

    let data = CashFlowData {
        scope: scope_descriptor(&snapshot.scope),
        from,
        to,
        starting_balance: pulse.starting_balance,
        ending_balance: pulse.ending_balance,
        days: pulse
            .days
            .into_iter()
            .map(|day| DailyBalanceRow {
                date: day.date,
                balance: day.balance,
            })
            .collect(),
    };

    success(COMMAND, data)
}
