use std::collections::BTreeMap;

use crate::statistics::range::{ReportingRange, format_date};
use crate::statistics::types::{LedgerTransaction, Scope, TransactionKind};

/// Average expense spend over a window, scaled to day/week/month. The
/// total stays in exact minor units; the averages are fractional so the
/// strict monthly > weekly > daily ordering holds whenever anything was
/// spent at all.
#[derive(Debug, Clone, PartialEq)]
pub struct BurnRate {
    pub total_spending: i64,
    pub daily_average_spend: f64,
    pub weekly_average_spend: f64,
    pub monthly_average_spend: f64,
}

pub fn burn_rate(rows: &[LedgerTransaction], range: &ReportingRange) -> BurnRate {
    let total_spending: i64 = rows
        .iter()
        .filter(|row| row.is_expense())
        .map(|row| row.amount)
        .sum();

    let daily_average_spend = total_spending as f64 / range.day_count() as f64;

    BurnRate {
        total_spending,
        daily_average_spend,
        weekly_average_spend: daily_average_spend * 7.0,
        monthly_average_spend: daily_average_spend * 30.0,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyBalance {
    pub date: String,
    pub balance: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashFlowPulse {
    pub starting_balance: i64,
    pub ending_balance: i64,
    pub days: Vec<DailyBalance>,
}

/// The signed effect of one row on the scope's balance. Income adds,
/// expense subtracts. A transfer subtracts from its source account and
/// adds to its destination; under a category scope a transfer moves money
/// between accounts without changing how much the category holds, so it
/// contributes nothing.
pub fn signed_delta(row: &LedgerTransaction, scope: &Scope) -> i64 {
    match row.kind {
        TransactionKind::Income => row.amount,
        TransactionKind::Expense => -row.amount,
        TransactionKind::Transfer => match scope {
            Scope::Account(account_id) => {
                if row.destination_account_id.as_deref() == Some(account_id.as_str()) {
                    row.amount
                } else {
                    -row.amount
                }
            }
            Scope::Category(_) => 0,
        },
    }
}

/// Folds signed deltas in posting order into a running balance, with one
/// end-of-day snapshot per day that saw activity. The opening balance is
/// supplied by the caller; the engine never reconstructs history before
/// the window.
pub fn cash_flow_pulse(
    rows: &[LedgerTransaction],
    scope: &Scope,
    opening_balance: i64,
) -> CashFlowPulse {
    let mut deltas_by_day: BTreeMap<String, i64> = BTreeMap::new();
    for row in rows {
        *deltas_by_day.entry(format_date(&row.posted_at)).or_insert(0) +=
            signed_delta(row, scope);
    }

    let mut balance = opening_balance;
    let mut days = Vec::with_capacity(deltas_by_day.len());
    for (date, delta) in deltas_by_day {
        balance += delta;
        days.push(DailyBalance { date, balance });
    }

    CashFlowPulse {
        starting_balance: opening_balance,
        ending_balance: balance,
        days,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::{burn_rate, cash_flow_pulse, signed_delta};
    use crate::statistics::range::{ReportingRange, parse_stored_instant};
    use crate::statistics::types::{LedgerTransaction, Scope, TransactionKind};

    fn instant(value: &str) -> DateTime<Utc> {
        let parsed = parse_stored_instant(value);
        assert!(parsed.is_some(), "bad test instant {value}");
        parsed.unwrap_or_default()
    }

    fn row(posted_at: &str, amount: i64, kind: TransactionKind) -> LedgerTransaction {
        transfer_row(posted_at, amount, kind, None)
    }

    fn transfer_row(
        posted_at: &str,
        amount: i64,
        kind: TransactionKind,
        destination: Option<&str>,
    ) -> LedgerTransaction {
        LedgerTransaction {
            txn_id: format!("txn-{posted_at}-{amount}"),
            account_id: "acct-1".to_string(),
            destination_account_id: destination.map(str::to_string),
            category_id: "groceries".to_string(),
            amount,
            kind,
            posted_at: instant(posted_at),
        }
    }

    fn january() -> ReportingRange {
        ReportingRange::resolve(
            instant("2026-01-01T00:00:00Z"),
            instant("2026-01-31T23:59:59Z"),
        )
    }

    #[test]
    fn burn_rate_averages_are_strictly_ordered_when_spending_exists() {
        let rows = vec![
            row("2026-01-03T10:00:00Z", 3100, TransactionKind::Expense),
            row("2026-01-20T10:00:00Z", 9900, TransactionKind::Income),
        ];

        let burn = burn_rate(&rows, &january());
        assert_eq!(burn.total_spending, 3100);
        assert_eq!(burn.daily_average_spend, 100.0);
        assert!(burn.monthly_average_spend > burn.weekly_average_spend);
        assert!(burn.weekly_average_spend > burn.daily_average_spend);
        assert!(burn.daily_average_spend > 0.0);
    }

    #[test]
    fn burn_rate_is_all_zero_without_expenses() {
        let rows = vec![row("2026-01-03T10:00:00Z", 9900, TransactionKind::Income)];

        let burn = burn_rate(&rows, &january());
        assert_eq!(burn.total_spending, 0);
        assert_eq!(burn.daily_average_spend, 0.0);
        assert_eq!(burn.weekly_average_spend, 0.0);
        assert_eq!(burn.monthly_average_spend, 0.0);
    }

    #[test]
    fn transfer_deltas_depend_on_which_side_the_scope_sits() {
        let outgoing = transfer_row(
            "2026-01-05T10:00:00Z",
            500,
            TransactionKind::Transfer,
            Some("acct-2"),
        );

        assert_eq!(signed_delta(&outgoing, &Scope::Account("acct-1".to_string())), -500);
        assert_eq!(signed_delta(&outgoing, &Scope::Account("acct-2".to_string())), 500);
        assert_eq!(
            signed_delta(&outgoing, &Scope::Category("groceries".to_string())),
            0
        );
    }

    #[test]
    fn pulse_runs_a_balance_with_one_snapshot_per_active_day() {
        let scope = Scope::Account("acct-1".to_string());
        let rows = vec![
            row("2026-01-02T09:00:00Z", 10_000, TransactionKind::Income),
            row("2026-01-02T18:00:00Z", 2500, TransactionKind::Expense),
            row("2026-01-10T12:00:00Z", 1500, TransactionKind::Expense),
        ];

        let pulse = cash_flow_pulse(&rows, &scope, 1000);
        assert_eq!(pulse.starting_balance, 1000);
        assert_eq!(pulse.ending_balance, 7000);
        assert_eq!(pulse.days.len(), 2);
        assert_eq!(pulse.days[0].date, "2026-01-02");
        assert_eq!(pulse.days[0].balance, 8500);
        assert_eq!(pulse.days[1].date, "2026-01-10");
        assert_eq!(pulse.days[1].balance, 7000);
    }

    #[test]
    fn pulse_of_nothing_keeps_the_opening_balance() {
        let scope = Scope::Account("acct-1".to_string());
        let pulse = cash_flow_pulse(&[], &scope, 0);
        assert_eq!(pulse.starting_balance, 0);
        assert_eq!(pulse.ending_balance, 0);
        assert!(pulse.days.is_empty());
    }
}
