use std::collections::BTreeMap;

use crate::statistics::range::{ReportingRange, month_key};
use crate::statistics::types::LedgerTransaction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTotal {
    pub month: String,
    pub amount: i64,
}

/// Expense spend per calendar month (UTC), one entry for every month the
/// window touches in chronological order. Quiet months show up with 0 so
/// the series never has gaps.
pub fn monthly_velocity(rows: &[LedgerTransaction], range: &ReportingRange) -> Vec<MonthTotal> {
    let mut totals: BTreeMap<String, i64> = BTreeMap::new();
    for row in rows {
        if !row.is_expense() {
            continue;
        }
        *totals.entry(month_key(&row.posted_at)).or_insert(0) += row.amount;
    }

    range
        .month_keys()
        .into_iter()
        .map(|month| {
            let amount = totals.get(&month).copied().unwrap_or(0);
            MonthTotal { month, amount }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::monthly_velocity;
    use crate::statistics::range::{ReportingRange, parse_stored_instant};
    use crate::statistics::types::{LedgerTransaction, TransactionKind};

    fn instant(value: &str) -> DateTime<Utc> {
        let parsed = parse_stored_instant(value);
        assert!(parsed.is_some(), "bad test instant {value}");
        parsed.unwrap_or_default()
    }

    fn row(posted_at: &str, amount: i64, kind: TransactionKind) -> LedgerTransaction {
        LedgerTransaction {
            txn_id: format!("txn-{posted_at}-{amount}"),
            account_id: "acct-1".to_string(),
            destination_account_id: None,
            category_id: "groceries".to_string(),
            amount,
            kind,
            posted_at: instant(posted_at),
        }
    }

    #[test]
    fn quiet_months_are_zero_filled_in_order() {
        let range = ReportingRange::resolve(
            instant("2025-12-01T00:00:00Z"),
            instant("2026-03-31T23:59:59Z"),
        );
        let rows = vec![
            row("2025-12-10T10:00:00Z", 4000, TransactionKind::Expense),
            row("2026-02-01T10:00:00Z", 1500, TransactionKind::Expense),
            row("2026-02-20T10:00:00Z", 500, TransactionKind::Expense),
            row("2026-01-15T10:00:00Z", 9000, TransactionKind::Income),
        ];

        let months = monthly_velocity(&rows, &range);
        let keys: Vec<&str> = months.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(keys, vec!["2025-12", "2026-01", "2026-02", "2026-03"]);
        assert_eq!(months[0].amount, 4000);
        assert_eq!(months[1].amount, 0);
        assert_eq!(months[2].amount, 2000);
        assert_eq!(months[3].amount, 0);
    }

    #[test]
    fn single_month_range_yields_one_entry() {
        let range = ReportingRange::resolve(
            instant("2026-01-05T00:00:00Z"),
            instant("2026-01-20T23:59:59Z"),
        );

        let months = monthly_velocity(&[], &range);
        assert_eq!(months.len(), 1);
        assert_eq!(months[0].month, "2026-01");
        assert_eq!(months[0].amount, 0);
    }
}
