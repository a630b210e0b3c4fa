use chrono::{DateTime, Utc};

use crate::statistics::types::{BudgetRecord, BudgetStatus, LedgerTransaction};

#[derive(Debug, Clone)]
pub struct BudgetHealth {
    pub active: Vec<BudgetRecord>,
    pub past: Vec<BudgetRecord>,
}

/// Splits budgets into active and past groups. A budget counts as active
/// when its period has not ended at the evaluation instant, or when its
/// status flag says so regardless of dates. The instant is an explicit
/// input so the split stays deterministic.
pub fn budget_health(budgets: &[BudgetRecord], as_of: DateTime<Utc>) -> BudgetHealth {
    let mut active = Vec::new();
    let mut past = Vec::new();

    for budget in budgets {
        if budget.period_end >= as_of || budget.status == BudgetStatus::Active {
            active.push(budget.clone());
        } else {
            past.push(budget.clone());
        }
    }

    BudgetHealth { active, past }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetUtilization {
    pub budget_id: String,
    pub name: String,
    pub limit: i64,
    pub spent: i64,
    pub utilization: f64,
}

/// Measures spend against each budget over the budget's OWN period, not
/// the outer query window. The supplied rows must therefore cover the
/// envelope of all budget periods. Utilization is unclamped; over-budget
/// periods read above 1.0. A zero limit reads as 0 rather than dividing.
pub fn budget_utilization(
    budgets: &[BudgetRecord],
    rows: &[LedgerTransaction],
) -> Vec<BudgetUtilization> {
    budgets
        .iter()
        .map(|budget| {
            let spent: i64 = rows
                .iter()
                .filter(|row| row.is_expense())
                .filter(|row| matches_budget(row, budget))
                .filter(|row| {
                    row.posted_at >= budget.period_start && row.posted_at <= budget.period_end
                })
                .map(|row| row.amount)
                .sum();

            let utilization = if budget.amount_limit > 0 {
                spent as f64 / budget.amount_limit as f64
            } else {
                0.0
            };

            BudgetUtilization {
                budget_id: budget.budget_id.clone(),
                name: budget.name.clone(),
                limit: budget.amount_limit,
                spent,
                utilization,
            }
        })
        .collect()
}

fn matches_budget(row: &LedgerTransaction, budget: &BudgetRecord) -> bool {
    if let Some(account_id) = &budget.account_id
        && row.account_id != *account_id
    {
        return false;
    }
    if let Some(category_id) = &budget.category_id
        && row.category_id != *category_id
    {
        return false;
    }
    budget.account_id.is_some() || budget.category_id.is_some()
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::{budget_health, budget_utilization};
    use crate::statistics::range::parse_stored_instant;
    use crate::statistics::types::{
        BudgetRecord, BudgetStatus, LedgerTransaction, TransactionKind,
    };

    fn instant(value: &str) -> DateTime<Utc> {
        let parsed = parse_stored_instant(value);
        assert!(parsed.is_some(), "bad test instant {value}");
        parsed.unwrap_or_default()
    }

    fn budget(budget_id: &str, start: &str, end: &str, status: BudgetStatus) -> BudgetRecord {
        BudgetRecord {
            budget_id: budget_id.to_string(),
            name: format!("Budget {budget_id}"),
            account_id: None,
            category_id: Some("groceries".to_string()),
            amount_limit: 10_000,
            period_start: instant(start),
            period_end: instant(end),
            status,
        }
    }

    fn expense(posted_at: &str, amount: i64, category_id: &str) -> LedgerTransaction {
        LedgerTransaction {
            txn_id: format!("txn-{posted_at}-{amount}"),
            account_id: "acct-1".to_string(),
            destination_account_id: None,
            category_id: category_id.to_string(),
            amount,
            kind: TransactionKind::Expense,
            posted_at: instant(posted_at),
        }
    }

    #[test]
    fn health_splits_on_period_end_at_the_evaluation_instant() {
        let budgets = vec![
            budget(
                "b-current",
                "2026-01-01T00:00:00Z",
                "2026-01-31T23:59:59Z",
                BudgetStatus::Inactive,
            ),
            budget(
                "b-ended",
                "2025-11-01T00:00:00Z",
                "2025-11-30T23:59:59Z",
                BudgetStatus::Inactive,
            ),
        ];

        let health = budget_health(&budgets, instant("2026-01-15T12:00:00Z"));
        assert_eq!(health.active.len(), 1);
        assert_eq!(health.active[0].budget_id, "b-current");
        assert_eq!(health.past.len(), 1);
        assert_eq!(health.past[0].budget_id, "b-ended");
    }

    #[test]
    fn active_status_keeps_an_ended_budget_in_the_active_group() {
        let budgets = vec![budget(
            "b-flagged",
            "2025-11-01T00:00:00Z",
            "2025-11-30T23:59:59Z",
            BudgetStatus::Active,
        )];

        let health = budget_health(&budgets, instant("2026-01-15T12:00:00Z"));
        assert_eq!(health.active.len(), 1);
        assert!(health.past.is_empty());
    }

    #[test]
    fn utilization_measures_the_budgets_own_period() {
        let budgets = vec![budget(
            "b-jan",
            "2026-01-01T00:00:00Z",
            "2026-01-31T23:59:59Z",
            BudgetStatus::Active,
        )];
        let rows = vec![
            expense("2026-01-10T10:00:00Z", 2500, "groceries"),
            expense("2026-02-10T10:00:00Z", 9999, "groceries"),
            expense("2026-01-12T10:00:00Z", 400, "transit"),
        ];

        let utilization = budget_utilization(&budgets, &rows);
        assert_eq!(utilization.len(), 1);
        assert_eq!(utilization[0].spent, 2500);
        assert_eq!(utilization[0].utilization, 0.25);
    }

    #[test]
    fn over_budget_utilization_is_not_clamped() {
        let budgets = vec![budget(
            "b-jan",
            "2026-01-01T00:00:00Z",
            "2026-01-31T23:59:59Z",
            BudgetStatus::Active,
        )];
        let rows = vec![expense("2026-01-10T10:00:00Z", 15_000, "groceries")];

        let utilization = budget_utilization(&budgets, &rows);
        assert_eq!(utilization[0].spent, 15_000);
        assert_eq!(utilization[0].utilization, 1.5);
    }

    #[test]
    fn zero_limit_reads_as_zero_utilization() {
        let mut zero_limit = budget(
            "b-zero",
            "2026-01-01T00:00:00Z",
            "2026-01-31T23:59:59Z",
            BudgetStatus::Active,
        );
        zero_limit.amount_limit = 0;
        let rows = vec![expense("2026-01-10T10:00:00Z", 500, "groceries")];

        let utilization = budget_utilization(&[zero_limit], &rows);
        assert_eq!(utilization[0].spent, 500);
        assert_eq!(utilization[0].utilization, 0.0);
    }

    #[test]
    fn account_scoped_budgets_match_on_the_account() {
        let mut account_budget = budget(
            "b-acct",
            "2026-01-01T00:00:00Z",
            "2026-01-31T23:59:59Z",
            BudgetStatus::Active,
        );
        account_budget.account_id = Some("acct-1".to_string());
        account_budget.category_id = None;

        let mut foreign = expense("2026-01-10T10:00:00Z", 700, "groceries");
        foreign.account_id = "acct-2".to_string();
        let rows = vec![expense("2026-01-10T10:00:00Z", 300, "transit"), foreign];

        let utilization = budget_utilization(&[account_budget], &rows);
        assert_eq!(utilization[0].spent, 300);
    }
}
