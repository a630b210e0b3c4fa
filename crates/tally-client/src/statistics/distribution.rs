use std::collections::BTreeMap;

use crate::statistics::types::LedgerTransaction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountShare {
    pub account_id: String,
    pub amount: i64,
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDistribution {
    pub total_spending: i64,
    pub accounts: Vec<AccountShare>,
}

/// Splits a category's expense spend across the accounts that carried it.
/// Percentages are reconciled with the largest-remainder method so they
/// always sum to exactly 100 when anything was spent. A clean 75/25 split
/// comes out as 75 and 25, never 74/26.
pub fn account_distribution(rows: &[LedgerTransaction]) -> AccountDistribution {
    let mut totals: BTreeMap<&str, i64> = BTreeMap::new();
    for row in rows {
        if !row.is_expense() {
            continue;
        }
        *totals.entry(row.account_id.as_str()).or_insert(0) += row.amount;
    }

    let total_spending: i64 = totals.values().sum();
    if total_spending == 0 {
        return AccountDistribution {
            total_spending: 0,
            accounts: Vec::new(),
        };
    }

    // Floor each share first, then hand the leftover points to the largest
    // remainders. Ties go to the bigger amount, then to account id order.
    let mut shares: Vec<(String, i64, i64, i64)> = totals
        .into_iter()
        .map(|(account_id, amount)| {
            let scaled = amount * 100;
            (
                account_id.to_string(),
                amount,
                scaled / total_spending,
                scaled % total_spending,
            )
        })
        .collect();

    let assigned: i64 = shares.iter().map(|(_, _, base, _)| base).sum();
    let mut leftover = 100 - assigned;

    shares.sort_by(|a, b| {
        b.3.cmp(&a.3)
            .then_with(|| b.1.cmp(&a.1))
            .then_with(|| a.0.cmp(&b.0))
    });
    for share in shares.iter_mut() {
        if leftover == 0 {
            break;
        }
        share.2 += 1;
        leftover -= 1;
    }

    shares.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    AccountDistribution {
        total_spending,
        accounts: shares
            .into_iter()
            .map(|(account_id, amount, percentage, _)| AccountShare {
                account_id,
                amount,
                percentage,
            })
            .collect(),
    }
}
