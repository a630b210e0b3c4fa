use std::collections::BTreeSet;

use crate::statistics::types::LedgerTransaction;

/// Spending intensity for one scope: expense total plus the number of
/// distinct categories that spending landed in. Income and transfers never
/// contribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryHeatmap {
    pub total_spending: i64,
    pub category_count: i64,
}

pub fn category_heatmap(rows: &[LedgerTransaction]) -> CategoryHeatmap {
    let mut total_spending: i64 = 0;
    let mut categories: BTreeSet<&str> = BTreeSet::new();

    for row in rows {
        if !row.is_expense() {
            continue;
        }
        total_spending += row.amount;
        categories.insert(row.category_id.as_str());
    }

    CategoryHeatmap {
        total_spending,
        category_count: categories.len() as i64,
    }
}
