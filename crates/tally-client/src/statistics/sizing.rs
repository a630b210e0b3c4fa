use crate::statistics::types::LedgerTransaction;

/// Size profile of expense transactions in a window. Average and median
/// use floor division; the even-count median is the floor midpoint of the
/// two middle sorted values. Every field is 0 when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSizing {
    pub transaction_count: i64,
    pub average_amount: i64,
    pub median_amount: i64,
    pub min_amount: i64,
    pub max_amount: i64,
}

pub fn transaction_sizing(rows: &[LedgerTransaction]) -> TransactionSizing {
    let mut amounts: Vec<i64> = rows
        .iter()
        .filter(|row| row.is_expense())
        .map(|row| row.amount)
        .collect();

    if amounts.is_empty() {
        return TransactionSizing {
            transaction_count: 0,
            average_amount: 0,
            median_amount: 0,
            min_amount: 0,
            max_amount: 0,
        };
    }

    amounts.sort_unstable();
    let count = amounts.len();
    let total: i64 = amounts.iter().sum();
    let median_amount = if count % 2 == 1 {
        amounts[count / 2]
    } else {
        (amounts[count / 2 - 1] + amounts[count / 2]) / 2
    };

    TransactionSizing {
        transaction_count: count as i64,
        average_amount: total / count as i64,
        median_amount,
        min_amount: amounts[0],
        max_amount: amounts[count - 1],
    }
}
