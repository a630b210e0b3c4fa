use chrono::{Datelike, Timelike};

use crate::statistics::types::LedgerTransaction;

pub const DAY_LABELS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// One hour-of-day bucket. The frequency view always carries all 24,
/// zero-filled, so callers never have to special-case quiet hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourBucket {
    pub hour: u32,
    pub transaction_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFrequency {
    pub total_transactions: i64,
    pub buckets: Vec<HourBucket>,
}

/// Counts every transaction regardless of kind, bucketed by UTC hour of
/// the posting instant.
pub fn time_of_day_frequency(rows: &[LedgerTransaction]) -> TimeFrequency {
    let mut counts = [0_i64; 24];
    for row in rows {
        counts[row.posted_at.hour() as usize] += 1;
    }

    let buckets = counts
        .iter()
        .enumerate()
        .map(|(hour, count)| HourBucket {
            hour: hour as u32,
            transaction_count: *count,
        })
        .collect();

    TimeFrequency {
        total_transactions: rows.len() as i64,
        buckets,
    }
}

/// One weekday row of the pattern view. Averages use floor division over
/// the day's expense count, 0 when the day is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub day_of_week: &'static str,
    pub total_amount: i64,
    pub transaction_count: i64,
    pub average_amount: i64,
}

/// Expense spending folded by UTC weekday. Always exactly 7 rows in
/// Sunday..Saturday order, zero-filled where nothing happened.
pub fn day_of_week_pattern(rows: &[LedgerTransaction]) -> Vec<DaySummary> {
    let mut totals = [0_i64; 7];
    let mut counts = [0_i64; 7];

    for row in rows {
        if !row.is_expense() {
            continue;
        }
        let day = row.posted_at.weekday().num_days_from_sunday() as usize;
        totals[day] += row.amount;
        counts[day] += 1;
    }

    (0..7)
        .map(|day| DaySummary {
            day_of_week: DAY_LABELS[day],
            total_amount: totals[day],
            transaction_count: counts[day],
            average_amount: if counts[day] > 0 {
                totals[day] / counts[day]
            } else {
                0
            },
        })
        .collect()
}
