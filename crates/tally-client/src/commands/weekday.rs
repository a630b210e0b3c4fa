use crate::ClientResult;
use crate::commands::common::{ScopeQueryOptions, load_scope_snapshot, range_strings, scope_descriptor};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{DayOfWeekData, DayOfWeekRow};
use crate::statistics::frequency::day_of_week_pattern;

const COMMAND: &str = "stats weekday";

pub fn run(
    account: Option<&str>,
    category: Option<&str>,
    from: &str,
    to: &str,
) -> ClientResult<SuccessEnvelope> {
    run_with_options(ScopeQueryOptions {
        account: account.map(str::to_string),
        category: category.map(str::to_string),
        from: from.to_string(),
        to: to.to_string(),
        home_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: ScopeQueryOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let snapshot = load_scope_snapshot(&options, COMMAND)?;
    let pattern = day_of_week_pattern(&snapshot.transactions);
    let (from, to) = range_strings(&snapshot.range);

    let data = DayOfWeekData {
        scope: scope_descriptor(&snapshot.scope),
        from,
        to,
        days: pattern
            .into_iter()
            .map(|day| DayOfWeekRow {
                day_of_week: day.day_of_week.to_string(),
                total_amount: day.total_amount,
                transaction_count: day.transaction_count,
                average_amount: day.average_amount,
            })
            .collect(),
    };

    success(COMMAND, data)
}
