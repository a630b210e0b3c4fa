use crate::ClientResult;
use crate::commands::common::{ScopeQueryOptions, load_scope_snapshot, range_strings, scope_descriptor};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{HourBucketRow, TimeFrequencyData};
use crate::statistics::frequency::time_of_day_frequency;

const COMMAND: &str = "stats frequency";

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
    let frequency = time_of_day_frequency(&snapshot.transactions);
    let (from, to) = range_strings(&snapshot.range);

    let data = TimeFrequencyData {
        scope: scope_descriptor(&snapshot.scope),
        from,
        to,
        total_transactions: frequency.total_transactions,
        buckets: frequency
            .buckets
            .into_iter()
            .map(|bucket| HourBucketRow {
                hour: bucket.hour,
                transaction_count: bucket.transaction_count,
            })
            .collect(),
    };

    success(COMMAND, data)
}
