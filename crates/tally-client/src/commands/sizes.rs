use crate::ClientResult;
use crate::commands::common::{ScopeQueryOptions, load_scope_snapshot, range_strings, scope_descriptor};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::TransactionSizeData;
use crate::statistics::sizing::transaction_sizing;

const COMMAND: &str = "stats sizes";

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
    let sizing = transaction_sizing(&snapshot.transactions);
    let (from, to) = range_strings(&snapshot.range);

    let data = TransactionSizeData {
        scope: scope_descriptor(&snapshot.scope),
        from,
        to,
        transaction_count: sizing.transaction_count,
        average_amount: sizing.average_amount,
        median_amount: sizing.median_amount,
        min_amount: sizing.min_amount,
        max_amount: sizing.max_amount,
    };

    success(COMMAND, data)
}
