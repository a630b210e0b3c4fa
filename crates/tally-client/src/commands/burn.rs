use crate::ClientResult;
use crate::commands::common::{ScopeQueryOptions, load_scope_snapshot, range_strings, scope_descriptor};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::BurnRateData;
use crate::statistics::burn::burn_rate;

const COMMAND: &str = "stats burn";

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
    let burn = burn_rate(&snapshot.transactions, &snapshot.range);
    let (from, to) = range_strings(&snapshot.range);

    let data = BurnRateData {
        scope: scope_descriptor(&snapshot.scope),
        from,
        to,
        total_spending: burn.total_spending,
        daily_average_spend: burn.daily_average_spend,
        weekly_average_spend: burn.weekly_average_spend,
        monthly_average_spend: burn.monthly_average_spend,
    };

    success(COMMAND, data)
}
