use crate::ClientResult;
use crate::commands::common::{ScopeQueryOptions, load_scope_snapshot, range_strings, scope_descriptor};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{MonthAmountRow, MonthlyVelocityData};
use crate::statistics::velocity::monthly_velocity;

const COMMAND: &str = "stats velocity";

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
    let months = monthly_velocity(&snapshot.transactions, &snapshot.range);
    let (from, to) = range_strings(&snapshot.range);

    let data = MonthlyVelocityData {
        scope: scope_descriptor(&snapshot.scope),
        from,
        to,
        months: months
            .into_iter()
            .map(|month| MonthAmountRow {
                month: month.month,
                amount: month.amount,
            })
            .collect(),
    };

    success(COMMAND, data)
}
