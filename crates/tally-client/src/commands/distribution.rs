use crate::ClientResult;
use crate::commands::common::{ScopeQueryOptions, load_scope_snapshot, range_strings, scope_descriptor};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{AccountDistributionData, AccountShareRow};
use crate::statistics::distribution::account_distribution;
use crate::statistics::query::fetch_account_names;

const COMMAND: &str = "stats distribution";

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
    let distribution = account_distribution(&snapshot.transactions);

    let account_ids: Vec<String> = distribution
        .accounts
        .iter()
        .map(|share| share.account_id.clone())
        .collect();
    let names = fetch_account_names(&snapshot.connection, &snapshot.db_path, &account_ids)?;

    let (from, to) = range_strings(&snapshot.range);
    let data = AccountDistributionData {
        scope: scope_descriptor(&snapshot.scope),
        from,
        to,
        total_spending: distribution.total_spending,
        accounts: distribution
            .accounts
            .into_iter()
            .map(|share| {
                let account_name = names
                    .get(&share.account_id)
                    .cloned()
                    .unwrap_or_else(|| share.account_id.clone());
                AccountShareRow {
                    account_id: share.account_id,
                    account_name,
                    amount: share.amount,
                    percentage: share.percentage,
                }
            })
            .collect(),
    };

    success(COMMAND, data)
}
