use crate::ClientResult;
use crate::commands::common::{ScopeQueryOptions, load_scope_snapshot, range_strings, scope_descriptor};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::CategoryHeatmapData;
use crate::statistics::heatmap::category_heatmap;

const COMMAND: &str = "stats heatmap";

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
    let heatmap = category_heatmap(&snapshot.transactions);
    let (from, to) = range_strings(&snapshot.range);

    let data = CategoryHeatmapData {
        scope: scope_descriptor(&snapshot.scope),
        from,
        to,
        total_spending: heatmap.total_spending,
        category_count: heatmap.category_count,
    };

    success(COMMAND, data)
}
