use crate::ClientResult;
use crate::commands::budgets::utilization_rows;
use crate::commands::common::{ScopeQueryOptions, load_scope_snapshot, range_strings, scope_descriptor};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{
    AccountDistributionData, AccountShareRow, BudgetUtilizationData, BurnRateData, CashFlowData,
    CategoryHeatmapData, DailyBalanceRow, DayOfWeekData, DayOfWeekRow, HourBucketRow,
    MonthAmountRow, MonthlyVelocityData, OverviewData, TimeFrequencyData, TransactionSizeData,
};
use crate::statistics::burn::{burn_rate, cash_flow_pulse};
use crate::statistics::distribution::account_distribution;
use crate::statistics::frequency::{day_of_week_pattern, time_of_day_frequency};
use crate::statistics::heatmap::category_heatmap;
use crate::statistics::query::{fetch_account_names, fetch_budgets};
use crate::statistics::sizing::transaction_sizing;
use crate::statistics::velocity::monthly_velocity;

const COMMAND: &str = "stats overview";

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

/// The comprehensive view. Every dimension folds the same snapshot read,
/// so the composite can never disagree with the per-dimension commands
/// for a fixed ledger state.
#[doc(hidden)]
pub fn run_with_options(options: ScopeQueryOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let snapshot = load_scope_snapshot(&options, COMMAND)?;
    let (from, to) = range_strings(&snapshot.range);
    let scope = scope_descriptor(&snapshot.scope);

    let heatmap = category_heatmap(&snapshot.transactions);
    let frequency = time_of_day_frequency(&snapshot.transactions);
    let pattern = day_of_week_pattern(&snapshot.transactions);
    let burn = burn_rate(&snapshot.transactions, &snapshot.range);
    let pulse = cash_flow_pulse(&snapshot.transactions, &snapshot.scope, 0);
    let months = monthly_velocity(&snapshot.transactions, &snapshot.range);
    let distribution = account_distribution(&snapshot.transactions);
    let sizing = transaction_sizing(&snapshot.transactions);

    let account_ids: Vec<String> = distribution
        .accounts
        .iter()
        .map(|share| share.account_id.clone())
        .collect();
    let names = fetch_account_names(&snapshot.connection, &snapshot.db_path, &account_ids)?;

    let budgets = fetch_budgets(
        &snapshot.connection,
        &snapshot.db_path,
        &snapshot.scope,
        &snapshot.range,
    )?;
    let budget_rows = utilization_rows(
        &snapshot.connection,
        &snapshot.db_path,
        &snapshot.scope,
        &budgets,
    )?;

    let data = OverviewData {
        scope: scope.clone(),
        from: from.clone(),
        to: to.clone(),
        category_heatmap: CategoryHeatmapData {
            scope: scope.clone(),
            from: from.clone(),
            to: to.clone(),
            total_spending: heatmap.total_spending,
            category_count: heatmap.category_count,
        },
        time_frequency: TimeFrequencyData {
            scope: scope.clone(),
            from: from.clone(),
            to: to.clone(),
            total_transactions: frequency.total_transactions,
            buckets: frequency
                .buckets
                .into_iter()
                .map(|bucket| HourBucketRow {
                    hour: bucket.hour,
                    transaction_count: bucket.transaction_count,
                })
                .collect(),
        },
        day_of_week: DayOfWeekData {
            scope: scope.clone(),
            from: from.clone(),
            to: to.clone(),
            days: pattern
                .into_iter()
                .map(|day| DayOfWeekRow {
                    day_of_week: day.day_of_week.to_string(),
                    total_amount: day.total_amount,
                    transaction_count: day.transaction_count,
                    average_amount: day.average_amount,
                })
                .collect(),
        },
        burn_rate: BurnRateData {
            scope: scope.clone(),
            from: from.clone(),
            to: to.clone(),
            total_spending: burn.total_spending,
            daily_average_spend: burn.daily_average_spend,
            weekly_average_spend: burn.weekly_average_spend,
            monthly_average_spend: burn.monthly_average_spend,
        },
        cash_flow: CashFlowData {
            scope: scope.clone(),
            from: from.clone(),
            to: to.clone(),
            starting_balance: pulse.starting_balance,
            ending_balance: pulse.ending_balance,
            days: pulse
                .days
                .into_iter()
                .map(|day| DailyBalanceRow {
                    date: day.date,
                    balance: day.balance,
                })
                .collect(),
        },
        monthly_velocity: MonthlyVelocityData {
            scope: scope.clone(),
            from: from.clone(),
            to: to.clone(),
            months: months
                .into_iter()
                .map(|month| MonthAmountRow {
                    month: month.month,
                    amount: month.amount,
                })
                .collect(),
        },
        account_distribution: AccountDistributionData {
            scope: scope.clone(),
            from: from.clone(),
            to: to.clone(),
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
        },
        transaction_sizes: TransactionSizeData {
            scope: scope.clone(),
            from: from.clone(),
            to: to.clone(),
            transaction_count: sizing.transaction_count,
            average_amount: sizing.average_amount,
            median_amount: sizing.median_amount,
            min_amount: sizing.min_amount,
            max_amount: sizing.max_amount,
        },
        budget_utilization: BudgetUtilizationData {
            scope,
            from,
            to,
            budgets: budget_rows,
        },
    };

    success(COMMAND, data)
}
