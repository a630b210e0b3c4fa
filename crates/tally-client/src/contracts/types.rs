use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DataRange {
    pub earliest: Option<String>,
    pub latest: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScopeDescriptor {
    pub kind: String,
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryHeatmapData {
    pub scope: ScopeDescriptor,
    pub from: String,
    pub to: String,
    pub total_spending: i64,
    pub category_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HourBucketRow {
    pub hour: u32,
    pub transaction_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeFrequencyData {
    pub scope: ScopeDescriptor,
    pub from: String,
    pub to: String,
    pub total_transactions: i64,
    pub buckets: Vec<HourBucketRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayOfWeekRow {
    pub day_of_week: String,
    pub total_amount: i64,
    pub transaction_count: i64,
    pub average_amount: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayOfWeekData {
    pub scope: ScopeDescriptor,
    pub from: String,
    pub to: String,
    pub days: Vec<DayOfWeekRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BurnRateData {
    pub scope: ScopeDescriptor,
    pub from: String,
    pub to: String,
    pub total_spending: i64,
    pub daily_average_spend: f64,
    pub weekly_average_spend: f64,
    pub monthly_average_spend: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyBalanceRow {
    pub date: String,
    pub balance: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CashFlowData {
    pub scope: ScopeDescriptor,
    pub from: String,
    pub to: String,
    pub starting_balance: i64,
    pub ending_balance: i64,
    pub days: Vec<DailyBalanceRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthAmountRow {
    pub month: String,
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyVelocityData {
    pub scope: ScopeDescriptor,
    pub from: String,
    pub to: String,
    pub months: Vec<MonthAmountRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountShareRow {
    pub account_id: String,
    pub account_name: String,
    pub amount: i64,
    pub percentage: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountDistributionData {
    pub scope: ScopeDescriptor,
    pub from: String,
    pub to: String,
    pub total_spending: i64,
    pub accounts: Vec<AccountShareRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionSizeData {
    pub scope: ScopeDescriptor,
    pub from: String,
    pub to: String,
    pub transaction_count: i64,
    pub average_amount: i64,
    pub median_amount: i64,
    pub min_amount: i64,
    pub max_amount: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetPeriodRow {
    pub budget_id: String,
    pub name: String,
    pub limit: i64,
    pub period_start: String,
    pub period_end: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetHealthData {
    pub scope: ScopeDescriptor,
    pub from: String,
    pub to: String,
    pub as_of: String,
    pub active: Vec<BudgetPeriodRow>,
    pub past: Vec<BudgetPeriodRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetUtilizationRow {
    pub budget_id: String,
    pub name: String,
    pub limit: i64,
    pub spent: i64,
    pub utilization: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetUtilizationData {
    pub scope: ScopeDescriptor,
    pub from: String,
    pub to: String,
    pub budgets: Vec<BudgetUtilizationRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverviewData {
    pub scope: ScopeDescriptor,
    pub from: String,
    pub to: String,
    pub category_heatmap: CategoryHeatmapData,
    pub time_frequency: TimeFrequencyData,
    pub day_of_week: DayOfWeekData,
    pub burn_rate: BurnRateData,
    pub cash_flow: CashFlowData,
    pub monthly_velocity: MonthlyVelocityData,
    pub account_distribution: AccountDistributionData,
    pub transaction_sizes: TransactionSizeData,
    pub budget_utilization: BudgetUtilizationData,
}
