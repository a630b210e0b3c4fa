use tally_client::commands;
use tally_client::{ClientResult, SuccessEnvelope};

use crate::cli::{BudgetCommand, Cli, Commands, ScopeArgs, StatsCommand};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Stats { command } => match command {
            StatsCommand::Heatmap { scope } => {
                let (account, category, from, to) = scope_values(scope);
                commands::heatmap::run(account, category, from, to)
            }
            StatsCommand::Frequency { scope } => {
                let (account, category, from, to) = scope_values(scope);
                commands::frequency::run(account, category, from, to)
            }
            StatsCommand::Weekday { scope } => {
                let (account, category, from, to) = scope_values(scope);
                commands::weekday::run(account, category, from, to)
            }
            StatsCommand::Burn { scope } => {
                let (account, category, from, to) = scope_values(scope);
                commands::burn::run(account, category, from, to)
            }
            StatsCommand::Cashflow {
                scope,
                opening_balance,
            } => {
                let (account, category, from, to) = scope_values(scope);
                commands::cashflow::run(account, category, from, to, *opening_balance)
            }
            StatsCommand::Velocity { scope } => {
                let (account, category, from, to) = scope_values(scope);
                commands::velocity::run(account, category, from, to)
            }
            StatsCommand::Distribution { scope } => {
                let (account, category, from, to) = scope_values(scope);
                commands::distribution::run(account, category, from, to)
            }
            StatsCommand::Sizes { scope } => {
                let (account, category, from, to) = scope_values(scope);
                commands::sizes::run(account, category, from, to)
            }
            StatsCommand::Overview { scope } => {
                let (account, category, from, to) = scope_values(scope);
                commands::overview::run(account, category, from, to)
            }
        },
        Commands::Budget { command } => match command {
            BudgetCommand::Health { scope, as_of } => {
                let (account, category, from, to) = scope_values(scope);
                let as_of_value = as_of.as_ref().map(|value| value.as_str());
                commands::budgets::run_health(account, category, from, to, as_of_value)
            }
            BudgetCommand::Utilization { scope } => {
                let (account, category, from, to) = scope_values(scope);
                commands::budgets::run_utilization(account, category, from, to)
            }
        },
    }
}

fn scope_values(scope: &ScopeArgs) -> (Option<&str>, Option<&str>, &str, &str) {
    (
        scope.account.as_deref(),
        scope.category.as_deref(),
        scope.from.as_str(),
        scope.to.as_str(),
    )
}
