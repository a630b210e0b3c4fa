use crate::cli::{BudgetCommand, Commands, StatsCommand};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    let json = match command {
        Commands::Stats { command } => match command {
            StatsCommand::Heatmap { scope }
            | StatsCommand::Frequency { scope }
            | StatsCommand::Weekday { scope }
            | StatsCommand::Burn { scope }
            | StatsCommand::Cashflow { scope, .. }
            | StatsCommand::Velocity { scope }
            | StatsCommand::Distribution { scope }
            | StatsCommand::Sizes { scope }
            | StatsCommand::Overview { scope } => scope.json,
        },
        Commands::Budget { command } => match command {
            BudgetCommand::Health { scope, .. } | BudgetCommand::Utilization { scope } => {
                scope.json
            }
        },
    };

    if json { OutputMode::Json } else { OutputMode::Text }
}
