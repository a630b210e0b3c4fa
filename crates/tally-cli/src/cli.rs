use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstantArg(pub String);

impl InstantArg {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Accepts `YYYY-MM-DD` or a full `YYYY-MM-DDTHH:MM:SSZ` instant. Bare
/// dates expand to the start or end of the day downstream, depending on
/// which bound they fill.
pub fn parse_instant_arg(value: &str) -> Result<InstantArg, String> {
    if value.len() == 10 {
        if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
            return Err("date must use valid YYYY-MM-DD calendar values".to_string());
        }
        return Ok(InstantArg(value.to_string()));
    }

    if NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%SZ").is_err() {
        return Err("instant must use YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ format".to_string());
    }

    Ok(InstantArg(value.to_string()))
}

#[derive(Debug, Parser)]
#[command(
    name = "tally",
    version,
    about = "personal finance statistics layer",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scoped spending statistics over a date range
    #[command(arg_required_else_help = true)]
    Stats {
        #[command(subcommand)]
        command: StatsCommand,
    },
    /// Budget health and utilization for a scope
    #[command(arg_required_else_help = true)]
    Budget {
        #[command(subcommand)]
        command: BudgetCommand,
    },
}

/// Flags shared by every scoped statistics command: exactly one of
/// --account/--category (enforced downstream so the error envelope stays
/// uniform), plus the inclusive date range.
#[derive(Debug, Clone, Args)]
pub struct ScopeArgs {
    /// Account id to scope the statistics to
    #[arg(long)]
    pub account: Option<String>,
    /// Category id to scope the statistics to
    #[arg(long)]
    pub category: Option<String>,
    /// Range start (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ), inclusive
    #[arg(long, value_parser = parse_instant_arg)]
    pub from: InstantArg,
    /// Range end (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ), inclusive
    #[arg(long, value_parser = parse_instant_arg)]
    pub to: InstantArg,
    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum StatsCommand {
    /// Expense total and distinct category count for the scope
    Heatmap {
        #[command(flatten)]
        scope: ScopeArgs,
    },
    /// Transaction counts bucketed by hour of day
    Frequency {
        #[command(flatten)]
        scope: ScopeArgs,
    },
    /// Expense totals and averages by day of week
    Weekday {
        #[command(flatten)]
        scope: ScopeArgs,
    },
    /// Average expense spend per day, week, and month
    Burn {
        #[command(flatten)]
        scope: ScopeArgs,
    },
    /// Running balance across the range
    Cashflow {
        #[command(flatten)]
        scope: ScopeArgs,
        /// Balance carried into the range start
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        opening_balance: i64,
    },
    /// Expense spend per calendar month
    Velocity {
        #[command(flatten)]
        scope: ScopeArgs,
    },
    /// Category spend split across accounts with reconciled percentages
    Distribution {
        #[command(flatten)]
        scope: ScopeArgs,
    },
    /// Transaction size profile: count, average, median, min, max
    Sizes {
        #[command(flatten)]
        scope: ScopeArgs,
    },
    /// Every statistics dimension in one response
    Overview {
        #[command(flatten)]
        scope: ScopeArgs,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum BudgetCommand {
    /// Split applicable budgets into active and past groups
    Health {
        #[command(flatten)]
        scope: ScopeArgs,
        /// Evaluation instant for the active/past split (defaults to now)
        #[arg(long, value_parser = parse_instant_arg)]
        as_of: Option<InstantArg>,
    },
    /// Spend against each applicable budget's own period
    Utilization {
        #[command(flatten)]
        scope: ScopeArgs,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
