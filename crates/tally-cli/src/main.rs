mod cli;
mod dispatch;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use stdout_io::write_stdout_text;
use tally_client::ClientError;

const ROOT_HELP: &str = "Tally - personal finance statistics layer

Usage:
  tally <command>

Start here:
  tally stats overview --account <id> --from <date> --to <date>
  tally stats --help
  tally budget --help
";

const TOP_LEVEL_HELP: &str = "Tally — personal finance statistics layer

USAGE: tally <command>

Scoped statistics (pass exactly one of --account/--category, plus --from/--to):
  tally stats heatmap       Expense total and distinct category count
  tally stats frequency     Transaction counts by hour of day
  tally stats weekday       Expense totals and averages by day of week
  tally stats burn          Average spend per day, week, and month
  tally stats cashflow      Running balance across the range
  tally stats velocity      Expense spend per calendar month
  tally stats distribution  Category spend split across accounts
  tally stats sizes         Transaction size profile with median
  tally stats overview      Every dimension in one response

Budgets:
  tally budget health       Active and past budgets for the scope
  tally budget utilization  Spend against each budget's own period

Dates accept YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ; both bounds are inclusive,
and a reversed pair is swapped rather than rejected.

Add --json to any command for machine-readable output.
Run `tally <command> --help` for command usage.
";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let parsed = cli::Cli::try_parse();
    let cli = match parsed {
        Ok(value) => value,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                if matches!(
                    err.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) && is_top_level_help_request(&raw_args)
                {
                    if write_stdout_text(TOP_LEVEL_HELP).is_err() {
                        return Err(ExitCode::from(2));
                    }
                } else if write_stdout_text(&err.to_string()).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }

            let command_hint = if matches!(
                err.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::InvalidValue
                    | ErrorKind::ValueValidation
                    | ErrorKind::WrongNumberOfValues
                    | ErrorKind::UnknownArgument
                    | ErrorKind::InvalidSubcommand
            ) {
                command_path_from_args(&raw_args)
            } else {
                None
            };
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                ClientError::invalid_argument_for_command(&clean_message, command_hint.as_deref());
            let mode = infer_requested_output_mode(&raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Err(ExitCode::from(1));
        }
    };
    let mode = output::mode_for_command(&cli.command);

    match dispatch::dispatch(&cli) {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Strips clap's trailing boilerplate (Usage line, "For more information"
/// hint) so the "What to do next" section is the single source of guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

/// Builds the subcommand path from raw CLI args for use in help hints.
fn command_path_from_args(raw_args: &[String]) -> Option<String> {
    let non_flags: Vec<&str> = raw_args
        .iter()
        .skip(1)
        .filter(|value| !value.starts_with('-'))
        .map(String::as_str)
        .collect();
    if non_flags.is_empty() {
        return None;
    }

    let hint = match non_flags.as_slice() {
        ["stats", "heatmap", ..] => Some("stats heatmap"),
        ["stats", "frequency", ..] => Some("stats frequency"),
        ["stats", "weekday", ..] => Some("stats weekday"),
        ["stats", "burn", ..] => Some("stats burn"),
        ["stats", "cashflow", ..] => Some("stats cashflow"),
        ["stats", "velocity", ..] => Some("stats velocity"),
        ["stats", "distribution", ..] => Some("stats distribution"),
        ["stats", "sizes", ..] => Some("stats sizes"),
        ["stats", "overview", ..] => Some("stats overview"),
        ["stats", ..] => Some("stats"),
        ["budget", "health", ..] => Some("budget health"),
        ["budget", "utilization", ..] => Some("budget utilization"),
        ["budget", ..] => Some("budget"),
        _ => None,
    };
    hint.map(std::string::ToString::to_string)
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    if is_internal_error(error) {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

fn is_internal_error(error: &ClientError) -> bool {
    error.code.starts_with("internal_")
        || matches!(
            error.code.as_str(),
            "ledger_init_permission_denied"
                | "ledger_locked"
                | "ledger_corrupt"
                | "migration_failed"
                | "ledger_init_failed"
        )
}
