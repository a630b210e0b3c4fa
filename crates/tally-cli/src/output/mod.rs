mod budget_text;
mod error_text;
mod format;
mod json;
mod mode;
mod stats_text;

use std::io;

use tally_client::{ClientError, SuccessEnvelope};

pub use mode::{OutputMode, mode_for_command};

use crate::stdout_io::write_stdout_text;

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    write_stdout_text(&body)?;
    write_stdout_text("\n")
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    write_stdout_text(&body)?;
    write_stdout_text("\n")
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "stats heatmap" => stats_text::render_heatmap(&success.data),
        "stats frequency" => stats_text::render_frequency(&success.data),
        "stats weekday" => stats_text::render_weekday(&success.data),
        "stats burn" => stats_text::render_burn(&success.data),
        "stats cashflow" => stats_text::render_cashflow(&success.data),
        "stats velocity" => stats_text::render_velocity(&success.data),
        "stats distribution" => stats_text::render_distribution(&success.data),
        "stats sizes" => stats_text::render_sizes(&success.data),
        "stats overview" => stats_text::render_overview(&success.data),
        "budget health" => budget_text::render_health(&success.data),
        "budget utilization" => budget_text::render_utilization(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
