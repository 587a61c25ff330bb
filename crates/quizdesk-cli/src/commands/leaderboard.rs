//! The `quizdesk leaderboard` command.

use std::path::PathBuf;

use anyhow::Result;

use quizdesk_core::statistics::leaderboard;
use quizdesk_report::{render_leaderboard, ReportFormat};
use quizdesk_store::ResultLog;

use crate::config::load_config_from;

pub fn execute(
    subject: Option<String>,
    top: Option<usize>,
    results_file: Option<PathBuf>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = format
        .parse::<ReportFormat>()
        .map_err(|e| anyhow::anyhow!(e))?;

    let log = ResultLog::new(results_file.unwrap_or(config.results_file));
    print_leaderboard(
        &log,
        subject.as_deref(),
        top.unwrap_or(config.leaderboard_size),
        format,
    )
}

/// Load the log and print the ranked leaderboard.
///
/// Shared by `leaderboard` and the interactive menu.
pub fn print_leaderboard(
    log: &ResultLog,
    subject: Option<&str>,
    top: usize,
    format: ReportFormat,
) -> Result<()> {
    let records = log.load()?;
    let rows = leaderboard(&records, subject, top);

    println!("{}", render_leaderboard(&rows, subject, format)?);

    Ok(())
}
