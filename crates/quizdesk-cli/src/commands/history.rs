//! The `quizdesk history` command.

use std::path::PathBuf;

use anyhow::Result;

use quizdesk_core::statistics::{history_stats, student_history};
use quizdesk_report::{render_history, ReportFormat};
use quizdesk_store::ResultLog;

use crate::config::load_config_from;

pub fn execute(
    student: String,
    results_file: Option<PathBuf>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = format
        .parse::<ReportFormat>()
        .map_err(|e| anyhow::anyhow!(e))?;

    let log = ResultLog::new(results_file.unwrap_or(config.results_file));
    print_history(&log, &student, format)
}

/// Load the log and print one participant's history.
///
/// Shared by `history` and the interactive menu.
pub fn print_history(log: &ResultLog, student: &str, format: ReportFormat) -> Result<()> {
    let records = log.load()?;
    let attempts = student_history(&records, student);
    let stats = history_stats(&attempts);

    println!(
        "{}",
        render_history(student, &attempts, stats.as_ref(), format)?
    );

    Ok(())
}
