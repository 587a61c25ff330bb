//! Per-participant history view.

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use serde::Serialize;

use quizdesk_core::record::AttemptRecord;
use quizdesk_core::statistics::HistoryStats;

use crate::ReportFormat;

/// JSON shape of the history view.
#[derive(Serialize)]
struct HistoryView<'a> {
    student: &'a str,
    attempts: &'a [&'a AttemptRecord],
    stats: Option<&'a HistoryStats>,
}

/// Render one participant's attempts plus summary stats.
pub fn render_history(
    student: &str,
    attempts: &[&AttemptRecord],
    stats: Option<&HistoryStats>,
    format: ReportFormat,
) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(student, attempts, stats)),
        ReportFormat::Markdown => Ok(render_markdown(student, attempts, stats)),
        ReportFormat::Json => serde_json::to_string_pretty(&HistoryView {
            student,
            attempts,
            stats,
        })
        .context("failed to serialize history view"),
    }
}

fn render_text(student: &str, attempts: &[&AttemptRecord], stats: Option<&HistoryStats>) -> String {
    let mut out = format!("Results for {student}\n");

    if attempts.is_empty() {
        out.push_str("No attempts yet.\n");
        return out;
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Subject", "Score", "Percent"]);
    for attempt in attempts {
        table.add_row(vec![
            Cell::new(attempt.date),
            Cell::new(&attempt.subject),
            Cell::new(format!("{}/{}", attempt.score, attempt.total)),
            Cell::new(format!("{}%", attempt.percent)),
        ]);
    }
    out.push_str(&format!("{table}\n"));

    if let Some(stats) = stats {
        out.push_str(&format!(
            "Attempts: {} | Avg: {}% | Best: {}%\n",
            stats.attempts, stats.average_percent, stats.best_percent
        ));
    }

    out
}

fn render_markdown(
    student: &str,
    attempts: &[&AttemptRecord],
    stats: Option<&HistoryStats>,
) -> String {
    let mut md = format!("### Results for {student}\n\n");

    if attempts.is_empty() {
        md.push_str("No attempts yet.\n");
        return md;
    }

    md.push_str("| Date | Subject | Score | Percent |\n");
    md.push_str("|------|---------|-------|---------|\n");
    for attempt in attempts {
        md.push_str(&format!(
            "| {} | {} | {}/{} | {}% |\n",
            attempt.date, attempt.subject, attempt.score, attempt.total, attempt.percent
        ));
    }

    if let Some(stats) = stats {
        md.push_str(&format!(
            "\n**Attempts:** {} | **Avg:** {}% | **Best:** {}%\n",
            stats.attempts, stats.average_percent, stats.best_percent
        ));
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use quizdesk_core::statistics::{history_stats, student_history};

    fn sample_log() -> Vec<AttemptRecord> {
        vec![
            AttemptRecord {
                date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
                student: "alice".into(),
                subject: "Math".into(),
                score: 7,
                total: 10,
                percent: 70.0,
            },
            AttemptRecord {
                date: NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
                student: "alice".into(),
                subject: "History".into(),
                score: 9,
                total: 10,
                percent: 90.0,
            },
        ]
    }

    #[test]
    fn text_lists_attempts_and_stats() {
        let log = sample_log();
        let attempts = student_history(&log, "alice");
        let stats = history_stats(&attempts);

        let out = render_history("alice", &attempts, stats.as_ref(), ReportFormat::Text).unwrap();
        assert!(out.contains("Results for alice"));
        assert!(out.contains("History"));
        assert!(out.contains("9/10"));
        assert!(out.contains("Attempts: 2 | Avg: 80% | Best: 90%"));
    }

    #[test]
    fn text_empty_history() {
        let out = render_history("dave", &[], None, ReportFormat::Text).unwrap();
        assert!(out.contains("No attempts yet."));
    }

    #[test]
    fn markdown_table_shape() {
        let log = sample_log();
        let attempts = student_history(&log, "alice");
        let stats = history_stats(&attempts);

        let md =
            render_history("alice", &attempts, stats.as_ref(), ReportFormat::Markdown).unwrap();
        assert!(md.contains("| Date | Subject | Score | Percent |"));
        assert!(md.contains("| 2026-08-06 | Math | 7/10 | 70% |"));
        assert!(md.contains("**Best:** 90%"));
    }

    #[test]
    fn json_parses_back() {
        let log = sample_log();
        let attempts = student_history(&log, "alice");
        let stats = history_stats(&attempts);

        let json = render_history("alice", &attempts, stats.as_ref(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["student"], "alice");
        assert_eq!(value["attempts"].as_array().unwrap().len(), 2);
        assert_eq!(value["stats"]["best_percent"], 90.0);
    }
}
