//! Ranked leaderboard view.

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use serde::Serialize;

use quizdesk_core::record::AttemptRecord;

use crate::ReportFormat;

/// One leaderboard row in the JSON view.
#[derive(Serialize)]
struct RankedEntry<'a> {
    rank: usize,
    #[serde(flatten)]
    record: &'a AttemptRecord,
}

#[derive(Serialize)]
struct LeaderboardView<'a> {
    subject: Option<&'a str>,
    entries: Vec<RankedEntry<'a>>,
}

/// Render ranked attempts. `rows` must already be sorted and truncated
/// (see `quizdesk_core::statistics::leaderboard`); ranks are positional.
pub fn render_leaderboard(
    rows: &[&AttemptRecord],
    subject: Option<&str>,
    format: ReportFormat,
) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(rows, subject)),
        ReportFormat::Markdown => Ok(render_markdown(rows, subject)),
        ReportFormat::Json => serde_json::to_string_pretty(&LeaderboardView {
            subject,
            entries: rows
                .iter()
                .enumerate()
                .map(|(i, record)| RankedEntry {
                    rank: i + 1,
                    record,
                })
                .collect(),
        })
        .context("failed to serialize leaderboard view"),
    }
}

fn title(subject: Option<&str>) -> String {
    match subject {
        Some(s) => format!("Leaderboard — {s}"),
        None => "Leaderboard".to_string(),
    }
}

fn render_text(rows: &[&AttemptRecord], subject: Option<&str>) -> String {
    let mut out = format!("{}\n", title(subject));

    if rows.is_empty() {
        out.push_str("No results yet.\n");
        return out;
    }

    let mut table = Table::new();
    table.set_header(vec!["Rank", "Date", "Student", "Subject", "Score", "Percent"]);
    for (i, record) in rows.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(record.date),
            Cell::new(&record.student),
            Cell::new(&record.subject),
            Cell::new(format!("{}/{}", record.score, record.total)),
            Cell::new(format!("{}%", record.percent)),
        ]);
    }
    out.push_str(&format!("{table}\n"));

    out
}

fn render_markdown(rows: &[&AttemptRecord], subject: Option<&str>) -> String {
    let mut md = format!("### {}\n\n", title(subject));

    if rows.is_empty() {
        md.push_str("No results yet.\n");
        return md;
    }

    md.push_str("| Rank | Date | Student | Subject | Score | Percent |\n");
    md.push_str("|------|------|---------|---------|-------|---------|\n");
    for (i, record) in rows.iter().enumerate() {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {}/{} | {}% |\n",
            i + 1,
            record.date,
            record.student,
            record.subject,
            record.score,
            record.total,
            record.percent
        ));
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use quizdesk_core::statistics::leaderboard;

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
                student: "bob".into(),
                subject: "Math".into(),
                score: 9,
                total: 10,
                percent: 90.0,
            },
        ]
    }

    #[test]
    fn text_ranks_rows() {
        let log = sample_log();
        let rows = leaderboard(&log, None, 10);

        let out = render_leaderboard(&rows, None, ReportFormat::Text).unwrap();
        assert!(out.starts_with("Leaderboard\n"));
        assert!(out.contains("bob"));
        assert!(out.contains("90%"));
    }

    #[test]
    fn text_empty() {
        let out = render_leaderboard(&[], Some("Chemistry"), ReportFormat::Text).unwrap();
        assert!(out.contains("Leaderboard — Chemistry"));
        assert!(out.contains("No results yet."));
    }

    #[test]
    fn markdown_rank_order() {
        let log = sample_log();
        let rows = leaderboard(&log, None, 10);

        let md = render_leaderboard(&rows, None, ReportFormat::Markdown).unwrap();
        assert!(md.contains("| 1 | 2026-08-07 | bob | Math | 9/10 | 90% |"));
        assert!(md.contains("| 2 | 2026-08-06 | alice | Math | 7/10 | 70% |"));
    }

    #[test]
    fn json_flattens_records_with_rank() {
        let log = sample_log();
        let rows = leaderboard(&log, Some("math"), 10);

        let json = render_leaderboard(&rows, Some("math"), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["subject"], "math");
        assert_eq!(value["entries"][0]["rank"], 1);
        assert_eq!(value["entries"][0]["student"], "bob");
        assert_eq!(value["entries"][1]["percent"], 70.0);
    }
}
