//! History and leaderboard statistics over the results log.

use serde::{Deserialize, Serialize};

use crate::record::{round2, AttemptRecord};

/// Filter the log to one participant's attempts, in log order.
///
/// Matching is exact: the student field is an identifier, not free text.
pub fn student_history<'a>(
    records: &'a [AttemptRecord],
    student: &str,
) -> Vec<&'a AttemptRecord> {
    records.iter().filter(|r| r.student == student).collect()
}

/// Aggregate statistics for one participant's attempts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryStats {
    /// Number of attempts.
    pub attempts: usize,
    /// Mean percent across attempts, rounded to two decimals.
    pub average_percent: f64,
    /// Best percent across attempts.
    pub best_percent: f64,
}

/// Compute history stats; `None` when there are no attempts.
pub fn history_stats(attempts: &[&AttemptRecord]) -> Option<HistoryStats> {
    if attempts.is_empty() {
        return None;
    }

    let sum: f64 = attempts.iter().map(|r| r.percent).sum();
    let best = attempts
        .iter()
        .map(|r| r.percent)
        .fold(f64::NEG_INFINITY, f64::max);

    Some(HistoryStats {
        attempts: attempts.len(),
        average_percent: round2(sum / attempts.len() as f64),
        best_percent: best,
    })
}

/// Rank attempts: optional subject filter (case-insensitive), sorted by
/// percent descending then date descending, truncated to `top_n`.
///
/// The sort is stable, so records tied on both keys keep log order.
pub fn leaderboard<'a>(
    records: &'a [AttemptRecord],
    subject: Option<&str>,
    top_n: usize,
) -> Vec<&'a AttemptRecord> {
    let mut rows: Vec<&AttemptRecord> = records
        .iter()
        .filter(|r| match subject {
            Some(s) => r.subject.eq_ignore_ascii_case(s),
            None => true,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.percent
            .total_cmp(&a.percent)
            .then_with(|| b.date.cmp(&a.date))
    });
    rows.truncate(top_n);

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: &str, student: &str, subject: &str, score: u32, percent: f64) -> AttemptRecord {
        AttemptRecord {
            date: date.parse::<NaiveDate>().unwrap(),
            student: student.into(),
            subject: subject.into(),
            score,
            total: 10,
            percent,
        }
    }

    fn sample_log() -> Vec<AttemptRecord> {
        vec![
            record("2026-08-01", "alice", "Math", 6, 60.0),
            record("2026-08-02", "bob", "Math", 9, 90.0),
            record("2026-08-03", "alice", "History", 8, 80.0),
            record("2026-08-04", "carol", "Math", 9, 90.0),
            record("2026-08-05", "alice", "Math", 7, 70.0),
        ]
    }

    #[test]
    fn history_filters_one_student_in_order() {
        let log = sample_log();
        let attempts = student_history(&log, "alice");
        assert_eq!(attempts.len(), 3);
        assert_eq!(attempts[0].subject, "Math");
        assert_eq!(attempts[1].subject, "History");
        assert_eq!(attempts[2].percent, 70.0);
    }

    #[test]
    fn history_matching_is_exact() {
        let log = sample_log();
        assert!(student_history(&log, "Alice").is_empty());
        assert!(student_history(&log, "dave").is_empty());
    }

    #[test]
    fn history_stats_average_and_best() {
        let log = sample_log();
        let attempts = student_history(&log, "alice");
        let stats = history_stats(&attempts).unwrap();
        assert_eq!(stats.attempts, 3);
        assert_eq!(stats.average_percent, 70.0);
        assert_eq!(stats.best_percent, 80.0);
    }

    #[test]
    fn history_stats_rounds_average() {
        let log = vec![
            record("2026-08-01", "alice", "Math", 1, 33.33),
            record("2026-08-02", "alice", "Math", 2, 66.67),
            record("2026-08-03", "alice", "Math", 2, 66.67),
        ];
        let attempts = student_history(&log, "alice");
        let stats = history_stats(&attempts).unwrap();
        // (33.33 + 66.67 + 66.67) / 3 = 55.556...
        assert_eq!(stats.average_percent, 55.56);
    }

    #[test]
    fn history_stats_empty() {
        assert_eq!(history_stats(&[]), None);
    }

    #[test]
    fn leaderboard_sorts_percent_then_date_desc() {
        let log = sample_log();
        let rows = leaderboard(&log, None, 10);
        // bob and carol tie at 90.0; carol's attempt is more recent
        assert_eq!(rows[0].student, "carol");
        assert_eq!(rows[1].student, "bob");
        assert_eq!(rows[2].percent, 80.0);
        assert_eq!(rows[4].percent, 60.0);
    }

    #[test]
    fn leaderboard_ties_keep_log_order() {
        let log = vec![
            record("2026-08-01", "bob", "Math", 9, 90.0),
            record("2026-08-01", "alice", "Math", 9, 90.0),
            record("2026-08-01", "carol", "Math", 9, 90.0),
        ];
        let rows = leaderboard(&log, None, 10);
        let students: Vec<&str> = rows.iter().map(|r| r.student.as_str()).collect();
        assert_eq!(students, vec!["bob", "alice", "carol"]);
    }

    #[test]
    fn leaderboard_subject_filter_case_insensitive() {
        let log = sample_log();
        let rows = leaderboard(&log, Some("math"), 10);
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.subject == "Math"));
    }

    #[test]
    fn leaderboard_truncates_to_top_n() {
        let log = sample_log();
        let rows = leaderboard(&log, None, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].student, "carol");
    }

    #[test]
    fn leaderboard_empty_log() {
        assert!(leaderboard(&[], None, 10).is_empty());
        assert!(leaderboard(&sample_log(), Some("Chemistry"), 10).is_empty());
    }
}
