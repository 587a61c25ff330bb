//! Attempt records and percent scoring.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One completed quiz attempt, as persisted in the results log.
///
/// Field order matches the log header:
/// `date,student,subject,score,total,percent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// Day the attempt was completed.
    pub date: NaiveDate,
    /// Participant identifier.
    pub student: String,
    /// Subject display name.
    pub subject: String,
    /// Number of correctly answered questions.
    pub score: u32,
    /// Number of questions asked.
    pub total: u32,
    /// `round(score * 100 / total, 2)`.
    pub percent: f64,
}

/// Score as a percentage, rounded to two decimal places.
pub fn percent(score: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(f64::from(score) * 100.0 / f64::from(total))
}

/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
