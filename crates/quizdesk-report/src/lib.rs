//! quizdesk-report — renders history and leaderboard views.
//!
//! Each view renders as a text table, a markdown table, or JSON.

use std::str::FromStr;

pub mod history;
pub mod leaderboard;

pub use history::render_history;
pub use leaderboard::render_leaderboard;

/// Output format for report views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Markdown,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(ReportFormat::Text),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format: {other}")),
        }
    }
}
