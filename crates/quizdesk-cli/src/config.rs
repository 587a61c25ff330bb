//! quizdesk configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizdesk configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizdeskConfig {
    /// Directory holding subject files.
    #[serde(default = "default_quizzes_dir")]
    pub quizzes_dir: PathBuf,
    /// Results log path.
    #[serde(default = "default_results_file")]
    pub results_file: PathBuf,
    /// Percent needed to pass a quiz.
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: f64,
    /// Ask at most this many questions per quiz (absent = all).
    #[serde(default)]
    pub question_limit: Option<usize>,
    /// Number of leaderboard entries to show.
    #[serde(default = "default_leaderboard_size")]
    pub leaderboard_size: usize,
}

fn default_quizzes_dir() -> PathBuf {
    PathBuf::from("quizzes")
}
fn default_results_file() -> PathBuf {
    PathBuf::from("data").join("results.csv")
}
fn default_pass_threshold() -> f64 {
    60.0
}
fn default_leaderboard_size() -> usize {
    10
}

impl Default for QuizdeskConfig {
    fn default() -> Self {
        Self {
            quizzes_dir: default_quizzes_dir(),
            results_file: default_results_file(),
            pass_threshold: default_pass_threshold(),
            question_limit: None,
            leaderboard_size: default_leaderboard_size(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizdesk.toml` in the current directory
/// 2. `~/.config/quizdesk/config.toml`
pub fn load_config_from(path: Option<&Path>) -> Result<QuizdeskConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizdesk.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizdeskConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(QuizdeskConfig::default()),
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizdesk"))
}
