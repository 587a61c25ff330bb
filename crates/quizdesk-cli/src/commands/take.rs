//! The `quizdesk take` command.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;

use quizdesk_core::parser::{load_bank, QuestionBank};
use quizdesk_core::session::{QuizRunner, SessionConfig, SessionSummary};
use quizdesk_store::ResultLog;

use crate::config::load_config_from;
use crate::console::{ConsoleObserver, StdinAnswers};

pub fn execute(
    student: String,
    subject: String,
    quizzes_dir: Option<PathBuf>,
    results_file: Option<PathBuf>,
    limit: Option<usize>,
    threshold: Option<f64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let threshold = threshold.unwrap_or(config.pass_threshold);
    anyhow::ensure!(
        (0.0..=100.0).contains(&threshold),
        "pass threshold must be between 0 and 100"
    );

    // A stem resolves inside the quizzes directory; an existing path is
    // used as-is.
    let bank_path = {
        let direct = PathBuf::from(&subject);
        if direct.is_file() {
            direct
        } else {
            quizzes_dir
                .unwrap_or(config.quizzes_dir)
                .join(format!("{subject}.txt"))
        }
    };

    let bank = load_bank(&bank_path)?;
    let log = ResultLog::new(results_file.unwrap_or(config.results_file));

    let session = SessionConfig {
        question_limit: limit.or(config.question_limit),
        pass_threshold: threshold,
    };
    run_quiz(&bank, &student, session, &log)?;

    Ok(())
}

/// Run one interactive quiz and append the attempt to the log.
///
/// Shared by `take` and the interactive menu.
pub fn run_quiz(
    bank: &QuestionBank,
    student: &str,
    config: SessionConfig,
    log: &ResultLog,
) -> Result<SessionSummary> {
    let runner = QuizRunner::new(config);
    let summary = runner.run(
        bank,
        student,
        &mut rand::thread_rng(),
        &mut StdinAnswers,
        &ConsoleObserver,
    )?;

    log.append(&summary.clone().into_record(Local::now().date_naive()))?;

    Ok(summary)
}
