//! The interactive menu shell, entered when quizdesk runs without a
//! subcommand.

use std::path::PathBuf;

use anyhow::Result;

use quizdesk_core::parser::{list_subjects, load_bank, SubjectFile};
use quizdesk_core::session::SessionConfig;
use quizdesk_report::ReportFormat;
use quizdesk_store::ResultLog;

use crate::config::{load_config_from, QuizdeskConfig};
use crate::console::read_line;

use super::{history, leaderboard, take};

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    std::fs::create_dir_all(&config.quizzes_dir)?;
    let log = ResultLog::new(&config.results_file);
    log.ensure_initialized()?;

    println!("quizdesk — multiple-choice quiz system");
    println!("Tip: use a consistent name or ID so your history stays together.");

    let Some(name) = read_line("Enter your name or student ID: ")? else {
        return Ok(());
    };
    let student = if name.is_empty() {
        "Anonymous".to_string()
    } else {
        name
    };

    loop {
        println!();
        println!("===== Quiz Menu =====");
        println!("1) Take Quiz");
        println!("2) My Results History");
        println!("3) Leaderboard (Overall)");
        println!("4) Leaderboard (By Subject)");
        println!("5) Exit");

        let Some(choice) = read_line("Choose an option: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                if let Some(subject) = choose_subject(&config)? {
                    take_quiz(&config, &log, &student, &subject);
                }
            }
            "2" => history::print_history(&log, &student, ReportFormat::Text)?,
            "3" => leaderboard::print_leaderboard(
                &log,
                None,
                config.leaderboard_size,
                ReportFormat::Text,
            )?,
            "4" => {
                if let Some(subject) = choose_subject(&config)? {
                    leaderboard::print_leaderboard(
                        &log,
                        Some(&subject.name),
                        config.leaderboard_size,
                        ReportFormat::Text,
                    )?;
                }
            }
            "5" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice, try again."),
        }
    }

    Ok(())
}

/// Show the numbered subject chooser. `None` when there are no subjects,
/// the choice is invalid, or stdin closed.
fn choose_subject(config: &QuizdeskConfig) -> Result<Option<SubjectFile>> {
    let subjects = list_subjects(&config.quizzes_dir)?;
    if subjects.is_empty() {
        println!(
            "No subject files found in '{}'. Add .txt files first.",
            config.quizzes_dir.display()
        );
        return Ok(None);
    }

    println!("\nAvailable subjects:");
    for (i, subject) in subjects.iter().enumerate() {
        println!("{}. {}", i + 1, subject.name);
    }

    let Some(choice) = read_line("Choose a subject number: ")? else {
        return Ok(None);
    };
    match choice.parse::<usize>() {
        Ok(n) if (1..=subjects.len()).contains(&n) => Ok(Some(subjects[n - 1].clone())),
        _ => {
            println!("Invalid choice.");
            Ok(None)
        }
    }
}

/// A failed quiz attempt (empty bank, closed stdin) returns to the menu
/// instead of exiting the shell.
fn take_quiz(config: &QuizdeskConfig, log: &ResultLog, student: &str, subject: &SubjectFile) {
    let session = SessionConfig {
        question_limit: config.question_limit,
        pass_threshold: config.pass_threshold,
    };

    let result = load_bank(&subject.path)
        .and_then(|bank| take::run_quiz(&bank, student, session, log));
    if let Err(e) = result {
        println!("Quiz aborted: {e:#}");
    }
}
