//! Console I/O: the stdin-backed answer source and the session observer
//! that narrates a running quiz.

use std::io::{self, Write};

use anyhow::Result;

use quizdesk_core::model::AnswerLabel;
use quizdesk_core::session::{AnswerSource, PresentedQuestion, SessionObserver, SessionSummary};

/// Print a prompt and read one trimmed line. `None` means stdin closed.
pub fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Reads answers from stdin, reprompting until a valid A-D response.
pub struct StdinAnswers;

impl AnswerSource for StdinAnswers {
    fn next_answer(&mut self, _question: &PresentedQuestion) -> Result<AnswerLabel> {
        let mut prompt = "Your answer (A/B/C/D): ";
        loop {
            let Some(line) = read_line(prompt)? else {
                anyhow::bail!("input closed before the quiz finished");
            };
            match line.parse::<AnswerLabel>() {
                Ok(label) => return Ok(label),
                Err(_) => prompt = "Please enter A/B/C/D: ",
            }
        }
    }
}

/// Narrates the session on stdout.
pub struct ConsoleObserver;

impl SessionObserver for ConsoleObserver {
    fn on_quiz_start(&self, subject: &str, total: usize, pass_threshold: f64) {
        println!("\nStarting quiz: {subject} ({total} questions, pass threshold {pass_threshold}%)\n");
    }

    fn on_question(&self, number: usize, total: usize, question: &PresentedQuestion) {
        println!("Q{number}/{total}: {}", question.prompt);
        for option in &question.options {
            println!("{}) {}", option.label, option.text);
        }
    }

    fn on_answer(&self, question: &PresentedQuestion, _response: AnswerLabel, correct: bool) {
        if correct {
            println!("Correct!\n");
        } else {
            println!("Wrong! Correct answer is {}.\n", question.correct);
        }
    }

    fn on_quiz_complete(&self, summary: &SessionSummary) {
        let status = if summary.passed { "PASSED" } else { "FAILED" };
        println!(
            "Result: {}/{} ({}%) -> {status}",
            summary.score, summary.total, summary.percent
        );
    }
}
