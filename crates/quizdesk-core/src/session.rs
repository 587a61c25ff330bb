//! Quiz session engine.
//!
//! Orders the question set randomly, shuffles each question's options with
//! relabeling, collects answers through the [`AnswerSource`] seam, and
//! scores the attempt. Interactive I/O stays outside this crate.

use anyhow::Result;
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::{AnswerLabel, AnswerOption, Question};
use crate::parser::QuestionBank;
use crate::record::{percent, AttemptRecord};

/// Configuration for a quiz session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Ask at most this many questions (None = all).
    pub question_limit: Option<usize>,
    /// Percent needed to pass.
    pub pass_threshold: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            question_limit: None,
            pass_threshold: 60.0,
        }
    }
}

/// A question as shown to the participant: options shuffled and relabeled
/// A-D, with the correct answer's new label.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentedQuestion {
    pub prompt: String,
    /// The shuffled options, relabeled in presentation order.
    pub options: [AnswerOption; 4],
    /// Label of the correct option after shuffling.
    pub correct: AnswerLabel,
}

/// Shuffle a question's options and remap the correct label.
pub fn present<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> PresentedQuestion {
    let mut shuffled: Vec<&AnswerOption> = question.options.iter().collect();
    shuffled.shuffle(rng);

    let mut correct = question.correct;
    let options = std::array::from_fn(|i| {
        let source = shuffled[i];
        if source.label == question.correct {
            correct = AnswerLabel::ALL[i];
        }
        AnswerOption {
            label: AnswerLabel::ALL[i],
            text: source.text.clone(),
        }
    });

    PresentedQuestion {
        prompt: question.prompt.clone(),
        options,
        correct,
    }
}

/// Supplies one valid answer per question.
///
/// Implementations own the reprompt loop; the session only ever sees a
/// valid label. An error aborts the attempt.
pub trait AnswerSource {
    fn next_answer(&mut self, question: &PresentedQuestion) -> Result<AnswerLabel>;
}

/// Scripted answers, for tests and non-interactive callers.
pub struct ScriptedAnswers {
    answers: std::vec::IntoIter<AnswerLabel>,
}

impl ScriptedAnswers {
    pub fn new(answers: Vec<AnswerLabel>) -> Self {
        Self {
            answers: answers.into_iter(),
        }
    }
}

impl AnswerSource for ScriptedAnswers {
    fn next_answer(&mut self, _question: &PresentedQuestion) -> Result<AnswerLabel> {
        self.answers
            .next()
            .ok_or_else(|| anyhow::anyhow!("ran out of scripted answers"))
    }
}

/// Progress reporting for a running session.
pub trait SessionObserver {
    fn on_quiz_start(&self, subject: &str, total: usize, pass_threshold: f64);
    fn on_question(&self, number: usize, total: usize, question: &PresentedQuestion);
    fn on_answer(&self, question: &PresentedQuestion, response: AnswerLabel, correct: bool);
    fn on_quiz_complete(&self, summary: &SessionSummary);
}

/// No-op session observer.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {
    fn on_quiz_start(&self, _: &str, _: usize, _: f64) {}
    fn on_question(&self, _: usize, _: usize, _: &PresentedQuestion) {}
    fn on_answer(&self, _: &PresentedQuestion, _: AnswerLabel, _: bool) {}
    fn on_quiz_complete(&self, _: &SessionSummary) {}
}

/// Outcome of one completed session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub student: String,
    pub subject: String,
    pub score: u32,
    pub total: u32,
    pub percent: f64,
    pub passed: bool,
}

impl SessionSummary {
    /// Convert into a log record, stamped with the given date.
    pub fn into_record(self, date: NaiveDate) -> AttemptRecord {
        AttemptRecord {
            date,
            student: self.student,
            subject: self.subject,
            score: self.score,
            total: self.total,
            percent: self.percent,
        }
    }
}

/// Runs quiz sessions.
pub struct QuizRunner {
    config: SessionConfig,
}

impl QuizRunner {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Administer one quiz: shuffle the question order, present each
    /// question, collect and score answers.
    pub fn run<R: Rng + ?Sized>(
        &self,
        bank: &QuestionBank,
        student: &str,
        rng: &mut R,
        answers: &mut dyn AnswerSource,
        observer: &dyn SessionObserver,
    ) -> Result<SessionSummary> {
        anyhow::ensure!(
            !bank.questions.is_empty(),
            "no questions found for subject '{}'",
            bank.subject
        );
        if let Some(limit) = self.config.question_limit {
            anyhow::ensure!(limit >= 1, "question limit must be at least 1");
        }

        let mut order: Vec<&Question> = bank.questions.iter().collect();
        order.shuffle(rng);
        if let Some(limit) = self.config.question_limit {
            order.truncate(limit);
        }

        let total = order.len();
        observer.on_quiz_start(&bank.subject, total, self.config.pass_threshold);

        let mut score = 0u32;
        for (i, question) in order.iter().enumerate() {
            let presented = present(question, rng);
            observer.on_question(i + 1, total, &presented);
            let response = answers.next_answer(&presented)?;
            let correct = response == presented.correct;
            if correct {
                score += 1;
            }
            observer.on_answer(&presented, response, correct);
        }

        let percent = percent(score, total as u32);
        let summary = SessionSummary {
            student: student.to_string(),
            subject: bank.subject.clone(),
            score,
            total: total as u32,
            percent,
            passed: percent >= self.config.pass_threshold,
        };
        observer.on_quiz_complete(&summary);

        Ok(summary)
    }
}
