//! Pipe-delimited question bank parser.
//!
//! Loads question banks from subject files and directories, and validates
//! them. A bank line is six pipe-delimited fields: prompt, four options
//! prefixed `A)` through `D)`, and the correct letter. Malformed lines are
//! skipped with a diagnostic, never fatal.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::LineError;
use crate::model::{AnswerLabel, AnswerOption, Question};

/// A parsed subject file: its questions plus every line that was rejected.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    /// Subject display name (derived from the file stem for file loads).
    pub subject: String,
    /// Questions in file order.
    pub questions: Vec<Question>,
    /// Lines that were rejected, with the reason.
    pub skipped: Vec<SkippedLine>,
}

impl QuestionBank {
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

/// A rejected bank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// One-based line number in the source file.
    pub line_no: usize,
    /// The offending line, as read.
    pub content: String,
    pub reason: LineError,
}

/// Parse one bank line into a question.
pub fn parse_line(line: &str) -> Result<Question, LineError> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() != 6 {
        return Err(LineError::FieldCount(fields.len()));
    }

    let prompt = fields[0].trim().to_string();
    let options = [
        parse_option(fields[1], AnswerLabel::A)?,
        parse_option(fields[2], AnswerLabel::B)?,
        parse_option(fields[3], AnswerLabel::C)?,
        parse_option(fields[4], AnswerLabel::D)?,
    ];
    let correct = fields[5]
        .parse::<AnswerLabel>()
        .map_err(|_| LineError::BadCorrectLetter(fields[5].trim().to_string()))?;

    Ok(Question {
        prompt,
        options,
        correct,
    })
}

fn parse_option(field: &str, expected: AnswerLabel) -> Result<AnswerOption, LineError> {
    let text = field
        .trim()
        .strip_prefix(expected.as_char())
        .and_then(|rest| rest.strip_prefix(')'))
        .ok_or(LineError::BadOptionLabel { expected })?;
    Ok(AnswerOption {
        label: expected,
        text: text.trim().to_string(),
    })
}

/// Parse bank content. Blank lines are ignored; malformed lines are
/// collected on the bank and logged, not returned as errors.
pub fn parse_bank_str(content: &str, subject: &str) -> QuestionBank {
    let mut questions = Vec::new();
    let mut skipped = Vec::new();

    for (i, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(question) => questions.push(question),
            Err(reason) => {
                tracing::warn!("skipping line {} of {subject}: {reason}", i + 1);
                skipped.push(SkippedLine {
                    line_no: i + 1,
                    content: line.to_string(),
                    reason,
                });
            }
        }
    }

    QuestionBank {
        subject: subject.to_string(),
        questions,
        skipped,
    }
}

/// Load a subject file into a bank. The subject display name comes from
/// the file stem.
pub fn load_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read subject file: {}", path.display()))?;

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(parse_bank_str(&content, &subject_display_name(&stem)))
}

/// Turn a file stem into a subject display name: underscores become
/// spaces, words are title-cased (`world_history` -> `World History`).
pub fn subject_display_name(stem: &str) -> String {
    stem.replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A subject file available in the quizzes directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectFile {
    pub path: PathBuf,
    /// Display name derived from the file stem.
    pub name: String,
}

/// List all `.txt` subject files in a directory, sorted by file name.
pub fn list_subjects(dir: &Path) -> Result<Vec<SubjectFile>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut subjects = Vec::new();
    for entry in
        std::fs::read_dir(dir).with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            subjects.push(SubjectFile {
                name: subject_display_name(&stem),
                path,
            });
        }
    }
    subjects.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(subjects)
}

/// A warning from bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The offending prompt (if applicable).
    pub prompt: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a bank for issues beyond line-level format checks.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if bank.questions.is_empty() {
        warnings.push(ValidationWarning {
            prompt: None,
            message: "bank contains no questions".into(),
        });
    }

    // Check for duplicate prompts
    let mut seen = std::collections::HashSet::new();
    for question in &bank.questions {
        if !seen.insert(question.prompt.as_str()) {
            warnings.push(ValidationWarning {
                prompt: Some(question.prompt.clone()),
                message: "duplicate prompt".into(),
            });
        }
    }

    // Check for blank prompts and option texts
    for question in &bank.questions {
        if question.prompt.is_empty() {
            warnings.push(ValidationWarning {
                prompt: None,
                message: "prompt is empty".into(),
            });
        }
        for option in &question.options {
            if option.text.is_empty() {
                warnings.push(ValidationWarning {
                    prompt: Some(question.prompt.clone()),
                    message: format!("option {} has no text", option.label),
                });
            }
        }
    }

    warnings
}
