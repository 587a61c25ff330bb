//! Core data model types for quizdesk.
//!
//! These are the fundamental types the entire quizdesk system uses to
//! represent questions and their answer options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four answer labels a multiple-choice question offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerLabel {
    A,
    B,
    C,
    D,
}

impl AnswerLabel {
    /// All labels in presentation order.
    pub const ALL: [AnswerLabel; 4] = [
        AnswerLabel::A,
        AnswerLabel::B,
        AnswerLabel::C,
        AnswerLabel::D,
    ];

    /// Zero-based position of this label in presentation order.
    pub fn index(self) -> usize {
        match self {
            AnswerLabel::A => 0,
            AnswerLabel::B => 1,
            AnswerLabel::C => 2,
            AnswerLabel::D => 3,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            AnswerLabel::A => 'A',
            AnswerLabel::B => 'B',
            AnswerLabel::C => 'C',
            AnswerLabel::D => 'D',
        }
    }
}

impl fmt::Display for AnswerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for AnswerLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(AnswerLabel::A),
            "B" => Ok(AnswerLabel::B),
            "C" => Ok(AnswerLabel::C),
            "D" => Ok(AnswerLabel::D),
            other => Err(format!("not an answer label: {other}")),
        }
    }
}

/// A single labeled answer option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// The label this option is shown under.
    pub label: AnswerLabel,
    /// The option text, without the `A) ` prefix.
    pub text: String,
}

/// A single multiple-choice question.
///
/// Options are stored in label order A–D, so the array position and the
/// option label always agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// The question text shown to the participant.
    pub prompt: String,
    /// The four answer options, in label order.
    pub options: [AnswerOption; 4],
    /// Label of the correct option.
    pub correct: AnswerLabel,
}

impl Question {
    /// The text of the option under `label`.
    pub fn option_text(&self, label: AnswerLabel) -> &str {
        &self.options[label.index()].text
    }

    /// The text of the correct option.
    pub fn correct_text(&self) -> &str {
        self.option_text(self.correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> Question {
        Question {
            prompt: "What is the capital of France?".into(),
            options: [
                AnswerOption {
                    label: AnswerLabel::A,
                    text: "Berlin".into(),
                },
                AnswerOption {
                    label: AnswerLabel::B,
                    text: "Paris".into(),
                },
                AnswerOption {
                    label: AnswerLabel::C,
                    text: "Madrid".into(),
                },
                AnswerOption {
                    label: AnswerLabel::D,
                    text: "Rome".into(),
                },
            ],
            correct: AnswerLabel::B,
        }
    }

    #[test]
    fn label_display_and_parse() {
        assert_eq!(AnswerLabel::A.to_string(), "A");
        assert_eq!(AnswerLabel::D.to_string(), "D");
        assert_eq!("a".parse::<AnswerLabel>().unwrap(), AnswerLabel::A);
        assert_eq!("  c ".parse::<AnswerLabel>().unwrap(), AnswerLabel::C);
        assert!("E".parse::<AnswerLabel>().is_err());
        assert!("AB".parse::<AnswerLabel>().is_err());
        assert!("".parse::<AnswerLabel>().is_err());
    }

    #[test]
    fn label_index_agrees_with_all_order() {
        for (i, label) in AnswerLabel::ALL.iter().enumerate() {
            assert_eq!(label.index(), i);
        }
    }

    #[test]
    fn question_lookups() {
        let q = sample_question();
        assert_eq!(q.option_text(AnswerLabel::C), "Madrid");
        assert_eq!(q.correct_text(), "Paris");
    }

    #[test]
    fn question_serde_roundtrip() {
        let q = sample_question();
        let json = serde_json::to_string(&q).unwrap();
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }
}
