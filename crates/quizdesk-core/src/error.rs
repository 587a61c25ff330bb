//! Question line rejection reasons.
//!
//! Defined as a typed error so callers and tests can classify why a line
//! was skipped without string matching.

use thiserror::Error;

use crate::model::AnswerLabel;

/// Why a question line was rejected by the bank parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// The line did not split into exactly six pipe-delimited fields.
    #[error("expected 6 pipe-delimited fields, found {0}")]
    FieldCount(usize),

    /// An option field was not prefixed with its expected label.
    #[error("option is not prefixed with \"{expected})\"")]
    BadOptionLabel { expected: AnswerLabel },

    /// The correct-answer field was not one of A-D.
    #[error("correct answer must be one of A-D, found \"{0}\"")]
    BadCorrectLetter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_defect() {
        assert_eq!(
            LineError::FieldCount(4).to_string(),
            "expected 6 pipe-delimited fields, found 4"
        );
        assert_eq!(
            LineError::BadOptionLabel {
                expected: AnswerLabel::C
            }
            .to_string(),
            "option is not prefixed with \"C)\""
        );
        assert_eq!(
            LineError::BadCorrectLetter("X".into()).to_string(),
            "correct answer must be one of A-D, found \"X\""
        );
    }
}
