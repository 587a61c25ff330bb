//! The `quizdesk validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizdesk_core::parser::{list_subjects, load_bank, validate_bank, QuestionBank};

pub fn execute(bank_path: PathBuf) -> Result<()> {
    let banks: Vec<QuestionBank> = if bank_path.is_dir() {
        list_subjects(&bank_path)?
            .iter()
            .map(|subject| load_bank(&subject.path))
            .collect::<Result<Vec<_>>>()?
    } else {
        vec![load_bank(&bank_path)?]
    };

    let mut total_issues = 0;

    for bank in &banks {
        println!("Subject: {} ({} questions)", bank.subject, bank.len());

        for skipped in &bank.skipped {
            println!("  line {}: SKIPPED: {}", skipped.line_no, skipped.reason);
        }
        total_issues += bank.skipped.len();

        let warnings = validate_bank(bank);
        for w in &warnings {
            let prefix = w
                .prompt
                .as_ref()
                .map(|p| format!("  [{p}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_issues += warnings.len();
    }

    if total_issues == 0 {
        println!("All banks valid.");
    } else {
        println!("\n{total_issues} issue(s) found.");
    }

    Ok(())
}
