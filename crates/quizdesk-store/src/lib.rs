//! quizdesk-store — the append-only results log.
//!
//! One CSV row per completed attempt, under the header
//! `date,student,subject,score,total,percent`. Reads load the whole log
//! into memory; reporting filters and sorts from there. Concurrent
//! writers are out of scope.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use quizdesk_core::record::AttemptRecord;

/// Column order of the log, matching `AttemptRecord`'s field order.
pub const HEADER: [&str; 6] = ["date", "student", "subject", "score", "total", "percent"];

/// Handle to the results log file.
#[derive(Debug, Clone)]
pub struct ResultLog {
    path: PathBuf,
}

impl ResultLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the log with its header row iff it does not exist yet,
    /// creating parent directories as needed.
    pub fn ensure_initialized(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create log directory: {}", parent.display())
                })?;
            }
        }

        let mut writer = csv::Writer::from_path(&self.path)
            .with_context(|| format!("failed to create results log: {}", self.path.display()))?;
        writer
            .write_record(HEADER)
            .context("failed to write results log header")?;
        writer.flush()?;

        Ok(())
    }

    /// Append one attempt record, initializing the log first if needed.
    pub fn append(&self, record: &AttemptRecord) -> Result<()> {
        self.ensure_initialized()?;

        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open results log: {}", self.path.display()))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .serialize(record)
            .context("failed to write attempt record")?;
        writer.flush()?;

        Ok(())
    }

    /// Load all records in file order. A missing log reads as empty;
    /// malformed rows are skipped with a diagnostic.
    pub fn load(&self) -> Result<Vec<AttemptRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)
            .with_context(|| format!("failed to read results log: {}", self.path.display()))?;

        let mut records = Vec::new();
        for (i, row) in reader.deserialize::<AttemptRecord>().enumerate() {
            match row {
                Ok(record) => records.push(record),
                Err(e) => {
                    // +2: one for the header row, one for 1-based counting
                    tracing::warn!(
                        "skipping malformed row {} of {}: {e}",
                        i + 2,
                        self.path.display()
                    );
                }
            }
        }

        Ok(records)
    }
}
