//! Bounded history of completed assessments
//!
//! Only the most recent `limit` assessments are kept; older ones are dropped
//! as new ones arrive. The list is persisted as a TOML file:
//!
//! ```toml
//! [[assessments]]
//! date = "2026-10-16T09:30:00Z"
//!
//! [assessments.diagnosis]
//! condition = "COMMON COLD"
//! severity = "MILD"
//! # ...
//! ```

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::DiagnosisRecord;

/// Number of assessments kept unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// A diagnosis together with the time it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub date: DateTime<Utc>,
    pub diagnosis: DiagnosisRecord,
}

impl AssessmentRecord {
    pub fn new(diagnosis: DiagnosisRecord, date: DateTime<Utc>) -> Self {
        Self { date, diagnosis }
    }

    pub fn now(diagnosis: DiagnosisRecord) -> Self {
        Self::new(diagnosis, Utc::now())
    }
}

/// Oldest-first list capped at `limit` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentHistory {
    limit: usize,
    assessments: VecDeque<AssessmentRecord>,
}

impl Default for AssessmentHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl AssessmentHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            assessments: VecDeque::with_capacity(limit),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.assessments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assessments.is_empty()
    }

    /// Append a record and return whatever fell off the front.
    pub fn push(&mut self, record: AssessmentRecord) -> Vec<AssessmentRecord> {
        self.assessments.push_back(record);
        self.enforce_limit()
    }

    fn enforce_limit(&mut self) -> Vec<AssessmentRecord> {
        let excess = self.assessments.len().saturating_sub(self.limit);
        self.assessments.drain(..excess).collect()
    }

    pub fn latest(&self) -> Option<&AssessmentRecord> {
        self.assessments.back()
    }

    /// Newest first.
    pub fn iter_recent(&self) -> impl Iterator<Item = &AssessmentRecord> {
        self.assessments.iter().rev()
    }

    pub fn clear(&mut self) {
        self.assessments.clear();
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct HistoryFile {
    assessments: Vec<AssessmentRecord>,
}

/// TOML-file persistence for [`AssessmentHistory`].
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn error(&self, action: &str, e: impl std::fmt::Display) -> ApplicationError {
        ApplicationError::History {
            path: self.path.clone(),
            message: format!("{action}: {e}"),
        }
    }

    /// Load the stored history. A missing file yields an empty history.
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn load(&self, limit: usize) -> ApplicationResult<AssessmentHistory> {
        let mut history = AssessmentHistory::new(limit);
        if !self.path.exists() {
            debug!("no history file yet");
            return Ok(history);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.error("read", e))?;
        let file: HistoryFile = toml::from_str(&content).map_err(|e| self.error("parse", e))?;

        history.assessments.extend(file.assessments);
        let dropped = history.enforce_limit();
        debug!(loaded = history.len(), dropped = dropped.len(), "history loaded");
        Ok(history)
    }

    #[instrument(level = "debug", skip(self, history), fields(path = %self.path.display()))]
    pub fn save(&self, history: &AssessmentHistory) -> ApplicationResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.error("create directory", e))?;
            }
        }

        let file = HistoryFile {
            assessments: history.assessments.iter().cloned().collect(),
        };
        let content = toml::to_string_pretty(&file).map_err(|e| self.error("serialize", e))?;
        fs::write(&self.path, content).map_err(|e| self.error("write", e))
    }

    /// Load, push `record`, save. Returns the updated history.
    pub fn append(
        &self,
        record: AssessmentRecord,
        limit: usize,
    ) -> ApplicationResult<AssessmentHistory> {
        let mut history = self.load(limit)?;
        history.push(record);
        self.save(&history)?;
        Ok(history)
    }

    /// Delete the history file if present.
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn clear(&self) -> ApplicationResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| self.error("remove", e))?;
        }
        Ok(())
    }
}
