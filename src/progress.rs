//! Learner progress persisted to a local JSON file.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROGRESS_FILE: &str = "progress.json";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    #[serde(default)]
    pub completed_modules: Vec<String>,
    #[serde(default)]
    pub completed_quizzes: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed progress file: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl Progress {
    /// Load saved progress; a missing file is an empty record.
    pub async fn load(path: &Path) -> Result<Self, ProgressError> {
        match tokio::fs::read_to_string(path).await {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Progress::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write the whole record back, stamping the save time.
    pub async fn save(&mut self, path: &Path) -> Result<(), ProgressError> {
        self.updated_at = Some(Utc::now());
        let mut raw = serde_json::to_string_pretty(self)?;
        raw.push('\n');
        tokio::fs::write(path, raw).await?;
        Ok(())
    }

    /// Returns true when the module was not already recorded.
    pub fn mark_module_completed(&mut self, title: &str) -> bool {
        if self.completed_modules.iter().any(|t| t == title) {
            return false;
        }
        self.completed_modules.push(title.to_string());
        true
    }

    /// Returns true when the quiz was not already recorded.
    pub fn mark_quiz_completed(&mut self, name: &str) -> bool {
        if self.completed_quizzes.iter().any(|n| n == name) {
            return false;
        }
        self.completed_quizzes.push(name.to_string());
        true
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.notes = notes.trim().to_string();
    }

    pub fn clear_notes(&mut self) {
        self.notes.clear();
    }
}
