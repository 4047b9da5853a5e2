//! Assessment report with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::answers::QuizAnswers;
use crate::engine::EligibilityResult;

/// One completed assessment: the answers as given and everything derived
/// from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the assessment ran.
    pub created_at: DateTime<Utc>,
    /// The answers the result was derived from.
    pub answers: QuizAnswers,
    /// The full evaluation result.
    pub result: EligibilityResult,
}

impl AssessmentReport {
    /// Wrap an evaluation into a report with a fresh id and timestamp.
    pub fn new(answers: QuizAnswers, result: EligibilityResult) -> Self {
        AssessmentReport {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            answers,
            result,
        }
    }

    /// Save the report as pretty JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AssessmentReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
