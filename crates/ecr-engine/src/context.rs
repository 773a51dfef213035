use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::layout::ScoreCategory;
use crate::track::{Quarter, Track, Weights};

/// Snapshot of a loaded workbook: the path, the active quarter and track,
/// and the cached highest-possible-score vectors for the quarter.
///
/// The context is an immutable value. Operations that change what it
/// caches (quarter switches, score edits) return a fresh context rather
/// than mutating in place, so there is no hidden cross-call state; stale
/// contexts simply describe the workbook as it was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkbookContext {
    pub path: PathBuf,
    pub quarter: Quarter,
    pub track: Track,
    pub written_works_max: Vec<String>,
    pub performance_tasks_max: Vec<String>,
    pub exam_max: String,
    pub sheet_names: Vec<String>,
}

impl WorkbookContext {
    /// The active track's weight triple.
    pub fn weights(&self) -> Weights {
        self.track.weights()
    }

    /// Cached highest-possible scores for a category, as raw cell text.
    pub fn max_scores(&self, category: ScoreCategory) -> &[String] {
        match category {
            ScoreCategory::WrittenWorks => &self.written_works_max,
            ScoreCategory::PerformanceTasks => &self.performance_tasks_max,
            ScoreCategory::Exam => std::slice::from_ref(&self.exam_max),
        }
    }
}
