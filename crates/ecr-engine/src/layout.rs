//! The fixed cell layout of the class record template.
//!
//! Every coordinate the engine touches is listed here; nothing else in the
//! workbook is read or written.

use serde::{Deserialize, Serialize};

use ecr_core::{CellRef, ColumnSpan};

// Column letters used by the layout, as 1-based numbers.
pub const COL_B: u32 = 2;
pub const COL_F: u32 = 6;
pub const COL_O: u32 = 15;
pub const COL_S: u32 = 19;
pub const COL_AB: u32 = 28;
pub const COL_AE: u32 = 31;
pub const COL_AF: u32 = 32;
pub const COL_AI: u32 = 35;

/// Sheet holding rosters and the track selector.
pub const SHEET_INPUT_DATA: &str = "INPUT DATA";
/// First-quarter grade grid.
pub const SHEET_FIRST_QUARTER: &str = "1ST";
/// Second-quarter grade grid.
pub const SHEET_SECOND_QUARTER: &str = "2ND";
/// Formula-only summary sheet; required but never written by the engine.
pub const SHEET_FINAL_GRADE: &str = "Final Semestral Grade";

/// Sheets a workbook must contain, in report order.
pub const REQUIRED_SHEETS: [&str; 4] = [
    SHEET_INPUT_DATA,
    SHEET_FIRST_QUARTER,
    SHEET_SECOND_QUARTER,
    SHEET_FINAL_GRADE,
];

/// Row on the quarter sheets holding the highest possible scores.
pub const MAX_SCORES_ROW: u32 = 11;

/// Track selector cell on INPUT DATA.
pub const TRACK_CELL: CellRef = CellRef::new(COL_AE, 8);

/// Column on the quarter sheets with the formula-derived final grade.
pub const GRADE_COL: u32 = COL_AI;

/// The three score categories, each bound to a fixed column run on the
/// quarter sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreCategory {
    WrittenWorks,
    PerformanceTasks,
    Exam,
}

impl ScoreCategory {
    /// Column run for this category (F..O, S..AB, or the single AF).
    pub fn span(&self) -> ColumnSpan {
        match self {
            ScoreCategory::WrittenWorks => ColumnSpan::new(COL_F, COL_O),
            ScoreCategory::PerformanceTasks => ColumnSpan::new(COL_S, COL_AB),
            ScoreCategory::Exam => ColumnSpan::new(COL_AF, COL_AF),
        }
    }

    /// Number of score slots in the category.
    pub fn capacity(&self) -> usize {
        self.span().len()
    }
}

/// Roster gender; each has its own fixed row span on INPUT DATA column B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// A fixed-capacity roster block: one column, an inclusive row span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterRange {
    pub col: u32,
    pub start_row: u32,
    pub end_row: u32,
}

impl RosterRange {
    pub fn capacity(&self) -> usize {
        (self.end_row - self.start_row + 1) as usize
    }

    pub fn rows(&self) -> impl Iterator<Item = u32> {
        self.start_row..=self.end_row
    }
}

impl Gender {
    pub fn roster_range(&self) -> RosterRange {
        match self {
            Gender::Male => RosterRange {
                col: COL_B,
                start_row: 13,
                end_row: 37,
            },
            Gender::Female => RosterRange {
                col: COL_B,
                start_row: 64,
                end_row: 88,
            },
        }
    }

    /// Quarter-sheet row for the student at `roster_index` in this roster.
    ///
    /// The female base is 69, not the roster's own start row 64: rows 64-68
    /// of the female block repeat the section header in the template, so
    /// the grid rows are offset past them.
    pub fn student_row(&self, roster_index: usize) -> u32 {
        let base = match self {
            Gender::Male => 13,
            Gender::Female => 69,
        };
        base + roster_index as u32
    }
}
