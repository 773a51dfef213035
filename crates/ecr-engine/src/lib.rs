pub mod calc;
pub mod context;
pub mod error;
pub mod gradebook;
pub mod grades;
pub mod grid;
pub mod layout;
pub mod roster;
pub mod track;

pub use calc::{parse_or_zero, ComputedGrade, RawScores};
pub use context::WorkbookContext;
pub use error::EngineError;
pub use gradebook::{Gradebook, Rosters, StudentScores};
pub use grades::{transmute, GradeBand, GRADE_TABLE};
pub use layout::{Gender, RosterRange, ScoreCategory};
pub use track::{Quarter, Track, Weights};
