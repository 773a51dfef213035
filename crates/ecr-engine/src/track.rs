use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::EngineError;
use crate::layout;

/// Grading period. Each quarter is bound to its own worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quarter {
    First,
    Second,
}

impl Quarter {
    /// Name of the worksheet holding this quarter's grid.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Quarter::First => layout::SHEET_FIRST_QUARTER,
            Quarter::Second => layout::SHEET_SECOND_QUARTER,
        }
    }
}

/// Per-category weights for one curriculum track. Sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub written_works: f64,
    pub performance_tasks: f64,
    pub exam: f64,
}

/// The four fixed curriculum tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Track {
    CoreSubject,
    AcademicExceptImmersion,
    WorkImmersion,
    TvlSportsArts,
}

impl Track {
    pub const ALL: [Track; 4] = [
        Track::CoreSubject,
        Track::AcademicExceptImmersion,
        Track::WorkImmersion,
        Track::TvlSportsArts,
    ];

    /// Resolve a track selection index, failing outside the fixed table.
    pub fn from_index(index: usize) -> Result<Track, EngineError> {
        Track::ALL
            .get(index)
            .copied()
            .ok_or(EngineError::UnknownTrack(index))
    }

    /// Resolve the label text stored in the track-selector cell.
    pub fn from_label(label: &str) -> Option<Track> {
        Track::ALL.into_iter().find(|t| t.label() == label)
    }

    /// The label exactly as the workbook template stores it.
    pub fn label(&self) -> &'static str {
        match self {
            Track::CoreSubject => "Core Subject (All Tracks)",
            Track::AcademicExceptImmersion => "Academic Track (except Immersion)",
            Track::WorkImmersion => {
                "Work Immersion/ Culminating Activity (for Academic Track)"
            }
            Track::TvlSportsArts => "TVL/ Sports/ Arts and Design Track",
        }
    }

    pub fn weights(&self) -> Weights {
        match self {
            Track::CoreSubject => Weights {
                written_works: 0.25,
                performance_tasks: 0.50,
                exam: 0.25,
            },
            Track::AcademicExceptImmersion => Weights {
                written_works: 0.25,
                performance_tasks: 0.45,
                exam: 0.30,
            },
            Track::WorkImmersion => Weights {
                written_works: 0.35,
                performance_tasks: 0.40,
                exam: 0.25,
            },
            Track::TvlSportsArts => Weights {
                written_works: 0.20,
                performance_tasks: 0.60,
                exam: 0.20,
            },
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_sheets() {
        assert_eq!(Quarter::First.sheet_name(), "1ST");
        assert_eq!(Quarter::Second.sheet_name(), "2ND");
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Track::from_index(0).unwrap(), Track::CoreSubject);
        assert_eq!(Track::from_index(3).unwrap(), Track::TvlSportsArts);
        assert!(matches!(
            Track::from_index(4),
            Err(EngineError::UnknownTrack(4))
        ));
    }

    #[test]
    fn test_label_round_trip() {
        for track in Track::ALL {
            assert_eq!(Track::from_label(track.label()), Some(track));
        }
        assert_eq!(Track::from_label("STEM"), None);
    }

    #[test]
    fn test_weights_sum_to_one() {
        for track in Track::ALL {
            let w = track.weights();
            let sum = w.written_works + w.performance_tasks + w.exam;
            assert!((sum - 1.0).abs() < 1e-9, "{track}: {sum}");
        }
    }
}
