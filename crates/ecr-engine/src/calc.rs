//! Weighted composite and transmuted grade from raw score vectors.

use crate::grades;
use crate::track::Weights;

/// Parse a raw cell text as a number, treating anything unparsable
/// (including the empty string) as 0. Blank cells are a normal state of a
/// partially filled grade sheet, not an error.
pub fn parse_or_zero(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

fn sum(raw: &[String]) -> f64 {
    raw.iter().map(|s| parse_or_zero(s)).sum()
}

fn percentage(raw_total: f64, max_total: f64) -> f64 {
    if max_total > 0.0 {
        raw_total / max_total * 100.0
    } else {
        0.0
    }
}

/// A student's raw scores for one quarter, as read from the grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawScores {
    pub written_works: Vec<String>,
    pub performance_tasks: Vec<String>,
    pub exam: String,
}

/// The computed result: per-category percentages, the weighted composite,
/// and the transmuted grade (0 when no maxima are configured).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedGrade {
    pub written_works_pct: f64,
    pub performance_tasks_pct: f64,
    pub exam_pct: f64,
    pub composite: f64,
    pub transmuted: u32,
}

/// Combine raw scores with the highest-possible-score vectors and the
/// active track's weights.
pub fn computed_grade(
    raw: &RawScores,
    written_works_max: &[String],
    performance_tasks_max: &[String],
    exam_max: &str,
    weights: Weights,
) -> ComputedGrade {
    let written_works_pct = percentage(sum(&raw.written_works), sum(written_works_max));
    let performance_tasks_pct =
        percentage(sum(&raw.performance_tasks), sum(performance_tasks_max));
    let exam_pct = percentage(parse_or_zero(&raw.exam), parse_or_zero(exam_max));

    let composite = written_works_pct * weights.written_works
        + performance_tasks_pct * weights.performance_tasks
        + exam_pct * weights.exam;

    ComputedGrade {
        written_works_pct,
        performance_tasks_pct,
        exam_pct,
        composite,
        transmuted: grades::transmute(composite),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::Track;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_or_zero() {
        assert_eq!(parse_or_zero("42"), 42.0);
        assert_eq!(parse_or_zero(" 7.5 "), 7.5);
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("abc"), 0.0);
    }

    #[test]
    fn test_tvl_worked_example() {
        // 40/50 written (80%), 81/90 performance (90%), 70/100 exam (70%)
        // under TVL weights .20/.60/.20 -> 84.0 -> 90.
        let raw = RawScores {
            written_works: strings(&["10", "10", "10", "10"]),
            performance_tasks: strings(&["27", "27", "27"]),
            exam: "70".into(),
        };
        let result = computed_grade(
            &raw,
            &strings(&["20", "10", "10", "10"]),
            &strings(&["30", "30", "30"]),
            "100",
            Track::TvlSportsArts.weights(),
        );

        assert_eq!(result.written_works_pct, 80.0);
        assert_eq!(result.performance_tasks_pct, 90.0);
        assert_eq!(result.exam_pct, 70.0);
        assert_eq!(result.composite, 84.0);
        assert_eq!(result.transmuted, 90);
    }

    #[test]
    fn test_unparsable_scores_count_as_zero() {
        let raw = RawScores {
            written_works: strings(&["10", "", "abc", "10"]),
            performance_tasks: strings(&[]),
            exam: "".into(),
        };
        let result = computed_grade(
            &raw,
            &strings(&["10", "10", "", "10"]),
            &strings(&["30"]),
            "50",
            Track::CoreSubject.weights(),
        );

        // 20 of 30 written works; the rest contribute nothing.
        assert!((result.written_works_pct - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.performance_tasks_pct, 0.0);
        assert_eq!(result.exam_pct, 0.0);
    }

    #[test]
    fn test_no_maxima_yields_zero_grade() {
        let raw = RawScores {
            written_works: strings(&["10"]),
            performance_tasks: strings(&["10"]),
            exam: "10".into(),
        };
        let result = computed_grade(&raw, &[], &[], "", Track::CoreSubject.weights());
        assert_eq!(result.composite, 0.0);
        // Composite 0.0 still lands in the bottom band.
        assert_eq!(result.transmuted, 60);
    }

    #[test]
    fn test_weights_come_from_the_active_track() {
        let raw = RawScores {
            written_works: strings(&["50"]),
            performance_tasks: strings(&["0"]),
            exam: "0".into(),
        };
        let ww_only = |t: Track| {
            computed_grade(
                &raw,
                &strings(&["50"]),
                &strings(&["100"]),
                "100",
                t.weights(),
            )
            .composite
        };

        assert_eq!(ww_only(Track::CoreSubject), 25.0);
        assert_eq!(ww_only(Track::WorkImmersion), 35.0);
        assert_eq!(ww_only(Track::TvlSportsArts), 20.0);
    }
}
