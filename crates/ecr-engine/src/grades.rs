/// One band of the transmutation table: a closed percentage interval and
/// the discrete grade it maps to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeBand {
    pub min: f64,
    pub max: f64,
    pub grade: u32,
}

const fn band(min: f64, max: f64, grade: u32) -> GradeBand {
    GradeBand { min, max, grade }
}

/// The DepEd transmutation table, descending by `min`.
///
/// A zero-width band pins exactly 100.00 to 100; 1.60-wide bands run down
/// to [60.00, 61.59] -> 75, then 4.00-wide bands cover the remainder down
/// to [0.00, 3.99] -> 60. Both interval ends are closed; adjacent bands
/// never share a boundary value.
pub const GRADE_TABLE: [GradeBand; 41] = [
    band(100.00, 100.00, 100),
    band(98.40, 99.99, 99),
    band(96.80, 98.39, 98),
    band(95.20, 96.79, 97),
    band(93.60, 95.19, 96),
    band(92.00, 93.59, 95),
    band(90.40, 91.99, 94),
    band(88.80, 90.39, 93),
    band(87.20, 88.79, 92),
    band(85.60, 87.19, 91),
    band(84.00, 85.59, 90),
    band(82.40, 83.99, 89),
    band(80.80, 82.39, 88),
    band(79.20, 80.79, 87),
    band(77.60, 79.19, 86),
    band(76.00, 77.59, 85),
    band(74.40, 75.99, 84),
    band(72.80, 74.39, 83),
    band(71.20, 72.79, 82),
    band(69.60, 71.19, 81),
    band(68.00, 69.59, 80),
    band(66.40, 67.99, 79),
    band(64.80, 66.39, 78),
    band(63.20, 64.79, 77),
    band(61.60, 63.19, 76),
    band(60.00, 61.59, 75),
    band(56.00, 59.99, 74),
    band(52.00, 55.99, 73),
    band(48.00, 51.99, 72),
    band(44.00, 47.99, 71),
    band(40.00, 43.99, 70),
    band(36.00, 39.99, 69),
    band(32.00, 35.99, 68),
    band(28.00, 31.99, 67),
    band(24.00, 27.99, 66),
    band(20.00, 23.99, 65),
    band(16.00, 19.99, 64),
    band(12.00, 15.99, 63),
    band(8.00, 11.99, 62),
    band(4.00, 7.99, 61),
    band(0.00, 3.99, 60),
];

/// Map a composite percentage to its transmuted grade.
///
/// Returns 0 when no band matches: percentages below 0 or above 100, NaN,
/// or values falling in the hairline gaps between bands (e.g. 99.995).
pub fn transmute(percent: f64) -> u32 {
    GRADE_TABLE
        .iter()
        .find(|b| percent >= b.min && percent <= b.max)
        .map(|b| b.grade)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_hundred() {
        assert_eq!(transmute(100.0), 100);
        assert_eq!(transmute(99.99), 99);
    }

    #[test]
    fn test_band_boundaries_resolve_to_listing_band() {
        // 61.59 is the max of the 75 band, not the min of any other.
        assert_eq!(transmute(61.59), 75);
        assert_eq!(transmute(61.60), 76);
        assert_eq!(transmute(60.00), 75);
        assert_eq!(transmute(59.99), 74);
        assert_eq!(transmute(0.0), 60);
        assert_eq!(transmute(3.99), 60);
        assert_eq!(transmute(4.0), 61);
    }

    #[test]
    fn test_out_of_range_and_nan() {
        assert_eq!(transmute(-0.01), 0);
        assert_eq!(transmute(100.01), 0);
        assert_eq!(transmute(f64::NAN), 0);
    }

    #[test]
    fn test_full_coverage_on_hundredths() {
        // Every percentage with two decimal places in [0, 100] lands in
        // exactly one band and maps to a grade in 60..=100.
        for i in 0..=10000u32 {
            let p = f64::from(i) / 100.0;
            let matches = GRADE_TABLE
                .iter()
                .filter(|b| p >= b.min && p <= b.max)
                .count();
            assert_eq!(matches, 1, "percent {p} matched {matches} bands");
            let g = transmute(p);
            assert!((60..=100).contains(&g), "percent {p} gave grade {g}");
        }
    }

    #[test]
    fn test_table_is_descending_and_disjoint() {
        for pair in GRADE_TABLE.windows(2) {
            assert!(pair[0].min > pair[1].max);
            assert_eq!(pair[0].grade, pair[1].grade + 1);
        }
    }
}
