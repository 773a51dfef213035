use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AddressError;

/// Convert a column label (A, B, ..., Z, AA, AB, ...) to its 1-based number.
///
/// Labels are bijective base-26 with digits 1-26 and no zero, so the
/// conversion is a total bijection on positive integers.
pub fn col_from_label(label: &str) -> Result<u32, AddressError> {
    if label.is_empty() {
        return Err(AddressError::InvalidLabel(label.to_string()));
    }

    let mut col: u32 = 0;
    for c in label.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(AddressError::InvalidLabel(label.to_string()));
        }
        col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
    }

    Ok(col)
}

/// Convert a 1-based column number to its label (1 -> A, 26 -> Z, 27 -> AA).
pub fn col_to_label(col: u32) -> Result<String, AddressError> {
    if col == 0 {
        return Err(AddressError::InvalidNumber(col));
    }

    let mut label = String::new();
    let mut n = col;
    while n > 0 {
        n -= 1;
        label.insert(0, char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }

    Ok(label)
}

/// Cell coordinate on a sheet. Both column and row are 1-based, matching
/// the A1 notation the fixed layout is written in.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellRef {
    pub col: u32,
    pub row: u32,
}

impl CellRef {
    pub const fn new(col: u32, row: u32) -> Self {
        CellRef { col, row }
    }

    /// Parse from A1 notation (e.g., "AF11" -> col 32, row 11).
    pub fn from_a1(notation: &str) -> Result<Self, AddressError> {
        let notation = notation.trim();
        let split = notation
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| AddressError::InvalidCellRef(notation.to_string()))?;

        let (letters, digits) = notation.split_at(split);
        let col = col_from_label(letters)
            .map_err(|_| AddressError::InvalidCellRef(notation.to_string()))?;
        let row: u32 = digits
            .parse()
            .map_err(|_| AddressError::InvalidCellRef(notation.to_string()))?;

        if row == 0 {
            return Err(AddressError::InvalidCellRef(notation.to_string()));
        }

        Ok(CellRef { col, row })
    }

    /// Convert to A1 notation.
    pub fn to_a1(&self) -> String {
        // col is non-zero by construction everywhere this type is built from
        // the fixed layout; a hand-built zero column still formats rather
        // than panics.
        let label = col_to_label(self.col).unwrap_or_default();
        format!("{}{}", label, self.row)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1())
    }
}

/// An inclusive run of columns, e.g. F..O. Iterates in left-to-right order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpan {
    pub start: u32,
    pub end: u32,
}

impl ColumnSpan {
    pub const fn new(start: u32, end: u32) -> Self {
        ColumnSpan { start, end }
    }

    /// Number of columns in the span.
    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn contains(&self, col: u32) -> bool {
        col >= self.start && col <= self.end
    }

    /// Iterate over the column numbers in order.
    pub fn iter(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }
}

impl fmt::Display for ColumnSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = col_to_label(self.start).unwrap_or_default();
        let end = col_to_label(self.end).unwrap_or_default();
        write!(f, "{}:{}", start, end)
    }
}

impl IntoIterator for ColumnSpan {
    type Item = u32;
    type IntoIter = std::ops::RangeInclusive<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.start..=self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_col_from_label() {
        assert_eq!(col_from_label("A"), Ok(1));
        assert_eq!(col_from_label("Z"), Ok(26));
        assert_eq!(col_from_label("AA"), Ok(27));
        assert_eq!(col_from_label("AF"), Ok(32));
        assert_eq!(col_from_label("ZZ"), Ok(702));
    }

    #[test]
    fn test_col_to_label() {
        assert_eq!(col_to_label(1).unwrap(), "A");
        assert_eq!(col_to_label(26).unwrap(), "Z");
        assert_eq!(col_to_label(27).unwrap(), "AA");
        assert_eq!(col_to_label(32).unwrap(), "AF");
        assert_eq!(col_to_label(702).unwrap(), "ZZ");
        assert_eq!(col_to_label(703).unwrap(), "AAA");
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(col_from_label("").is_err());
        assert!(col_from_label("A1").is_err());
        assert!(col_from_label("a-b").is_err());
        assert!(col_to_label(0).is_err());
    }

    #[test]
    fn test_round_trip_all_columns_to_zzz() {
        // 18278 == ZZZ, the full three-letter space.
        for n in 1..=18278u32 {
            let label = col_to_label(n).unwrap();
            assert!(label.len() <= 3);
            assert_eq!(col_from_label(&label), Ok(n));
        }
    }

    #[test]
    fn test_round_trip_labels() {
        let letters = ('A'..='Z').collect::<Vec<_>>();
        let mut labels: Vec<String> = letters.iter().map(|c| c.to_string()).collect();
        for a in &letters {
            for b in &letters {
                labels.push(format!("{}{}", a, b));
            }
        }
        for label in labels {
            let n = col_from_label(&label).unwrap();
            assert_eq!(col_to_label(n).unwrap(), label);
        }
    }

    #[test]
    fn test_cell_ref_a1() {
        let r = CellRef::from_a1("A1").unwrap();
        assert_eq!(r, CellRef::new(1, 1));

        let r = CellRef::from_a1("AF11").unwrap();
        assert_eq!(r, CellRef::new(32, 11));
        assert_eq!(r.to_a1(), "AF11");

        assert!(CellRef::from_a1("11").is_err());
        assert!(CellRef::from_a1("AF").is_err());
        assert!(CellRef::from_a1("AF0").is_err());
    }

    #[test]
    fn test_column_span() {
        // F..O, the written-works run.
        let span = ColumnSpan::new(6, 15);
        assert_eq!(span.len(), 10);
        assert!(span.contains(6));
        assert!(span.contains(15));
        assert!(!span.contains(16));
        assert_eq!(span.to_string(), "F:O");

        let cols: Vec<u32> = span.iter().collect();
        assert_eq!(cols.first(), Some(&6));
        assert_eq!(cols.last(), Some(&15));
    }
}
