//! Ordered reads and formatting-preserving writes over the fixed ranges.

use tracing::debug;

use ecr_core::{CellKind, CellRef, ColumnSpan, Document, SheetId};

/// Read one value per column of `span` at `row`, in span order. Missing
/// cells read as empty strings so positions stay aligned with the layout.
pub fn read_row<D: Document>(doc: &D, sheet: SheetId, span: ColumnSpan, row: u32) -> Vec<String> {
    span.iter()
        .map(|col| doc.cell(sheet, CellRef::new(col, row)).unwrap_or_default())
        .collect()
}

/// Read one value per row of `rows` at `col`, in row order.
pub fn read_column<D: Document>(
    doc: &D,
    sheet: SheetId,
    col: u32,
    rows: impl Iterator<Item = u32>,
) -> Vec<String> {
    rows.map(|row| doc.cell(sheet, CellRef::new(col, row)).unwrap_or_default())
        .collect()
}

/// Read a single cell, empty string when absent.
pub fn read_cell<D: Document>(doc: &D, sheet: SheetId, at: CellRef) -> String {
    doc.cell(sheet, at).unwrap_or_default()
}

/// Write `values` across `span` at `row`. Each span position with a value
/// gets it set (creating the cell, inheriting the column's style); span
/// positions beyond `values.len()` are cleared value-only so the template's
/// formatting at those coordinates survives.
pub fn write_row<D: Document>(
    doc: &mut D,
    sheet: SheetId,
    span: ColumnSpan,
    row: u32,
    values: &[String],
    kind: CellKind,
) {
    debug!(%span, row, count = values.len(), "writing row span");

    for (offset, col) in span.iter().enumerate() {
        let at = CellRef::new(col, row);
        match values.get(offset) {
            Some(value) => doc.set_cell(sheet, at, value, kind),
            None => doc.clear_cell(sheet, at),
        }
    }
}

/// Write `values` down `col` starting at `start_row`; clear the remaining
/// rows up to and including `end_row`.
pub fn write_column<D: Document>(
    doc: &mut D,
    sheet: SheetId,
    col: u32,
    start_row: u32,
    end_row: u32,
    values: &[String],
    kind: CellKind,
) {
    debug!(col, start_row, end_row, count = values.len(), "writing column span");

    for (offset, row) in (start_row..=end_row).enumerate() {
        let at = CellRef::new(col, row);
        match values.get(offset) {
            Some(value) => doc.set_cell(sheet, at, value, kind),
            None => doc.clear_cell(sheet, at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecr_core::{Document, JsonStore, StoredCell, WorkbookData};

    fn open_sample() -> (tempfile::TempDir, ecr_core::JsonDocument) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        let mut book = WorkbookData::with_sheets(["1ST"]);
        let sheet = book.sheet_mut("1ST").unwrap();
        sheet.insert(CellRef::new(6, 11), StoredCell::number("10").with_style(Some(2)));
        sheet.insert(CellRef::new(7, 11), StoredCell::number("20"));
        sheet.insert(CellRef::new(8, 11), StoredCell::number("30").with_style(Some(2)));
        let doc = JsonStore.create(&path, book).unwrap();
        (dir, doc)
    }

    #[test]
    fn test_read_row_pads_missing_cells() {
        let (_dir, doc) = open_sample();
        let sheet = doc.sheet("1ST").unwrap();
        let values = read_row(&doc, sheet, ColumnSpan::new(6, 10), 11);
        assert_eq!(values, vec!["10", "20", "30", "", ""]);
    }

    #[test]
    fn test_write_row_clears_excess_and_keeps_style() {
        let (_dir, mut doc) = open_sample();
        let sheet = doc.sheet("1ST").unwrap();

        let values = vec!["7".to_string(), "8".to_string()];
        write_row(&mut doc, sheet, ColumnSpan::new(6, 8), 11, &values, CellKind::Number);

        let read = read_row(&doc, sheet, ColumnSpan::new(6, 8), 11);
        assert_eq!(read, vec!["7", "8", ""]);
        // The cleared H11 held a style; writing again must find it intact.
        assert_eq!(doc.column_style(sheet, 8), Some(2));
    }

    #[test]
    fn test_write_row_is_idempotent() {
        let (_dir, mut doc) = open_sample();
        let sheet = doc.sheet("1ST").unwrap();
        let span = ColumnSpan::new(6, 8);

        let values = vec!["1".to_string(), "2".to_string(), "3".to_string()];
        write_row(&mut doc, sheet, span, 11, &values, CellKind::Number);
        let first = read_row(&doc, sheet, span, 11);
        write_row(&mut doc, sheet, span, 11, &values, CellKind::Number);
        let second = read_row(&doc, sheet, span, 11);

        assert_eq!(first, second);
        assert_eq!(first, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_write_creates_missing_cells() {
        let (_dir, mut doc) = open_sample();
        let sheet = doc.sheet("1ST").unwrap();

        // Row 20 does not exist yet.
        let values = vec!["55".to_string()];
        write_row(&mut doc, sheet, ColumnSpan::new(6, 6), 20, &values, CellKind::Number);
        assert_eq!(read_cell(&doc, sheet, CellRef::new(6, 20)), "55");
    }

    #[test]
    fn test_write_column() {
        let (_dir, mut doc) = open_sample();
        let sheet = doc.sheet("1ST").unwrap();

        let names = vec!["ALICE".to_string(), "BOB".to_string()];
        write_column(&mut doc, sheet, 2, 13, 16, &names, CellKind::Text);

        let read = read_column(&doc, sheet, 2, 13..=16);
        assert_eq!(read, vec!["ALICE", "BOB", "", ""]);
    }
}
