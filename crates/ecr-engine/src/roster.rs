//! The fixed-capacity name rosters on the INPUT DATA sheet.

use tracing::debug;

use ecr_core::{CellKind, CellRef, Document, SheetId};

use crate::error::EngineError;
use crate::grid;
use crate::layout::RosterRange;

/// Read the non-blank names in the roster block, top to bottom. Blank rows
/// are skipped entirely, not kept as placeholders.
pub fn read<D: Document>(doc: &D, sheet: SheetId, range: RosterRange) -> Vec<String> {
    range
        .rows()
        .filter_map(|row| doc.cell(sheet, CellRef::new(range.col, row)))
        .filter(|name| !name.trim().is_empty())
        .collect()
}

/// Append a name, re-sort the whole roster case-insensitively, and rewrite
/// it from the block's first row, clearing the rows past the new count.
///
/// A blank `new_name` appends nothing but still re-sorts and rewrites.
/// Refuses with `CapacityExceeded` when the combined roster would not fit;
/// nothing is written in that case. Returns the list as read back after
/// the rewrite.
pub fn append_and_resort<D: Document>(
    doc: &mut D,
    sheet: SheetId,
    range: RosterRange,
    new_name: &str,
) -> Result<Vec<String>, EngineError> {
    let mut names = read(doc, sheet, range);
    if !new_name.trim().is_empty() {
        names.push(new_name.to_string());
    }
    names.sort_by_key(|n| n.to_uppercase());

    if names.len() > range.capacity() {
        return Err(EngineError::CapacityExceeded {
            capacity: range.capacity(),
            attempted: names.len(),
        });
    }

    debug!(count = names.len(), start = range.start_row, "rewriting roster");
    grid::write_column(
        doc,
        sheet,
        range.col,
        range.start_row,
        range.end_row,
        &names,
        CellKind::Text,
    );

    Ok(read(doc, sheet, range))
}
