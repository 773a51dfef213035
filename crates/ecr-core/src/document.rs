use std::path::Path;

use crate::cell::CellKind;
use crate::coord::CellRef;
use crate::error::StoreError;

/// Opaque handle to a sheet inside an open document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetId(pub(crate) usize);

/// The narrow cell-level contract the grade engine consumes.
///
/// The engine never sees the document's own representation; it looks up a
/// sheet by name, reads and writes raw cell text, and asks for two explicit
/// side effects: the recalculation flag and the save. Shared-string
/// indirection is resolved inside the store, never by callers.
pub trait Document {
    /// Names of all sheets, in document order.
    fn sheet_names(&self) -> Vec<String>;

    /// Look up a sheet by exact, case-sensitive name.
    fn sheet(&self, name: &str) -> Option<SheetId>;

    /// Raw text of a cell, shared strings resolved. `None` when the cell
    /// does not exist or holds no value.
    fn cell(&self, sheet: SheetId, at: CellRef) -> Option<String>;

    /// Set a cell's value and type, creating the cell if needed. A newly
    /// created cell picks up the column's existing style index so the
    /// template's formatting stays uniform.
    fn set_cell(&mut self, sheet: SheetId, at: CellRef, value: &str, kind: CellKind);

    /// Remove a cell's value, keeping its style.
    fn clear_cell(&mut self, sheet: SheetId, at: CellRef);

    /// First style index found anywhere in the given column, if any.
    fn column_style(&self, sheet: SheetId, col: u32) -> Option<u32>;

    /// Mark the document so formula cells recompute on next open. Called
    /// after every successful mutating sequence, never after a failed one.
    fn request_full_recalculation(&mut self);

    /// Persist the document.
    fn save(&mut self) -> Result<(), StoreError>;
}

/// Opens documents by path. Every engine operation opens, works, saves and
/// drops the handle before returning; no handle is held across operations.
pub trait DocumentStore {
    type Doc: Document;

    fn open_read(&self, path: &Path) -> Result<Self::Doc, StoreError>;

    fn open_write(&self, path: &Path) -> Result<Self::Doc, StoreError>;
}
