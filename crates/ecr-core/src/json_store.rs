use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cell::{CellKind, CellPayload, StoredCell};
use crate::coord::CellRef;
use crate::document::{Document, DocumentStore, SheetId};
use crate::error::StoreError;

/// A single sheet with sparse cell storage keyed by (row, col).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetData {
    pub name: String,
    #[serde(default, with = "cell_map_serde")]
    cells: BTreeMap<(u32, u32), StoredCell>,
}

impl SheetData {
    pub fn new(name: impl Into<String>) -> Self {
        SheetData {
            name: name.into(),
            cells: BTreeMap::new(),
        }
    }

    pub fn get(&self, at: CellRef) -> Option<&StoredCell> {
        self.cells.get(&(at.row, at.col))
    }

    pub fn insert(&mut self, at: CellRef, cell: StoredCell) {
        self.cells.insert((at.row, at.col), cell);
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

/// Serialize the sparse cell map with stringified "row,col" keys so the
/// on-disk JSON stays a plain object.
mod cell_map_serde {
    use super::*;
    use serde::ser::SerializeMap;
    use serde::{de, Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(
        cells: &BTreeMap<(u32, u32), StoredCell>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(cells.len()))?;
        for ((row, col), cell) in cells {
            let key = format!("{},{}", row, col);
            map.serialize_entry(&key, cell)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<BTreeMap<(u32, u32), StoredCell>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MapVisitor;

        impl<'de> de::Visitor<'de> for MapVisitor {
            type Value = BTreeMap<(u32, u32), StoredCell>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map with \"row,col\" keys")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: de::MapAccess<'de>,
            {
                let mut cells = BTreeMap::new();
                while let Some(key) = map.next_key::<String>()? {
                    let cell: StoredCell = map.next_value()?;
                    let mut parts = key.split(',');
                    let row = parts.next().and_then(|p| p.parse::<u32>().ok());
                    let col = parts.next().and_then(|p| p.parse::<u32>().ok());
                    if let (Some(row), Some(col)) = (row, col) {
                        cells.insert((row, col), cell);
                    }
                }
                Ok(cells)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}

/// The serialized workbook: named sheets, a shared-string table and the
/// pending-recalculation flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkbookData {
    pub sheets: Vec<SheetData>,
    #[serde(default)]
    pub shared_strings: Vec<String>,
    #[serde(default)]
    pub recalc_pending: bool,
}

impl WorkbookData {
    /// Create a workbook with the given sheet names, in order.
    pub fn with_sheets<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WorkbookData {
            sheets: names.into_iter().map(SheetData::new).collect(),
            shared_strings: Vec::new(),
            recalc_pending: false,
        }
    }

    pub fn sheet_mut(&mut self, name: &str) -> Option<&mut SheetData> {
        self.sheets.iter_mut().find(|s| s.name == name)
    }

    /// Intern a string into the shared-string table, returning its index.
    pub fn intern(&mut self, value: &str) -> usize {
        if let Some(idx) = self.shared_strings.iter().position(|s| s == value) {
            return idx;
        }
        self.shared_strings.push(value.to_string());
        self.shared_strings.len() - 1
    }
}

/// An open workbook document backed by a JSON file.
#[derive(Debug)]
pub struct JsonDocument {
    path: PathBuf,
    writable: bool,
    book: WorkbookData,
}

impl JsonDocument {
    fn load(path: &Path, writable: bool) -> Result<Self, StoreError> {
        let text = fs::read_to_string(path)?;
        let book: WorkbookData = serde_json::from_str(&text)?;
        Ok(JsonDocument {
            path: path.to_path_buf(),
            writable,
            book,
        })
    }

    /// Whether a recalculation has been requested and not yet consumed.
    pub fn recalc_pending(&self) -> bool {
        self.book.recalc_pending
    }

    fn resolve(&self, cell: &StoredCell) -> Option<String> {
        match cell.payload.as_ref()? {
            CellPayload::Number(raw) | CellPayload::Inline(raw) => Some(raw.clone()),
            CellPayload::Shared(idx) => self.book.shared_strings.get(*idx).cloned(),
        }
    }
}

impl Document for JsonDocument {
    fn sheet_names(&self) -> Vec<String> {
        self.book.sheets.iter().map(|s| s.name.clone()).collect()
    }

    fn sheet(&self, name: &str) -> Option<SheetId> {
        self.book
            .sheets
            .iter()
            .position(|s| s.name == name)
            .map(SheetId)
    }

    fn cell(&self, sheet: SheetId, at: CellRef) -> Option<String> {
        let sheet = self.book.sheets.get(sheet.0)?;
        self.resolve(sheet.get(at)?)
    }

    fn set_cell(&mut self, sheet: SheetId, at: CellRef, value: &str, kind: CellKind) {
        let style = self.column_style(sheet, at.col);
        let Some(sheet) = self.book.sheets.get_mut(sheet.0) else {
            return;
        };

        let payload = match kind {
            CellKind::Number => CellPayload::Number(value.to_string()),
            CellKind::Text => CellPayload::Inline(value.to_string()),
        };

        match sheet.cells.get_mut(&(at.row, at.col)) {
            Some(cell) => cell.payload = Some(payload),
            None => {
                sheet.insert(
                    at,
                    StoredCell {
                        payload: Some(payload),
                        style,
                    },
                );
            }
        }
    }

    fn clear_cell(&mut self, sheet: SheetId, at: CellRef) {
        let Some(sheet) = self.book.sheets.get_mut(sheet.0) else {
            return;
        };
        if let Some(cell) = sheet.cells.get_mut(&(at.row, at.col)) {
            cell.clear();
            if cell.is_blank() {
                sheet.cells.remove(&(at.row, at.col));
            }
        }
    }

    fn column_style(&self, sheet: SheetId, col: u32) -> Option<u32> {
        let sheet = self.book.sheets.get(sheet.0)?;
        sheet
            .cells
            .iter()
            .filter(|((_, c), _)| *c == col)
            .find_map(|(_, cell)| cell.style)
    }

    fn request_full_recalculation(&mut self) {
        self.book.recalc_pending = true;
    }

    fn save(&mut self) -> Result<(), StoreError> {
        if !self.writable {
            return Err(StoreError::ReadOnly(self.path.clone()));
        }
        let text = serde_json::to_string_pretty(&self.book)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Document store backed by workbook JSON files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonStore;

impl JsonStore {
    /// Write a fresh workbook to `path` and return a writable handle to it.
    pub fn create(&self, path: &Path, book: WorkbookData) -> Result<JsonDocument, StoreError> {
        let mut doc = JsonDocument {
            path: path.to_path_buf(),
            writable: true,
            book,
        };
        doc.save()?;
        Ok(doc)
    }
}

impl DocumentStore for JsonStore {
    type Doc = JsonDocument;

    fn open_read(&self, path: &Path) -> Result<JsonDocument, StoreError> {
        JsonDocument::load(path, false)
    }

    fn open_write(&self, path: &Path) -> Result<JsonDocument, StoreError> {
        JsonDocument::load(path, true)
    }
}
