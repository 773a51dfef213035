pub mod cell;
pub mod coord;
pub mod document;
pub mod error;
pub mod json_store;

pub use cell::{CellKind, CellPayload, StoredCell};
pub use coord::{col_from_label, col_to_label, CellRef, ColumnSpan};
pub use document::{Document, DocumentStore, SheetId};
pub use error::{AddressError, StoreError};
pub use json_store::{JsonDocument, JsonStore, SheetData, WorkbookData};
