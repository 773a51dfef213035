use ecr_core::{AddressError, StoreError};
use thiserror::Error;

/// Errors surfaced by gradebook operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A sheet the fixed layout requires was absent at read/write time.
    #[error("sheet {0:?} not found in workbook")]
    SheetNotFound(String),

    /// The workbook failed the load-time check; the message is the
    /// comma-joined list of missing sheet names in required-table order.
    #[error("workbook is missing required sheets: {}", .0.join(", "))]
    MissingSheets(Vec<String>),

    /// Track selection index outside the fixed four-track table.
    #[error("unknown track index {0}: only tracks 0-3 exist")]
    UnknownTrack(usize),

    /// A roster rewrite would exceed the fixed row span.
    #[error("roster capacity exceeded: {attempted} names for {capacity} rows")]
    CapacityExceeded { capacity: usize, attempted: usize },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Address(#[from] AddressError),
}

impl EngineError {
    /// The comma-joined missing-sheets report, if this is that failure.
    pub fn missing_sheets_report(&self) -> Option<String> {
        match self {
            EngineError::MissingSheets(names) => Some(names.join(", ")),
            _ => None,
        }
    }
}
