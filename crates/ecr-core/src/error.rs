use std::path::PathBuf;

use thiserror::Error;

/// Malformed column letters or column number.
///
/// The grade layout only ever uses fixed, known-good addresses, so hitting
/// one of these from engine code indicates a programming error rather than
/// bad workbook content.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid column label {0:?}: expected one or more letters A-Z")]
    InvalidLabel(String),

    #[error("invalid column number {0}: columns are numbered from 1")]
    InvalidNumber(u32),

    #[error("invalid cell reference {0:?}")]
    InvalidCellRef(String),
}

/// I/O or decode failure from the document store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("document i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("document is not valid workbook JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("document {0} was opened read-only")]
    ReadOnly(PathBuf),
}
