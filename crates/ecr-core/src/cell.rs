use serde::{Deserialize, Serialize};

/// How the engine wants a written value typed in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Number,
    Text,
}

/// Raw payload stored in a cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum CellPayload {
    /// Numeric cell; the raw text as it appears in the document.
    Number(String),
    /// Inline string cell.
    Inline(String),
    /// Index into the workbook's shared-string table.
    Shared(usize),
}

/// A stored cell: an optional payload plus an optional style index.
///
/// Clearing a cell removes the payload but keeps the style, so the
/// formatting at that coordinate survives roster and score rewrites.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredCell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<CellPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<u32>,
}

impl StoredCell {
    pub fn number(raw: impl Into<String>) -> Self {
        StoredCell {
            payload: Some(CellPayload::Number(raw.into())),
            style: None,
        }
    }

    pub fn text(raw: impl Into<String>) -> Self {
        StoredCell {
            payload: Some(CellPayload::Inline(raw.into())),
            style: None,
        }
    }

    pub fn shared(index: usize) -> Self {
        StoredCell {
            payload: Some(CellPayload::Shared(index)),
            style: None,
        }
    }

    pub fn with_style(mut self, style: Option<u32>) -> Self {
        self.style = style;
        self
    }

    /// Drop the payload, keeping the style.
    pub fn clear(&mut self) {
        self.payload = None;
    }

    /// True when neither payload nor style remain.
    pub fn is_blank(&self) -> bool {
        self.payload.is_none() && self.style.is_none()
    }
}
