//! Wire types for the document API.
//!
//! Only the fields the saver reads or writes are modelled; everything else in
//! a document response is ignored.

use serde::{Deserialize, Serialize};

/// Body of `POST /documents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateDocumentRequest {
    pub title: String,
}

/// Response of `POST /documents` and `GET /documents/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub document_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: Body,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

/// One content block. The first block of a document has no start index.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralElement {
    #[serde(default)]
    pub start_index: Option<u64>,
    pub end_index: u64,
}

impl Document {
    /// Where appended text goes: one position before the end offset of the
    /// last content block, so it lands ahead of the trailing newline.
    ///
    /// Returns `None` for a document with no content blocks.
    #[must_use]
    pub fn append_index(&self) -> Option<u64> {
        self.body
            .content
            .last()
            .map(|block| block.end_index.saturating_sub(1))
    }
}

/// Body of `POST /documents/{id}:batchUpdate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchUpdateRequest {
    pub requests: Vec<EditRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EditRequest {
    InsertText(InsertText),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertText {
    pub location: Location,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub index: u64,
}

impl EditRequest {
    #[must_use]
    pub fn insert_text(index: u64, text: impl Into<String>) -> Self {
        Self::InsertText(InsertText {
            location: Location { index },
            text: text.into(),
        })
    }
}
