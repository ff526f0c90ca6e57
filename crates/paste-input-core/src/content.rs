//! Normalized clipboard content model.
//!
//! These are the value types handed across the transport boundary. They are
//! immutable once constructed and owned solely by the response or event
//! being built.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{PasteError, PasteResult};
use crate::formats;

/// A single typed clipboard payload.
///
/// The payload is never empty and the MIME type is one of the small fixed
/// set in [`crate::formats`] (`text/plain` plus the image types).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardItem {
    /// MIME type of the payload
    #[serde(rename = "mimeType")]
    mime_type: String,

    /// Raw payload bytes
    payload: Vec<u8>,
}

impl ClipboardItem {
    /// Create an item, rejecting empty payloads
    pub fn new(mime_type: impl Into<String>, payload: Vec<u8>) -> PasteResult<Self> {
        let mime_type = mime_type.into();
        if payload.is_empty() {
            return Err(PasteError::EmptyPayload(mime_type));
        }
        Ok(Self { mime_type, payload })
    }

    /// Create a `text/plain` item from a string
    pub fn text(value: impl Into<String>) -> PasteResult<Self> {
        Self::new(formats::MIME_TEXT_PLAIN, value.into().into_bytes())
    }

    /// Create an `image/png` item from encoded PNG bytes
    pub fn png(payload: Vec<u8>) -> PasteResult<Self> {
        Self::new(formats::MIME_IMAGE_PNG, payload)
    }

    /// MIME type of the payload
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Raw payload bytes
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

/// Ordered sequence of classified clipboard items, possibly empty.
///
/// Insertion order is the classifier's preference order (image before text
/// before file-derived image); it carries no other semantic ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardContent {
    items: Vec<ClipboardItem>,
}

impl ClipboardContent {
    /// Create an empty content list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item, preserving insertion order
    pub fn push(&mut self, item: ClipboardItem) {
        self.items.push(item);
    }

    /// True when classification matched nothing
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Items in classifier preference order
    pub fn items(&self) -> &[ClipboardItem] {
        &self.items
    }
}

/// An image written to the OS temp directory so its path, rather than its
/// bytes, can be handed across the transport boundary.
///
/// Staged files are written once and never mutated; their lifetime is the
/// filesystem, not the process. Deletion happens only through
/// [`TempStage::sweep`](crate::TempStage::sweep) or OS temp cleanup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagedFile {
    /// Absolute path of the staged file
    pub path: PathBuf,

    /// MIME type of the staged bytes (always `image/png` today)
    pub mime_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_rejects_empty_payload() {
        let err = ClipboardItem::new(formats::MIME_TEXT_PLAIN, Vec::new()).unwrap_err();
        assert!(matches!(err, PasteError::EmptyPayload(_)));
    }

    #[test]
    fn test_text_item() {
        let item = ClipboardItem::text("hello").unwrap();
        assert_eq!(item.mime_type(), "text/plain");
        assert_eq!(item.payload(), b"hello");
    }

    #[test]
    fn test_content_preserves_order() {
        let mut content = ClipboardContent::new();
        content.push(ClipboardItem::png(vec![1, 2, 3]).unwrap());
        content.push(ClipboardItem::text("after").unwrap());

        assert_eq!(content.len(), 2);
        assert_eq!(content.items()[0].mime_type(), "image/png");
        assert_eq!(content.items()[1].mime_type(), "text/plain");
    }

    #[test]
    fn test_item_wire_names() {
        let item = ClipboardItem::text("hi").unwrap();
        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("mimeType").is_some());
        assert!(value.get("payload").is_some());
    }
}
