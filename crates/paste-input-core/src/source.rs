//! ClipboardSource trait - abstract per-platform clipboard access.
//!
//! OS clipboard APIs (GTK wait-for-* calls, Win32 `OpenClipboard` /
//! `GetClipboardData`, clipboard-rs) have no portable equivalent, so
//! classification runs against this capability interface instead.

use std::path::PathBuf;

use crate::PasteResult;

/// Synchronous capability interface over the OS clipboard.
///
/// A "snapshot" here is the transient state of the clipboard at the moment
/// of a check, not a stable object: each `has_*`/`read_*` call re-queries
/// the OS, and another clipboard owner may change the content between the
/// two. The classifier treats that race, like any read failure, as "no
/// content of this type".
///
/// Calls may block while the OS waits for the clipboard owner to respond;
/// there is no cancellation or timeout at this layer. Implementations are
/// expected to be invoked from a single thread at a time.
pub trait ClipboardSource {
    /// True if the clipboard currently advertises image content
    fn has_image(&self) -> bool;

    /// Read the clipboard image as encoded bytes (any encoding the OS hands
    /// over; the classifier normalizes to PNG)
    fn read_image(&self) -> PasteResult<Vec<u8>>;

    /// True if the clipboard currently advertises plain text
    fn has_text(&self) -> bool;

    /// Read the clipboard text as UTF-8
    fn read_text(&self) -> PasteResult<String>;

    /// List file paths from a file-drop / copied-files clipboard entry.
    ///
    /// Returns an empty list when the clipboard holds no file list.
    fn list_dropped_files(&self) -> PasteResult<Vec<PathBuf>>;
}
