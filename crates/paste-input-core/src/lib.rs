//! # paste-input-core
//!
//! Transport-agnostic clipboard paste primitives.
//!
//! This crate holds the core logic shared by every host transport: given a
//! momentary snapshot of the OS clipboard, decide what typed payload to
//! report and how to stage large binary payloads for delivery.
//!
//! - **[`ClipboardSource`] trait** - abstract per-platform clipboard access
//! - **[`classify`]** - content classification (image > text > dropped image files)
//! - **[`TempStage`]** - PNG staging in the OS temp directory, with sweep
//! - **[`ClipboardContent`]** - the normalized, ordered item list handed to transports
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paste_input_core::{classify, ClipboardSource, TempStage};
//!
//! let content = classify::collect_content(&my_source);
//! for item in content.items() {
//!     println!("{}: {} bytes", item.mime_type(), item.payload().len());
//! }
//! ```
//!
//! ## Architecture
//!
//! The [`ClipboardSource`] trait provides a synchronous capability interface
//! over the OS clipboard. Implementations handle the actual clipboard access
//! (GTK, Win32, clipboard-rs, ...) while this crate handles classification,
//! PNG normalization, and temp-file staging. Classification never returns an
//! error: failed candidates are logged and skipped, and the result degrades
//! to fewer items.

#![deny(missing_docs)]

mod content;
mod error;
mod source;
mod staging;

pub mod classify;
pub mod formats;
pub mod image;

pub use classify::{classify_dropped_files, collect_content, first_match, ClassifiedPaste};
pub use content::{ClipboardContent, ClipboardItem, StagedFile};
pub use error::{PasteError, PasteResult};
pub use source::ClipboardSource;
pub use staging::{TempStage, STAGE_PREFIX};
