//! # paste-input
//!
//! Clipboard paste capture for embedded UI hosts.
//!
//! This crate exposes OS clipboard contents (text, images, file-drop paths)
//! to a host framework through one of two transport surfaces, built on the
//! classification and staging primitives in [`paste_input_core`]:
//!
//! ```text
//! paste-input
//!   ├─> SystemClipboard (clipboard-rs backend, implements ClipboardSource)
//!   ├─> PasteWatcher (OS clipboard-change notifications)
//!   ├─> transport::event::EventChannel (legacy method + event stream)
//!   └─> transport::api::HostApi (typed request/response stub)
//! ```
//!
//! # Data Flow
//!
//! **Poll path:** host method call → transport → classifier → reply/event
//!
//! **Notify path:** OS clipboard change → PasteWatcher → HostApi push
//!
//! Every clipboard check is synchronous and runs to completion before the
//! next; the only shared mutable state is each transport's notification
//! sink, set and cleared by paired start/stop-listening calls.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Plugin configuration
pub mod config;

/// Platform clipboard backend and change watcher
pub mod platform;

/// Host transport variants (event stream and request/response stub)
pub mod transport;

/// Platform version probing
pub mod version;

// =============================================================================
// Re-exports from the bundled core crate (for convenience)
// =============================================================================

/// Re-export paste-input-core for classification and staging primitives
pub use paste_input_core;

pub use paste_input_core::{
    ClassifiedPaste, ClipboardContent, ClipboardItem, ClipboardSource, PasteError, PasteResult,
    StagedFile, TempStage,
};

pub use platform::{PasteWatcher, SystemClipboard};
pub use transport::api::HostApi;
pub use transport::event::{EventChannel, PasteEvent};
