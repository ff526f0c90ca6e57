//! Typed request/response transport.
//!
//! The current host boundary: a generated stub calls directly into
//! [`HostApi`] and gets strongly-typed values back. Content travels as
//! inline bytes, so no temp files are involved on the read path; the
//! `clear_temp_files` call remains for sweeping leftovers from the legacy
//! transport.

use paste_input_core::{collect_content, ClipboardContent, ClipboardSource, TempStage};
use tracing::debug;

use crate::version;

/// Sink receiving paste-detected pushes
pub type PasteSink = Box<dyn Fn(&ClipboardContent) + Send>;

/// Host-facing request/response surface.
///
/// One instance per registered plugin; the paste sink is the only mutable
/// state, set and cleared by paired lifecycle calls from the host.
pub struct HostApi<S: ClipboardSource> {
    source: S,
    stage: TempStage,
    sink: Option<PasteSink>,
}

impl<S: ClipboardSource> HostApi<S> {
    /// Create an API sweeping the OS temp directory
    pub fn new(source: S) -> Self {
        Self::with_stage(source, TempStage::new())
    }

    /// Create an API with an explicit temp stage
    pub fn with_stage(source: S, stage: TempStage) -> Self {
        Self {
            source,
            stage,
            sink: None,
        }
    }

    /// Snapshot the clipboard as a normalized item list.
    ///
    /// Collect-all semantics: image and text are reported as separate
    /// items, image first. An empty list means nothing matched; that is a
    /// successful reply, not an error.
    pub fn get_clipboard_content(&self) -> ClipboardContent {
        collect_content(&self.source)
    }

    /// Sweep staged temp files
    pub fn clear_temp_files(&self) {
        self.stage.sweep();
    }

    /// Report the platform version string
    pub fn get_platform_version(&self) -> String {
        version::platform_version()
    }

    /// Register the paste sink (host started listening)
    pub fn set_paste_sink(&mut self, sink: PasteSink) {
        self.sink = Some(sink);
    }

    /// Clear the paste sink (host stopped listening)
    pub fn clear_paste_sink(&mut self) {
        self.sink = None;
    }

    /// Classify the clipboard and push the result to the paste sink.
    ///
    /// Driven by the OS clipboard-change watcher rather than host polling.
    /// An empty snapshot is still pushed; the host decides what to do with
    /// it.
    pub fn notify_paste_detected(&self) {
        let content = self.get_clipboard_content();
        match &self.sink {
            Some(sink) => sink(&content),
            None => debug!("no paste sink registered, dropping {} item(s)", content.len()),
        }
    }
}
