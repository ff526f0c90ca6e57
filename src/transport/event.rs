//! Legacy event-stream transport.
//!
//! The host issues string method calls and listens on an event stream; a
//! `checkClipboard` call triggers exactly one outbound [`PasteEvent`].
//! Images never travel inline here - they are staged to the temp directory
//! and only their paths cross the boundary.

use paste_input_core::{first_match, ClassifiedPaste, ClipboardSource, TempStage};
use serde::Serialize;
use tracing::debug;

use crate::transport::{Method, MethodReply};
use crate::version;

/// Outbound event pushed to the host's event stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PasteEvent {
    /// Plain text paste
    Text {
        /// The pasted text
        value: String,
    },

    /// One or more staged images, delivered as temp-file paths
    Images {
        /// Staged file paths, one per image
        uris: Vec<String>,

        /// MIME type per staged file, parallel to `uris`
        #[serde(rename = "mimeTypes")]
        mime_types: Vec<String>,
    },

    /// Clipboard content the classifier does not recognize
    Unsupported,
}

/// Sink receiving outbound paste events
pub type EventSink = Box<dyn Fn(&PasteEvent) + Send>;

/// The legacy method channel + event stream transport.
///
/// Holds at most one event sink, set and cleared by the host's paired
/// listen/cancel lifecycle calls. With no sink registered, events are
/// dropped silently.
pub struct EventChannel<S: ClipboardSource> {
    source: S,
    stage: TempStage,
    sink: Option<EventSink>,
}

impl<S: ClipboardSource> EventChannel<S> {
    /// Create a channel staging into the OS temp directory
    pub fn new(source: S) -> Self {
        Self::with_stage(source, TempStage::new())
    }

    /// Create a channel with an explicit temp stage
    pub fn with_stage(source: S, stage: TempStage) -> Self {
        Self {
            source,
            stage,
            sink: None,
        }
    }

    /// Register the event sink (host started listening)
    pub fn start_listening(&mut self, sink: EventSink) {
        self.sink = Some(sink);
    }

    /// Clear the event sink (host cancelled the stream)
    pub fn stop_listening(&mut self) {
        self.sink = None;
    }

    /// Dispatch an inbound method call by wire name
    pub fn handle_call(&self, method: &str) -> MethodReply {
        match Method::from_name(method) {
            Some(Method::GetPlatformVersion) => MethodReply::Version(version::platform_version()),
            Some(Method::ClearTempFiles) => {
                self.stage.sweep();
                MethodReply::Done
            }
            Some(Method::RegisterView) | Some(Method::UnregisterView) => MethodReply::Done,
            Some(Method::CheckClipboard) => {
                self.check_clipboard();
                MethodReply::Done
            }
            None => {
                debug!("unhandled method call: {}", method);
                MethodReply::NotImplemented
            }
        }
    }

    /// Classify the clipboard and push exactly one event
    pub fn check_clipboard(&self) {
        let event = match first_match(&self.source, &self.stage) {
            ClassifiedPaste::Text(value) => PasteEvent::Text { value },
            ClassifiedPaste::Images(staged) => PasteEvent::Images {
                uris: staged
                    .iter()
                    .map(|file| file.path.display().to_string())
                    .collect(),
                mime_types: staged.into_iter().map(|file| file.mime_type).collect(),
            },
            ClassifiedPaste::Unsupported => PasteEvent::Unsupported,
        };
        self.push(&event);
    }

    fn push(&self, event: &PasteEvent) {
        match &self.sink {
            Some(sink) => sink(event),
            None => debug!("no event sink registered, dropping event"),
        }
    }
}
