//! Host transport variants.
//!
//! Two generations of the host boundary coexist:
//!
//! - [`event`] - the legacy method channel + event stream: string method
//!   names in, loosely-typed paste events out, images delivered as staged
//!   temp-file paths.
//! - [`api`] - the typed request/response stub: direct calls returning
//!   [`ClipboardContent`](paste_input_core::ClipboardContent) with inline
//!   bytes, plus one push when the OS reports a clipboard change.
//!
//! Both are plain context objects; callback dispatch happens through an
//! explicitly registered sink, never a process-wide singleton.

pub mod api;
pub mod event;

/// Inbound method names understood by the legacy channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Report the platform version string
    GetPlatformVersion,

    /// Sweep staged temp files
    ClearTempFiles,

    /// View registration handshake (no-op)
    RegisterView,

    /// View deregistration handshake (no-op)
    UnregisterView,

    /// Classify the clipboard and push exactly one event
    CheckClipboard,
}

impl Method {
    /// Parse a wire method name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "getPlatformVersion" => Some(Self::GetPlatformVersion),
            "clearTempFiles" => Some(Self::ClearTempFiles),
            "registerView" => Some(Self::RegisterView),
            "unregisterView" => Some(Self::UnregisterView),
            "checkClipboard" => Some(Self::CheckClipboard),
            _ => None,
        }
    }

    /// Wire name of this method
    pub fn name(self) -> &'static str {
        match self {
            Self::GetPlatformVersion => "getPlatformVersion",
            Self::ClearTempFiles => "clearTempFiles",
            Self::RegisterView => "registerView",
            Self::UnregisterView => "unregisterView",
            Self::CheckClipboard => "checkClipboard",
        }
    }
}

/// Reply to an inbound method call.
///
/// Failures never cross this boundary: anything unrecognized gets an
/// explicit [`MethodReply::NotImplemented`], everything else degrades to a
/// success with fewer items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodReply {
    /// Success carrying a platform version string
    Version(String),

    /// Success with no payload
    Done,

    /// The method name is not part of this transport
    NotImplemented,
}
