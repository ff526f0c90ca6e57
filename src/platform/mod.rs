//! Platform clipboard access.
//!
//! One clipboard-rs backed [`ClipboardSource`] implementation covers X11,
//! Wayland, Win32, and AppKit, replacing the per-OS GTK/GDI+ duplication of
//! earlier plugin generations. The [`PasteWatcher`] bridges OS
//! clipboard-change notifications to the request/response transport's
//! paste-detected push.

use clipboard_rs::common::RustImage;
use clipboard_rs::{
    Clipboard, ClipboardContext, ClipboardHandler, ClipboardWatcher, ClipboardWatcherContext,
    ContentFormat, WatcherShutdown,
};
use parking_lot::Mutex;
use paste_input_core::{ClipboardSource, PasteError, PasteResult};
use percent_encoding::percent_decode_str;
use std::path::PathBuf;
use std::thread::JoinHandle;
use tracing::{debug, info};

fn backend_err(e: Box<dyn std::error::Error + Send + Sync>) -> PasteError {
    PasteError::Backend(e.to_string())
}

/// Convert a clipboard file entry to a path.
///
/// Linux backends hand over `file://` URIs with percent-encoding; Windows
/// and macOS hand over plain paths.
fn uri_to_path(entry: &str) -> PathBuf {
    match entry.strip_prefix("file://") {
        Some(rest) => PathBuf::from(percent_decode_str(rest).decode_utf8_lossy().into_owned()),
        None => PathBuf::from(entry),
    }
}

/// [`ClipboardSource`] backed by the OS clipboard.
///
/// The context handle is mutex-guarded; checks are expected to arrive one
/// at a time from the host's UI thread, the lock just keeps a misbehaving
/// host from corrupting the handle.
pub struct SystemClipboard {
    ctx: Mutex<ClipboardContext>,
}

impl SystemClipboard {
    /// Open the OS clipboard
    pub fn new() -> PasteResult<Self> {
        let ctx = ClipboardContext::new().map_err(backend_err)?;
        Ok(Self {
            ctx: Mutex::new(ctx),
        })
    }
}

impl ClipboardSource for SystemClipboard {
    fn has_image(&self) -> bool {
        self.ctx.lock().has(ContentFormat::Image)
    }

    fn read_image(&self) -> PasteResult<Vec<u8>> {
        let ctx = self.ctx.lock();
        let image = ctx.get_image().map_err(backend_err)?;
        let png = image.to_png().map_err(backend_err)?;
        Ok(png.get_bytes().to_vec())
    }

    fn has_text(&self) -> bool {
        self.ctx.lock().has(ContentFormat::Text)
    }

    fn read_text(&self) -> PasteResult<String> {
        self.ctx.lock().get_text().map_err(backend_err)
    }

    fn list_dropped_files(&self) -> PasteResult<Vec<PathBuf>> {
        let ctx = self.ctx.lock();
        if !ctx.has(ContentFormat::Files) {
            return Ok(Vec::new());
        }
        let files = ctx.get_files().map_err(backend_err)?;
        Ok(files.iter().map(|f| uri_to_path(f)).collect())
    }
}

struct ChangeHandler<F: FnMut() + Send> {
    on_change: F,
}

impl<F: FnMut() + Send> ClipboardHandler for ChangeHandler<F> {
    fn on_clipboard_change(&mut self) {
        debug!("OS clipboard change notification");
        (self.on_change)();
    }
}

/// Background watcher for OS clipboard-change notifications.
///
/// Runs the clipboard-rs watch loop on its own thread and invokes the
/// callback on every change; the callback typically calls
/// [`HostApi::notify_paste_detected`](crate::transport::api::HostApi::notify_paste_detected).
/// Dropping the watcher stops the loop.
pub struct PasteWatcher {
    shutdown: Option<WatcherShutdown>,
    join: Option<JoinHandle<()>>,
}

impl PasteWatcher {
    /// Spawn the watch loop, invoking `on_change` on every clipboard change
    pub fn spawn<F>(on_change: F) -> PasteResult<Self>
    where
        F: FnMut() + Send + 'static,
    {
        let mut watcher = ClipboardWatcherContext::new().map_err(backend_err)?;
        let shutdown = watcher
            .add_handler(ChangeHandler { on_change })
            .get_shutdown_channel();

        let join = std::thread::spawn(move || {
            info!("clipboard watch started");
            watcher.start_watch();
            info!("clipboard watch stopped");
        });

        Ok(Self {
            shutdown: Some(shutdown),
            join: Some(join),
        })
    }

    /// Stop the watch loop and wait for the thread to exit
    pub fn stop(mut self) {
        self.shutdown_inner();
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }

    fn shutdown_inner(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            shutdown.stop();
        }
    }
}

impl Drop for PasteWatcher {
    fn drop(&mut self) {
        self.shutdown_inner();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_to_path_strips_scheme() {
        assert_eq!(uri_to_path("file:///home/u/pic.png"), PathBuf::from("/home/u/pic.png"));
    }

    #[test]
    fn test_uri_to_path_percent_decodes() {
        assert_eq!(
            uri_to_path("file:///home/u/my%20pic.png"),
            PathBuf::from("/home/u/my pic.png")
        );
    }

    #[test]
    fn test_plain_path_passes_through() {
        assert_eq!(
            uri_to_path(r"C:\Users\u\pic.png"),
            PathBuf::from(r"C:\Users\u\pic.png")
        );
    }
}
