//! Clipboard content classification.
//!
//! Fixed priority: image first, then plain text, then image files from a
//! file-drop entry. The two host transports consume the result differently,
//! so classification comes in two named operations:
//!
//! - [`collect_content`] (request/response transport): collects every
//!   applicable category into one [`ClipboardContent`] with inline bytes.
//!   An empty result means nothing matched.
//! - [`first_match`] (legacy event transport): first matching category wins
//!   and images are staged to the temp directory so only paths cross the
//!   boundary. Nothing matching yields [`ClassifiedPaste::Unsupported`].
//!
//! Failure policy: a decode or read failure on one candidate is logged and
//! the candidate skipped; it never aborts classification of the remaining
//! categories. A staging failure likewise falls through to the next
//! category rather than surfacing an error.

use std::path::PathBuf;
use tracing::{debug, warn};

use crate::content::{ClipboardContent, ClipboardItem, StagedFile};
use crate::formats;
use crate::image;
use crate::source::ClipboardSource;
use crate::staging::TempStage;

/// Outcome of a legacy (event-channel) clipboard check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedPaste {
    /// Plain text content
    Text(String),

    /// One or more images staged to the temp directory
    Images(Vec<StagedFile>),

    /// Nothing the classifier recognizes
    Unsupported,
}

/// Collect every applicable category as inline items.
///
/// Order is fixed: image (re-encoded as PNG) before text. File-drop entries
/// are not consulted here; the request/response transport never reported
/// them and inline file payloads would defeat its size assumptions.
pub fn collect_content(source: &dyn ClipboardSource) -> ClipboardContent {
    let mut content = ClipboardContent::new();

    if let Some(png) = read_image_png(source) {
        match ClipboardItem::png(png) {
            Ok(item) => content.push(item),
            Err(e) => warn!("discarding clipboard image: {}", e),
        }
    }

    if let Some(text) = read_text(source) {
        match ClipboardItem::text(text) {
            Ok(item) => content.push(item),
            Err(e) => warn!("discarding clipboard text: {}", e),
        }
    }

    content
}

/// Classify with first-match-wins semantics, staging images as temp files.
///
/// Priority: clipboard image, then text, then dropped image files. The
/// image branch only wins once a temp file actually exists; if staging
/// fails the check falls through to text (the classification result simply
/// omits the image).
pub fn first_match(source: &dyn ClipboardSource, stage: &TempStage) -> ClassifiedPaste {
    if let Some(png) = read_image_png(source) {
        match stage.stage_png(&png) {
            Ok(staged) => return ClassifiedPaste::Images(vec![staged]),
            Err(e) => warn!("image staging failed, trying next category: {}", e),
        }
    }

    if let Some(text) = read_text(source) {
        return ClassifiedPaste::Text(text);
    }

    let paths = match source.list_dropped_files() {
        Ok(paths) => paths,
        Err(e) => {
            warn!("clipboard file list read failed: {}", e);
            Vec::new()
        }
    };
    let staged = stage_dropped_images(&paths, stage);
    if !staged.is_empty() {
        return ClassifiedPaste::Images(staged);
    }

    ClassifiedPaste::Unsupported
}

/// Filter dropped files down to the ones with a recognized image extension.
///
/// Extension heuristic only - the returned MIME type reflects the file
/// name, not the bytes. Unrecognized extensions are silently skipped.
pub fn classify_dropped_files(paths: &[PathBuf]) -> Vec<(PathBuf, &'static str)> {
    paths
        .iter()
        .filter_map(|path| match formats::extension_to_mime(path) {
            Some(mime) => Some((path.clone(), mime)),
            None => {
                debug!("skipping dropped file without image extension: {}", path.display());
                None
            }
        })
        .collect()
}

fn stage_dropped_images(paths: &[PathBuf], stage: &TempStage) -> Vec<StagedFile> {
    let mut staged = Vec::new();
    for (path, _mime) in classify_dropped_files(paths) {
        let png = match image::file_to_png(&path) {
            Ok(png) => png,
            // Mislabeled files are expected to slip past the extension
            // check; a failing read is not.
            Err(e) if e.is_format_error() => {
                debug!("skipping undecodable dropped file {}: {}", path.display(), e);
                continue;
            }
            Err(e) => {
                warn!("skipping dropped file {}: {}", path.display(), e);
                continue;
            }
        };
        match stage.stage_png(&png) {
            Ok(file) => staged.push(file),
            Err(e) => warn!("skipping dropped file {}, staging failed: {}", path.display(), e),
        }
    }
    staged
}

fn read_image_png(source: &dyn ClipboardSource) -> Option<Vec<u8>> {
    if !source.has_image() {
        return None;
    }
    let raw = match source.read_image() {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("clipboard image read failed: {}", e);
            return None;
        }
    };
    match image::reencode_png(&raw) {
        Ok(png) => Some(png),
        Err(e) if e.is_format_error() => {
            debug!("clipboard image undecodable, skipping: {}", e);
            None
        }
        Err(e) => {
            warn!("clipboard image read failed: {}", e);
            None
        }
    }
}

fn read_text(source: &dyn ClipboardSource) -> Option<String> {
    if !source.has_text() {
        return None;
    }
    match source.read_text() {
        Ok(text) if !text.is_empty() => Some(text),
        Ok(_) => None,
        Err(e) => {
            warn!("clipboard text read failed: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PasteError;
    use image_crate_helpers::tiny_png;

    mod image_crate_helpers {
        use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

        pub fn tiny_png() -> Vec<u8> {
            let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, Rgba([0, 128, 255, 255])));
            let mut out = Vec::new();
            img.write_to(&mut std::io::Cursor::new(&mut out), ImageFormat::Png)
                .unwrap();
            out
        }
    }

    #[derive(Default)]
    struct FakeSource {
        image: Option<Vec<u8>>,
        text: Option<String>,
        files: Vec<PathBuf>,
    }

    impl ClipboardSource for FakeSource {
        fn has_image(&self) -> bool {
            self.image.is_some()
        }

        fn read_image(&self) -> crate::PasteResult<Vec<u8>> {
            self.image
                .clone()
                .ok_or_else(|| PasteError::Backend("no image".to_string()))
        }

        fn has_text(&self) -> bool {
            self.text.is_some()
        }

        fn read_text(&self) -> crate::PasteResult<String> {
            self.text
                .clone()
                .ok_or_else(|| PasteError::Backend("no text".to_string()))
        }

        fn list_dropped_files(&self) -> crate::PasteResult<Vec<PathBuf>> {
            Ok(self.files.clone())
        }
    }

    #[test]
    fn test_collect_text_only() {
        let source = FakeSource {
            text: Some("hello".to_string()),
            ..Default::default()
        };

        let content = collect_content(&source);
        assert_eq!(content.len(), 1);
        assert_eq!(content.items()[0].mime_type(), "text/plain");
        assert_eq!(content.items()[0].payload(), b"hello");
    }

    #[test]
    fn test_collect_image_and_text_image_first() {
        let source = FakeSource {
            image: Some(tiny_png()),
            text: Some("caption".to_string()),
            ..Default::default()
        };

        let content = collect_content(&source);
        assert_eq!(content.len(), 2);
        assert_eq!(content.items()[0].mime_type(), "image/png");
        assert_eq!(content.items()[1].mime_type(), "text/plain");
    }

    #[test]
    fn test_collect_nothing_is_empty() {
        let content = collect_content(&FakeSource::default());
        assert!(content.is_empty());
    }

    #[test]
    fn test_collect_skips_undecodable_image() {
        let source = FakeSource {
            image: Some(b"not an image".to_vec()),
            text: Some("fallback".to_string()),
            ..Default::default()
        };

        let content = collect_content(&source);
        assert_eq!(content.len(), 1);
        assert_eq!(content.items()[0].mime_type(), "text/plain");
    }

    #[test]
    fn test_first_match_prefers_image() {
        let dir = tempfile::tempdir().unwrap();
        let stage = TempStage::with_dir(dir.path());
        let source = FakeSource {
            image: Some(tiny_png()),
            text: Some("ignored".to_string()),
            ..Default::default()
        };

        match first_match(&source, &stage) {
            ClassifiedPaste::Images(staged) => {
                assert_eq!(staged.len(), 1);
                assert_eq!(staged[0].mime_type, "image/png");
                assert!(staged[0].path.exists());
            }
            other => panic!("expected images, got {:?}", other),
        }
    }

    #[test]
    fn test_first_match_staging_failure_falls_through_to_text() {
        let dir = tempfile::tempdir().unwrap();
        let stage = TempStage::with_dir(dir.path().join("does-not-exist"));
        let source = FakeSource {
            image: Some(tiny_png()),
            text: Some("fallback".to_string()),
            ..Default::default()
        };

        assert_eq!(
            first_match(&source, &stage),
            ClassifiedPaste::Text("fallback".to_string())
        );
    }

    #[test]
    fn test_first_match_text() {
        let dir = tempfile::tempdir().unwrap();
        let stage = TempStage::with_dir(dir.path());
        let source = FakeSource {
            text: Some("hello".to_string()),
            ..Default::default()
        };

        assert_eq!(first_match(&source, &stage), ClassifiedPaste::Text("hello".to_string()));
    }

    #[test]
    fn test_first_match_nothing_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let stage = TempStage::with_dir(dir.path());
        assert_eq!(first_match(&FakeSource::default(), &stage), ClassifiedPaste::Unsupported);
    }

    #[test]
    fn test_first_match_dropped_image_files() {
        let dir = tempfile::tempdir().unwrap();
        let stage = TempStage::with_dir(dir.path());

        let pic = dir.path().join("shot.PNG");
        std::fs::write(&pic, tiny_png()).unwrap();
        let note = dir.path().join("note.txt");
        std::fs::write(&note, b"text file").unwrap();

        let source = FakeSource {
            files: vec![pic, note],
            ..Default::default()
        };

        match first_match(&source, &stage) {
            ClassifiedPaste::Images(staged) => {
                assert_eq!(staged.len(), 1);
                assert!(staged[0].path.exists());
            }
            other => panic!("expected images, got {:?}", other),
        }
    }

    #[test]
    fn test_dropped_file_classification() {
        let classified = classify_dropped_files(&[
            PathBuf::from("/drop/IMG_0001.JPG"),
            PathBuf::from("/drop/readme.txt"),
            PathBuf::from("/drop/icon.png"),
        ]);

        assert_eq!(classified.len(), 2);
        assert_eq!(classified[0].1, "image/jpeg");
        assert_eq!(classified[1].1, "image/png");
    }

    #[test]
    fn test_dropped_mislabeled_file_does_not_block_others() {
        let dir = tempfile::tempdir().unwrap();
        let stage = TempStage::with_dir(dir.path());

        let fake = dir.path().join("fake.png");
        std::fs::write(&fake, b"not a png").unwrap();
        let good = dir.path().join("good.png");
        std::fs::write(&good, tiny_png()).unwrap();

        let source = FakeSource {
            files: vec![fake, good],
            ..Default::default()
        };

        match first_match(&source, &stage) {
            ClassifiedPaste::Images(staged) => {
                assert_eq!(staged.len(), 1);
                assert!(staged[0].path.exists());
            }
            other => panic!("expected images, got {:?}", other),
        }
    }

    #[test]
    fn test_dropped_mislabeled_file_skipped_on_decode() {
        let dir = tempfile::tempdir().unwrap();
        let stage = TempStage::with_dir(dir.path());

        // Passes the extension heuristic, fails the decode.
        let fake = dir.path().join("fake.png");
        std::fs::write(&fake, b"not a png").unwrap();

        let source = FakeSource {
            files: vec![fake],
            ..Default::default()
        };

        assert_eq!(first_match(&source, &stage), ClassifiedPaste::Unsupported);
    }
}
