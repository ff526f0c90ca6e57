//! MIME constants and the file-drop extension mapping.

use std::path::Path;

/// Plain UTF-8 text
pub const MIME_TEXT_PLAIN: &str = "text/plain";

/// PNG image - the normalized delivery format for all clipboard images
pub const MIME_IMAGE_PNG: &str = "image/png";

/// JPEG image
pub const MIME_IMAGE_JPEG: &str = "image/jpeg";

/// GIF image
pub const MIME_IMAGE_GIF: &str = "image/gif";

/// BMP image
pub const MIME_IMAGE_BMP: &str = "image/bmp";

/// Map a dropped file's extension to an image MIME type.
///
/// This is an extension heuristic, not content sniffing: a mislabeled file
/// passes this check and is only rejected later when the decode fails.
/// Matching is case-insensitive (`.JPG` counts as JPEG). Unrecognized
/// extensions return `None` and the file is skipped.
pub fn extension_to_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some(MIME_IMAGE_PNG),
        "jpg" | "jpeg" => Some(MIME_IMAGE_JPEG),
        "gif" => Some(MIME_IMAGE_GIF),
        "bmp" => Some(MIME_IMAGE_BMP),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_extension_mapping() {
        assert_eq!(extension_to_mime(Path::new("shot.png")), Some(MIME_IMAGE_PNG));
        assert_eq!(extension_to_mime(Path::new("photo.jpeg")), Some(MIME_IMAGE_JPEG));
        assert_eq!(extension_to_mime(Path::new("anim.gif")), Some(MIME_IMAGE_GIF));
        assert_eq!(extension_to_mime(Path::new("scan.bmp")), Some(MIME_IMAGE_BMP));
    }

    #[test]
    fn test_extension_mixed_case() {
        assert_eq!(
            extension_to_mime(&PathBuf::from("/tmp/IMG_0001.JPG")),
            Some(MIME_IMAGE_JPEG)
        );
        assert_eq!(extension_to_mime(Path::new("Shot.PnG")), Some(MIME_IMAGE_PNG));
    }

    #[test]
    fn test_non_image_extension_skipped() {
        assert_eq!(extension_to_mime(Path::new("notes.txt")), None);
        assert_eq!(extension_to_mime(Path::new("archive.tar.gz")), None);
        assert_eq!(extension_to_mime(Path::new("no_extension")), None);
    }
}
