//! Image support
//!
//! Images reach a document in one of two ways:
//!
//! - inlined as base64 inside `office:binary-data` (list bullets and
//!   `Paragraph::add_image_base64`)
//! - packaged under `Pictures/` and referenced through `xlink:href`
//!   (`Paragraph::add_image`)
//!
//! Either way the file is read completely before anything is added to the
//! document, so a missing file leaves the document untouched.
//!
//! # ODF Frame Structure
//!
//! ```xml
//! <draw:frame svg:width="..." svg:height="..." text:anchor-type="as-char">
//!   <draw:image xlink:href="Pictures/logo.png" xlink:type="simple"
//!               xlink:show="embed" xlink:actuate="onLoad"/>
//! </draw:frame>
//! ```

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{OdtError, Result};

/// How a frame is anchored to the surrounding text (`text:anchor-type`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorType {
    Page,
    Paragraph,
    Char,
    /// Flows like a character; used for anything unrecognised
    #[default]
    AsChar,
}

impl AnchorType {
    /// Map an anchor name; unknown names fall back to `AsChar`
    pub fn from_name(name: &str) -> Self {
        match name {
            "page" => Self::Page,
            "paragraph" => Self::Paragraph,
            "char" => Self::Char,
            _ => Self::AsChar,
        }
    }

    /// ODF attribute value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Paragraph => "paragraph",
            Self::Char => "char",
            Self::AsChar => "as-char",
        }
    }
}

impl From<&str> for AnchorType {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

/// Placement options for an image frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageOptions {
    /// Frame name; also names the packaged file and derived graphic style
    pub name: String,
    /// Frame width (ODF length, e.g. `"4cm"`)
    pub width: String,
    /// Frame height
    pub height: String,
    /// Put the image behind the text
    pub background: bool,
    /// Anchor; `None` anchors as a character
    pub anchor: Option<AnchorType>,
}

impl ImageOptions {
    /// Create options for a foreground, character-anchored frame
    pub fn new(name: impl Into<String>, width: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            width: width.into(),
            height: height.into(),
            background: false,
            anchor: None,
        }
    }

    /// Set background placement
    pub fn with_background(mut self, background: bool) -> Self {
        self.background = background;
        self
    }

    /// Set the anchor
    pub fn with_anchor(mut self, anchor: impl Into<AnchorType>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    /// The anchor actually written to the frame
    pub fn anchor_type(&self) -> AnchorType {
        self.anchor.unwrap_or_default()
    }
}

/// Read an image file into memory
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|source| {
        log::warn!("Cannot open image {}: {}", path.display(), source);
        OdtError::ImageOpen {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Encode image bytes for `office:binary-data`
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Get the MIME media type for a packaged path, based on its extension
pub fn media_type_for_path(path: &str) -> &'static str {
    let ext = path
        .rsplit('/')
        .next()
        .and_then(|file| file.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("tif") | Some("tiff") => "image/tiff",
        Some("webp") => "image/webp",
        Some("emf") => "image/x-emf",
        Some("wmf") => "image/x-wmf",
        Some("xml") => "text/xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_mapping() {
        assert_eq!(AnchorType::from_name("page"), AnchorType::Page);
        assert_eq!(AnchorType::from_name("paragraph"), AnchorType::Paragraph);
        assert_eq!(AnchorType::from_name("char"), AnchorType::Char);
        assert_eq!(AnchorType::from_name("frame"), AnchorType::AsChar);
        assert_eq!(AnchorType::from_name(""), AnchorType::AsChar);
        assert_eq!(AnchorType::AsChar.as_str(), "as-char");
    }

    #[test]
    fn test_options_default_anchor() {
        let opts = ImageOptions::new("logo.png", "2cm", "1cm");
        assert_eq!(opts.anchor_type(), AnchorType::AsChar);
        assert!(!opts.background);

        let opts = opts.with_anchor("page").with_background(true);
        assert_eq!(opts.anchor_type(), AnchorType::Page);
        assert!(opts.background);
    }

    #[test]
    fn test_encode_base64() {
        assert_eq!(encode_base64(b"PNG"), "UE5H");
        assert_eq!(encode_base64(b"ab"), "YWI=");
        assert_eq!(encode_base64(b""), "");
    }

    #[test]
    fn test_media_types() {
        assert_eq!(media_type_for_path("Pictures/a.PNG"), "image/png");
        assert_eq!(media_type_for_path("Pictures/a.jpeg"), "image/jpeg");
        assert_eq!(media_type_for_path("content.xml"), "text/xml");
        assert_eq!(media_type_for_path("Pictures/noext"), "application/octet-stream");
        assert_eq!(media_type_for_path("dir.d/noext"), "application/octet-stream");
    }

    #[test]
    fn test_read_missing_image() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");
        match read_image(&missing) {
            Err(OdtError::ImageOpen { path, .. }) => assert_eq!(path, missing),
            other => panic!("Expected ImageOpen, got {:?}", other),
        }
    }

    #[test]
    fn test_read_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();
        assert_eq!(read_image(&path).unwrap(), vec![0x89, b'P', b'N', b'G']);
    }
}
