//! Package manifest (`META-INF/manifest.xml`)
//!
//! The manifest lists every file in the ODT container together with its
//! media type. Entries are kept in registration order so output is stable.

use odtkit_dom::XmlTree;

use crate::document::ODF_VERSION;
use crate::error::Result;
use crate::image::media_type_for_path;

/// The manifest file path within the ODT archive
pub const MANIFEST_PATH: &str = "META-INF/manifest.xml";

/// Media type of an ODF text document
pub const ODT_MIMETYPE: &str = "application/vnd.oasis.opendocument.text";

/// Manifest namespace URI
pub const MANIFEST_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:manifest:1.0";

/// A single `manifest:file-entry`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Path within the package, `/` for the package itself
    pub full_path: String,
    /// MIME media type
    pub media_type: String,
}

/// Manifest of an ODT package
#[derive(Debug, Clone)]
pub struct FileManifest {
    entries: Vec<ManifestEntry>,
}

impl Default for FileManifest {
    fn default() -> Self {
        Self::new()
    }
}

impl FileManifest {
    /// Create a manifest holding the package root and the standard XML parts
    pub fn new() -> Self {
        let mut manifest = Self {
            entries: Vec::new(),
        };
        manifest.add("/", ODT_MIMETYPE);
        for part in ["content.xml", "styles.xml", "meta.xml"] {
            manifest.add(part, "text/xml");
        }
        manifest
    }

    /// Add an entry with an explicit media type.
    ///
    /// Returns `false` if the path was already listed; the existing entry
    /// is kept.
    pub fn add(&mut self, full_path: impl Into<String>, media_type: impl Into<String>) -> bool {
        let full_path = full_path.into();
        if self.contains(&full_path) {
            return false;
        }
        self.entries.push(ManifestEntry {
            full_path,
            media_type: media_type.into(),
        });
        true
    }

    /// Add an entry, guessing the media type from the extension
    pub fn register(&mut self, full_path: &str) -> bool {
        self.add(full_path, media_type_for_path(full_path))
    }

    /// Check if a path is listed
    pub fn contains(&self, full_path: &str) -> bool {
        self.entries.iter().any(|e| e.full_path == full_path)
    }

    /// Get an entry by path
    pub fn get(&self, full_path: &str) -> Option<&ManifestEntry> {
        self.entries.iter().find(|e| e.full_path == full_path)
    }

    /// All entries in registration order
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the manifest has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render `META-INF/manifest.xml`
    pub fn to_xml(&self) -> Result<String> {
        let mut tree = XmlTree::new("manifest:manifest");
        let root = tree.root();
        tree.set_attribute(root, "xmlns:manifest", MANIFEST_NS);
        tree.set_attribute(root, "manifest:version", ODF_VERSION);

        for entry in &self.entries {
            let element = tree.create_element("manifest:file-entry");
            tree.set_attribute(element, "manifest:full-path", entry.full_path.as_str());
            if entry.full_path == "/" {
                tree.set_attribute(element, "manifest:version", ODF_VERSION);
            }
            tree.set_attribute(element, "manifest:media-type", entry.media_type.as_str());
            tree.append_child(root, element)?;
        }

        Ok(tree.to_xml_string()?)
    }
}
