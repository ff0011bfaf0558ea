//! ODT container
//!
//! `OdtPackage` collects the binary files that travel next to the XML parts
//! (packaged pictures) and the manifest that lists them. The XML parts
//! themselves are rendered by [`OdtDocument`](crate::OdtDocument) at write
//! time and handed to [`OdtPackage::write_to`].

use std::collections::BTreeMap;
use std::io::{Seek, Write};

use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

use crate::error::Result;
use crate::manifest::{FileManifest, MANIFEST_PATH, ODT_MIMETYPE};

/// Files that are always generated and can't be overridden by packaged files
const RESERVED_PATHS: &[&str] = &["mimetype", MANIFEST_PATH];

/// In-memory ODT container
#[derive(Debug, Clone, Default)]
pub struct OdtPackage {
    /// Packaged files, keyed by path
    files: BTreeMap<String, Vec<u8>>,
    /// Manifest entries
    manifest: FileManifest,
}

impl OdtPackage {
    /// Create an empty package
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a file in the package. An existing file at the same path is
    /// replaced.
    pub fn add_from_string(&mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) {
        let path = path.into();
        let contents = contents.into();
        log::debug!("Packaging {} ({} bytes)", path, contents.len());
        if self.files.insert(path.clone(), contents).is_some() {
            log::warn!("Replaced packaged file {}", path);
        }
    }

    /// List a packaged path in the manifest.
    ///
    /// Returns `false` if it was already listed.
    pub fn set_file_manifest(&mut self, path: &str) -> bool {
        self.manifest.register(path)
    }

    /// Get a packaged file
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(|v| v.as_slice())
    }

    /// Check if a file was packaged
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Packaged paths in sorted order
    pub fn file_list(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(|s| s.as_str())
    }

    /// Number of packaged files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if nothing was packaged
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The manifest
    pub fn manifest(&self) -> &FileManifest {
        &self.manifest
    }

    /// Write the ODT archive.
    ///
    /// `mimetype` is written first and stored uncompressed, as ODF requires,
    /// followed by the manifest, the given XML `parts`, and the packaged
    /// files in path order.
    pub fn write_to<W: Write + Seek>(&self, writer: W, parts: &[(&str, &[u8])]) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        zip.start_file("mimetype", stored)?;
        zip.write_all(ODT_MIMETYPE.as_bytes())?;

        zip.start_file(MANIFEST_PATH, deflated)?;
        zip.write_all(self.manifest.to_xml()?.as_bytes())?;

        for (path, contents) in parts {
            zip.start_file(*path, deflated)?;
            zip.write_all(contents)?;
        }

        for (path, contents) in &self.files {
            let path = path.as_str();
            if RESERVED_PATHS.contains(&path) || parts.iter().any(|(p, _)| *p == path) {
                log::warn!("Skipping packaged file {}: path is generated", path);
                continue;
            }
            zip.start_file(path, deflated)?;
            zip.write_all(contents)?;
        }

        zip.finish()?;
        Ok(())
    }
}
