//! Document context
//!
//! `OdtDocument` owns everything a document is assembled into: the
//! `content.xml` tree with its two insertion points
//! (`office:automatic-styles` and `office:text`), the output package and
//! the style name registry. Styles, paragraphs and lists hold [`NodeId`]
//! handles into this tree and take the document as `&mut OdtDocument` on
//! every call, so only one writer can touch a document at a time.
//!
//! # Example
//!
//! ```no_run
//! use odtkit::{OdtDocument, Paragraph};
//!
//! let mut doc = OdtDocument::new()?;
//! let p = Paragraph::new(&mut doc)?;
//! p.add_text(&mut doc, "Hello", None)?;
//! doc.save("hello.odt")?;
//! # Ok::<(), odtkit::OdtError>(())
//! ```

use std::collections::HashSet;
use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use odtkit_dom::{NodeId, XmlTree};

use crate::config::OdtConfig;
use crate::error::Result;
use crate::package::OdtPackage;

/// ODF version written to every part
pub const ODF_VERSION: &str = "1.2";

/// Namespace declarations shared by the XML parts
const NAMESPACES: &[(&str, &str)] = &[
    ("xmlns:office", "urn:oasis:names:tc:opendocument:xmlns:office:1.0"),
    ("xmlns:style", "urn:oasis:names:tc:opendocument:xmlns:style:1.0"),
    ("xmlns:text", "urn:oasis:names:tc:opendocument:xmlns:text:1.0"),
    ("xmlns:table", "urn:oasis:names:tc:opendocument:xmlns:table:1.0"),
    ("xmlns:draw", "urn:oasis:names:tc:opendocument:xmlns:drawing:1.0"),
    ("xmlns:fo", "urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0"),
    ("xmlns:xlink", "http://www.w3.org/1999/xlink"),
    ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
    ("xmlns:meta", "urn:oasis:names:tc:opendocument:xmlns:meta:1.0"),
    ("xmlns:number", "urn:oasis:names:tc:opendocument:xmlns:datastyle:1.0"),
    ("xmlns:svg", "urn:oasis:names:tc:opendocument:xmlns:svg-compatible:1.0"),
];

/// An ODT document under construction
#[derive(Debug, Clone)]
pub struct OdtDocument {
    /// content.xml
    content: XmlTree,
    /// `office:font-face-decls`
    font_face_decls: NodeId,
    /// `office:automatic-styles`
    automatic_styles: NodeId,
    /// `office:body/office:text`
    office_text: NodeId,
    /// Packaged files and manifest
    package: OdtPackage,
    /// Names of all styles registered in this document
    style_names: HashSet<String>,
    /// Next number tried by the style name allocator
    next_style_number: u64,
    config: OdtConfig,
}

impl OdtDocument {
    /// Create an empty document with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(OdtConfig::default())
    }

    /// Create an empty document
    pub fn with_config(config: OdtConfig) -> Result<Self> {
        let mut content = XmlTree::new("office:document-content");
        let root = content.root();
        for (name, uri) in NAMESPACES {
            content.set_attribute(root, name, *uri);
        }
        content.set_attribute(root, "office:version", ODF_VERSION);

        let font_face_decls = content.create_element("office:font-face-decls");
        let automatic_styles = content.create_element("office:automatic-styles");
        let body = content.create_element("office:body");
        let office_text = content.create_element("office:text");

        for child in [font_face_decls, automatic_styles, body] {
            content.append_child(root, child)?;
        }
        content.append_child(body, office_text)?;

        Ok(Self {
            content,
            font_face_decls,
            automatic_styles,
            office_text,
            package: OdtPackage::new(),
            style_names: HashSet::new(),
            next_style_number: 1,
            config,
        })
    }

    /// Configuration in effect
    pub fn config(&self) -> &OdtConfig {
        &self.config
    }

    /// The content.xml tree
    pub fn content(&self) -> &XmlTree {
        &self.content
    }

    /// Mutable access to the content.xml tree
    pub fn content_mut(&mut self) -> &mut XmlTree {
        &mut self.content
    }

    /// Insertion point for font face declarations
    pub fn font_face_decls(&self) -> NodeId {
        self.font_face_decls
    }

    /// Insertion point for automatic styles
    pub fn automatic_styles(&self) -> NodeId {
        self.automatic_styles
    }

    /// Insertion point for body content
    pub fn office_text(&self) -> NodeId {
        self.office_text
    }

    /// The output container
    pub fn package(&self) -> &OdtPackage {
        &self.package
    }

    /// Mutable access to the output container
    pub fn package_mut(&mut self) -> &mut OdtPackage {
        &mut self.package
    }

    /// Store a file in the output container
    pub fn add_from_string(&mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) {
        self.package.add_from_string(path, contents);
    }

    /// List a packaged file in the manifest
    pub fn set_file_manifest(&mut self, path: &str) -> bool {
        self.package.set_file_manifest(path)
    }

    /// Record a style name as used. Returns `false` if it already was;
    /// duplicates are allowed, this only steers the allocator.
    pub fn register_style_name(&mut self, name: &str) -> bool {
        let fresh = self.style_names.insert(name.to_string());
        if !fresh {
            log::debug!("Style name {} registered more than once", name);
        }
        fresh
    }

    /// Check if a style with this name was registered
    pub fn has_style_name(&self, name: &str) -> bool {
        self.style_names.contains(name)
    }

    /// Produce a style name of the form `prefix` + number that no style of
    /// this document uses yet
    pub fn allocate_style_name(&mut self, prefix: &str) -> String {
        loop {
            let candidate = format!("{}{}", prefix, self.next_style_number);
            self.next_style_number += 1;
            if !self.style_names.contains(&candidate) {
                return candidate;
            }
        }
    }

    /// Append an element to the document body
    pub(crate) fn append_to_body(&mut self, element: NodeId) -> Result<()> {
        let text = self.office_text;
        self.content.append_child(text, element)?;
        Ok(())
    }

    /// Append an element to `office:automatic-styles`
    pub(crate) fn append_to_automatic_styles(&mut self, element: NodeId) -> Result<()> {
        let styles = self.automatic_styles;
        self.content.append_child(styles, element)?;
        Ok(())
    }

    /// Render content.xml
    pub fn content_xml(&self) -> Result<String> {
        Ok(self.content.to_xml_string()?)
    }

    /// Render styles.xml
    pub fn styles_xml(&self) -> Result<String> {
        let mut tree = XmlTree::new("office:document-styles");
        let root = tree.root();
        for (name, uri) in NAMESPACES {
            tree.set_attribute(root, name, *uri);
        }
        tree.set_attribute(root, "office:version", ODF_VERSION);

        let styles = tree.create_element("office:styles");
        let standard = tree.create_element("style:style");
        tree.set_attribute(standard, "style:name", "Standard");
        tree.set_attribute(standard, "style:family", "paragraph");
        tree.set_attribute(standard, "style:class", "text");
        tree.append_child(styles, standard)?;
        tree.append_child(root, styles)?;

        Ok(tree.to_xml_string()?)
    }

    /// Render meta.xml
    pub fn meta_xml(&self) -> Result<String> {
        let meta_config = &self.config.meta;
        let mut tree = XmlTree::new("office:document-meta");
        let root = tree.root();
        for (name, uri) in NAMESPACES {
            tree.set_attribute(root, name, *uri);
        }
        tree.set_attribute(root, "office:version", ODF_VERSION);

        let meta = tree.create_element("office:meta");
        let generator = tree.create_element_with_text("meta:generator", meta_config.generator.as_str());
        tree.append_child(meta, generator)?;
        if let Some(title) = &meta_config.title {
            let el = tree.create_element_with_text("dc:title", title.as_str());
            tree.append_child(meta, el)?;
        }
        if let Some(creator) = &meta_config.creator {
            let initial = tree.create_element_with_text("meta:initial-creator", creator.as_str());
            let current = tree.create_element_with_text("dc:creator", creator.as_str());
            tree.append_child(meta, initial)?;
            tree.append_child(meta, current)?;
        }
        if let Some(language) = &meta_config.language {
            let el = tree.create_element_with_text("dc:language", language.as_str());
            tree.append_child(meta, el)?;
        }
        tree.append_child(root, meta)?;

        Ok(tree.to_xml_string()?)
    }

    /// Write the ODT package to any writer
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let content = self.content_xml()?;
        let styles = self.styles_xml()?;
        let meta = self.meta_xml()?;
        let parts: [(&str, &[u8]); 3] = [
            ("content.xml", content.as_bytes()),
            ("styles.xml", styles.as_bytes()),
            ("meta.xml", meta.as_bytes()),
        ];
        self.package.write_to(writer, &parts)
    }

    /// Render the ODT package into memory
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.write_to(&mut buffer)?;
        Ok(buffer.into_inner())
    }

    /// Write the ODT package to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_to(file)?;
        log::debug!("Saved document to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_skeleton() {
        let doc = OdtDocument::new().unwrap();
        let tree = doc.content();
        assert_eq!(tree.name(doc.automatic_styles()), Some("office:automatic-styles"));
        assert_eq!(tree.name(doc.office_text()), Some("office:text"));
        assert_eq!(
            tree.find_first("office:text"),
            Some(doc.office_text())
        );
        assert_eq!(
            tree.attribute(tree.root(), "office:version"),
            Some(ODF_VERSION)
        );
    }

    #[test]
    fn test_skeleton_insertion_points() {
        let doc = OdtDocument::new().unwrap();
        let tree = doc.content();
        let root = tree.root();
        let top: Vec<Option<&str>> = tree.children(root).iter().map(|&c| tree.name(c)).collect();
        assert_eq!(
            top,
            [
                Some("office:font-face-decls"),
                Some("office:automatic-styles"),
                Some("office:body"),
            ]
        );
        assert_eq!(tree.parent(doc.font_face_decls()), Some(root));
        assert_eq!(tree.parent(doc.automatic_styles()), Some(root));
        assert!(tree.is_attached(doc.office_text()));
    }

    #[test]
    fn test_allocate_style_name_is_sequential() {
        let mut doc = OdtDocument::new().unwrap();
        assert_eq!(doc.allocate_style_name("liststyle"), "liststyle1");
        assert_eq!(doc.allocate_style_name("rubystyle"), "rubystyle2");
    }

    #[test]
    fn test_allocate_style_name_skips_registered() {
        let mut doc = OdtDocument::new().unwrap();
        doc.register_style_name("textstyle1");
        doc.register_style_name("textstyle2");
        assert_eq!(doc.allocate_style_name("textstyle"), "textstyle3");
    }

    #[test]
    fn test_register_style_name_reports_duplicates() {
        let mut doc = OdtDocument::new().unwrap();
        assert!(doc.register_style_name("P1"));
        assert!(!doc.register_style_name("P1"));
        assert!(doc.has_style_name("P1"));
    }

    #[test]
    fn test_empty_content_xml() {
        let doc = OdtDocument::new().unwrap();
        let xml = doc.content_xml().unwrap();
        assert!(xml.contains("<office:automatic-styles/>"));
        assert!(xml.contains("<office:body><office:text/></office:body>"));
    }

    #[test]
    fn test_meta_xml_uses_config() {
        let mut config = OdtConfig::default();
        config.meta.title = Some("Minutes".to_string());
        config.meta.creator = Some("Ada".to_string());
        let doc = OdtDocument::with_config(config).unwrap();

        let xml = doc.meta_xml().unwrap();
        assert!(xml.contains("<dc:title>Minutes</dc:title>"));
        assert!(xml.contains("<meta:initial-creator>Ada</meta:initial-creator>"));
        assert!(xml.contains("<meta:generator>odtkit/"));
        assert!(!xml.contains("dc:language"));
    }

    #[test]
    fn test_styles_xml() {
        let doc = OdtDocument::new().unwrap();
        let xml = doc.styles_xml().unwrap();
        assert!(xml.contains(r#"style:name="Standard""#));
    }
}
