//! Paragraphs and their inline content
//!
//! A [`Paragraph`] owns one `text:p` element. Inline content (text runs,
//! links, images, bookmarks, notes, ruby) is appended to it in call order.

use std::path::Path;

use odtkit_dom::NodeId;

use crate::constants::{GraphicPosition, NoteClass};
use crate::document::OdtDocument;
use crate::error::Result;
use crate::image::{encode_base64, read_image, ImageOptions};
use crate::style::graphic::GraphicStyle;
use crate::style::ruby::RubyStyle;
use crate::style::text::{ParagraphStyle, TextStyle};
use crate::style::AutoStyle;

/// A `text:p` element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paragraph {
    element: NodeId,
}

impl Paragraph {
    /// Create a paragraph, appending it to the document body when
    /// `add_to_document` is set
    pub fn create(
        doc: &mut OdtDocument,
        style: Option<&ParagraphStyle>,
        add_to_document: bool,
    ) -> Result<Self> {
        let tree = doc.content_mut();
        let element = tree.create_element("text:p");
        if let Some(style) = style {
            tree.set_attribute(element, "text:style-name", style.style_name());
        }
        if add_to_document {
            doc.append_to_body(element)?;
        }
        Ok(Self { element })
    }

    /// Create an unstyled paragraph at the end of the document body
    pub fn new(doc: &mut OdtDocument) -> Result<Self> {
        Self::create(doc, None, true)
    }

    /// Create an unstyled paragraph that is not attached anywhere yet, for
    /// list items and note bodies
    pub fn detached(doc: &mut OdtDocument) -> Result<Self> {
        Self::create(doc, None, false)
    }

    /// The `text:p` element
    pub fn element(&self) -> NodeId {
        self.element
    }

    fn append(&self, doc: &mut OdtDocument, child: NodeId) -> Result<()> {
        doc.content_mut().append_child(self.element, child)?;
        Ok(())
    }

    /// Append text, wrapped in a `text:span` when a style is given
    pub fn add_text(&self, doc: &mut OdtDocument, content: &str, style: Option<&TextStyle>) -> Result<()> {
        let tree = doc.content_mut();
        let node = match style {
            Some(style) => {
                let span = tree.create_element_with_text("text:span", content);
                tree.set_attribute(span, "text:style-name", style.style_name());
                span
            }
            None => tree.create_text(content),
        };
        self.append(doc, node)
    }

    /// Append a hyperlink showing `text`
    pub fn add_hyperlink(&self, doc: &mut OdtDocument, text: &str, url: &str, title: &str) -> Result<()> {
        let tree = doc.content_mut();
        let link = tree.create_element_with_text("text:a", text);
        tree.set_attribute(link, "office:title", title);
        tree.set_attribute(link, "xlink:href", url);
        self.append(doc, link)
    }

    /// Append an image embedded as base64 inside the frame.
    ///
    /// Background images get a `background-image-<name>` graphic style;
    /// foreground images get no style.
    pub fn add_image_base64<P: AsRef<Path>>(
        &self,
        doc: &mut OdtDocument,
        path: P,
        options: &ImageOptions,
    ) -> Result<()> {
        let data = read_image(path)?;

        let tree = doc.content_mut();
        let binary = tree.create_element_with_text("office:binary-data", encode_base64(&data));
        let image = tree.create_element("draw:image");
        tree.append_child(image, binary)?;
        let frame = new_frame(doc, image, options)?;

        if options.background {
            place_frame(doc, frame, &options.name, GraphicPosition::Background)?;
        }

        self.append(doc, frame)
    }

    /// Append an image stored in the package under the pictures directory
    /// and referenced from the frame.
    ///
    /// Every packaged image gets a graphic style, `background-image-<name>`
    /// or `paragraph-image-<name>`.
    pub fn add_image<P: AsRef<Path>>(
        &self,
        doc: &mut OdtDocument,
        path: P,
        options: &ImageOptions,
    ) -> Result<()> {
        let data = read_image(path)?;

        let picture = doc.config().picture_path(&options.name);
        doc.add_from_string(picture.as_str(), data);
        doc.set_file_manifest(&picture);

        let tree = doc.content_mut();
        let image = tree.create_element("draw:image");
        tree.set_attribute(image, "xlink:href", picture.as_str());
        tree.set_attribute(image, "xlink:type", "simple");
        tree.set_attribute(image, "xlink:show", "embed");
        tree.set_attribute(image, "xlink:actuate", "onLoad");
        let frame = new_frame(doc, image, options)?;

        let position = if options.background {
            GraphicPosition::Background
        } else {
            GraphicPosition::Paragraph
        };
        place_frame(doc, frame, &options.name, position)?;

        self.append(doc, frame)
    }

    /// Append a `text:line-break`
    pub fn add_line_break(&self, doc: &mut OdtDocument) -> Result<()> {
        let line_break = doc.content_mut().create_element("text:line-break");
        self.append(doc, line_break)
    }

    /// Mark the current position with a named bookmark
    pub fn add_bookmark(&self, doc: &mut OdtDocument, name: &str) -> Result<()> {
        let tree = doc.content_mut();
        let bookmark = tree.create_element("text:bookmark");
        tree.set_attribute(bookmark, "text:name", name);
        self.append(doc, bookmark)
    }

    /// Refer to a bookmark, displaying `text`
    pub fn add_bookmark_ref(&self, doc: &mut OdtDocument, name: &str, text: &str) -> Result<()> {
        let tree = doc.content_mut();
        let reference = tree.create_element_with_text("text:bookmark-ref", text);
        tree.set_attribute(reference, "text:ref-name", name);
        tree.set_attribute(reference, "text:reference-format", "text");
        self.append(doc, reference)
    }

    /// Attach a footnote or endnote holding `body` at the current position
    pub fn add_note(&self, doc: &mut OdtDocument, body: &str, class: NoteClass) -> Result<()> {
        let body_paragraph = Paragraph::detached(doc)?;
        body_paragraph.add_text(doc, body, None)?;

        let tree = doc.content_mut();
        let note = tree.create_element("text:note");
        let note_body = tree.create_element("text:note-body");
        tree.append_child(note_body, body_paragraph.element())?;
        tree.append_child(note, note_body)?;
        tree.set_attribute(note, "text:note-class", class.as_str());
        self.append(doc, note)
    }

    /// Annotate `base` with `text`, shown above or below it
    pub fn add_ruby(
        &self,
        doc: &mut OdtDocument,
        base: &str,
        text: &str,
        text_style: Option<&TextStyle>,
        ruby_style: Option<&RubyStyle>,
    ) -> Result<()> {
        let tree = doc.content_mut();
        let ruby = tree.create_element("text:ruby");
        let ruby_base = tree.create_element_with_text("text:ruby-base", base);
        tree.append_child(ruby, ruby_base)?;

        let ruby_text = tree.create_element("text:ruby-text");
        if let Some(style) = text_style {
            tree.set_attribute(ruby_text, "text:style-name", style.style_name());
        }
        let annotation = tree.create_text(text);
        tree.append_child(ruby_text, annotation)?;
        tree.append_child(ruby, ruby_text)?;

        if let Some(style) = ruby_style {
            tree.set_attribute(ruby, "text:style-name", style.style_name());
        }
        self.append(doc, ruby)
    }
}

/// Wrap a `draw:image` in a sized, anchored `draw:frame`
fn new_frame(doc: &mut OdtDocument, image: NodeId, options: &ImageOptions) -> Result<NodeId> {
    let tree = doc.content_mut();
    let frame = tree.create_element("draw:frame");
    tree.append_child(frame, image)?;
    tree.set_attribute(frame, "svg:width", options.width.as_str());
    tree.set_attribute(frame, "svg:height", options.height.as_str());
    tree.set_attribute(frame, "text:anchor-type", options.anchor_type().as_str());
    Ok(frame)
}

/// Give a frame its z-index and a graphic style derived from the image name
fn place_frame(
    doc: &mut OdtDocument,
    frame: NodeId,
    name: &str,
    position: GraphicPosition,
) -> Result<()> {
    let style_name = format!("{}-image-{}", position.as_str(), name);
    let z_index = doc.config().images.z_index;

    let tree = doc.content_mut();
    tree.set_attribute(frame, "draw:z-index", z_index.to_string());
    tree.set_attribute(frame, "draw:style-name", style_name.as_str());

    let style = GraphicStyle::new(doc, style_name)?;
    style.set_graphic_position(doc, position);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OdtError;
    use crate::image::AnchorType;

    fn xml(doc: &OdtDocument, p: &Paragraph) -> String {
        doc.content().subtree_to_string(p.element()).unwrap()
    }

    fn write_png(dir: &tempfile::TempDir, name: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, b"PNG").unwrap();
        path
    }

    #[test]
    fn test_new_paragraph_is_in_body() {
        let mut doc = OdtDocument::new().unwrap();
        let p = Paragraph::new(&mut doc).unwrap();
        assert_eq!(doc.content().parent(p.element()), Some(doc.office_text()));
    }

    #[test]
    fn test_detached_paragraph() {
        let mut doc = OdtDocument::new().unwrap();
        let p = Paragraph::detached(&mut doc).unwrap();
        assert_eq!(doc.content().parent(p.element()), None);
        assert!(doc.content().children(doc.office_text()).is_empty());
    }

    #[test]
    fn test_styled_paragraph() {
        let mut doc = OdtDocument::new().unwrap();
        let style = ParagraphStyle::new(&mut doc, "P1").unwrap();
        let p = Paragraph::create(&mut doc, Some(&style), true).unwrap();
        assert_eq!(xml(&doc, &p), r#"<text:p text:style-name="P1"/>"#);
    }

    #[test]
    fn test_text_line_break_order() {
        let mut doc = OdtDocument::new().unwrap();
        let p = Paragraph::new(&mut doc).unwrap();
        p.add_text(&mut doc, "Hello", None).unwrap();
        p.add_line_break(&mut doc).unwrap();
        p.add_text(&mut doc, "World", None).unwrap();

        assert_eq!(xml(&doc, &p), "<text:p>Hello<text:line-break/>World</text:p>");
    }

    #[test]
    fn test_styled_text() {
        let mut doc = OdtDocument::new().unwrap();
        let style = TextStyle::new(&mut doc, "T1").unwrap();
        let p = Paragraph::new(&mut doc).unwrap();
        p.add_text(&mut doc, "bold", Some(&style)).unwrap();

        assert_eq!(
            xml(&doc, &p),
            r#"<text:p><text:span text:style-name="T1">bold</text:span></text:p>"#
        );
    }

    #[test]
    fn test_hyperlink() {
        let mut doc = OdtDocument::new().unwrap();
        let p = Paragraph::new(&mut doc).unwrap();
        p.add_hyperlink(&mut doc, "Rust", "https://www.rust-lang.org", "")
            .unwrap();

        assert_eq!(
            xml(&doc, &p),
            r#"<text:p><text:a office:title="" xlink:href="https://www.rust-lang.org">Rust</text:a></text:p>"#
        );
    }

    #[test]
    fn test_bookmarks() {
        let mut doc = OdtDocument::new().unwrap();
        let p = Paragraph::new(&mut doc).unwrap();
        p.add_bookmark(&mut doc, "intro").unwrap();
        p.add_bookmark_ref(&mut doc, "intro", "see intro").unwrap();

        assert_eq!(
            xml(&doc, &p),
            "<text:p><text:bookmark text:name=\"intro\"/>\
             <text:bookmark-ref text:ref-name=\"intro\" text:reference-format=\"text\">see intro</text:bookmark-ref></text:p>"
        );
    }

    #[test]
    fn test_notes() {
        let mut doc = OdtDocument::new().unwrap();
        let p = Paragraph::new(&mut doc).unwrap();
        p.add_note(&mut doc, "A footnote", NoteClass::default()).unwrap();
        p.add_note(&mut doc, "An endnote", NoteClass::Endnote).unwrap();
        p.add_note(&mut doc, "Custom", NoteClass::from("sidenote")).unwrap();

        let tree = doc.content();
        let notes: Vec<_> = tree.children(p.element()).to_vec();
        assert_eq!(notes.len(), 3);
        assert_eq!(
            xml(&doc, &p).split("</text:note>").next().unwrap(),
            "<text:p><text:note text:note-class=\"footnote\"><text:note-body><text:p>A footnote</text:p></text:note-body>"
        );
        assert_eq!(tree.attribute(notes[1], "text:note-class"), Some("endnote"));
        assert_eq!(tree.attribute(notes[2], "text:note-class"), Some("sidenote"));
    }

    #[test]
    fn test_ruby() {
        let mut doc = OdtDocument::new().unwrap();
        let text_style = TextStyle::new(&mut doc, "T1").unwrap();
        let ruby_style = RubyStyle::new(&mut doc, "R1").unwrap();
        let p = Paragraph::new(&mut doc).unwrap();
        p.add_ruby(&mut doc, "漢字", "かんじ", Some(&text_style), Some(&ruby_style))
            .unwrap();
        p.add_ruby(&mut doc, "base", "note", None, None).unwrap();

        assert_eq!(
            xml(&doc, &p),
            "<text:p><text:ruby text:style-name=\"R1\"><text:ruby-base>漢字</text:ruby-base>\
             <text:ruby-text text:style-name=\"T1\">かんじ</text:ruby-text></text:ruby>\
             <text:ruby><text:ruby-base>base</text:ruby-base><text:ruby-text>note</text:ruby-text></text:ruby></text:p>"
        );
    }

    #[test]
    fn test_image_base64_foreground() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(&dir, "logo.png");
        let mut doc = OdtDocument::new().unwrap();
        let p = Paragraph::new(&mut doc).unwrap();
        let styles_before = doc.content().children(doc.automatic_styles()).len();

        let options = ImageOptions::new("logo", "2cm", "1cm").with_anchor("frame");
        p.add_image_base64(&mut doc, &path, &options).unwrap();

        assert_eq!(
            xml(&doc, &p),
            "<text:p><draw:frame svg:width=\"2cm\" svg:height=\"1cm\" text:anchor-type=\"as-char\">\
             <draw:image><office:binary-data>UE5H</office:binary-data></draw:image></draw:frame></text:p>"
        );
        assert_eq!(
            doc.content().children(doc.automatic_styles()).len(),
            styles_before
        );
        assert!(doc.package().is_empty());
    }

    #[test]
    fn test_image_base64_background() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(&dir, "logo.png");
        let mut doc = OdtDocument::new().unwrap();
        let p = Paragraph::new(&mut doc).unwrap();

        let options = ImageOptions::new("logo", "2cm", "1cm")
            .with_background(true)
            .with_anchor(AnchorType::Page);
        p.add_image_base64(&mut doc, &path, &options).unwrap();

        let tree = doc.content();
        let frame = tree.children(p.element())[0];
        assert_eq!(tree.attribute(frame, "text:anchor-type"), Some("page"));
        assert_eq!(tree.attribute(frame, "draw:z-index"), Some("1"));
        assert_eq!(
            tree.attribute(frame, "draw:style-name"),
            Some("background-image-logo")
        );
        assert!(doc.has_style_name("background-image-logo"));
    }

    #[test]
    fn test_packaged_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(&dir, "source.png");
        let mut doc = OdtDocument::new().unwrap();
        let p = Paragraph::new(&mut doc).unwrap();

        let options = ImageOptions::new("logo.png", "3cm", "3cm").with_anchor("paragraph");
        p.add_image(&mut doc, &path, &options).unwrap();

        assert_eq!(doc.package().get("Pictures/logo.png"), Some(&b"PNG"[..]));
        assert!(doc.package().manifest().contains("Pictures/logo.png"));

        let tree = doc.content();
        let frame = tree.children(p.element())[0];
        let image = tree.children(frame)[0];
        assert_eq!(tree.attribute(image, "xlink:href"), Some("Pictures/logo.png"));
        assert_eq!(tree.attribute(image, "xlink:show"), Some("embed"));
        assert_eq!(tree.attribute(image, "xlink:actuate"), Some("onLoad"));
        assert_eq!(tree.attribute(frame, "text:anchor-type"), Some("paragraph"));
        assert_eq!(tree.attribute(frame, "draw:z-index"), Some("1"));
        assert_eq!(
            tree.attribute(frame, "draw:style-name"),
            Some("paragraph-image-logo.png")
        );
        assert!(doc.has_style_name("paragraph-image-logo.png"));
    }

    #[test]
    fn test_missing_image_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");
        let mut doc = OdtDocument::new().unwrap();
        let p = Paragraph::new(&mut doc).unwrap();
        let nodes_before = doc.content().len();
        let manifest_before = doc.package().manifest().len();

        let options = ImageOptions::new("missing.png", "1cm", "1cm");
        let err = p.add_image(&mut doc, &missing, &options).unwrap_err();
        assert!(matches!(err, OdtError::ImageOpen { .. }));
        let err = p.add_image_base64(&mut doc, &missing, &options).unwrap_err();
        assert!(matches!(err, OdtError::ImageOpen { .. }));

        assert_eq!(doc.content().len(), nodes_before);
        assert!(doc.package().is_empty());
        assert_eq!(doc.package().manifest().len(), manifest_before);
    }
}
