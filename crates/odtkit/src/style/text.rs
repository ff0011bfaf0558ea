//! Text and paragraph styles

use odtkit_dom::NodeId;

use crate::constants::Alignment;
use crate::document::OdtDocument;
use crate::error::{OdtError, Result};
use crate::style::{name_or_allocate, AutoStyle, ContentAutoStyle};

/// Character formatting, applied through `text:span` and friends
#[derive(Debug, Clone)]
pub struct TextStyle {
    base: ContentAutoStyle,
    /// `style:text-properties`
    properties: NodeId,
}

impl TextStyle {
    /// Create a text style. An empty name is replaced by `textstyle<N>`.
    pub fn new(doc: &mut OdtDocument, name: &str) -> Result<Self> {
        let name = name_or_allocate(doc, name, "textstyle");
        let base = ContentAutoStyle::with_family(doc, name, "text")?;
        let properties = base.add_properties(doc, "style:text-properties")?;
        Ok(Self { base, properties })
    }

    fn set(&self, doc: &mut OdtDocument, attribute: &str, value: &str) {
        doc.content_mut()
            .set_attribute(self.properties, attribute, value);
    }

    /// Bold weight, for western, asian and complex scripts
    pub fn set_bold(&self, doc: &mut OdtDocument) {
        for attr in ["fo:font-weight", "style:font-weight-asian", "style:font-weight-complex"] {
            self.set(doc, attr, "bold");
        }
    }

    /// Italic posture, for western, asian and complex scripts
    pub fn set_italic(&self, doc: &mut OdtDocument) {
        for attr in ["fo:font-style", "style:font-style-asian", "style:font-style-complex"] {
            self.set(doc, attr, "italic");
        }
    }

    /// Solid underline in the font color
    pub fn set_underline(&self, doc: &mut OdtDocument) {
        self.set(doc, "style:text-underline-style", "solid");
        self.set(doc, "style:text-underline-width", "auto");
        self.set(doc, "style:text-underline-color", "font-color");
    }

    /// Font color as `#rrggbb`
    pub fn set_color(&self, doc: &mut OdtDocument, color: &str) -> Result<()> {
        check_color(color)?;
        self.set(doc, "fo:color", color);
        Ok(())
    }

    /// Highlight color as `#rrggbb`
    pub fn set_background_color(&self, doc: &mut OdtDocument, color: &str) -> Result<()> {
        check_color(color)?;
        self.set(doc, "fo:background-color", color);
        Ok(())
    }

    /// Font size as an ODF length or percentage (`"12pt"`, `"80%"`)
    pub fn set_font_size(&self, doc: &mut OdtDocument, size: &str) {
        for attr in ["fo:font-size", "style:font-size-asian", "style:font-size-complex"] {
            self.set(doc, attr, size);
        }
    }

    /// Font by family name; the face is declared in `office:font-face-decls`
    pub fn set_font_name(&self, doc: &mut OdtDocument, font: &str) -> Result<()> {
        declare_font_face(doc, font)?;
        self.set(doc, "style:font-name", font);
        Ok(())
    }
}

impl AutoStyle for TextStyle {
    fn base(&self) -> &ContentAutoStyle {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ContentAutoStyle {
        &mut self.base
    }
}

/// Paragraph-level formatting
#[derive(Debug, Clone)]
pub struct ParagraphStyle {
    base: ContentAutoStyle,
    /// `style:paragraph-properties`
    properties: NodeId,
}

impl ParagraphStyle {
    /// Create a paragraph style. An empty name is replaced by
    /// `paragraphstyle<N>`.
    pub fn new(doc: &mut OdtDocument, name: &str) -> Result<Self> {
        let name = name_or_allocate(doc, name, "paragraphstyle");
        let base = ContentAutoStyle::with_family(doc, name, "paragraph")?;
        let properties = base.add_properties(doc, "style:paragraph-properties")?;
        Ok(Self { base, properties })
    }

    fn set(&self, doc: &mut OdtDocument, attribute: &str, value: &str) {
        doc.content_mut()
            .set_attribute(self.properties, attribute, value);
    }

    /// Horizontal alignment of the paragraph's lines
    pub fn set_text_align(&self, doc: &mut OdtDocument, align: Alignment) {
        self.set(doc, "fo:text-align", align.as_str());
    }

    /// Space above the paragraph
    pub fn set_margin_top(&self, doc: &mut OdtDocument, length: &str) {
        self.set(doc, "fo:margin-top", length);
    }

    /// Space below the paragraph
    pub fn set_margin_bottom(&self, doc: &mut OdtDocument, length: &str) {
        self.set(doc, "fo:margin-bottom", length);
    }

    /// Fixed line height or percentage
    pub fn set_line_height(&self, doc: &mut OdtDocument, height: &str) {
        self.set(doc, "fo:line-height", height);
    }
}

impl AutoStyle for ParagraphStyle {
    fn base(&self) -> &ContentAutoStyle {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ContentAutoStyle {
        &mut self.base
    }
}

fn check_color(color: &str) -> Result<()> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(OdtError::InvalidColor(color.to_string()))
    }
}

fn declare_font_face(doc: &mut OdtDocument, font: &str) -> Result<()> {
    let decls = doc.font_face_decls();
    let tree = doc.content_mut();
    let declared = tree
        .child_elements(decls)
        .any(|face| tree.attribute(face, "style:name") == Some(font));
    if !declared {
        let face = tree.create_element("style:font-face");
        tree.set_attribute(face, "style:name", font);
        tree.set_attribute(face, "svg:font-family", format!("'{}'", font));
        tree.append_child(decls, face)?;
    }
    Ok(())
}
