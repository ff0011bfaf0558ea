//! Automatic styles
//!
//! Every style is backed by one element under `office:automatic-styles`,
//! created and registered when the style object is constructed. Content
//! refers to styles by name only.

pub mod graphic;
pub mod list;
pub mod ruby;
pub mod text;

use odtkit_dom::NodeId;

use crate::document::OdtDocument;
use crate::error::Result;

/// Element used for a style when none is specified
pub const DEFAULT_STYLE_ELEMENT: &str = "style:style";

/// Shared part of every automatic style: a name and its backing element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentAutoStyle {
    name: String,
    element: NodeId,
}

impl ContentAutoStyle {
    /// Create the backing element (`style:style` unless `element_name` is
    /// given), set its `style:name` and append it to the automatic styles.
    ///
    /// Name uniqueness is not checked.
    pub fn new(
        doc: &mut OdtDocument,
        name: impl Into<String>,
        element_name: Option<&str>,
    ) -> Result<Self> {
        let name = name.into();
        let tree = doc.content_mut();
        let element = tree.create_element(element_name.unwrap_or(DEFAULT_STYLE_ELEMENT));
        tree.set_attribute(element, "style:name", name.as_str());
        doc.append_to_automatic_styles(element)?;
        doc.register_style_name(&name);
        log::debug!("Registered automatic style {}", name);
        Ok(Self { name, element })
    }

    /// Create a `style:style` of the given family
    pub fn with_family(doc: &mut OdtDocument, name: impl Into<String>, family: &str) -> Result<Self> {
        let style = Self::new(doc, name, None)?;
        doc.content_mut()
            .set_attribute(style.element, "style:family", family);
        Ok(style)
    }

    /// Name this style is referenced by
    pub fn style_name(&self) -> &str {
        &self.name
    }

    /// Change the logical name.
    ///
    /// The `style:name` attribute already written to the backing element is
    /// left as it is.
    pub fn set_style_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The backing element
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// Append an empty properties child (`style:text-properties`, ...) to
    /// the backing element
    pub(crate) fn add_properties(&self, doc: &mut OdtDocument, element_name: &str) -> Result<NodeId> {
        let tree = doc.content_mut();
        let properties = tree.create_element(element_name);
        tree.append_child(self.element, properties)?;
        Ok(properties)
    }
}

/// Resolve a caller-supplied name, allocating one when it is empty
pub(crate) fn name_or_allocate(doc: &mut OdtDocument, name: &str, prefix: &str) -> String {
    if name.is_empty() {
        doc.allocate_style_name(prefix)
    } else {
        name.to_string()
    }
}

/// Common interface of all automatic styles
pub trait AutoStyle {
    /// The shared style part
    fn base(&self) -> &ContentAutoStyle;

    /// Mutable access to the shared style part
    fn base_mut(&mut self) -> &mut ContentAutoStyle;

    /// Name this style is referenced by
    fn style_name(&self) -> &str {
        self.base().style_name()
    }

    /// Change the logical name without touching the backing element
    fn set_style_name(&mut self, name: &str) {
        self.base_mut().set_style_name(name);
    }

    /// The backing element
    fn element(&self) -> NodeId {
        self.base().element()
    }
}

impl AutoStyle for ContentAutoStyle {
    fn base(&self) -> &ContentAutoStyle {
        self
    }

    fn base_mut(&mut self) -> &mut ContentAutoStyle {
        self
    }
}
