//! Lists
//!
//! An [`OdtList`] owns one `text:list` element. Every item is a
//! `text:list-item` holding either a paragraph or a nested list.

use odtkit_dom::{DomError, NodeId};

use crate::document::OdtDocument;
use crate::error::Result;
use crate::paragraph::Paragraph;
use crate::style::list::ListStyle;
use crate::style::AutoStyle;

/// A `text:list` element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OdtList {
    element: NodeId,
}

impl OdtList {
    /// Create a list holding `items`, appending it to the document body
    /// when `add_to_document` is set. Sublists are created with
    /// `add_to_document` unset.
    pub fn create<S: AsRef<str>>(
        doc: &mut OdtDocument,
        items: &[S],
        add_to_document: bool,
    ) -> Result<Self> {
        let element = doc.content_mut().create_element("text:list");
        if add_to_document {
            doc.append_to_body(element)?;
        }
        let list = Self { element };
        for item in items {
            list.add_item(doc, item.as_ref())?;
        }
        Ok(list)
    }

    /// Create an empty list at the end of the document body
    pub fn new(doc: &mut OdtDocument) -> Result<Self> {
        Self::create::<&str>(doc, &[], true)
    }

    /// Create an empty list meant to be nested with [`OdtList::add_sub_list`]
    pub fn detached(doc: &mut OdtDocument) -> Result<Self> {
        Self::create::<&str>(doc, &[], false)
    }

    /// Create a list holding `items` at the end of the document body
    pub fn with_items<S: AsRef<str>>(doc: &mut OdtDocument, items: &[S]) -> Result<Self> {
        Self::create(doc, items, true)
    }

    /// Format this list with a list style
    pub fn set_style(&self, doc: &mut OdtDocument, style: &ListStyle) {
        doc.content_mut()
            .set_attribute(self.element, "text:style-name", style.style_name());
    }

    /// Append an item holding one paragraph of `text`
    pub fn add_item(&self, doc: &mut OdtDocument, text: &str) -> Result<()> {
        let paragraph = Paragraph::detached(doc)?;
        paragraph.add_text(doc, text, None)?;

        let tree = doc.content_mut();
        let item = tree.create_element("text:list-item");
        tree.append_child(item, paragraph.element())?;
        tree.append_child(self.element, item)?;
        Ok(())
    }

    /// Append an item holding `sublist`.
    ///
    /// The sublist element is moved: if it was in the document body it is
    /// taken out of it.
    pub fn add_sub_list(&self, doc: &mut OdtDocument, sublist: &OdtList) -> Result<()> {
        let tree = doc.content_mut();
        if tree.is_ancestor_or_self(sublist.element, self.element) {
            return Err(DomError::HierarchyRequest {
                parent: self.element,
                child: sublist.element,
            }
            .into());
        }
        let item = tree.create_element("text:list-item");
        tree.append_child(item, sublist.element)?;
        tree.append_child(self.element, item)?;
        Ok(())
    }

    /// The `text:list` element
    pub fn element(&self) -> NodeId {
        self.element
    }
}
