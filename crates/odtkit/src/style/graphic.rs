//! Graphic styles for image frames

use odtkit_dom::NodeId;

use crate::constants::GraphicPosition;
use crate::document::OdtDocument;
use crate::error::Result;
use crate::style::{AutoStyle, ContentAutoStyle};

/// Placement of a `draw:frame`
#[derive(Debug, Clone)]
pub struct GraphicStyle {
    base: ContentAutoStyle,
    /// `style:graphic-properties`
    properties: NodeId,
}

impl GraphicStyle {
    /// Create a graphic style
    pub fn new(doc: &mut OdtDocument, name: impl Into<String>) -> Result<Self> {
        let base = ContentAutoStyle::with_family(doc, name, "graphic")?;
        let properties = base.add_properties(doc, "style:graphic-properties")?;
        Ok(Self { base, properties })
    }

    /// Put the frame behind the text, or in front of it relative to the
    /// paragraph
    pub fn set_graphic_position(&self, doc: &mut OdtDocument, position: GraphicPosition) {
        let tree = doc.content_mut();
        let props = self.properties;
        match position {
            GraphicPosition::Background => {
                tree.set_attribute(props, "style:run-through", "background");
                tree.set_attribute(props, "style:wrap", "run-through");
            }
            GraphicPosition::Paragraph => {
                tree.set_attribute(props, "style:run-through", "foreground");
                tree.set_attribute(props, "style:vertical-rel", "paragraph");
                tree.set_attribute(props, "style:horizontal-rel", "paragraph");
            }
        }
    }
}

impl AutoStyle for GraphicStyle {
    fn base(&self) -> &ContentAutoStyle {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ContentAutoStyle {
        &mut self.base
    }
}
