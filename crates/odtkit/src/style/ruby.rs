//! Ruby styles
//!
//! A ruby style only carries `style:ruby-properties`: where the annotation
//! goes and how it is aligned over the base text.

use odtkit_dom::NodeId;

use crate::constants::{RubyAlign, RubyPosition};
use crate::document::OdtDocument;
use crate::error::Result;
use crate::style::{name_or_allocate, AutoStyle, ContentAutoStyle};

/// Name prefix of auto-named ruby styles
pub const RUBY_STYLE_PREFIX: &str = "rubystyle";

/// Style of a `text:ruby` element
#[derive(Debug, Clone)]
pub struct RubyStyle {
    base: ContentAutoStyle,
    /// `style:ruby-properties`, created empty
    ruby_properties: NodeId,
}

impl RubyStyle {
    /// Create a ruby style. An empty name is replaced by `rubystyle<N>`,
    /// unique within the document.
    pub fn new(doc: &mut OdtDocument, name: &str) -> Result<Self> {
        let name = name_or_allocate(doc, name, RUBY_STYLE_PREFIX);
        let base = ContentAutoStyle::with_family(doc, name, "ruby")?;
        let ruby_properties = base.add_properties(doc, "style:ruby-properties")?;
        Ok(Self {
            base,
            ruby_properties,
        })
    }

    /// Place the annotation above or below the base text
    pub fn set_ruby_position(&self, doc: &mut OdtDocument, position: RubyPosition) {
        doc.content_mut()
            .set_attribute(self.ruby_properties, "style:ruby-position", position.as_str());
    }

    /// Align the annotation over the base text
    pub fn set_ruby_align(&self, doc: &mut OdtDocument, align: RubyAlign) {
        doc.content_mut()
            .set_attribute(self.ruby_properties, "style:ruby-align", align.as_str());
    }

    /// The `style:ruby-properties` element
    pub fn ruby_properties(&self) -> NodeId {
        self.ruby_properties
    }
}

impl AutoStyle for RubyStyle {
    fn base(&self) -> &ContentAutoStyle {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ContentAutoStyle {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OdtError;

    #[test]
    fn test_auto_name_pattern() {
        let mut doc = OdtDocument::new().unwrap();
        let style = RubyStyle::new(&mut doc, "").unwrap();
        let suffix = style
            .style_name()
            .strip_prefix(RUBY_STYLE_PREFIX)
            .expect("rubystyle prefix");
        assert!(!suffix.is_empty());
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_auto_names_differ_within_document() {
        let mut doc = OdtDocument::new().unwrap();
        let a = RubyStyle::new(&mut doc, "").unwrap();
        let b = RubyStyle::new(&mut doc, "").unwrap();
        assert_ne!(a.style_name(), b.style_name());
    }

    #[test]
    fn test_explicit_name_and_family() {
        let mut doc = OdtDocument::new().unwrap();
        let style = RubyStyle::new(&mut doc, "Furigana").unwrap();
        let tree = doc.content();
        assert_eq!(style.style_name(), "Furigana");
        assert_eq!(tree.attribute(style.element(), "style:family"), Some("ruby"));
        assert_eq!(
            tree.subtree_to_string(style.element()).unwrap(),
            r#"<style:style style:name="Furigana" style:family="ruby"><style:ruby-properties/></style:style>"#
        );
    }

    #[test]
    fn test_position_and_align() {
        let mut doc = OdtDocument::new().unwrap();
        let style = RubyStyle::new(&mut doc, "R1").unwrap();
        style.set_ruby_position(&mut doc, RubyPosition::Below);
        style.set_ruby_align(&mut doc, RubyAlign::DistributeSpace);

        let tree = doc.content();
        let props = style.ruby_properties();
        assert_eq!(tree.attribute(props, "style:ruby-position"), Some("below"));
        assert_eq!(
            tree.attribute(props, "style:ruby-align"),
            Some("distribute-space")
        );
    }

    #[test]
    fn test_invalid_tokens_leave_properties_untouched() {
        let mut doc = OdtDocument::new().unwrap();
        let style = RubyStyle::new(&mut doc, "R1").unwrap();

        let position = "middle".parse::<RubyPosition>();
        assert!(matches!(position, Err(OdtError::InvalidRubyPosition(_))));
        let align = "spread".parse::<RubyAlign>();
        assert!(matches!(align, Err(OdtError::InvalidRubyAlign(_))));

        assert!(doc.content().attributes(style.ruby_properties()).is_empty());
    }
}
