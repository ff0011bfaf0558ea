//! List styles
//!
//! A `text:list-style` holds one level definition per indentation level.
//! Each definition is a numbered, bulleted or image level element with a
//! `style:list-level-properties` child describing its indentation.
//!
//! ```xml
//! <text:list-style style:name="liststyle1">
//!   <text:list-level-style-bullet text:level="1" text:bullet-char="•"
//!       style:num-prefix="" style:num-suffix="">
//!     <style:list-level-properties text:space-before="0.5cm"
//!         text:min-label-distance="0.5cm"/>
//!   </text:list-level-style-bullet>
//! </text:list-style>
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use odtkit_dom::NodeId;

use crate::constants::{is_bullet_char, Alignment, VerticalPos};
use crate::document::OdtDocument;
use crate::error::{OdtError, Result};
use crate::image::{encode_base64, read_image};
use crate::style::text::TextStyle;
use crate::style::{name_or_allocate, AutoStyle, ContentAutoStyle};

/// Name prefix of auto-named list styles
pub const LIST_STYLE_PREFIX: &str = "liststyle";

/// Numbering scheme of a numbered level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    /// `style:num-format` (`1`, `a`, `A`, `i`, `I`)
    pub format: String,
    /// Text before the number
    pub prefix: String,
    /// Text after the number
    pub suffix: String,
}

impl NumberFormat {
    pub fn new(
        format: impl Into<String>,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            format: format.into(),
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new("1", "", ".")
    }
}

/// Properties of one list level, written to `style:list-level-properties`.
///
/// Unset fields are not written, except `indent` which defaults to
/// `level` times the configured indent step (0.5cm unless overridden).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListLevelProp {
    pub align: Option<Alignment>,
    pub indent: Option<String>,
    pub min_label_width: Option<String>,
    pub min_label_distance: Option<String>,
    pub vertical_pos: Option<VerticalPos>,
    /// Only meaningful for image levels
    pub image_width: Option<String>,
    /// Only meaningful for image levels
    pub image_height: Option<String>,
}

impl ListLevelProp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = Some(indent.into());
        self
    }

    pub fn with_min_label_width(mut self, width: impl Into<String>) -> Self {
        self.min_label_width = Some(width.into());
        self
    }

    pub fn with_min_label_distance(mut self, distance: impl Into<String>) -> Self {
        self.min_label_distance = Some(distance.into());
        self
    }

    pub fn with_vertical_pos(mut self, pos: VerticalPos) -> Self {
        self.vertical_pos = Some(pos);
        self
    }

    pub fn with_image_width(mut self, width: impl Into<String>) -> Self {
        self.image_width = Some(width.into());
        self
    }

    pub fn with_image_height(mut self, height: impl Into<String>) -> Self {
        self.image_height = Some(height.into());
        self
    }
}

/// Kind of a level definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelKind {
    Number,
    Bullet,
    Image,
}

impl LevelKind {
    /// Element name of the level definition
    pub fn element_name(self) -> &'static str {
        match self {
            Self::Number => "text:list-level-style-number",
            Self::Bullet => "text:list-level-style-bullet",
            Self::Image => "text:list-level-style-image",
        }
    }
}

/// A defined level of a list style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLevel {
    pub kind: LevelKind,
    /// The level definition element
    pub element: NodeId,
    /// Its `style:list-level-properties` child
    pub properties: Option<NodeId>,
}

/// Style of a `text:list`
#[derive(Debug, Clone)]
pub struct ListStyle {
    base: ContentAutoStyle,
    levels: BTreeMap<u32, ListLevel>,
}

impl ListStyle {
    /// Create a list style. An empty name is replaced by `liststyle<N>`.
    pub fn new(doc: &mut OdtDocument, name: &str) -> Result<Self> {
        let name = name_or_allocate(doc, name, LIST_STYLE_PREFIX);
        let base = ContentAutoStyle::new(doc, name, Some("text:list-style"))?;
        Ok(Self {
            base,
            levels: BTreeMap::new(),
        })
    }

    /// Number the items of `level`
    pub fn set_number_level(
        &mut self,
        doc: &mut OdtDocument,
        level: u32,
        format: Option<&NumberFormat>,
        text_style: Option<&TextStyle>,
    ) -> Result<()> {
        check_level(level)?;

        let tree = doc.content_mut();
        let element = tree.create_element(LevelKind::Number.element_name());
        tree.set_attribute(element, "text:level", level.to_string());
        if let Some(format) = format {
            tree.set_attribute(element, "style:num-format", format.format.as_str());
            tree.set_attribute(element, "style:num-prefix", format.prefix.as_str());
            tree.set_attribute(element, "style:num-suffix", format.suffix.as_str());
        }
        if let Some(style) = text_style {
            tree.set_attribute(element, "text:style-name", style.style_name());
        }

        self.install_level(doc, level, LevelKind::Number, element)?;
        let props = self.derived_props(doc, level);
        self.set_level_prop(doc, level, &props)
    }

    /// Mark the items of `level` with one of the [`BULLET_CHARS`]
    ///
    /// [`BULLET_CHARS`]: crate::constants::BULLET_CHARS
    pub fn set_bullet_level(
        &mut self,
        doc: &mut OdtDocument,
        level: u32,
        bullet: char,
        prefix: &str,
        suffix: &str,
        text_style: Option<&TextStyle>,
    ) -> Result<()> {
        check_level(level)?;
        if !is_bullet_char(bullet) {
            return Err(OdtError::InvalidBulletChar(bullet));
        }

        let tree = doc.content_mut();
        let element = tree.create_element(LevelKind::Bullet.element_name());
        tree.set_attribute(element, "text:level", level.to_string());
        tree.set_attribute(element, "text:bullet-char", bullet.to_string());
        if let Some(style) = text_style {
            tree.set_attribute(element, "text:style-name", style.style_name());
        }
        tree.set_attribute(element, "style:num-prefix", prefix);
        tree.set_attribute(element, "style:num-suffix", suffix);

        self.install_level(doc, level, LevelKind::Bullet, element)?;
        let props = self.derived_props(doc, level);
        self.set_level_prop(doc, level, &props)
    }

    /// Mark the items of `level` with an image, embedded as base64.
    ///
    /// `width` and `height` default to the configured image bullet size.
    pub fn set_image_level<P: AsRef<Path>>(
        &mut self,
        doc: &mut OdtDocument,
        level: u32,
        path: P,
        width: Option<&str>,
        height: Option<&str>,
    ) -> Result<()> {
        check_level(level)?;
        let data = read_image(path)?;

        let defaults = &doc.config().lists;
        let width = width.unwrap_or(&defaults.image_width).to_string();
        let height = height.unwrap_or(&defaults.image_height).to_string();

        let tree = doc.content_mut();
        let element = tree.create_element(LevelKind::Image.element_name());
        tree.set_attribute(element, "text:level", level.to_string());
        let binary = tree.create_element_with_text("office:binary-data", encode_base64(&data));
        tree.append_child(element, binary)?;

        self.install_level(doc, level, LevelKind::Image, element)?;
        let props = self
            .derived_props(doc, level)
            .with_image_width(width)
            .with_image_height(height);
        self.set_level_prop(doc, level, &props)
    }

    /// Write `props` as the level properties of an already defined level,
    /// replacing any previous properties element
    pub fn set_level_prop(
        &mut self,
        doc: &mut OdtDocument,
        level: u32,
        props: &ListLevelProp,
    ) -> Result<()> {
        check_level(level)?;
        let Some(entry) = self.levels.get_mut(&level) else {
            return Err(OdtError::UnknownLevel(level));
        };

        let indent = match &props.indent {
            Some(indent) => indent.clone(),
            None => format_cm(f64::from(level) * doc.config().lists.indent_step_cm),
        };

        let tree = doc.content_mut();
        let element = tree.create_element("style:list-level-properties");
        if let Some(align) = props.align {
            tree.set_attribute(element, "fo:text-align", align.as_str());
        }
        tree.set_attribute(element, "text:space-before", indent);
        if let Some(width) = &props.min_label_width {
            tree.set_attribute(element, "text:min-label-width", width.as_str());
        }
        if let Some(distance) = &props.min_label_distance {
            tree.set_attribute(element, "text:min-label-distance", distance.as_str());
        }
        if let Some(pos) = props.vertical_pos {
            tree.set_attribute(element, "style:vertical-pos", pos.as_str());
        }
        if let Some(width) = &props.image_width {
            tree.set_attribute(element, "fo:width", width.as_str());
        }
        if let Some(height) = &props.image_height {
            tree.set_attribute(element, "fo:height", height.as_str());
        }

        match entry.properties {
            Some(old) => tree.replace_child(old, element)?,
            None => tree.append_child(entry.element, element)?,
        }
        entry.properties = Some(element);
        Ok(())
    }

    /// A defined level
    pub fn level(&self, level: u32) -> Option<&ListLevel> {
        self.levels.get(&level)
    }

    /// All defined levels, lowest first
    pub fn levels(&self) -> impl Iterator<Item = (u32, &ListLevel)> {
        self.levels.iter().map(|(level, def)| (*level, def))
    }

    /// Put a new level element into the style, in place of the previous
    /// definition of the same level if there was one
    fn install_level(
        &mut self,
        doc: &mut OdtDocument,
        level: u32,
        kind: LevelKind,
        element: NodeId,
    ) -> Result<()> {
        let tree = doc.content_mut();
        match self.levels.get(&level) {
            Some(previous) => {
                log::debug!(
                    "Replacing level {} of list style {}",
                    level,
                    self.style_name()
                );
                tree.replace_child(previous.element, element)?;
            }
            None => tree.append_child(self.element(), element)?,
        }
        self.levels.insert(
            level,
            ListLevel {
                kind,
                element,
                properties: None,
            },
        );
        Ok(())
    }

    /// Indentation derived from the level number
    fn derived_props(&self, doc: &OdtDocument, level: u32) -> ListLevelProp {
        let lists = &doc.config().lists;
        ListLevelProp::new()
            .with_indent(format_cm(f64::from(level) * lists.indent_step_cm))
            .with_min_label_distance(format_cm(lists.min_label_distance_cm))
    }
}

impl AutoStyle for ListStyle {
    fn base(&self) -> &ContentAutoStyle {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ContentAutoStyle {
        &mut self.base
    }
}

fn check_level(level: u32) -> Result<()> {
    if level == 0 {
        return Err(OdtError::InvalidLevel(level));
    }
    Ok(())
}

/// Format a length in centimeters: `0.5cm`, `1cm`, `1.5cm`.
///
/// Rounded to four decimals with trailing zeros dropped.
fn format_cm(value: f64) -> String {
    let fixed = format!("{:.4}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0cm".to_string(),
        _ => format!("{}cm", trimmed),
    }
}
