//! Named values used by styles and inline content
//!
//! Bullet characters are plain `char`s because ODF stores them verbatim in
//! `text:bullet-char`; everything else is an enum that knows its ODF token.

use std::fmt;
use std::str::FromStr;

use crate::error::OdtError;

/// U+2022 BULLET
pub const BULLET: char = '\u{2022}';
/// U+25CF BLACK CIRCLE
pub const BLACK_CIRCLE: char = '\u{25CF}';
/// U+2714 HEAVY CHECK MARK
pub const CHECK_MARK: char = '\u{2714}';
/// U+2794 HEAVY WIDE-HEADED RIGHTWARDS ARROW
pub const RIGHT_ARROW: char = '\u{2794}';
/// U+27A2 THREE-D TOP-LIGHTED RIGHTWARDS ARROWHEAD
pub const RIGHT_ARROWHEAD: char = '\u{27A2}';

/// The only characters accepted by `ListStyle::set_bullet_level`
pub const BULLET_CHARS: [char; 5] = [BULLET, BLACK_CIRCLE, CHECK_MARK, RIGHT_ARROW, RIGHT_ARROWHEAD];

/// Whether `c` is one of [`BULLET_CHARS`]
pub fn is_bullet_char(c: char) -> bool {
    BULLET_CHARS.contains(&c)
}

/// Horizontal alignment (`fo:text-align`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
    Justify,
    Start,
    End,
}

impl Alignment {
    /// ODF attribute value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::Justify => "justify",
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// Vertical position of a list label (`style:vertical-pos`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalPos {
    Top,
    Middle,
    Bottom,
    FromTop,
    Below,
}

impl VerticalPos {
    /// ODF attribute value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
            Self::FromTop => "from-top",
            Self::Below => "below",
        }
    }
}

/// Class of a `text:note`
///
/// Values other than footnote and endnote are written through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NoteClass {
    /// Rendered at the bottom of the page
    #[default]
    Footnote,
    /// Rendered at the end of the document
    Endnote,
    /// Any other class token
    Other(String),
}

impl NoteClass {
    /// ODF attribute value
    pub fn as_str(&self) -> &str {
        match self {
            Self::Footnote => "footnote",
            Self::Endnote => "endnote",
            Self::Other(class) => class,
        }
    }
}

impl From<&str> for NoteClass {
    fn from(value: &str) -> Self {
        match value {
            "footnote" => Self::Footnote,
            "endnote" => Self::Endnote,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Where ruby text sits relative to its base (`style:ruby-position`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RubyPosition {
    Above,
    Below,
}

impl RubyPosition {
    /// ODF attribute value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Above => "above",
            Self::Below => "below",
        }
    }
}

impl FromStr for RubyPosition {
    type Err = OdtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "above" => Ok(Self::Above),
            "below" => Ok(Self::Below),
            _ => Err(OdtError::InvalidRubyPosition(s.to_string())),
        }
    }
}

impl fmt::Display for RubyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alignment of ruby text over its base (`style:ruby-align`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RubyAlign {
    Left,
    Right,
    Center,
    DistributeLetter,
    DistributeSpace,
}

impl RubyAlign {
    /// ODF attribute value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::DistributeLetter => "distribute-letter",
            Self::DistributeSpace => "distribute-space",
        }
    }
}

impl FromStr for RubyAlign {
    type Err = OdtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" => Ok(Self::Center),
            "distribute-letter" => Ok(Self::DistributeLetter),
            "distribute-space" => Ok(Self::DistributeSpace),
            _ => Err(OdtError::InvalidRubyAlign(s.to_string())),
        }
    }
}

impl fmt::Display for RubyAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement of a graphic relative to text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicPosition {
    /// Behind the text
    Background,
    /// In front of the text, positioned relative to the paragraph
    Paragraph,
}

impl GraphicPosition {
    /// Token used in generated style names
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Paragraph => "paragraph",
        }
    }
}
