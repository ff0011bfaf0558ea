//! # odtkit
//!
//! Assemble OpenDocument Text (ODT) files.
//!
//! This crate provides functionality to:
//! - Build paragraphs with text runs, links, images, bookmarks, notes and
//!   ruby annotations
//! - Build nested lists
//! - Define automatic styles (text, paragraph, graphic, list, ruby)
//! - Package the result as an `.odt` file
//!
//! Everything is built against an [`OdtDocument`], passed as
//! `&mut OdtDocument` to every constructor and mutating call.
//!
//! ## Example
//!
//! ```no_run
//! use odtkit::{ListStyle, OdtDocument, OdtList, Paragraph, TextStyle};
//! use odtkit::constants::BULLET;
//!
//! let mut doc = OdtDocument::new()?;
//!
//! let bold = TextStyle::new(&mut doc, "")?;
//! bold.set_bold(&mut doc);
//!
//! let p = Paragraph::new(&mut doc)?;
//! p.add_text(&mut doc, "Shopping list", Some(&bold))?;
//!
//! let mut bullets = ListStyle::new(&mut doc, "")?;
//! bullets.set_bullet_level(&mut doc, 1, BULLET, "", "", None)?;
//! let list = OdtList::with_items(&mut doc, &["Milk", "Bread"])?;
//! list.set_style(&mut doc, &bullets);
//!
//! doc.save("shopping.odt")?;
//! # Ok::<(), odtkit::OdtError>(())
//! ```

pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod image;
pub mod list;
pub mod manifest;
pub mod package;
pub mod paragraph;
pub mod style;

pub use config::OdtConfig;
pub use constants::{Alignment, GraphicPosition, NoteClass, RubyAlign, RubyPosition, VerticalPos};
pub use document::{OdtDocument, ODF_VERSION};
pub use error::{OdtError, Result};
pub use image::{AnchorType, ImageOptions};
pub use list::OdtList;
pub use manifest::{FileManifest, ManifestEntry, MANIFEST_PATH};
pub use package::OdtPackage;
pub use paragraph::Paragraph;
pub use style::graphic::GraphicStyle;
pub use style::list::{ListLevelProp, ListStyle, NumberFormat};
pub use style::ruby::RubyStyle;
pub use style::text::{ParagraphStyle, TextStyle};
pub use style::{AutoStyle, ContentAutoStyle};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
