//! # odtkit-dom
//!
//! A small, arena-backed XML element tree.
//!
//! Nodes live in a single [`XmlTree`] and are addressed by copyable
//! [`NodeId`] handles, so callers can keep a handle to an element after it
//! has been inserted and keep mutating it in place. Serialization goes
//! through `quick_xml::Writer`.
//!
//! ## Example
//!
//! ```
//! use odtkit_dom::XmlTree;
//!
//! let mut tree = XmlTree::new("text:p");
//! let root = tree.root();
//! let span = tree.create_element_with_text("text:span", "Hello");
//! tree.set_attribute(span, "text:style-name", "T1");
//! tree.append_child(root, span)?;
//!
//! assert_eq!(
//!     tree.subtree_to_string(root)?,
//!     r#"<text:p><text:span text:style-name="T1">Hello</text:span></text:p>"#
//! );
//! # Ok::<(), odtkit_dom::DomError>(())
//! ```

pub mod error;
pub mod tree;
pub mod writer;

pub use error::{DomError, Result};
pub use tree::{Node, NodeId, XmlTree};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
