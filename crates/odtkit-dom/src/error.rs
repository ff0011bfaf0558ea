//! Error types for tree operations

use thiserror::Error;

use crate::tree::NodeId;

/// Errors that can occur while mutating or serializing an [`XmlTree`](crate::XmlTree)
#[derive(Error, Debug)]
pub enum DomError {
    /// The requested insertion would make a node its own ancestor, or
    /// would give a text node children
    #[error("Hierarchy request error: cannot insert {child:?} under {parent:?}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    /// The node is not a child of any element
    #[error("Node {0:?} is not a child of any element")]
    NotAChild(NodeId),

    /// The handle was not issued by this tree
    #[error("Node {0:?} does not belong to this tree")]
    UnknownNode(NodeId),

    /// Error writing serialized output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised by the XML writer
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Result type for tree operations
pub type Result<T> = std::result::Result<T, DomError>;
