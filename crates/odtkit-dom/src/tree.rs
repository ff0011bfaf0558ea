//! Arena-backed element tree
//!
//! Every node of a document lives in one `Vec` owned by [`XmlTree`].
//! Handles ([`NodeId`]) stay valid for the lifetime of the tree, even when
//! the node they point to is detached, moved or replaced. Detached nodes are
//! simply not reachable from the root and are skipped by serialization.
//!
//! A `NodeId` is only meaningful for the tree that created it. Lookups of a
//! handle this tree never issued return `None` or an empty result, and
//! insertions fail with [`DomError::UnknownNode`]; a handle from another tree
//! that happens to be in range addresses an unrelated node.

use crate::error::{DomError, Result};

/// Handle to a node stored in an [`XmlTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

/// Borrowed view of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    /// An element with its qualified name and attributes in insertion order
    Element {
        name: &'a str,
        attributes: &'a [(String, String)],
    },
    /// A text node
    Text(&'a str),
}

#[derive(Debug, Clone)]
enum NodeKind {
    Element {
        name: String,
        attributes: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An XML document held as an arena of nodes
#[derive(Debug, Clone)]
pub struct XmlTree {
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl XmlTree {
    /// Create a tree containing only a root element
    pub fn new(root_name: impl Into<String>) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        tree.root = tree.create_element(root_name);
        tree
    }

    /// The root element
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes ever created in this tree, attached or not
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds at least its root
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `id` was issued by this tree
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    fn data(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.0)
    }

    fn data_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id.0)
    }

    fn check(&self, id: NodeId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(DomError::UnknownNode(id))
        }
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, name: impl Into<String>) -> NodeId {
        self.push(NodeKind::Element {
            name: name.into(),
            attributes: Vec::new(),
        })
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeKind::Text(text.into()))
    }

    /// Create a detached element holding a single text child
    pub fn create_element_with_text(
        &mut self,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> NodeId {
        let element = self.create_element(name);
        let text = self.create_text(text);
        self.nodes[text.0].parent = Some(element);
        self.nodes[element.0].children.push(text);
        element
    }

    /// Borrow a node
    pub fn node(&self, id: NodeId) -> Option<Node<'_>> {
        let node = match &self.data(id)?.kind {
            NodeKind::Element { name, attributes } => Node::Element { name, attributes },
            NodeKind::Text(text) => Node::Text(text),
        };
        Some(node)
    }

    /// Whether the node is an element
    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(
            self.data(id).map(|d| &d.kind),
            Some(NodeKind::Element { .. })
        )
    }

    /// Qualified name of an element, `None` for text nodes
    pub fn name(&self, id: NodeId) -> Option<&str> {
        match &self.data(id)?.kind {
            NodeKind::Element { name, .. } => Some(name),
            NodeKind::Text(_) => None,
        }
    }

    /// Content of a text node, `None` for elements
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.data(id)?.kind {
            NodeKind::Text(text) => Some(text),
            NodeKind::Element { .. } => None,
        }
    }

    /// Concatenated text of the node and all of its descendants
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(data) = self.data(id) else {
            return;
        };
        match &data.kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element { .. } => {
                for &child in &data.children {
                    self.collect_text(child, out);
                }
            }
        }
    }

    /// Set an attribute, overwriting any previous value in place.
    ///
    /// Has no effect on text nodes or handles this tree never issued.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        let Some(data) = self.data_mut(id) else {
            return;
        };
        if let NodeKind::Element { attributes, .. } = &mut data.kind {
            let value = value.into();
            match attributes.iter_mut().find(|(key, _)| key == name) {
                Some(existing) => existing.1 = value,
                None => attributes.push((name.to_string(), value)),
            }
        }
    }

    /// Get an attribute value
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.attributes(id)
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All attributes of an element in insertion order
    pub fn attributes(&self, id: NodeId) -> &[(String, String)] {
        match self.data(id).map(|d| &d.kind) {
            Some(NodeKind::Element { attributes, .. }) => attributes,
            _ => &[],
        }
    }

    /// Remove an attribute, returning its previous value
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Option<String> {
        match &mut self.data_mut(id)?.kind {
            NodeKind::Element { attributes, .. } => {
                let pos = attributes.iter().position(|(key, _)| key == name)?;
                Some(attributes.remove(pos).1)
            }
            NodeKind::Text(_) => None,
        }
    }

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.data(id)?.parent
    }

    /// Children of a node in document order
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.data(id).map_or(&[], |d| d.children.as_slice())
    }

    /// Element children only
    pub fn child_elements(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(|&child| self.is_element(child))
    }

    /// Whether `ancestor` is `id` itself or one of its ancestors
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Whether the node is reachable from the root
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.is_ancestor_or_self(self.root, id)
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// `child` is detached from its previous parent first, so appending an
    /// already inserted node moves it.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check(parent)?;
        self.check(child)?;
        if !self.is_element(parent) || self.is_ancestor_or_self(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    /// Put `new` where `old` currently is. `old` ends up detached.
    pub fn replace_child(&mut self, old: NodeId, new: NodeId) -> Result<()> {
        self.check(old)?;
        self.check(new)?;
        if old == new {
            return Ok(());
        }
        let parent = self.parent(old).ok_or(DomError::NotAChild(old))?;
        if self.is_ancestor_or_self(new, parent) {
            return Err(DomError::HierarchyRequest { parent, child: new });
        }
        // Detaching first keeps the position right when `new` is a sibling
        self.detach(new);
        let siblings = &mut self.nodes[parent.0].children;
        let pos = siblings
            .iter()
            .position(|&c| c == old)
            .ok_or(DomError::NotAChild(old))?;
        siblings[pos] = new;
        self.nodes[new.0].parent = Some(parent);
        self.nodes[old.0].parent = None;
        Ok(())
    }

    /// Remove a node from its parent. The subtree stays intact.
    pub fn detach(&mut self, id: NodeId) {
        let Some(data) = self.data_mut(id) else {
            return;
        };
        if let Some(parent) = data.parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != id);
        }
    }

    /// All descendants of `id` in document order, excluding `id`
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    /// Descendant elements of `id` with the given qualified name
    pub fn descendants_named(&self, id: NodeId, name: &str) -> Vec<NodeId> {
        self.descendants(id)
            .into_iter()
            .filter(|&node| self.name(node) == Some(name))
            .collect()
    }

    /// First element with the given qualified name, root included
    pub fn find_first(&self, name: &str) -> Option<NodeId> {
        if self.name(self.root) == Some(name) {
            return Some(self.root);
        }
        self.descendants(self.root)
            .into_iter()
            .find(|&node| self.name(node) == Some(name))
    }
}
