//! XML serialization
//!
//! Only nodes reachable from the starting node are written. Childless
//! elements use the empty-element form; text and attribute values are
//! escaped by quick-xml.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{DomError, Result};
use crate::tree::{Node, NodeId, XmlTree};

impl XmlTree {
    /// Write the whole tree, preceded by an XML declaration
    pub fn write_document<W: Write>(&self, out: W) -> Result<()> {
        let mut writer = Writer::new(out);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        write_node(self, &mut writer, self.root())
    }

    /// Serialize the whole tree, declaration included
    pub fn to_xml_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_document(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Serialize one node and its descendants, without declaration
    pub fn subtree_to_string(&self, id: NodeId) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        write_node(self, &mut writer, id)?;
        Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
    }
}

fn write_node<W: Write>(tree: &XmlTree, writer: &mut Writer<W>, id: NodeId) -> Result<()> {
    match tree.node(id).ok_or(DomError::UnknownNode(id))? {
        Node::Text(text) => {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        Node::Element { name, attributes } => {
            let mut start = BytesStart::new(name);
            for (key, value) in attributes {
                start.push_attribute((key.as_str(), value.as_str()));
            }

            let children = tree.children(id);
            if children.is_empty() {
                writer.write_event(Event::Empty(start))?;
            } else {
                writer.write_event(Event::Start(start))?;
                for &child in children {
                    write_node(tree, writer, child)?;
                }
                writer.write_event(Event::End(BytesEnd::new(name)))?;
            }
        }
    }
    Ok(())
}
