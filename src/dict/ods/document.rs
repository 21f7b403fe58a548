//! In-memory tree of the spreadsheet content XML.
//!
//! The content entry is parsed once into a tree of [`Node`]s and queried by
//! qualified tag name (`table:table-cell`, `text:span`, ...) and attribute,
//! the way a DOM is queried with `getElementsByTagName`.

use std::slice;

use log::{debug, trace};
use quick_xml::{events::Event, Reader};

use crate::dict::types::error::{DictError, Result};

/// A node of the content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }
}

/// An element with its qualified name, attributes in document order and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(
        name: impl Into<String>,
        attributes: Vec<(String, String)>,
        children: Vec<Node>,
    ) -> Self {
        Self {
            name: name.into(),
            attributes,
            children,
        }
    }

    /// Qualified tag name, prefix included (e.g. `text:span`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unescaped value of the attribute with the given qualified name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Direct child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// All descendant elements named `tag`, in document order. `self` is not included.
    pub fn descendants<'a>(&'a self, tag: &'a str) -> Descendants<'a> {
        Descendants::new(&self.children, tag)
    }
}

/// Pre-order iterator over elements with a given tag name.
pub struct Descendants<'a> {
    tag: &'a str,
    stack: Vec<slice::Iter<'a, Node>>,
}

impl<'a> Descendants<'a> {
    fn new(nodes: &'a [Node], tag: &'a str) -> Self {
        Self {
            tag,
            stack: vec![nodes.iter()],
        }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(Node::Element(el)) => {
                    self.stack.push(el.children.iter());
                    if el.name == self.tag {
                        return Some(el);
                    }
                }
                Some(Node::Text(_)) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// The parsed content entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDocument {
    /// Top-level nodes; holds exactly the root element.
    nodes: Vec<Node>,
}

impl ContentDocument {
    /// Parses XML text into a tree.
    ///
    /// Text is kept verbatim (no trimming) after entity unescaping. Comments,
    /// processing instructions and the declaration are dropped.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(false);

        let mut open: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;
        let mut element_count = 0usize;

        loop {
            let event = reader.read_event().map_err(|e| {
                DictError::Xml(format!("{} at position {}", e, reader.buffer_position()))
            })?;

            match event {
                Event::Start(e) => {
                    open.push(Element::new(
                        qualified_name(e.name().as_ref()),
                        read_attributes(&e)?,
                        Vec::new(),
                    ));
                }
                Event::Empty(e) => {
                    element_count += 1;
                    let el = Element::new(
                        qualified_name(e.name().as_ref()),
                        read_attributes(&e)?,
                        Vec::new(),
                    );
                    attach(&mut open, &mut root, el)?;
                }
                Event::End(_) => {
                    element_count += 1;
                    let el = open.pop().ok_or_else(|| {
                        DictError::Xml("Unexpected closing tag".to_string())
                    })?;
                    attach(&mut open, &mut root, el)?;
                }
                Event::Text(t) => {
                    if let Some(parent) = open.last_mut() {
                        let text = t
                            .unescape()
                            .map_err(|e| DictError::Xml(format!("Failed to decode text: {}", e)))?;
                        parent.children.push(Node::Text(text.into_owned()));
                    }
                }
                Event::CData(c) => {
                    if let Some(parent) = open.last_mut() {
                        let text = String::from_utf8_lossy(&c.into_inner()).into_owned();
                        parent.children.push(Node::Text(text));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(el) = open.last() {
            return Err(DictError::Xml(format!("Unclosed element <{}>", el.name)));
        }
        let root = root.ok_or_else(|| DictError::Xml("No root element found".to_string()))?;
        debug!("Parsed content document: root <{}>, {} elements", root.name, element_count);

        Ok(Self {
            nodes: vec![Node::Element(root)],
        })
    }

    pub fn root(&self) -> Option<&Element> {
        self.nodes.iter().find_map(Node::as_element)
    }

    /// All elements named `tag` in document order, the root element included.
    pub fn elements_by_tag<'a>(&'a self, tag: &'a str) -> Descendants<'a> {
        Descendants::new(&self.nodes, tag)
    }
}

fn qualified_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn read_attributes(e: &quick_xml::events::BytesStart<'_>) -> Result<Vec<(String, String)>> {
    e.attributes()
        .map(|attr_result| {
            let attr = attr_result
                .map_err(|e| DictError::Xml(format!("Failed to parse XML attribute: {}", e)))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| DictError::Xml(format!("Failed to decode XML value: {}", e)))?
                .into_owned();
            Ok((key, value))
        })
        .collect()
}

/// Appends a completed element to its parent, or makes it the root.
fn attach(open: &mut [Element], root: &mut Option<Element>, el: Element) -> Result<()> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(Node::Element(el));
        return Ok(());
    }
    if root.is_some() {
        return Err(DictError::Xml(format!(
            "Multiple root elements: unexpected <{}>",
            el.name
        )));
    }
    trace!("Closed root element <{}>", el.name);
    *root = Some(el);
    Ok(())
}
