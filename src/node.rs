//! Elements and the single-or-list node variant.
//!
//! An [`Element`] is one XML item: either a text node or a tag with ordered
//! attributes and children. A [`Node`] is what the array methods accept and
//! hand back: a single element or a whole [`NodeList`]. Keeping the two
//! shapes apart in the type means the list guard never has to inspect a value
//! at runtime to find out what it is.

use std::fmt;

use crate::list::NodeList;

/// One XML item.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Text(String),
    Tag(Tag),
}

/// An XML tag. Attributes keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn text(content: impl Into<String>) -> Element {
        Element::Text(content.into())
    }

    pub fn tag(name: impl Into<String>) -> Element {
        Element::Tag(Tag { name: name.into(), ..Tag::default() })
    }

    /// Set an attribute, replacing an existing one with the same name.
    /// Text nodes have no attributes and are returned unchanged.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Element {
        if let Element::Tag(tag) = &mut self {
            let (name, value) = (name.into(), value.into());
            match tag.attributes.iter_mut().find(|(n, _)| *n == name) {
                Some(slot) => slot.1 = value,
                None => tag.attributes.push((name, value)),
            }
        }
        self
    }

    /// Append a child. Text nodes cannot hold children and are returned unchanged.
    pub fn with_child(mut self, child: impl Into<Element>) -> Element {
        if let Element::Tag(tag) = &mut self {
            tag.children.push(child.into());
        }
        self
    }

    pub fn with_text(self, content: impl Into<String>) -> Element {
        self.with_child(Element::text(content))
    }

    /// Tag name, `None` for text nodes.
    pub fn name(&self) -> Option<&str> {
        match self {
            Element::Tag(tag) => Some(&tag.name),
            Element::Text(_) => None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            Element::Tag(tag) => tag
                .attributes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            Element::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[Element] {
        match self {
            Element::Tag(tag) => &tag.children,
            Element::Text(_) => &[],
        }
    }

    /// Text nodes, and tags without tag children, have simple content.
    pub fn has_simple_content(&self) -> bool {
        match self {
            Element::Text(_) => true,
            Element::Tag(tag) => tag.children.iter().all(|c| matches!(c, Element::Text(_))),
        }
    }

    /// The string an element coerces to: its text for simple content,
    /// its markup otherwise.
    pub fn string_value(&self) -> String {
        match self {
            Element::Text(content) => content.clone(),
            Element::Tag(tag) if self.has_simple_content() => {
                let mut out = String::new();
                for child in &tag.children {
                    if let Element::Text(content) = child {
                        out.push_str(content);
                    }
                }
                out
            }
            Element::Tag(_) => self.to_xml_string(),
        }
    }

    pub fn to_xml_string(&self) -> String {
        let mut out = String::new();
        self.write_xml(&mut out);
        out
    }

    fn write_xml(&self, out: &mut String) {
        match self {
            Element::Text(content) => escape_into(out, content, false),
            Element::Tag(tag) => {
                out.push('<');
                out.push_str(&tag.name);
                for (name, value) in &tag.attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_into(out, value, true);
                    out.push('"');
                }
                if tag.children.is_empty() {
                    out.push_str("/>");
                    return;
                }
                out.push('>');
                for child in &tag.children {
                    child.write_xml(out);
                }
                out.push_str("</");
                out.push_str(&tag.name);
                out.push('>');
            }
        }
    }
}

fn escape_into(out: &mut String, raw: &str, attribute: bool) {
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

impl From<&str> for Element {
    fn from(content: &str) -> Element {
        Element::text(content)
    }
}

impl From<String> for Element {
    fn from(content: String) -> Element {
        Element::Text(content)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml_string())
    }
}

/// A single element or a list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    Single(Element),
    List(NodeList),
}

impl Node {
    /// An empty list node.
    pub fn list() -> Node {
        Node::List(NodeList::new())
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    /// A single element always has length one.
    pub fn length(&self) -> usize {
        match self {
            Node::Single(_) => 1,
            Node::List(list) => list.len(),
        }
    }

    pub fn as_list(&self) -> Option<&NodeList> {
        match self {
            Node::List(list) => Some(list),
            Node::Single(_) => None,
        }
    }

    pub fn into_list(self) -> NodeList {
        NodeList::from(self)
    }

    /// Markup for the element, or the list's elements separated by newlines.
    pub fn to_xml_string(&self) -> String {
        match self {
            Node::Single(element) => element.to_xml_string(),
            Node::List(list) => list.to_xml_string(),
        }
    }

    /// The string a node coerces to. A one-element list coerces like its element.
    pub fn string_value(&self) -> String {
        match self {
            Node::Single(element) => element.string_value(),
            Node::List(list) => match list.only() {
                Some(element) => element.string_value(),
                None => list.to_xml_string(),
            },
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::list()
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Node {
        Node::Single(element)
    }
}

impl From<NodeList> for Node {
    fn from(list: NodeList) -> Node {
        Node::List(list)
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Node {
        Node::Single(Element::text(content))
    }
}

impl From<String> for Node {
    fn from(content: String) -> Node {
        Node::Single(Element::Text(content))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml_string())
    }
}
