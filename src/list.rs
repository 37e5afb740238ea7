//! Node list storage.
//!
//! A [`NodeList`] is a run of slots, each either an element or a hole. Most
//! lists are short (query results, a handful of children) so slots live
//! inline until they outgrow a small buffer.

use std::fmt;

use smallvec::SmallVec;

use crate::container::{Container, NodeItem, Receiver};
use crate::error::Error;
use crate::node::{Element, Node};

const INLINE_SLOTS: usize = 4;

type Slots = SmallVec<[Option<Element>; INLINE_SLOTS]>;

/// An ordered list of elements that may contain holes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeList {
    slots: Slots,
}

impl NodeList {
    pub fn new() -> NodeList {
        return NodeList { slots: SmallVec::new() };
    }

    /// Number of slots, holes included.
    pub fn len(&self) -> usize {
        return self.slots.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.slots.is_empty();
    }

    /// Every slot in order, `None` for holes.
    pub fn slots(&self) -> impl Iterator<Item = Option<&Element>> {
        return self.slots.iter().map(Option::as_ref);
    }

    /// The elements in order, skipping holes.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        return self.slots.iter().flatten();
    }

    pub fn holes(&self) -> usize {
        return self.slots.iter().filter(|slot| slot.is_none()).count();
    }

    /// The element of a list with exactly one slot.
    pub fn only(&self) -> Option<&Element> {
        return match self.slots.as_slice() {
            [Some(element)] => Some(element),
            _ => None,
        };
    }

    /// Markup of every element, one per line.
    pub fn to_xml_string(&self) -> String {
        return self
            .elements()
            .map(Element::to_xml_string)
            .collect::<Vec<_>>()
            .join("\n");
    }
}

impl NodeItem for Element {
    fn to_xml_string(&self) -> String {
        return Element::to_xml_string(self);
    }

    fn to_string_value(&self) -> String {
        return self.string_value();
    }
}

impl Container for NodeList {
    type Item = Element;
    type Value = Node;

    fn empty() -> NodeList {
        return NodeList::new();
    }

    fn length(&self) -> usize {
        return self.slots.len();
    }

    fn has(&self, index: usize) -> bool {
        return matches!(self.slots.get(index), Some(Some(_)));
    }

    fn get(&self, index: usize) -> Option<&Element> {
        return self.slots.get(index).and_then(Option::as_ref);
    }

    fn set(&mut self, index: usize, value: Node) {
        let replacement = match value {
            Node::Single(element) => {
                let mut slots = Slots::new();
                slots.push(Some(element));
                slots
            }
            Node::List(list) => list.slots,
        };
        tracing::trace!(index, len = self.slots.len(), width = replacement.len(), "set slot");

        if index < self.slots.len() {
            self.slots.remove(index);
            self.slots.insert_many(index, replacement);
        } else {
            self.slots.resize(index, None);
            self.slots.extend(replacement);
        }
    }

    fn remove(&mut self, index: usize) -> Option<Element> {
        if index >= self.slots.len() {
            return None;
        }
        tracing::trace!(index, len = self.slots.len(), "remove slot");
        return self.slots.remove(index);
    }

    fn serialize(&self) -> String {
        return self.to_xml_string();
    }

    fn merge(left: Node, right: Node) -> Node {
        let mut merged = NodeList::from(left);
        merged.concat(right);
        return Node::List(merged);
    }

    fn hole() -> Node {
        return Node::List(std::iter::once(None::<Element>).collect());
    }

    fn snapshot(&self) -> NodeList {
        return self.elements().cloned().collect();
    }
}

impl Receiver for NodeList {
    type List = NodeList;

    fn list(&self, _method: &str) -> Result<&NodeList, Error> {
        return Ok(self);
    }

    fn list_mut(&mut self, _method: &str) -> Result<&mut NodeList, Error> {
        return Ok(self);
    }
}

// An empty list is always list-shaped. A single element never is, even though
// it reports a length of one.
impl Receiver for Node {
    type List = NodeList;

    fn list(&self, method: &str) -> Result<&NodeList, Error> {
        return match self {
            Node::List(list) => Ok(list),
            Node::Single(_) => Err(Error::receiver(method)),
        };
    }

    fn list_mut(&mut self, method: &str) -> Result<&mut NodeList, Error> {
        return match self {
            Node::List(list) => Ok(list),
            Node::Single(_) => Err(Error::receiver(method)),
        };
    }
}

impl From<Node> for NodeList {
    fn from(node: Node) -> NodeList {
        return match node {
            Node::Single(element) => std::iter::once(element).collect(),
            Node::List(list) => list,
        };
    }
}

impl FromIterator<Element> for NodeList {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> NodeList {
        return NodeList { slots: iter.into_iter().map(Some).collect() };
    }
}

impl FromIterator<Option<Element>> for NodeList {
    fn from_iter<I: IntoIterator<Item = Option<Element>>>(iter: I) -> NodeList {
        return NodeList { slots: iter.into_iter().collect() };
    }
}

impl fmt::Display for NodeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(&self.serialize());
    }
}
