//! nodeseq - the array protocol for XML node lists.
//!
//! A [`NodeList`] only knows a handful of primitives: its length, reading,
//! writing and removing a slot, and turning itself into markup. This crate
//! builds the familiar array methods (`push`, `splice`, `slice`, `map`,
//! `sort`, `indexOf`, ...) on top of exactly those primitives, keeping the
//! quirks scripts rely on: sparse slots are skipped, negative search offsets
//! count from the end, `splice` unwraps a single removed node, and `slice`
//! returns either an array or a list depending on how it was called.
//!
//! # Quick Start
//!
//! ```
//! use nodeseq::{ArrayMethods, Element, Node, NodeList, Spliced};
//!
//! let mut list = Node::from(NodeList::new());
//! list.push([
//!     Node::from(Element::tag("li").with_text("one")),
//!     Node::from(Element::tag("li").with_text("two")),
//!     Node::from(Element::tag("li").with_text("three")),
//! ])
//! .unwrap();
//!
//! let removed = list.splice(1, 1, vec![]).unwrap();
//! assert_eq!(removed, Spliced::One(Element::tag("li").with_text("two")));
//! assert_eq!(list.join("").unwrap(), "<li>one</li><li>three</li>");
//! ```
//!
//! Callers that only know method names at runtime use a [`MethodTable`]:
//!
//! ```
//! use nodeseq::{Element, MethodTable, NodeList, Value};
//!
//! let table = MethodTable::standard();
//! let mut list = Value::from(["b", "a"].into_iter().map(Element::text).collect::<NodeList>());
//!
//! let sorted = table.call(&mut list, "sort", &[]).unwrap();
//! let joined = table.call(&mut sorted.clone(), "join", &[Value::from("+")]).unwrap();
//! assert_eq!(joined, Value::from("a+b"));
//! ```

pub mod coerce;
pub mod container;
pub mod error;
pub mod list;
pub mod methods;
pub mod node;
pub mod protocol;
pub mod value;

pub use coerce::LooseEq;
pub use container::{Container, NodeItem, Receiver};
pub use error::Error;
pub use list::NodeList;
pub use methods::{Method, MethodTable};
pub use node::{Element, Node, Tag};
pub use protocol::{ArrayMethods, Slice, Spliced};
pub use value::{Callback, Value};
