//! The primitive bridge.
//!
//! Every array method is written against these traits only. A container
//! exposes index primitives plus structural merging, and a receiver decides
//! whether it is list-shaped enough to have array methods called on it.

use crate::error::Error;

/// Items stored in a container. The array methods need nothing from an item
/// beyond its markup and the string it coerces to.
pub trait NodeItem: Clone {
    fn to_xml_string(&self) -> String;

    /// The string used for default sort ordering.
    fn to_string_value(&self) -> String;
}

/// An ordered, 0-based, possibly sparse container.
///
/// `Value` is what can be written into a slot: it may expand to several
/// items (writing a list into one slot splices the list in) and two values
/// merge structurally with [`Container::merge`].
pub trait Container: Sized {
    type Item: NodeItem;
    type Value: From<Self::Item>;

    fn empty() -> Self;

    /// Number of slots, holes included.
    fn length(&self) -> usize;

    /// Whether `index` holds an item. Holes and out-of-range indices don't.
    fn has(&self, index: usize) -> bool;

    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Write `value` at `index`. Writing past the end fills the gap with holes.
    fn set(&mut self, index: usize, value: Self::Value);

    /// Remove the slot at `index`, shifting later slots left.
    fn remove(&mut self, index: usize) -> Option<Self::Item>;

    /// The whole container as markup. The array methods never call this;
    /// it is the bridge's text form for callers that print a container.
    fn serialize(&self) -> String;

    /// Combine two values into one, `left` first.
    fn merge(left: Self::Value, right: Self::Value) -> Self::Value;

    /// A value that writes a single hole. Merging in front of it lets an
    /// insertion at a hole keep the hole instead of overwriting it.
    fn hole() -> Self::Value;

    /// A structural copy with holes dropped.
    fn snapshot(&self) -> Self;

    /// Append `value` structurally.
    fn concat(&mut self, value: Self::Value) {
        let end = self.length();
        self.set(end, value);
    }
}

/// Something array methods can be called on.
///
/// The guard is what turns "called on the wrong kind of node" into an
/// [`Error::ReceiverType`] naming the method.
pub trait Receiver {
    type List: Container;

    fn list(&self, method: &str) -> Result<&Self::List, Error>;

    fn list_mut(&mut self, method: &str) -> Result<&mut Self::List, Error>;
}

pub type ItemOf<R> = <<R as Receiver>::List as Container>::Item;
pub type ValueOf<R> = <<R as Receiver>::List as Container>::Value;
