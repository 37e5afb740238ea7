//! The array protocol.
//!
//! [`ArrayMethods`] is implemented for every [`Receiver`], so anything that
//! can hand out a [`Container`](crate::Container) gets the full set of array
//! methods. Every method runs the receiver guard first and then drives the
//! container's primitives; nothing is cached between calls.
//!
//! ```
//! use nodeseq::{ArrayMethods, Element, Node, NodeList};
//!
//! let mut list = Node::from(NodeList::new());
//! list.push(["a", "b", "c"].map(Node::from)).unwrap();
//!
//! assert_eq!(list.join("-").unwrap(), "a-b-c");
//! assert_eq!(list.index_of("b", None).unwrap(), Some(1));
//! assert_eq!(list.reverse().unwrap().to_string(), "c\nb\na");
//!
//! // a single element is not a list
//! let mut single = Node::from(Element::tag("item"));
//! assert!(single.pop().is_err());
//! ```

mod mutate;
mod order;
mod query;

use std::cmp::Ordering;

use crate::coerce::LooseEq;
use crate::container::{ItemOf, Receiver, ValueOf};
use crate::error::Error;

/// What `splice` removed: one item on its own, otherwise all of them
/// (possibly none) in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Spliced<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Spliced<T> {
    pub fn len(&self) -> usize {
        match self {
            Spliced::One(_) => 1,
            Spliced::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Spliced::One(item) => vec![item],
            Spliced::Many(items) => items,
        }
    }
}

/// What `slice` produced: a plain array of items, or a new list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slice<L, T> {
    Array(Vec<T>),
    List(L),
}

pub trait ArrayMethods: Receiver {
    /// Append each value. Returns the new length.
    fn push<I>(&mut self, values: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = ValueOf<Self>>,
    {
        Ok(mutate::push(self.list_mut("push")?, values))
    }

    /// Remove the last slot. `None` when the list is empty or ends in a hole.
    fn pop(&mut self) -> Result<Option<ItemOf<Self>>, Error> {
        Ok(mutate::pop(self.list_mut("pop")?))
    }

    fn shift(&mut self) -> Result<Option<ItemOf<Self>>, Error> {
        Ok(mutate::shift(self.list_mut("shift")?))
    }

    /// Merge each value in front of the first slot. Values are taken one at
    /// a time, so `unshift([a, b])` leaves `b` first. Returns the new length.
    fn unshift<I>(&mut self, values: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = ValueOf<Self>>,
    {
        Ok(mutate::unshift(self.list_mut("unshift")?, values))
    }

    /// Remove up to `how_many` items at `index`, then insert `items` there.
    fn splice(
        &mut self,
        index: usize,
        how_many: usize,
        items: Vec<ValueOf<Self>>,
    ) -> Result<Spliced<ItemOf<Self>>, Error> {
        Ok(mutate::splice(self.list_mut("splice")?, index, how_many, items))
    }

    /// A copy of the list with each value appended.
    fn concat<I>(&self, values: I) -> Result<Self::List, Error>
    where
        I: IntoIterator<Item = ValueOf<Self>>,
    {
        Ok(query::concat(self.list("concat")?, values))
    }

    fn slice(
        &self,
        from: Option<f64>,
        to: Option<f64>,
        return_array: bool,
    ) -> Result<Slice<Self::List, ItemOf<Self>>, Error> {
        Ok(query::slice(self.list("slice")?, from, to, return_array))
    }

    /// Every item as a plain array, the result of calling `slice` with no arguments.
    fn to_array(&self) -> Result<Vec<ItemOf<Self>>, Error> {
        Ok(query::to_array(self.list("slice")?))
    }

    fn join(&self, separator: &str) -> Result<String, Error> {
        Ok(query::join(self.list("join")?, separator))
    }

    fn reverse(&self) -> Result<Self::List, Error> {
        Ok(order::reverse(self.list("reverse")?))
    }

    fn for_each<F>(&self, f: F) -> Result<(), Error>
    where
        F: FnMut(&ItemOf<Self>, usize, &Self::List),
    {
        query::for_each(self.list("forEach")?, f);
        Ok(())
    }

    fn map<F>(&self, f: F) -> Result<Self::List, Error>
    where
        F: FnMut(&ItemOf<Self>, usize, &Self::List) -> ValueOf<Self>,
    {
        Ok(query::map(self.list("map")?, f))
    }

    fn filter<F>(&self, f: F) -> Result<Self::List, Error>
    where
        F: FnMut(&ItemOf<Self>, usize, &Self::List) -> bool,
    {
        Ok(query::filter(self.list("filter")?, f))
    }

    fn every<F>(&self, f: F) -> Result<bool, Error>
    where
        F: FnMut(&ItemOf<Self>, usize, &Self::List) -> bool,
    {
        Ok(query::every(self.list("every")?, f))
    }

    fn some<F>(&self, f: F) -> Result<bool, Error>
    where
        F: FnMut(&ItemOf<Self>, usize, &Self::List) -> bool,
    {
        Ok(query::some(self.list("some")?, f))
    }

    /// A new list sorted by the strings the items coerce to.
    fn sort(&self) -> Result<Self::List, Error> {
        Ok(order::sort(self.list("sort")?))
    }

    fn sort_by<F>(&self, compare: F) -> Result<Self::List, Error>
    where
        F: FnMut(&ItemOf<Self>, &ItemOf<Self>) -> Ordering,
    {
        Ok(order::sort_by(self.list("sort")?, compare))
    }

    fn index_of<T>(&self, needle: &T, from: Option<f64>) -> Result<Option<usize>, Error>
    where
        T: ?Sized,
        ItemOf<Self>: LooseEq<T>,
    {
        let list = self.list("indexOf")?;
        Ok(order::index_of(list, |item| item.loose_eq(needle), from))
    }

    fn last_index_of<T>(&self, needle: &T, from: Option<f64>) -> Result<Option<usize>, Error>
    where
        T: ?Sized,
        ItemOf<Self>: LooseEq<T>,
    {
        let list = self.list("lastIndexOf")?;
        Ok(order::last_index_of(list, |item| item.loose_eq(needle), from))
    }
}

impl<R: Receiver + ?Sized> ArrayMethods for R {}

/// Names of the array methods, as callers of the dynamic surface spell them.
pub const METHOD_NAMES: [&str; 17] = [
    "push",
    "pop",
    "shift",
    "unshift",
    "splice",
    "concat",
    "slice",
    "join",
    "reverse",
    "forEach",
    "map",
    "filter",
    "every",
    "some",
    "sort",
    "indexOf",
    "lastIndexOf",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::NodeList;
    use crate::node::{Element, Node};

    fn abc() -> Node {
        Node::from(["a", "b", "c"].into_iter().map(Element::text).collect::<NodeList>())
    }

    #[test]
    fn guard_names_each_method() {
        let mut single = Node::from(Element::tag("x"));
        let name = |res: Result<(), Error>| res.unwrap_err().method().map(str::to_string);

        assert_eq!(name(single.push([]).map(drop)), Some("push".into()));
        assert_eq!(name(single.pop().map(drop)), Some("pop".into()));
        assert_eq!(name(single.shift().map(drop)), Some("shift".into()));
        assert_eq!(name(single.unshift([]).map(drop)), Some("unshift".into()));
        assert_eq!(name(single.splice(0, 0, vec![]).map(drop)), Some("splice".into()));
        assert_eq!(name(single.concat([]).map(drop)), Some("concat".into()));
        assert_eq!(name(single.slice(None, None, false).map(drop)), Some("slice".into()));
        assert_eq!(name(single.join(",").map(drop)), Some("join".into()));
        assert_eq!(name(single.reverse().map(drop)), Some("reverse".into()));
        assert_eq!(name(single.for_each(|_, _, _| {})), Some("forEach".into()));
        assert_eq!(name(single.map(|item, _, _| Node::from(item.clone())).map(drop)), Some("map".into()));
        assert_eq!(name(single.filter(|_, _, _| true).map(drop)), Some("filter".into()));
        assert_eq!(name(single.every(|_, _, _| true).map(drop)), Some("every".into()));
        assert_eq!(name(single.some(|_, _, _| true).map(drop)), Some("some".into()));
        assert_eq!(name(single.sort().map(drop)), Some("sort".into()));
        assert_eq!(name(single.index_of("x", None).map(drop)), Some("indexOf".into()));
        assert_eq!(name(single.last_index_of("x", None).map(drop)), Some("lastIndexOf".into()));
    }

    #[test]
    fn failed_guard_leaves_receiver_untouched() {
        let mut single = Node::from(Element::text("a"));
        assert!(single.push([Node::from("b")]).is_err());
        assert_eq!(single, Node::from("a"));
    }

    #[test]
    fn empty_list_passes_guard() {
        let mut empty = Node::list();
        assert_eq!(empty.pop(), Ok(None));
        assert_eq!(empty.join(","), Ok(String::new()));
    }

    #[test]
    fn methods_work_on_bare_lists() {
        let mut list: NodeList = ["a"].into_iter().map(Element::text).collect();
        assert_eq!(list.push([Node::from("b")]), Ok(2));
        assert_eq!(list.join("+"), Ok("a+b".to_string()));
    }

    #[test]
    fn worked_example() {
        let list = abc();
        assert_eq!(list.join("-").unwrap(), "a-b-c");
        assert_eq!(list.reverse().unwrap().elements().map(Element::string_value).collect::<String>(), "cba");
        assert_eq!(list.index_of("b", None).unwrap(), Some(1));

        let filtered = list.filter(|item, _, _| !item.loose_eq("b")).unwrap();
        assert_eq!(filtered, ["a", "c"].into_iter().map(Element::text).collect::<NodeList>());
    }

    #[test]
    fn spliced_helpers() {
        assert_eq!(Spliced::One(1).len(), 1);
        assert!(Spliced::<u8>::Many(vec![]).is_empty());
        assert_eq!(Spliced::Many(vec![1, 2]).into_vec(), vec![1, 2]);
    }
}
