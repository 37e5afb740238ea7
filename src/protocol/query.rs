//! Copying and iterating methods. None of these touch the receiver.

use crate::container::{Container, NodeItem};

use super::Slice;

pub(crate) fn concat<C: Container>(list: &C, values: impl IntoIterator<Item = C::Value>) -> C {
    let mut res = list.snapshot();
    for value in values {
        res.concat(value);
    }
    res
}

pub(crate) fn slice<C: Container>(
    list: &C,
    from: Option<f64>,
    to: Option<f64>,
    return_array: bool,
) -> Slice<C, C::Item> {
    let items = slice_items(list, from, to);
    if return_array {
        return Slice::Array(items);
    }
    let mut sliced = C::empty();
    for item in items {
        sliced.concat(item.into());
    }
    Slice::List(sliced)
}

/// Absent or NaN bounds default to the whole list. The range covers the
/// integer indices `from <= i < to` of a hole-free copy, clamped to its bounds.
fn slice_items<C: Container>(list: &C, from: Option<f64>, to: Option<f64>) -> Vec<C::Item> {
    let from = from.filter(|n| !n.is_nan()).unwrap_or(0.0);
    let to = to.filter(|n| !n.is_nan()).unwrap_or(list.length() as f64);

    let source = list.snapshot();
    let start = clamp_bound(from, source.length());
    let end = clamp_bound(to, source.length());
    (start..end).filter_map(|i| source.get(i).cloned()).collect()
}

fn clamp_bound(bound: f64, len: usize) -> usize {
    if bound <= 0.0 {
        0
    } else if bound >= len as f64 {
        len
    } else {
        bound.ceil() as usize
    }
}

pub(crate) fn to_array<C: Container>(list: &C) -> Vec<C::Item> {
    slice_items(list, None, None)
}

pub(crate) fn join<C: Container>(list: &C, separator: &str) -> String {
    to_array(list)
        .iter()
        .map(NodeItem::to_xml_string)
        .collect::<Vec<_>>()
        .join(separator)
}

pub(crate) fn for_each<C, F>(list: &C, mut f: F)
where
    C: Container,
    F: FnMut(&C::Item, usize, &C),
{
    let len = list.length();
    for i in 0..len {
        if !list.has(i) {
            continue;
        }
        if let Some(item) = list.get(i) {
            f(item, i, list);
        }
    }
}

/// Results keep their source index, so holes in the source stay holes.
pub(crate) fn map<C, F>(list: &C, mut f: F) -> C
where
    C: Container,
    F: FnMut(&C::Item, usize, &C) -> C::Value,
{
    let mut res = C::empty();
    for_each(list, |item, i, list| res.set(i, f(item, i, list)));
    res
}

pub(crate) fn filter<C, F>(list: &C, mut f: F) -> C
where
    C: Container,
    F: FnMut(&C::Item, usize, &C) -> bool,
{
    let mut res = C::empty();
    for_each(list, |item, i, list| {
        if f(item, i, list) {
            res.concat(item.clone().into());
        }
    });
    res
}

pub(crate) fn every<C, F>(list: &C, mut f: F) -> bool
where
    C: Container,
    F: FnMut(&C::Item, usize, &C) -> bool,
{
    let len = list.length();
    (0..len).all(|i| match list.get(i) {
        Some(item) if list.has(i) => f(item, i, list),
        _ => true,
    })
}

pub(crate) fn some<C, F>(list: &C, mut f: F) -> bool
where
    C: Container,
    F: FnMut(&C::Item, usize, &C) -> bool,
{
    let len = list.length();
    (0..len).any(|i| match list.get(i) {
        Some(item) if list.has(i) => f(item, i, list),
        _ => false,
    })
}
