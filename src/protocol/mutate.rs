//! push, pop, shift, unshift and splice.

use crate::container::Container;

use super::Spliced;

pub(crate) fn push<C: Container>(list: &mut C, values: impl IntoIterator<Item = C::Value>) -> usize {
    for value in values {
        let end = list.length();
        list.set(end, value);
    }
    list.length()
}

pub(crate) fn pop<C: Container>(list: &mut C) -> Option<C::Item> {
    let last = list.length().checked_sub(1)?;
    list.remove(last)
}

pub(crate) fn shift<C: Container>(list: &mut C) -> Option<C::Item> {
    if list.length() == 0 {
        return None;
    }
    list.remove(0)
}

/// Each value is merged in front of whatever sits at index 0, so several
/// values end up in reverse call order.
pub(crate) fn unshift<C: Container>(list: &mut C, values: impl IntoIterator<Item = C::Value>) -> usize {
    for value in values {
        insert_before(list, 0, value);
    }
    list.length()
}

pub(crate) fn splice<C: Container>(
    list: &mut C,
    index: usize,
    how_many: usize,
    mut items: Vec<C::Value>,
) -> Spliced<C::Item> {
    // Holes count toward `how_many` but add nothing to the result.
    let mut removed = Vec::new();
    for _ in 0..how_many {
        if index >= list.length() {
            break;
        }
        if let Some(item) = list.remove(index) {
            removed.push(item);
        }
    }

    // Last item first, each merged in front of the previous one.
    while let Some(item) = items.pop() {
        insert_before(list, index, item);
    }

    match removed.len() {
        1 => Spliced::One(removed.remove(0)),
        _ => Spliced::Many(removed),
    }
}

/// Write `value` so it lands in front of slot `index`. A hole at `index`
/// stays a hole one slot further on; past the end `value` is simply set.
fn insert_before<C: Container>(list: &mut C, index: usize, value: C::Value) {
    let merged = match list.get(index) {
        Some(anchor) => C::merge(value, anchor.clone().into()),
        None if index < list.length() => C::merge(value, C::hole()),
        None => value,
    };
    list.set(index, merged);
}
