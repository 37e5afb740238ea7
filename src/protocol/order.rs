//! reverse, sort and the two index searches.

use std::cmp::Ordering;

use crate::coerce::to_integer;
use crate::container::{Container, NodeItem};

use super::query::to_array;

fn collect<C: Container>(items: impl IntoIterator<Item = C::Item>) -> C {
    let mut res = C::empty();
    for item in items {
        res.concat(item.into());
    }
    res
}

pub(crate) fn reverse<C: Container>(list: &C) -> C {
    collect(to_array(list).into_iter().rev())
}

/// Stable sort of a hole-free copy.
pub(crate) fn sort_by<C, F>(list: &C, mut compare: F) -> C
where
    C: Container,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    collect(merge_sort_by(to_array(list), &mut compare))
}

/// Default ordering compares the strings items coerce to, UTF-16 code unit
/// by code unit. That puts astral characters before U+E000..=U+FFFF.
pub(crate) fn sort<C: Container>(list: &C) -> C {
    let mut keyed: Vec<(Vec<u16>, C::Item)> = to_array(list)
        .into_iter()
        .map(|item| (item.to_string_value().encode_utf16().collect(), item))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    collect(keyed.into_iter().map(|(_, item)| item))
}

/// Top-down merge sort. Comparators come from callers and need not be a
/// total order; a bad one yields some permutation, never a panic.
fn merge_sort_by<T, F>(items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return items;
    }

    let mut left = items;
    let right = left.split_off(left.len() / 2);
    let left = merge_sort_by(left, compare);
    let right = merge_sort_by(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        // ties go left to keep the sort stable
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) == Ordering::Greater,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }
    merged
}

/// `from` NaN or absent means 0. Negative values count back from the end.
pub(crate) fn index_of<C, P>(list: &C, matches: P, from: Option<f64>) -> Option<usize>
where
    C: Container,
    P: Fn(&C::Item) -> bool,
{
    let len = list.length() as i64;
    let mut start = from.filter(|n| !n.is_nan()).map_or(0, to_integer);
    if start < 0 {
        start = start.saturating_add(len);
    }

    (start.max(0)..len)
        .map(|i| i as usize)
        .find(|&i| list.has(i) && list.get(i).is_some_and(&matches))
}

/// `from` NaN or absent means the last index. Negative values count back
/// from the end; values past the end are pulled back to the last index.
pub(crate) fn last_index_of<C, P>(list: &C, matches: P, from: Option<f64>) -> Option<usize>
where
    C: Container,
    P: Fn(&C::Item) -> bool,
{
    let len = list.length() as i64;
    let start = match from.filter(|n| !n.is_nan()) {
        None => len - 1,
        Some(n) => {
            let n = to_integer(n);
            if n < 0 {
                n.saturating_add(len)
            } else if n >= len {
                len - 1
            } else {
                n
            }
        }
    };
    if start < 0 {
        return None;
    }

    (0..=start)
        .rev()
        .map(|i| i as usize)
        .find(|&i| list.has(i) && list.get(i).is_some_and(&matches))
}
