//! Row comparison.
//!
//! The comparator answers only "is `a` greater than `b`". Equal keys land in
//! the "less" branch, so the ordering is not total: `compare_keys(x, x, _)`
//! is `Less` ascending and `Greater` descending. With [`merge_sort_by`] this
//! keeps tied rows in place when ascending and reverses them when
//! descending.
//!
//! NOTE: the equal-key bias is a likely latent defect. It is kept so that
//! tie order matches existing tables.

use std::cmp::Ordering;

use crate::SortDirection;

/// Comparable text of a cell, trimmed like `String.prototype.trim`.
pub fn cell_key(text: &str) -> &str {
    text.trim_matches(is_trim_char)
}

/// ECMAScript WhiteSpace and LineTerminator. Narrower than
/// `char::is_whitespace`: U+0085 (NEL) is kept, U+FEFF (BOM) is trimmed.
fn is_trim_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}'
            | '\u{a}'
            | '\u{b}'
            | '\u{c}'
            | '\u{d}'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Compare two cell keys for `direction`.
///
/// Keys order by UTF-16 code units. Never returns `Equal`.
pub fn compare_keys(a: &str, b: &str, direction: SortDirection) -> Ordering {
    let greater = a.encode_utf16().gt(b.encode_utf16());
    let sign = (if greater { 1 } else { -1 }) * direction.multiplier();
    if sign > 0 {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Top-down merge sort that takes the right-hand item only when `compare`
/// reports `Greater`. Total for any comparator, including non-total ones.
pub(crate) fn merge_sort_by<T, F>(items: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_run(items, &mut compare)
}

fn sort_run<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = sort_run(items, compare);
    let right = sort_run(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) == Ordering::Greater,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }

    merged
}
