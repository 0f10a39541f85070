//! Generic edit scripts.
//!
//! Both diff engines classify elements the same way: present on both sides and
//! equal, only on the new side, or only on the old side. A changed element is
//! expressed as a `Delete` of the old value followed by an `Insert` of the new
//! one. [`diff_sequences`] applies this to ordered sequences (lines) with a
//! cheap look-ahead heuristic; [`diff_keyed`] applies it to keyed collections
//! (files in a snapshot).
//!
//! The sequence walk is not a minimal edit script. Look-ahead is linear per
//! step, so the whole pass is quadratic in the worst case, which is why it
//! accepts an output limit.

use std::cmp::Ordering;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit<T> {
    Equal(T),
    Insert(T),
    Delete(T),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditScript<T> {
    pub edits: Vec<Edit<T>>,
    /// Set when `limit` cut the walk short with input remaining.
    pub truncated: bool,
}

/// Walk `old` and `new` with two cursors and emit an approximate edit script.
///
/// At each step: equal elements are kept; an old element that never occurs in
/// the rest of `new` is deleted; otherwise a new element that never occurs in
/// the rest of `old` is inserted; otherwise both are replaced (delete then
/// insert). With `limit`, at most that many edits are produced.
pub fn diff_sequences<'a, T: PartialEq>(
    old: &'a [T],
    new: &'a [T],
    limit: Option<usize>,
) -> EditScript<&'a T> {
    let mut edits = Vec::new();
    let (mut oi, mut ni) = (0, 0);

    while oi < old.len() || ni < new.len() {
        match (old.get(oi), new.get(ni)) {
            (Some(o), None) => {
                edits.push(Edit::Delete(o));
                oi += 1;
            }
            (None, Some(n)) => {
                edits.push(Edit::Insert(n));
                ni += 1;
            }
            (Some(o), Some(n)) if o == n => {
                edits.push(Edit::Equal(n));
                oi += 1;
                ni += 1;
            }
            (Some(o), Some(_)) if !new[ni..].contains(o) => {
                edits.push(Edit::Delete(o));
                oi += 1;
            }
            (Some(_), Some(n)) if !old[oi..].contains(n) => {
                edits.push(Edit::Insert(n));
                ni += 1;
            }
            (Some(o), Some(n)) => {
                edits.push(Edit::Delete(o));
                edits.push(Edit::Insert(n));
                oi += 1;
                ni += 1;
            }
            (None, None) => break,
        }

        if let Some(limit) = limit {
            if edits.len() >= limit && (oi < old.len() || ni < new.len()) {
                edits.truncate(limit);
                return EditScript {
                    edits,
                    truncated: true,
                };
            }
        }
    }

    if let Some(limit) = limit {
        // A final replace can overshoot by one.
        if edits.len() > limit {
            edits.truncate(limit);
            return EditScript {
                edits,
                truncated: true,
            };
        }
    }

    EditScript {
        edits,
        truncated: false,
    }
}

/// Classify every key of two ordered maps, in ascending key order.
///
/// Keys present on both sides with different values produce a `Delete` of the
/// old value followed by an `Insert` of the new value under the same key.
pub fn diff_keyed<'a, K: Ord, V: PartialEq>(
    old: &'a BTreeMap<K, V>,
    new: &'a BTreeMap<K, V>,
) -> Vec<(&'a K, Edit<&'a V>)> {
    let mut edits = Vec::with_capacity(old.len().max(new.len()));
    let mut old_iter = old.iter().peekable();
    let mut new_iter = new.iter().peekable();

    loop {
        match (old_iter.peek().copied(), new_iter.peek().copied()) {
            (Some((ok, ov)), Some((nk, nv))) => match ok.cmp(nk) {
                Ordering::Less => {
                    edits.push((ok, Edit::Delete(ov)));
                    old_iter.next();
                }
                Ordering::Greater => {
                    edits.push((nk, Edit::Insert(nv)));
                    new_iter.next();
                }
                Ordering::Equal => {
                    if ov == nv {
                        edits.push((nk, Edit::Equal(nv)));
                    } else {
                        edits.push((ok, Edit::Delete(ov)));
                        edits.push((nk, Edit::Insert(nv)));
                    }
                    old_iter.next();
                    new_iter.next();
                }
            },
            (Some((ok, ov)), None) => {
                edits.push((ok, Edit::Delete(ov)));
                old_iter.next();
            }
            (None, Some((nk, nv))) => {
                edits.push((nk, Edit::Insert(nv)));
                new_iter.next();
            }
            (None, None) => break,
        }
    }

    edits
}
