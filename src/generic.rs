//! Sorting parameterized over the comparator type.
//!
//! No trait objects and no sorter types: each comparator gets its own monomorphized copy of
//! [`sort`].

use crate::core::{Comparator, ordering};
use log::trace;
use std::cmp::Ordering;

/// Sorts `data` in place, placing `a` before `b` whenever `comparator(a, b)` is `true`.
///
/// `comparator` must be a strict weak ordering. Not stable.
///
/// # Examples
///
/// ```
/// let mut data = vec![5, 2, 9, 1];
/// sortpolicy::generic::sort(&mut data, |a, b| a < b);
///
/// assert_eq!(data, vec![1, 2, 5, 9]);
/// ```
pub fn sort<F>(data: &mut [i32], mut comparator: F)
where
    F: FnMut(i32, i32) -> bool,
{
    trace!("generic: sorting {} elements", data.len());
    data.sort_unstable_by(|&a, &b| {
        if comparator(a, b) {
            Ordering::Less
        } else if comparator(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
}

/// Statically dispatched variant of [`sort`] for policy objects.
///
/// ```
/// use sortpolicy::core::Descending;
///
/// let mut data = vec![5, 2, 9, 1];
/// sortpolicy::generic::sort_by_policy(&mut data, &Descending);
///
/// assert_eq!(data, vec![9, 5, 2, 1]);
/// ```
pub fn sort_by_policy<C: Comparator>(data: &mut [i32], policy: &C) {
    trace!("generic: sorting {} elements", data.len());
    data.sort_unstable_by(|&a, &b| ordering(policy, a, b));
}
