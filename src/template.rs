//! Sorters whose comparison decision is fixed by their type.
//!
//! [`Sorter::sort`] owns the algorithm; implementors only provide [`Sorter::compare`].
//! Picking [`AscendingSorter`] or [`DescendingSorter`] picks the order, nothing is passed
//! at call time.

use crate::core::{Comparator, SortOrder, ordering};
use log::trace;

/// A sort with a fixed algorithm and an overridable comparison step.
///
/// # Examples
///
/// ```
/// use sortpolicy::template::{AscendingSorter, Sorter};
///
/// let mut data = vec![5, 2, 9, 1];
/// AscendingSorter.sort(&mut data);
///
/// assert_eq!(data, vec![1, 2, 5, 9]);
/// ```
pub trait Sorter {
    /// Returns `true` if `a` must be placed before `b`.
    ///
    /// Must be a strict weak ordering; see [`Comparator`] for what happens otherwise.
    fn compare(&self, a: i32, b: i32) -> bool;

    /// Reorders `data` in place so that no element is preceded by one that
    /// [`compare`](Sorter::compare) would place after it.
    ///
    /// Not stable: equivalent elements may change relative position.
    fn sort(&self, data: &mut [i32]) {
        trace!(
            "{}: sorting {} elements",
            std::any::type_name::<Self>(),
            data.len()
        );

        let policy = |a: i32, b: i32| self.compare(a, b);
        data.sort_unstable_by(|&a, &b| ordering(&policy, a, b));
    }
}

/// Sorts smallest first.
#[derive(Clone, Copy, Debug, Default)]
pub struct AscendingSorter;

impl Sorter for AscendingSorter {
    fn compare(&self, a: i32, b: i32) -> bool {
        a < b
    }
}

/// Sorts largest first.
#[derive(Clone, Copy, Debug, Default)]
pub struct DescendingSorter;

impl Sorter for DescendingSorter {
    fn compare(&self, a: i32, b: i32) -> bool {
        a > b
    }
}

// Tagged form: one type, direction picked per value.
impl Sorter for SortOrder {
    fn compare(&self, a: i32, b: i32) -> bool {
        self.precedes(a, b)
    }
}
