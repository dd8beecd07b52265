//! A sorter that takes its comparison policy at call time.
//!
//! The policy is a trait object, so a single [`StrategySorter`] serves [`Ascending`],
//! [`Descending`], [`SortOrder`] or any caller-defined [`Comparator`] without new sorter types.
//!
//! [`Ascending`]: crate::core::Ascending
//! [`Descending`]: crate::core::Descending
//! [`SortOrder`]: crate::core::SortOrder

use crate::core::{Comparator, ordering};
use log::trace;

/// Stateless sorter with a runtime-supplied policy.
///
/// # Examples
///
/// ```
/// use sortpolicy::core::Descending;
/// use sortpolicy::strategy::StrategySorter;
///
/// let mut data = vec![5, 2, 9, 1];
/// StrategySorter.sort(&mut data, &Descending);
/// assert_eq!(data, vec![9, 5, 2, 1]);
///
/// // Closures are policies too.
/// let mut data = vec![-7, 3, -1, 5];
/// StrategySorter.sort(&mut data, &|a: i32, b: i32| a.abs() < b.abs());
/// assert_eq!(data, vec![-1, 3, 5, -7]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct StrategySorter;

impl StrategySorter {
    pub fn new() -> Self {
        Self
    }

    /// Reorders `data` in place according to `policy`.
    ///
    /// `policy` must be a strict weak ordering. If it is not, the order is unspecified and
    /// the call may panic.
    pub fn sort(&self, data: &mut [i32], policy: &dyn Comparator) {
        trace!("strategy: sorting {} elements", data.len());
        data.sort_unstable_by(|&a, &b| ordering(policy, a, b));
    }
}
