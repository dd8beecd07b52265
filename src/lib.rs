//! # Sortpolicy
//!
//! `sortpolicy` sorts sequences of integers in place and shows three ways of binding the
//! comparison policy to the sort:
//!
//! - **Type-bound** ([`template`]): the [`Sorter`] trait fixes the algorithm and leaves the
//!   comparison to the implementor. [`AscendingSorter`] and [`DescendingSorter`] each carry
//!   one policy.
//! - **Runtime composition** ([`strategy`]): [`StrategySorter`] accepts any
//!   [`Comparator`] as a trait object at call time.
//! - **Compile-time parameterization** ([`generic`]): [`generic::sort`] is a plain function
//!   generic over the comparison closure.
//!
//! All three delegate to the standard library's unstable sort, so none of them is stable.
//!
//! ## Usage
//!
//! ```rust
//! use sortpolicy::prelude::*;
//!
//! let mut a = vec![5, 2, 9, 1];
//! AscendingSorter.sort(&mut a);
//! assert_eq!(a, vec![1, 2, 5, 9]);
//!
//! let mut b = vec![5, 2, 9, 1];
//! StrategySorter::new().sort(&mut b, &Descending);
//! assert_eq!(b, vec![9, 5, 2, 1]);
//!
//! let mut c = vec![5, 2, 9, 1];
//! sortpolicy::generic::sort(&mut c, |a, b| a < b);
//! assert_eq!(c, vec![1, 2, 5, 9]);
//! ```
//!
//! ## Policy contract
//!
//! Every policy must be a strict weak ordering. This is not validated: a policy that breaks it
//! leaves the data in an unspecified order, and the standard sort may panic on detecting it.
//! [`verify::check_order`] can confirm a result after the fact.

pub mod core;
pub mod demo;
pub mod generic;
pub mod strategy;
pub mod template;
pub mod verify;

pub use crate::core::{Ascending, Comparator, Descending, SortOrder};
pub use crate::strategy::StrategySorter;
pub use crate::template::{AscendingSorter, DescendingSorter, Sorter};

pub mod prelude {
    pub use crate::core::{Ascending, Comparator, Descending, SortOrder};
    pub use crate::generic::sort_by_policy;
    pub use crate::strategy::StrategySorter;
    pub use crate::template::{AscendingSorter, DescendingSorter, Sorter};
    pub use crate::verify::check_order;
}
