//! Core traits and types shared by every sorter.
//!
//! This module defines:
//! - [`Comparator`]: A comparison policy object, the unit of runtime composition.
//! - [`Ascending`] / [`Descending`]: The two ready-made policies.
//! - [`SortOrder`]: The same two policies as a tagged variant, parseable from text.
//! - [`ordering`]: Adapter from a "precedes" predicate to [`Ordering`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A comparison policy over integers.
///
/// `precedes(a, b)` returns `true` when `a` must come before `b` in the final order.
/// The predicate must be a strict weak ordering (irreflexive, asymmetric, transitive, with
/// transitive incomparability). This is a precondition, not checked at runtime: with a policy
/// that violates it the resulting order is unspecified and the underlying sort may panic.
/// Memory safety is never affected.
///
/// Every `Fn(i32, i32) -> bool` closure is a `Comparator`, so ad-hoc policies need no new type.
///
/// # Examples
///
/// A policy object defined outside the crate:
///
/// ```
/// use sortpolicy::core::Comparator;
///
/// struct ByAbsolute;
///
/// impl Comparator for ByAbsolute {
///     fn precedes(&self, a: i32, b: i32) -> bool {
///         a.unsigned_abs() < b.unsigned_abs()
///     }
/// }
/// ```
pub trait Comparator {
    /// Returns `true` if `a` must be placed before `b`.
    fn precedes(&self, a: i32, b: i32) -> bool;
}

impl<F> Comparator for F
where
    F: Fn(i32, i32) -> bool,
{
    #[inline(always)]
    fn precedes(&self, a: i32, b: i32) -> bool {
        self(a, b)
    }
}

/// Smallest first: `a < b`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ascending;

impl Comparator for Ascending {
    #[inline(always)]
    fn precedes(&self, a: i32, b: i32) -> bool {
        a < b
    }
}

/// Largest first: `a > b`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Descending;

impl Comparator for Descending {
    #[inline(always)]
    fn precedes(&self, a: i32, b: i32) -> bool {
        a > b
    }
}

/// The two canonical policies as a single tagged type.
///
/// Useful where the direction is chosen by data rather than by type, e.g. parsed from text:
///
/// ```
/// use sortpolicy::core::SortOrder;
///
/// let order: SortOrder = "desc".parse().unwrap();
/// assert_eq!(order, SortOrder::Descending);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Returns the opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl Comparator for SortOrder {
    #[inline(always)]
    fn precedes(&self, a: i32, b: i32) -> bool {
        match self {
            SortOrder::Ascending => Ascending.precedes(a, b),
            SortOrder::Descending => Descending.precedes(a, b),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => f.write_str("ascending"),
            SortOrder::Descending => f.write_str("descending"),
        }
    }
}

/// Error returned when a string names no known [`SortOrder`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort order `{0}` (expected `ascending` or `descending`)")]
pub struct ParseSortOrderError(pub String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascending" | "asc" => Ok(SortOrder::Ascending),
            "descending" | "desc" => Ok(SortOrder::Descending),
            _ => Err(ParseSortOrderError(s.to_string())),
        }
    }
}

/// Turns a strict weak "precedes" predicate into a three-way [`Ordering`].
///
/// Elements that precede each other in neither direction are `Equal`.
#[inline(always)]
pub fn ordering<C: Comparator + ?Sized>(policy: &C, a: i32, b: i32) -> Ordering {
    if policy.precedes(a, b) {
        Ordering::Less
    } else if policy.precedes(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
