//! Post-condition checks for sorted output.
//!
//! None of the sorters call into this module; the contract on the policy is a precondition.
//! Use it in tests or debug builds to confirm a result.

use crate::core::Comparator;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// `right` should have been placed before `left`.
    #[error("element {index} ({left}) is out of order with its successor ({right})")]
    OutOfOrder { index: usize, left: i32, right: i32 },
}

/// Checks that every adjacent pair `(x, y)` in `data` satisfies the policy, i.e. `y` does not
/// strictly precede `x`. Equivalent elements may appear in either order.
///
/// # Examples
///
/// ```
/// use sortpolicy::core::Ascending;
/// use sortpolicy::verify::{OrderError, check_order};
///
/// assert!(check_order(&[1, 2, 2, 5], &Ascending).is_ok());
/// assert_eq!(
///     check_order(&[1, 5, 2], &Ascending),
///     Err(OrderError::OutOfOrder { index: 1, left: 5, right: 2 }),
/// );
/// ```
pub fn check_order<C: Comparator + ?Sized>(data: &[i32], policy: &C) -> Result<(), OrderError> {
    match data
        .windows(2)
        .position(|pair| policy.precedes(pair[1], pair[0]))
    {
        Some(index) => Err(OrderError::OutOfOrder {
            index,
            left: data[index],
            right: data[index + 1],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Descending, SortOrder};

    #[test]
    fn test_trivial_inputs_are_ordered() {
        assert_eq!(check_order(&[], &SortOrder::Ascending), Ok(()));
        assert_eq!(check_order(&[42], &SortOrder::Descending), Ok(()));
    }

    #[test]
    fn test_reports_first_violation() {
        let err = check_order(&[9, 5, 7, 1, 3], &Descending).unwrap_err();
        assert_eq!(
            err,
            OrderError::OutOfOrder {
                index: 1,
                left: 5,
                right: 7
            }
        );
        assert_eq!(
            err.to_string(),
            "element 1 (5) is out of order with its successor (7)"
        );
    }

    #[test]
    fn test_equal_neighbours_pass() {
        assert!(check_order(&[3, 3, 3], &Descending).is_ok());
        assert!(check_order(&[1, 1, 2, 2], &SortOrder::Ascending).is_ok());
    }
}
