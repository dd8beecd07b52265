//! The three demonstrations run by the `sortpolicy` binary.
//!
//! Each one sorts its own copy of [`INPUT`], so they share no state and can run in any order.

use crate::core::Descending;
use crate::generic;
use crate::strategy::StrategySorter;
use crate::template::{AscendingSorter, Sorter};
use log::debug;

/// The sequence every demonstration starts from.
pub const INPUT: [i32; 4] = [5, 2, 9, 1];

/// Ascending order through the type-bound sorter.
pub fn subclass_demo() -> Vec<i32> {
    debug!("subclass: AscendingSorter");
    let mut data = INPUT.to_vec();
    AscendingSorter.sort(&mut data);
    data
}

/// Descending order through a policy object passed at call time.
pub fn strategy_demo() -> Vec<i32> {
    debug!("strategy: Descending");
    let mut data = INPUT.to_vec();
    StrategySorter::new().sort(&mut data, &Descending);
    data
}

/// Ascending order through a closure resolved at compile time.
pub fn generic_demo() -> Vec<i32> {
    debug!("generic: |a, b| a < b");
    let mut data = INPUT.to_vec();
    generic::sort(&mut data, |a, b| a < b);
    data
}

/// Formats a sequence as space-separated integers.
pub fn render(data: &[i32]) -> String {
    data.iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
