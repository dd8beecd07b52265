use sortpolicy::prelude::*;

// A sorter defined outside the crate: only the comparison step is supplied,
// the algorithm comes from the trait.
struct EvensFirstSorter;

impl Sorter for EvensFirstSorter {
    fn compare(&self, a: i32, b: i32) -> bool {
        (a.rem_euclid(2), a) < (b.rem_euclid(2), b)
    }
}

// A policy object carrying configuration, as an external caller might write it.
struct DistanceFrom {
    pivot: i32,
}

impl Comparator for DistanceFrom {
    fn precedes(&self, a: i32, b: i32) -> bool {
        let da = (i64::from(a) - i64::from(self.pivot)).abs();
        let db = (i64::from(b) - i64::from(self.pivot)).abs();
        (da, a) < (db, b)
    }
}

#[test]
fn test_external_sorter_compatibility() {
    let mut data = vec![5, 2, 9, 1, 4, -3];
    EvensFirstSorter.sort(&mut data);

    assert_eq!(data, vec![2, 4, -3, 1, 5, 9]);
}

#[test]
fn test_external_policy_compatibility() {
    let policy = DistanceFrom { pivot: 5 };
    let mut data = vec![5, 2, 9, 1, 4, 6];

    StrategySorter::new().sort(&mut data, &policy);
    assert_eq!(data, vec![5, 4, 6, 2, 1, 9]);
    assert!(check_order(&data, &policy).is_ok());

    // Same policy object, static dispatch.
    let mut again = vec![5, 2, 9, 1, 4, 6];
    sort_by_policy(&mut again, &policy);
    assert_eq!(again, data);
}
