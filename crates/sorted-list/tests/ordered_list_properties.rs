//! Property-based tests using proptest.

use proptest::prelude::*;
use sorted_list::{OrderedList, Record};

fn build(ages: &[i64]) -> OrderedList {
    ages.iter()
        .enumerate()
        .map(|(i, &age)| Record::new(i.to_string(), age))
        .collect()
}

proptest! {
    /// Traversal ages are non-decreasing after every add.
    #[test]
    fn stays_sorted_after_each_add(ages in prop::collection::vec(any::<i64>(), 0..64)) {
        let mut list = OrderedList::new();
        for (i, &age) in ages.iter().enumerate() {
            list.add(Record::new(i.to_string(), age));
            let seen: Vec<i64> = list.iter().map(Record::age).collect();
            prop_assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    /// Reachable node count equals the number of adds.
    #[test]
    fn count_matches_adds(ages in prop::collection::vec(-50i64..50, 0..64)) {
        let list = build(&ages);
        prop_assert_eq!(list.iter().count(), ages.len());
        prop_assert_eq!(list.len(), ages.len());
        prop_assert_eq!(list.is_empty(), ages.is_empty());
    }

    /// `first` is the earliest-inserted record among the minimum ages.
    #[test]
    fn first_is_earliest_minimum(ages in prop::collection::vec(-10i64..10, 1..64)) {
        let list = build(&ages);
        let min = *ages.iter().min().unwrap();
        let earliest = ages.iter().position(|&a| a == min).unwrap();
        let first = list.first().unwrap();
        prop_assert_eq!(first.age(), min);
        prop_assert_eq!(first.name(), earliest.to_string());
    }

    /// Equal ages come out in insertion order: the traversal is a stable sort.
    #[test]
    fn matches_stable_sort(ages in prop::collection::vec(-5i64..5, 0..64)) {
        let list = build(&ages);
        let mut expected: Vec<(usize, i64)> = ages.iter().copied().enumerate().collect();
        expected.sort_by_key(|&(_, age)| age);
        let got: Vec<(usize, i64)> = list
            .iter()
            .map(|r| (r.name().parse().unwrap(), r.age()))
            .collect();
        prop_assert_eq!(got, expected);
    }

    /// Reads are idempotent.
    #[test]
    fn reads_are_idempotent(ages in prop::collection::vec(any::<i64>(), 0..32)) {
        let list = build(&ages);
        prop_assert_eq!(list.first(), list.first());
        prop_assert_eq!(list.render(), list.render());
    }
}
