//! Property tests for rule serialization.

use proptest::prelude::*;

use ruleminer_core::types::{AssociationRule, Item, Itemset};

fn item_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,3}(=[a-z0-9]{1,3})?"
}

/// Two disjoint, non-empty item lists.
fn sides_strategy() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    prop::collection::btree_set(item_strategy(), 2..8).prop_flat_map(|items| {
        let items: Vec<String> = items.into_iter().collect();
        let n = items.len();
        (1..n).prop_map(move |split| (items[..split].to_vec(), items[split..].to_vec()))
    })
}

fn itemset(items: &[String]) -> Itemset {
    items.iter().map(|s| Item::new(s.clone()).unwrap()).collect()
}

proptest! {
    #[test]
    fn prop_serialize_parse_round_trip((left, right) in sides_strategy()) {
        let rule = AssociationRule::new(itemset(&left), itemset(&right)).unwrap();
        let parsed = AssociationRule::parse(&rule.serialize()).unwrap();
        prop_assert_eq!(&parsed, &rule);
        prop_assert_eq!(parsed.length(), left.len() + right.len());
    }

    #[test]
    fn prop_serialization_ignores_input_order((left, right) in sides_strategy()) {
        let mut reversed_left = left.clone();
        reversed_left.reverse();
        let a = AssociationRule::new(itemset(&left), itemset(&right)).unwrap();
        let b = AssociationRule::new(itemset(&reversed_left), itemset(&right)).unwrap();
        prop_assert_eq!(a.serialize(), b.serialize());
    }
}
