use super::*;

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arbitrary_value_sets() -> impl Strategy<Value = Vec<ValueSet>> {
        prop::collection::vec(1_usize..=4, 1..=4).prop_map(|cardinalities| {
            cardinalities
                .iter()
                .enumerate()
                .map(|(i, &cardinality)| {
                    let dimension = format!("DIM{i}");
                    ValueSet::new(
                        dimension.as_str(),
                        (0..cardinality)
                            .map(|j| Parameter::new(dimension.as_str(), format!("value{j}"))),
                    )
                    .expect("homogeneous dimension")
                })
                .collect()
        })
    }

    proptest! {
        /// Result size is the product of per-dimension cardinalities.
        #[test]
        fn prop_cardinality(sets in arbitrary_value_sets()) {
            let expected: usize = sets.iter().map(ValueSet::len).product();
            prop_assert_eq!(generate(&sets).len(), expected);
        }

        /// Permuting the input yields the same combination set.
        #[test]
        fn prop_order_independence(sets in arbitrary_value_sets()) {
            let forward = generate(&sets);
            let mut reversed = sets.clone();
            reversed.reverse();
            prop_assert_eq!(forward, generate(&reversed));
        }

        /// The caller's collection is unchanged and calls are repeatable.
        #[test]
        fn prop_non_mutation(sets in arbitrary_value_sets()) {
            let snapshot = sets.clone();
            let first = generate(&sets);
            let second = generate(&sets);
            prop_assert_eq!(&sets, &snapshot);
            prop_assert_eq!(first, second);
        }

        /// Every cell selects exactly one value of every input dimension.
        #[test]
        fn prop_completeness(sets in arbitrary_value_sets()) {
            for cell in &generate(&sets) {
                for set in &sets {
                    prop_assert_eq!(cell.of_dimension(set.dimension()).count(), 1);
                }
            }
        }

        /// Property parsing never panics and never emits invalid pairs.
        #[test]
        fn prop_parse_is_total(blob in ".{0,200}") {
            let (pairs, _) = crate::properties::parse(&blob);
            for (key, value) in &pairs {
                prop_assert!(crate::properties::is_valid_token(key));
                prop_assert!(crate::properties::is_valid_token(value));
                prop_assert!(!key.is_empty() && !value.is_empty());
            }
        }
    }
}
