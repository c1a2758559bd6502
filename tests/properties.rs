//! Property-based tests for insertion, matching and merging.

use proptest::prelude::*;
use std::collections::HashMap;

use segmatch::Node;

// Literal segments, including the empty one produced by doubled slashes.
fn literal_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9_.-]{0,6}").unwrap()
}

fn pattern_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(literal_strategy(), 1..6).prop_map(|segments| segments.join("/"))
}

// Patterns mixing literal and named parameter segments.
fn param_pattern_strategy() -> impl Strategy<Value = Vec<(bool, String)>> {
    prop::collection::vec(
        (prop::bool::ANY, prop::string::string_regex("[a-z]{1,4}").unwrap()),
        1..6,
    )
}

proptest! {
    // Property: a literal pattern matches itself with no captures
    #[test]
    fn prop_literal_round_trip(pattern in pattern_strategy(), value in any::<u32>()) {
        let mut tree = Node::new();
        tree.insert(&pattern, value);

        let matched = tree.at(&pattern).unwrap();
        prop_assert_eq!(*matched.value, value);
        prop_assert!(matched.params.is_empty());
    }

    // Property: the last insert of a pattern is the one that matches
    #[test]
    fn prop_last_insert_wins(patterns in prop::collection::vec(pattern_strategy(), 1..32)) {
        let mut tree = Node::new();
        let mut expected = HashMap::new();

        for (i, pattern) in patterns.iter().enumerate() {
            tree.insert(pattern, i);
            expected.insert(pattern.clone(), i);
        }

        for (pattern, i) in &expected {
            prop_assert_eq!(tree.at(pattern).map(|m| *m.value), Ok(*i));
        }
    }

    // Property: every parameter segment captures the matching path segment
    #[test]
    fn prop_parameters_capture(segments in param_pattern_strategy(), values in prop::collection::vec("[A-Z0-9]{1,4}", 6)) {
        let pattern = segments
            .iter()
            .enumerate()
            .map(|(i, (param, text))| if *param { format!(":{}{}", text, i) } else { text.clone() })
            .collect::<Vec<_>>()
            .join("/");

        let path = segments
            .iter()
            .zip(&values)
            .map(|((param, text), value)| if *param { value.clone() } else { text.clone() })
            .collect::<Vec<_>>()
            .join("/");

        let mut tree = Node::new();
        tree.insert(&pattern, ());

        let matched = tree.at(&path).unwrap();
        let expected = segments
            .iter()
            .zip(&values)
            .enumerate()
            .filter(|(_, ((param, _), _))| *param)
            .map(|(i, ((_, text), value))| (format!("{}{}", text, i), value.clone()))
            .collect::<Vec<_>>();

        prop_assert_eq!(matched.params.len(), expected.len());
        for (key, value) in &expected {
            prop_assert_eq!(matched.params.get(key), Some(value.as_str()));
        }
    }

    // Property: a merged tree matches everything either side matched, with
    // the first tree winning where both match
    #[test]
    fn prop_merge_is_union(
        first in prop::collection::vec(pattern_strategy(), 0..16),
        second in prop::collection::vec(pattern_strategy(), 0..16),
    ) {
        let mut a = Node::new();
        for pattern in &first {
            a.insert(pattern, (0, pattern.clone()));
        }

        let mut b = Node::new();
        for pattern in &second {
            b.insert(pattern, (1, pattern.clone()));
        }

        let merged = a.clone().merge(b.clone());

        for path in first.iter().chain(&second) {
            let expected = a.at(path).or_else(|_| b.at(path)).map(|m| m.value.clone());
            prop_assert_eq!(merged.at(path).map(|m| m.value.clone()), expected);
        }
    }

    // Property: merging a tree with itself changes nothing
    #[test]
    fn prop_merge_with_self(patterns in prop::collection::vec(pattern_strategy(), 0..16), probe in pattern_strategy()) {
        let mut tree = Node::new();
        for pattern in &patterns {
            tree.insert(pattern, pattern.clone());
        }

        let merged = tree.clone().merge(tree.clone());
        for path in patterns.iter().chain(std::iter::once(&probe)) {
            prop_assert_eq!(
                merged.at(path).map(|m| m.value.clone()),
                tree.at(path).map(|m| m.value.clone())
            );
        }
    }
}
