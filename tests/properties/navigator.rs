//! Property tests for the navigator state machine.

use proptest::prelude::*;

use recipe_explorer::domain::entities::{CategoryTree, RawCategoryRecord};
use recipe_explorer::domain::services::{Navigator, Outcome};
use recipe_explorer::domain::value_objects::Command;

fn tree() -> CategoryTree {
    let record = |id: &str, parent: Option<&str>| {
        RawCategoryRecord::new(
            id,
            format!("c{}", id),
            parent,
            format!("https://recipe.example.com/category/{}/", id),
        )
    };
    CategoryTree::build(vec![
        record("1", None),
        record("2", None),
        record("3", None),
        record("10", Some("1")),
        record("11", Some("1")),
        record("20", Some("2")),
        record("100", Some("10")),
    ])
}

fn input_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("q".to_string()),
        Just("u".to_string()),
        Just("U".to_string()),
        Just("s".to_string()),
        (-2i64..6).prop_map(|n| n.to_string()),
        (-2i64..6).prop_map(|n| format!("s {}", n)),
        "[a-z ]{0,6}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the navigator only ever rests on a known category, and
    /// outcomes that report no movement leave the position unchanged.
    #[test]
    fn property_position_stays_valid(lines in proptest::collection::vec(input_line(), 0..40)) {
        let tree = tree();
        let mut navigator = Navigator::new(&tree);

        for line in lines {
            let before = navigator.current_id();
            let outcome = navigator.apply(Command::parse(&line));
            let after = navigator.current_id();

            prop_assert!(tree.get(after).is_some());
            match outcome {
                Outcome::Drilled(target) => {
                    prop_assert_eq!(target.id(), after);
                    prop_assert!(tree.has_children(after));
                }
                Outcome::MovedUp(parent) => prop_assert_eq!(parent.id(), after),
                Outcome::Search { .. }
                | Outcome::NotSearchable(_)
                | Outcome::AlreadyAtTop
                | Outcome::InvalidInput
                | Outcome::InvalidNumber
                | Outcome::Quit => prop_assert_eq!(before, after),
            }
        }
    }

    /// PROPERTY: searches triggered by a bare number only target leaves.
    #[test]
    fn property_numbers_search_only_leaves(lines in proptest::collection::vec(input_line(), 0..40)) {
        let tree = tree();
        let mut navigator = Navigator::new(&tree);

        for line in lines {
            let command = Command::parse(&line);
            if let Outcome::Search { target, .. } = navigator.apply(command) {
                if matches!(command, Command::Select(_)) {
                    prop_assert!(!tree.has_children(target.id()));
                }
            }
        }
    }
}
