//! Property tests for building the category tree.

use std::collections::HashSet;

use proptest::prelude::*;

use recipe_explorer::domain::entities::{CategoryTree, RawCategoryRecord, ROOT_ID};

/// A well-formed three-tier listing: unique ids, every parent listed in an
/// earlier tier.
fn listing() -> impl Strategy<Value = Vec<RawCategoryRecord>> {
    (1usize..6, 0usize..10, 0usize..15, any::<u64>()).prop_map(|(large, medium, small, seed)| {
        let mut records = Vec::new();
        let mut next_id = 1u64;
        let mut pick = seed;

        let mut tier_ids = |count: usize, parents: &[String], records: &mut Vec<RawCategoryRecord>| {
            let mut ids = Vec::new();
            for _ in 0..count {
                let id = next_id.to_string();
                next_id += 1;
                let parent = if parents.is_empty() {
                    None
                } else {
                    pick = pick.wrapping_mul(6364136223846793005).wrapping_add(1);
                    Some(parents[(pick >> 33) as usize % parents.len()].clone())
                };
                records.push(RawCategoryRecord::new(
                    id.clone(),
                    format!("c{}", id),
                    parent.as_deref(),
                    format!("https://recipe.example.com/category/{}/", id),
                ));
                ids.push(id);
            }
            ids
        };

        let large_ids = tier_ids(large, &[], &mut records);
        let medium_ids = tier_ids(medium, &large_ids, &mut records);
        tier_ids(small, &medium_ids, &mut records);
        records
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: N unique records are all indexed and each is listed under
    /// exactly one parent.
    #[test]
    fn property_every_record_indexed_once(records in listing()) {
        let n = records.len();
        let tree = CategoryTree::build(records);

        prop_assert_eq!(tree.len(), n);
        prop_assert_eq!(tree.child_entry_count(), n);
    }

    /// PROPERTY: top-level children keep listing order.
    #[test]
    fn property_root_children_keep_listing_order(records in listing()) {
        let expected: Vec<String> = records
            .iter()
            .filter(|r| r.parent_id.is_none())
            .map(|r| r.id.clone())
            .collect();
        let tree = CategoryTree::build(records);
        let actual: Vec<String> = tree
            .children(ROOT_ID)
            .iter()
            .map(|c| c.id().to_string())
            .collect();

        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: walking a well-formed tree reaches every category once, and
    /// every category's parent chain ends at the root.
    #[test]
    fn property_walk_reaches_everything(records in listing()) {
        let tree = CategoryTree::build(records);
        let walked: Vec<&str> = tree.walk().iter().map(|(_, c)| c.id()).collect();
        let unique: HashSet<&str> = walked.iter().copied().collect();

        prop_assert_eq!(walked.len(), tree.len());
        prop_assert_eq!(unique.len(), tree.len());

        for id in walked {
            let mut current = id.to_string();
            let mut steps = 0;
            while let Some(parent) = tree.parent_of(&current) {
                current = parent.id().to_string();
                steps += 1;
                prop_assert!(steps <= 3);
            }
            prop_assert_eq!(current.as_str(), ROOT_ID);
        }
    }

    /// PROPERTY: arbitrary records (duplicates, dangling parents, cycles)
    /// never panic the builder or the walk.
    #[test]
    fn property_build_never_panics(
        raw in proptest::collection::vec(
            ("[0-9]{1,2}", proptest::option::of("[0-9]{1,2}"), ".{0,12}"),
            0..40
        )
    ) {
        let records: Vec<RawCategoryRecord> = raw
            .into_iter()
            .map(|(id, parent, url)| RawCategoryRecord::new(id.clone(), id, parent.as_deref(), url))
            .collect();
        let tree = CategoryTree::build(records);

        prop_assert_eq!(tree.len(), tree.child_entry_count());
        prop_assert!(tree.walk().len() <= tree.len() * 2 + 1);
    }
}
