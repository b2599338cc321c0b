#![no_main]

use libfuzzer_sys::fuzz_target;
use recipe_explorer::infrastructure::parse_category_list;
use recipe_explorer::CategoryTree;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Decoding and building a tree from any document must not panic,
        // whatever ids and parent links it carries
        if let Ok(records) = parse_category_list(content) {
            let n = records.len();
            let tree = CategoryTree::build(records);
            assert!(tree.len() <= n);
            assert_eq!(tree.len(), tree.child_entry_count());
            let _ = tree.walk();
        }
    }
});
