#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use recipe_explorer::application::BrowseUseCase;
use recipe_explorer::infrastructure::NoRankingSource;
use recipe_explorer::ui::context::UiContext;
use recipe_explorer::{CategoryTree, RawCategoryRecord};

fuzz_target!(|data: &[u8]| {
    // Any byte stream on stdin must drive the session to a clean end
    let tree = CategoryTree::build(vec![
        RawCategoryRecord::new("30", "肉", None, "https://recipe.example.com/category/30/"),
        RawCategoryRecord::new("31", "Fish", None, ""),
        RawCategoryRecord::new("275", "Beef", Some("30"), "https://recipe.example.com/category/30-275/"),
    ]);
    let use_case = BrowseUseCase::new(NoRankingSource, UiContext::default());
    let mut output = Vec::new();
    assert!(use_case.execute(&tree, Cursor::new(data), &mut output).is_ok());
});
