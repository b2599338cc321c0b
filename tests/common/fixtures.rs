//! Fixture documents shared by the CLI tests.

/// Two top-level categories; "Meat" has two subcategories, one of which has
/// a child of its own. "Fish" has none.
pub const CATALOG_JSON: &str = r#"{
  "result": {
    "large": [
      {"categoryId": "30", "categoryName": "Meat", "categoryUrl": "https://recipe.example.com/category/30/"},
      {"categoryId": "31", "categoryName": "Fish", "categoryUrl": "https://recipe.example.com/category/31/"}
    ],
    "medium": [
      {"categoryId": 275, "categoryName": "Beef", "parentCategoryId": "30", "categoryUrl": "https://recipe.example.com/category/30-275/"},
      {"categoryId": 276, "categoryName": "Pork", "parentCategoryId": "30", "categoryUrl": "https://recipe.example.com/category/30-276/"}
    ],
    "small": [
      {"categoryId": 1491, "categoryName": "Pork belly", "parentCategoryId": "276", "categoryUrl": "https://recipe.example.com/category/30-276-1491/?l2-id=4"}
    ]
  }
}"#;

/// A listing with no categories at all
pub const EMPTY_CATALOG_JSON: &str = r#"{"result": {"large": [], "medium": [], "small": []}}"#;

/// `(search key, document)` pairs for the rankings directory
pub const RANKINGS: &[(&str, &str)] = &[
    (
        "31",
        r#"{"result": [
            {"rank": "1", "recipeTitle": "Salt-grilled mackerel", "recipeDescription": "Crisp skin.", "recipeUrl": "https://recipe.example.com/recipe/11/"},
            {"rank": "2", "recipeTitle": "Simmered flounder", "recipeUrl": "https://recipe.example.com/recipe/12/"}
        ]}"#,
    ),
    (
        "30-275",
        r#"{"result": [
            {"rank": "1", "recipeTitle": "Beef stew", "recipeUrl": "https://recipe.example.com/recipe/21/"}
        ]}"#,
    ),
];
