//! Ranking entity - the result of a category search

/// One entry of a category ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRecipe {
    pub rank: u32,
    pub title: String,
    pub description: String,
    pub url: String,
}

/// Ranked recipes returned for a single category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    category_name: String,
    recipes: Vec<RankedRecipe>,
}

impl Ranking {
    /// Create a ranking; entries are ordered by rank
    pub fn new(category_name: impl Into<String>, mut recipes: Vec<RankedRecipe>) -> Self {
        recipes.sort_by_key(|r| r.rank);
        Self {
            category_name: category_name.into(),
            recipes,
        }
    }

    pub fn category_name(&self) -> &str {
        &self.category_name
    }

    pub fn recipes(&self) -> &[RankedRecipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
