//! Domain Entities
//!
//! - `Category` - A catalog node with its derived search key
//! - `CategoryTree` - The hierarchy built from flat catalog records
//! - `Ranking` - Ranked recipes returned by a category search

mod category;
mod category_tree;
mod ranking;

pub use category::{Category, RawCategoryRecord, Tier, ROOT_ID, ROOT_NAME};
pub use category_tree::CategoryTree;
pub use ranking::{RankedRecipe, Ranking};
