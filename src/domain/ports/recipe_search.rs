//! RecipeSearch port
//!
//! Ranked recipe lookup by category search key. Latency and failure modes
//! belong to the implementation; callers report failures and carry on.

use std::path::PathBuf;

use crate::domain::entities::Ranking;
use crate::domain::value_objects::SearchKey;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("no ranking available for category key '{key}'")]
    NotFound { key: String },

    #[error("catalog service returned an error: {message}")]
    Api { message: String },

    #[error("invalid ranking data in {path}: {message}")]
    Invalid { path: PathBuf, message: String },

    #[error("ranking lookup failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("no ranking source configured (use --rankings <DIR>)")]
    Unavailable,
}

pub trait RecipeSearch {
    /// Fetch the ranking for `key`. `category_name` labels the result.
    fn search(&self, key: &SearchKey, category_name: &str) -> Result<Ranking, SearchError>;
}

impl<T: RecipeSearch + ?Sized> RecipeSearch for &T {
    fn search(&self, key: &SearchKey, category_name: &str) -> Result<Ranking, SearchError> {
        (**self).search(key, category_name)
    }
}
