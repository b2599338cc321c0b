//! Collaborator Factory
//!
//! Picks the concrete infrastructure behind each domain port.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};

use crate::domain::ports::RecipeSearch;
use crate::infrastructure::{JsonCatalogFile, JsonRankingDir, NoRankingSource};

/// Category listing read from a JSON document on disk
pub fn create_category_source(path: &Path) -> JsonCatalogFile {
    JsonCatalogFile::new(path)
}

/// Ranking lookup for the session.
///
/// Without a rankings directory every search reports that no source is
/// configured; browsing still works.
pub fn create_recipe_search(rankings_dir: Option<PathBuf>) -> Box<dyn RecipeSearch> {
    match rankings_dir {
        Some(dir) => {
            log::info!("ranking lookups from {}", dir.display());
            Box::new(JsonRankingDir::new(dir))
        }
        None => {
            log::info!("no rankings directory configured; searches will report unavailable");
            Box::new(NoRankingSource)
        }
    }
}
