//! Ranking lookups answered from a directory of JSON documents.
//!
//! `<dir>/<search key>.json` holds what the ranking service returns for that
//! category:
//!
//! ```json
//! { "result": [ { "rank": "1", "recipeTitle": "...", "recipeDescription": "...", "recipeUrl": "..." } ] }
//! ```
//!
//! or, on a service-side failure, `{ "error": "...", "error_description": "..." }`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::{RankedRecipe, Ranking};
use crate::domain::ports::{RecipeSearch, SearchError};
use crate::domain::value_objects::SearchKey;

use super::wire::u32_or_string;

#[derive(Debug, Deserialize)]
struct RecipeRankingResponse {
    #[serde(default)]
    result: Option<Vec<ApiRecipe>>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiRecipe {
    #[serde(deserialize_with = "u32_or_string")]
    rank: u32,
    recipe_title: String,
    #[serde(default)]
    recipe_description: String,
    #[serde(default)]
    recipe_url: String,
}

impl From<ApiRecipe> for RankedRecipe {
    fn from(api: ApiRecipe) -> Self {
        RankedRecipe {
            rank: api.rank,
            title: api.recipe_title,
            description: api.recipe_description,
            url: api.recipe_url,
        }
    }
}

/// Decode a ranking document.
///
/// A document with an empty `result` and no error yields an empty ranking.
pub fn parse_ranking(json: &str, category_name: &str) -> Result<Ranking, RankingDocumentError> {
    let response: RecipeRankingResponse =
        serde_json::from_str(json).map_err(|e| RankingDocumentError::Malformed(e.to_string()))?;

    let recipes = response.result.unwrap_or_default();
    if recipes.is_empty() {
        if let Some(message) = response.error_description.or(response.error) {
            return Err(RankingDocumentError::Service(message));
        }
    }

    Ok(Ranking::new(
        category_name,
        recipes.into_iter().map(RankedRecipe::from).collect(),
    ))
}

/// Why a ranking document could not be turned into a `Ranking`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankingDocumentError {
    /// Not valid JSON, or the wrong shape
    Malformed(String),
    /// The service reported an error instead of results
    Service(String),
}

/// Rankings stored as `<search key>.json` files
#[derive(Debug, Clone)]
pub struct JsonRankingDir {
    dir: PathBuf,
}

impl JsonRankingDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the ranking for `key`, if the key can name a file
    fn document_path(&self, key: &SearchKey) -> Option<PathBuf> {
        let key = key.as_str();
        let safe = !key.is_empty()
            && key != "."
            && key != ".."
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        safe.then(|| self.dir.join(format!("{}.json", key)))
    }
}

impl RecipeSearch for JsonRankingDir {
    fn search(&self, key: &SearchKey, category_name: &str) -> Result<Ranking, SearchError> {
        let not_found = || SearchError::NotFound {
            key: key.to_string(),
        };

        let path = self.document_path(key).ok_or_else(not_found)?;
        log::debug!("ranking lookup '{}' -> {}", key, path.display());

        let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => not_found(),
            _ => SearchError::Io(e),
        })?;

        let ranking = parse_ranking(&content, category_name).map_err(|e| match e {
            RankingDocumentError::Malformed(message) => SearchError::Invalid {
                path: path.clone(),
                message,
            },
            RankingDocumentError::Service(message) => SearchError::Api { message },
        })?;

        log::info!(
            "ranking for '{}' ({}): {} recipes",
            category_name,
            key,
            ranking.len()
        );
        Ok(ranking)
    }
}

/// Stand-in used when no ranking source is configured; every lookup fails
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRankingSource;

impl RecipeSearch for NoRankingSource {
    fn search(&self, _key: &SearchKey, _category_name: &str) -> Result<Ranking, SearchError> {
        Err(SearchError::Unavailable)
    }
}
