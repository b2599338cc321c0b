//! Category listing read from a JSON document on disk.
//!
//! The document has the shape the catalog service answers a category-list
//! request with:
//!
//! ```json
//! { "result": { "large": [...], "medium": [...], "small": [...] } }
//! ```
//!
//! Each entry carries `categoryId`, `categoryName`, `parentCategoryId`
//! (absent for the coarse tier) and `categoryUrl`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::{RawCategoryRecord, Tier};
use crate::domain::ports::CategorySource;
use crate::error::{ExplorerError, ExplorerResult};

use super::wire::{opt_string_or_number, string_or_number};

#[derive(Debug, Deserialize)]
struct CategoryListResponse {
    #[serde(default)]
    result: Option<CategoryListResult>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CategoryListResult {
    #[serde(default)]
    large: Option<Vec<ApiCategory>>,
    #[serde(default)]
    medium: Option<Vec<ApiCategory>>,
    #[serde(default)]
    small: Option<Vec<ApiCategory>>,
}

impl CategoryListResult {
    fn tier(&mut self, tier: Tier) -> Vec<ApiCategory> {
        let slot = match tier {
            Tier::Large => &mut self.large,
            Tier::Medium => &mut self.medium,
            Tier::Small => &mut self.small,
        };
        slot.take().unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiCategory {
    #[serde(deserialize_with = "string_or_number")]
    category_id: String,
    category_name: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    parent_category_id: Option<String>,
    #[serde(default)]
    category_url: String,
}

impl From<ApiCategory> for RawCategoryRecord {
    fn from(api: ApiCategory) -> Self {
        RawCategoryRecord {
            id: api.category_id,
            name: api.category_name,
            parent_id: api.parent_category_id.filter(|p| !p.is_empty()),
            url: api.category_url,
        }
    }
}

/// Decode a category-list document into records, coarse tier first.
///
/// Returns the message to report when the document cannot be used.
pub fn parse_category_list(json: &str) -> Result<Vec<RawCategoryRecord>, String> {
    let response: CategoryListResponse =
        serde_json::from_str(json).map_err(|e| e.to_string())?;

    let mut result = match response.result {
        Some(result) => result,
        None => {
            let message = response
                .error_description
                .or(response.error)
                .unwrap_or_else(|| "document has no 'result' object".to_string());
            return Err(message);
        }
    };

    let mut records = Vec::new();
    for tier in Tier::ALL {
        let entries = result.tier(tier);
        log::debug!("catalog tier {}: {} categories", tier.as_str(), entries.len());
        records.extend(entries.into_iter().map(RawCategoryRecord::from));
    }
    Ok(records)
}

/// Category-list JSON file
#[derive(Debug, Clone)]
pub struct JsonCatalogFile {
    path: PathBuf,
}

impl JsonCatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CategorySource for JsonCatalogFile {
    fn load_records(&self) -> ExplorerResult<Vec<RawCategoryRecord>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ExplorerError::CatalogNotFound {
                path: self.path.clone(),
            },
            _ => ExplorerError::Io(e),
        })?;

        let records =
            parse_category_list(&content).map_err(|message| ExplorerError::InvalidCatalog {
                path: self.path.clone(),
                message,
            })?;

        log::info!(
            "loaded {} category records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}
