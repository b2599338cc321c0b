//! Category entity
//!
//! A node of the recipe catalog. Categories arrive as flat records in three
//! tiers (coarse, medium, fine) and are linked to their parent by id.

use crate::domain::value_objects::SearchKey;

/// Id of the synthetic root that every top-level category hangs off
pub const ROOT_ID: &str = "0";

/// Display name of the synthetic root
pub const ROOT_NAME: &str = "Top level";

/// Coarseness level a record was listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Large,
    Medium,
    Small,
}

impl Tier {
    /// All tiers, coarse first
    pub const ALL: [Tier; 3] = [Tier::Large, Tier::Medium, Tier::Small];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Large => "large",
            Tier::Medium => "medium",
            Tier::Small => "small",
        }
    }
}

/// A category as delivered by the catalog source, before key derivation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCategoryRecord {
    pub id: String,
    pub name: String,
    pub parent_id: Option<String>,
    pub url: String,
}

impl RawCategoryRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        parent_id: Option<&str>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: parent_id.map(str::to_string),
            url: url.into(),
        }
    }
}

/// An immutable catalog category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: String,
    name: String,
    /// `None` only for the synthetic root
    parent_id: Option<String>,
    search_key: SearchKey,
}

impl Category {
    /// Build a category from a raw record.
    ///
    /// A missing or empty parent id attaches the category to the root.
    pub fn from_record(record: RawCategoryRecord) -> Self {
        let search_key = SearchKey::from_url(&record.url);
        let parent_id = record
            .parent_id
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| ROOT_ID.to_string());

        Self {
            id: record.id,
            name: record.name,
            parent_id: Some(parent_id),
            search_key,
        }
    }

    /// The synthetic root category
    pub fn root() -> Self {
        Self {
            id: ROOT_ID.to_string(),
            name: ROOT_NAME.to_string(),
            parent_id: None,
            search_key: SearchKey::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    pub fn search_key(&self) -> &SearchKey {
        &self.search_key
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Whether a ranking lookup can be made for this category
    pub fn is_searchable(&self) -> bool {
        self.search_key.is_searchable()
    }
}
