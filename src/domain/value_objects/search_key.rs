//! Search key value object
//!
//! The catalog identifies a category for ranking lookups by the last path
//! segment of its canonical URL, e.g. `30-122` for
//! `https://recipe.example.com/category/30-122/?l2-id=4`.

use std::fmt;

/// Catalog-specific identifier used to request ranked recipes for a category.
///
/// An empty key means the category cannot be searched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchKey(String);

impl SearchKey {
    /// Wrap an already-derived key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Derive the key from a category URL.
    ///
    /// Drops everything from the first `?`, then one trailing `/`, then keeps
    /// whatever follows the last remaining `/`.
    pub fn from_url(url: &str) -> Self {
        let without_query = match url.find('?') {
            Some(idx) => &url[..idx],
            None => url,
        };
        let trimmed = without_query.strip_suffix('/').unwrap_or(without_query);
        let key = match trimmed.rfind('/') {
            Some(idx) => &trimmed[idx + 1..],
            None => trimmed,
        };
        Self(key.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a ranking lookup can be made with this key
    pub fn is_searchable(&self) -> bool {
        !self.0.is_empty()
    }
}

impl AsRef<str> for SearchKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
