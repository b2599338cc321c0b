//! Catalog loading use case
//!
//! Fetches the full category listing once and builds the tree every
//! session reads from.

use crate::domain::entities::CategoryTree;
use crate::domain::ports::CategorySource;
use crate::error::{ExplorerError, ExplorerResult};

/// Load every record from `source` and build the hierarchy.
///
/// An empty listing is an error: there is nothing to navigate.
pub fn load_tree<S: CategorySource + ?Sized>(source: &S) -> ExplorerResult<CategoryTree> {
    let records = source.load_records()?;
    let tree = CategoryTree::build(records);

    if tree.is_empty() {
        return Err(ExplorerError::EmptyCatalog);
    }

    Ok(tree)
}
