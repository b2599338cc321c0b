//! CategorySource port
//!
//! Supplies the flat category listing a tree is built from.

use crate::domain::entities::RawCategoryRecord;
use crate::error::ExplorerResult;

/// A source of catalog category records.
///
/// Implementations return records coarse tier first, each tier in the order
/// the catalog listed them.
pub trait CategorySource {
    fn load_records(&self) -> ExplorerResult<Vec<RawCategoryRecord>>;
}

impl<T: CategorySource + ?Sized> CategorySource for &T {
    fn load_records(&self) -> ExplorerResult<Vec<RawCategoryRecord>> {
        (**self).load_records()
    }
}
