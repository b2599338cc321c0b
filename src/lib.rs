//! Recipe Explorer - terminal browser for tiered recipe category catalogs
//!
//! A flat category listing (large, medium and small tiers, each entry naming
//! its parent) is assembled into a tree once at startup. The user then walks
//! the tree from a numbered menu and asks for the ranked recipes of any
//! category along the way.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{Category, CategoryTree, RawCategoryRecord, Ranking};
pub use domain::value_objects::{Command, SearchKey};
pub use error::{ExplorerError, ExplorerResult};
