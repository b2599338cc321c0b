//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `catalog` - Category listing from a JSON document
//! - `ranking` - Ranking lookups from a directory of JSON documents

pub mod catalog;
pub mod ranking;
mod wire;

pub use catalog::{parse_category_list, JsonCatalogFile};
pub use ranking::{parse_ranking, JsonRankingDir, NoRankingSource};
