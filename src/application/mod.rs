//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `load_tree` - Fetch the category listing and build the hierarchy
//! - `BrowseUseCase` - Interactive menu loop with ranking lookups

pub mod browse;
mod catalog;

pub use browse::{BrowseResult, BrowseUseCase, SessionEnd};
pub use catalog::load_tree;
