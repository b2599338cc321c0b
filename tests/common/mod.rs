//! Common test utilities for recipe-explorer CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with a temp directory
//! - Fixtures: Catalog and ranking documents

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
