//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Choosing the infrastructure behind each port
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates collaborators with proper dependencies (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
