//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod command;
mod search_key;

pub use command::{Choice, Command};
pub use search_key::SearchKey;
