//! Browse Use Case
//!
//! Runs the interactive category browser.
//!
//! This module handles:
//! - Rendering the menu for the current category before each prompt
//! - Feeding each input line to the navigator
//! - Running ranking lookups the navigator asks for and reporting the result

mod result;
mod use_case;


pub use result::{BrowseResult, SessionEnd};
pub use use_case::BrowseUseCase;
