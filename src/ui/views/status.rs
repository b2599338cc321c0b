//! One-line status messages printed between screens.

use crate::domain::entities::Category;
use crate::domain::ports::SearchError;
use crate::domain::services::{Outcome, SearchTrigger};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub const ALREADY_AT_TOP: &str = "Already at the top level.";
pub const INVALID_INPUT: &str = "Invalid input.";
pub const INVALID_NUMBER: &str = "Invalid number.";
pub const EXITING: &str = "Exiting.";
pub const ROOT_NOT_SEARCHABLE: &str = "The top level cannot be searched.";

/// Message for an outcome, if it has one.
///
/// Drilling and moving up say nothing; the next screen shows where the user
/// ended up.
pub fn outcome_message(outcome: &Outcome<'_>, supports_color: bool) -> Option<String> {
    let line = match outcome {
        Outcome::Drilled(_) | Outcome::MovedUp(_) => return None,
        Outcome::Search { target, trigger } => {
            ColoredText::info(searching_message(target, *trigger)).render(supports_color)
        }
        Outcome::NotSearchable(target) => {
            ColoredText::warning(not_searchable_message(target)).render(supports_color)
        }
        Outcome::AlreadyAtTop => ColoredText::warning(ALREADY_AT_TOP).render(supports_color),
        Outcome::InvalidInput => ColoredText::warning(INVALID_INPUT).render(supports_color),
        Outcome::InvalidNumber => ColoredText::warning(INVALID_NUMBER).render(supports_color),
        Outcome::Quit => ColoredText::plain(EXITING).render(supports_color),
    };
    Some(line)
}

fn searching_message(target: &Category, trigger: SearchTrigger) -> String {
    match trigger {
        SearchTrigger::LeafSelected => format!(
            "\n\"{}\" has no subcategories. Searching recipes...",
            target.name()
        ),
        SearchTrigger::Explicit | SearchTrigger::Current => {
            format!("\nSearching \"{}\"...", target.name())
        }
    }
}

fn not_searchable_message(target: &Category) -> String {
    if target.is_root() {
        ROOT_NOT_SEARCHABLE.to_string()
    } else {
        format!("\"{}\" has no search key and cannot be searched.", target.name())
    }
}

/// A failed ranking lookup
pub fn search_failure(error: &SearchError, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(format!("No results: {}", error)).render(supports_color)
    )
}
