//! Navigator - the category browsing state machine.
//!
//! Tracks the current position in a `CategoryTree` and interprets one
//! `Command` at a time. The navigator performs no I/O: when a command calls
//! for a ranking lookup it hands the target back in an `Outcome` and the
//! caller runs the search.

use crate::domain::entities::{Category, CategoryTree};
use crate::domain::value_objects::{Choice, Command};

/// Which menu applies at the current position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The current category has children to pick from
    Branch,
    /// Nothing below the current category
    Leaf,
}

/// Why a search was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTrigger {
    /// `s <n>` on a listed child
    Explicit,
    /// A bare number picked a child that has no subcategories
    LeafSelected,
    /// `s` on a category without subcategories
    Current,
}

/// Result of applying one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// Moved down into the category
    Drilled(&'a Category),
    /// A ranking lookup should be made for the category; position unchanged
    Search {
        target: &'a Category,
        trigger: SearchTrigger,
    },
    /// The category has no usable search key; position unchanged
    NotSearchable(&'a Category),
    /// Moved up; holds the new current category
    MovedUp(&'a Category),
    /// `u` at the root
    AlreadyAtTop,
    /// Input could not be interpreted in the current view
    InvalidInput,
    /// A number outside `1..=children`
    InvalidNumber,
    /// Session should end
    Quit,
}

/// Browsing state over a borrowed tree
#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    tree: &'a CategoryTree,
    current: &'a Category,
}

impl<'a> Navigator<'a> {
    /// Start at the synthetic root
    pub fn new(tree: &'a CategoryTree) -> Self {
        Self {
            tree,
            current: tree.root(),
        }
    }

    pub fn current(&self) -> &'a Category {
        self.current
    }

    pub fn current_id(&self) -> &'a str {
        self.current.id()
    }

    /// Children of the current category in display order
    pub fn children(&self) -> &'a [Category] {
        self.tree.children(self.current.id())
    }

    pub fn view(&self) -> View {
        if self.children().is_empty() {
            View::Leaf
        } else {
            View::Branch
        }
    }

    /// Apply a command and report what happened
    pub fn apply(&mut self, command: Command) -> Outcome<'a> {
        let outcome = match (self.view(), command) {
            (_, Command::Quit) => Outcome::Quit,
            (_, Command::Up) => self.up(),
            (View::Branch, Command::Select(choice)) => self.select(choice),
            (View::Branch, Command::SearchChild(choice)) => self.search_child(choice),
            (View::Leaf, Command::SearchCurrent) => {
                search_outcome(self.current, SearchTrigger::Current)
            }
            (View::Branch, Command::SearchCurrent)
            | (View::Leaf, Command::Select(_))
            | (View::Leaf, Command::SearchChild(_)) => Outcome::InvalidInput,
        };

        log::debug!(
            "navigator: {:?} -> {:?} (now at '{}')",
            command,
            outcome_label(&outcome),
            self.current.id()
        );
        outcome
    }

    fn up(&mut self) -> Outcome<'a> {
        match self.tree.parent_of(self.current.id()) {
            Some(parent) => {
                self.current = parent;
                Outcome::MovedUp(parent)
            }
            _ => Outcome::AlreadyAtTop,
        }
    }

    fn select(&mut self, choice: Choice) -> Outcome<'a> {
        let target = match self.pick(choice) {
            Ok(target) => target,
            Err(outcome) => return outcome,
        };

        if self.tree.has_children(target.id()) {
            self.current = target;
            Outcome::Drilled(target)
        } else {
            search_outcome(target, SearchTrigger::LeafSelected)
        }
    }

    fn search_child(&self, choice: Choice) -> Outcome<'a> {
        match self.pick(choice) {
            Ok(target) => search_outcome(target, SearchTrigger::Explicit),
            Err(outcome) => outcome,
        }
    }

    fn pick(&self, choice: Choice) -> Result<&'a Category, Outcome<'a>> {
        let children = self.children();
        match choice {
            Choice::Malformed => Err(Outcome::InvalidInput),
            Choice::Number(_) => choice
                .position(children.len())
                .map(|idx| &children[idx])
                .ok_or(Outcome::InvalidNumber),
        }
    }
}

fn search_outcome(target: &Category, trigger: SearchTrigger) -> Outcome<'_> {
    if target.is_searchable() {
        Outcome::Search { target, trigger }
    } else {
        Outcome::NotSearchable(target)
    }
}

fn outcome_label(outcome: &Outcome<'_>) -> &'static str {
    match outcome {
        Outcome::Drilled(_) => "drilled",
        Outcome::Search { .. } => "search",
        Outcome::NotSearchable(_) => "not-searchable",
        Outcome::MovedUp(_) => "moved-up",
        Outcome::AlreadyAtTop => "already-at-top",
        Outcome::InvalidInput => "invalid-input",
        Outcome::InvalidNumber => "invalid-number",
        Outcome::Quit => "quit",
    }
}
