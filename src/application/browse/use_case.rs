//! Browse Use Case
//!
//! Drives the navigator from a line-oriented reader.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use crate::domain::entities::{Category, CategoryTree};
use crate::domain::ports::RecipeSearch;
use crate::domain::services::{Navigator, Outcome};
use crate::domain::value_objects::Command;
use crate::error::{ExplorerError, ExplorerResult};
use crate::ui::context::UiContext;
use crate::ui::views::menu::PROMPT;
use crate::ui::views::status::{outcome_message, search_failure};
use crate::ui::views::{MenuView, RankingView};

use super::result::{BrowseResult, SessionEnd};

/// Browse use case - one interactive session over a built tree
pub struct BrowseUseCase<S>
where
    S: RecipeSearch,
{
    search: S,
    ui: UiContext,
}

impl<S> BrowseUseCase<S>
where
    S: RecipeSearch,
{
    pub fn new(search: S, ui: UiContext) -> Self {
        Self { search, ui }
    }

    /// Run the session until `q` or end of input.
    ///
    /// Search failures and undecodable lines are reported and the session
    /// continues; only I/O errors on the reader or writer end it early.
    pub fn execute<R, W>(
        &self,
        tree: &CategoryTree,
        mut input: R,
        mut output: W,
    ) -> ExplorerResult<BrowseResult>
    where
        R: BufRead,
        W: Write,
    {
        if tree.is_empty() {
            return Err(ExplorerError::EmptyCatalog);
        }

        let mut navigator = Navigator::new(tree);
        let mut result = BrowseResult::new();
        let mut buf = Vec::new();

        loop {
            write!(
                output,
                "{}",
                MenuView::new(&navigator, self.ui.layout).render(self.ui.color)
            )?;
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(output)?;
                log::info!("input closed; ending session");
                result.ended_by = SessionEnd::EndOfInput;
                break;
            }
            result.commands += 1;

            // Non-UTF-8 bytes become U+FFFD, which never parses as a command
            let line = String::from_utf8_lossy(&buf);
            if matches!(line, Cow::Owned(_)) {
                log::debug!("input line is not valid UTF-8");
            }
            let outcome = navigator.apply(Command::parse(&line));

            if let Some(message) = outcome_message(&outcome, self.ui.color) {
                writeln!(output, "{}", message)?;
            }

            match outcome {
                Outcome::Quit => {
                    result.ended_by = SessionEnd::Quit;
                    break;
                }
                Outcome::Search { target, .. } => {
                    if self.run_search(target, &mut output)? {
                        result.searches += 1;
                    } else {
                        result.failed_searches += 1;
                    }
                }
                Outcome::InvalidInput | Outcome::InvalidNumber => result.rejected += 1,
                Outcome::Drilled(_)
                | Outcome::MovedUp(_)
                | Outcome::AlreadyAtTop
                | Outcome::NotSearchable(_) => {}
            }
        }

        log::debug!(
            "session ended ({:?}): {} commands, {} searches, {} failed",
            result.ended_by,
            result.commands,
            result.searches,
            result.failed_searches
        );
        Ok(result)
    }

    /// Look up and print the ranking for `target`. Returns false on failure
    /// or when the ranking has no recipes.
    fn run_search<W: Write>(&self, target: &Category, output: &mut W) -> ExplorerResult<bool> {
        log::info!(
            "searching '{}' with key '{}'",
            target.name(),
            target.search_key()
        );

        match self.search.search(target.search_key(), target.name()) {
            Ok(ranking) => {
                write!(
                    output,
                    "{}",
                    RankingView::new(&ranking).render(self.ui.color, self.ui.unicode)
                )?;
                if ranking.is_empty() {
                    log::info!("ranking for '{}' is empty", target.search_key());
                }
                Ok(!ranking.is_empty())
            }
            Err(e) => {
                log::warn!("search for '{}' failed: {}", target.search_key(), e);
                writeln!(
                    output,
                    "{}",
                    search_failure(&e, self.ui.color, self.ui.unicode)
                )?;
                Ok(false)
            }
        }
    }
}
