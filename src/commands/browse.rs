//! Browse command handler

use std::io;

use anyhow::Result;

use recipe_explorer::application::BrowseUseCase;
use recipe_explorer::config::Config;
use recipe_explorer::presentation::factory::create_recipe_search;
use recipe_explorer::ui::context::UiContext;

pub fn cmd_browse(config: &Config, ui: &UiContext) -> Result<()> {
    let tree = super::load_catalog(config)?;
    let search = create_recipe_search(config.search.rankings_dir.clone());

    if !ui.caps.interactive_input {
        log::debug!("stdin is not a terminal; reading commands from a pipe");
    }

    let use_case = BrowseUseCase::new(search.as_ref(), *ui);
    let stdin = io::stdin();
    let result = use_case.execute(&tree, stdin.lock(), io::stdout().lock())?;

    log::info!(
        "{} commands, {} rankings shown, {} searches failed",
        result.commands,
        result.searches,
        result.failed_searches
    );
    Ok(())
}
