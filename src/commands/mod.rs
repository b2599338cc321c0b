//! Command handlers for the binary

pub mod browse;
pub mod tree;

use std::path::PathBuf;

use anyhow::{Context, Result};

use recipe_explorer::application::load_tree;
use recipe_explorer::config::Config;
use recipe_explorer::presentation::factory::create_category_source;
use recipe_explorer::presentation::Cli;
use recipe_explorer::CategoryTree;

/// Apply command-line overrides on top of file and environment settings
pub fn apply_cli_overrides(cli: &Cli, config: &mut Config) {
    if let Some(path) = &cli.catalog {
        config.catalog.path = Some(path.clone());
    }
    if let Some(dir) = &cli.rankings {
        config.search.rankings_dir = Some(dir.clone());
    }
    if let Some(columns) = cli.columns {
        config.output.columns = columns;
    }
    if let Some(mode) = cli.width_mode {
        config.output.width_mode = mode;
    }
}

fn catalog_path(config: &Config) -> Result<PathBuf> {
    config.catalog.path.clone().context(
        "no catalog given: pass --catalog <PATH>, set RECIPE_EXPLORER_CATALOG, \
         or add [catalog] path to the config file",
    )
}

/// Read the configured catalog and build the category tree
pub fn load_catalog(config: &Config) -> Result<CategoryTree> {
    let path = catalog_path(config)?;
    let source = create_category_source(&path);
    let tree = load_tree(&source)
        .with_context(|| format!("failed to load catalog {}", path.display()))?;
    log::info!("catalog ready: {} categories", tree.len());
    Ok(tree)
}
