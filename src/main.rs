//! Recipe Explorer CLI
//!
//! Usage: recipe-explorer [OPTIONS] [COMMAND]
//!
//! Commands:
//!   (none)  Browse the catalog interactively
//!   tree    Print the category hierarchy

mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use recipe_explorer::config;
use recipe_explorer::presentation::{Cli, Commands};
use recipe_explorer::ui::context::UiContext;
use recipe_explorer::ui::views::render_config_warnings;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let pinned = init_logging(cli.verbose);

    let loaded = config::load_or_default(cli.config.as_deref()).context("failed to load config")?;
    if !pinned {
        log::set_max_level(loaded.config.output.verbosity.level_filter());
    }
    if let Some(source) = &loaded.source {
        log::debug!("config loaded from {}", source.display());
    }

    let mut config = loaded.config;
    commands::apply_cli_overrides(&cli, &mut config);
    let ui = UiContext::new(cli.color, &config);
    eprint!(
        "{}",
        render_config_warnings(&loaded.warnings, ui.color, ui.unicode)
    );

    match cli.command {
        None => commands::browse::cmd_browse(&config, &ui),
        Some(Commands::Tree { keys }) => commands::tree::cmd_tree(&config, &ui, keys),
    }
}

/// Start the stderr logger.
///
/// Returns true when the level is fixed by `-v` or `RUST_LOG`; otherwise the
/// config file's verbosity applies once it has been read.
fn init_logging(verbose: u8) -> bool {
    let from_env = std::env::var_os("RUST_LOG").is_some();

    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Trace).format_timestamp(None);
    if from_env {
        builder.parse_default_env();
    }
    builder.init();

    if !from_env {
        log::set_max_level(verbosity_filter(verbose));
    }
    from_env || verbose > 0
}

fn verbosity_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
