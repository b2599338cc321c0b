//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--catalog, --config, --color, --verbose) are inherited by all subcommands
//! - Running without a subcommand starts the interactive browser

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::ui::width::WidthMode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Recipe Explorer - browse a tiered recipe category catalog
#[derive(Parser, Debug)]
#[command(name = "recipe-explorer")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Commands at the prompt: <n> open, s <n> search, s search here, u up, q quit.")]
pub struct Cli {
    /// Category-list JSON document
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Config file (defaults to <config dir>/recipe-explorer/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory of <search key>.json ranking documents
    #[arg(short, long, value_name = "DIR")]
    pub rankings: Option<PathBuf>,

    /// Number of columns in the category listing
    #[arg(long, value_name = "N", value_parser = parse_columns)]
    pub columns: Option<usize>,

    /// How label widths are measured when aligning columns
    #[arg(long, value_name = "MODE", value_enum)]
    pub width_mode: Option<WidthMode>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the whole category hierarchy, indented by depth
    Tree {
        /// Show each category's id and search key
        #[arg(short, long)]
        keys: bool,
    },
}

fn parse_columns(value: &str) -> Result<usize, String> {
    let n: usize = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a column count", value))?;
    Ok(n.max(1))
}
