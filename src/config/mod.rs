//! Configuration module
//!
//! Resolution order:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (RECIPE_EXPLORER_*)
//! 3. `--config <path>`, otherwise `<config dir>/recipe-explorer/config.toml`
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_or_default, user_config_path, with_env_overrides, ConfigWarning, LoadedConfig,
    ENV_PREFIX,
};
pub use types::{CatalogConfig, ColorMode, Config, OutputConfig, SearchConfig, Verbosity};
