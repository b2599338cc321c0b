//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ExplorerError, ExplorerResult};
use crate::ui::width::WidthMode;

use super::types::{Config, Verbosity};

/// Prefix shared by every environment override
pub const ENV_PREFIX: &str = "RECIPE_EXPLORER_";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A resolved configuration and where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from (`None` for built-in defaults)
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ExplorerResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ExplorerError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration file, then apply environment overrides.
///
/// An explicit path must exist and parse. Without one, the user config
/// (`<config dir>/recipe-explorer/config.toml`) is used when present; a
/// broken user config is logged and skipped in favour of defaults.
pub fn load_or_default(explicit: Option<&Path>) -> ExplorerResult<LoadedConfig> {
    let get_env = |key: &str| std::env::var(key).ok();

    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok(LoadedConfig {
            config: with_env_overrides(config, get_env),
            source: Some(path.to_path_buf()),
            warnings,
        });
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            match load_with_warnings(&user_config) {
                Ok((config, warnings)) => {
                    return Ok(LoadedConfig {
                        config: with_env_overrides(config, get_env),
                        source: Some(user_config),
                        warnings,
                    });
                }
                Err(e) => log::warn!("ignoring user config: {}", e),
            }
        }
    }

    Ok(LoadedConfig {
        config: with_env_overrides(Config::default(), get_env),
        source: None,
        warnings: Vec::new(),
    })
}

/// `<config dir>/recipe-explorer/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("recipe-explorer").join("config.toml"))
}

/// Apply environment variable overrides (RECIPE_EXPLORER_* prefix).
///
/// Values that do not parse are logged and ignored.
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    let var = |name: &str| get_env(&format!("{}{}", ENV_PREFIX, name));

    if let Some(path) = var("CATALOG").filter(|v| !v.is_empty()) {
        config.catalog.path = Some(PathBuf::from(path));
    }

    if let Some(dir) = var("RANKINGS").filter(|v| !v.is_empty()) {
        config.search.rankings_dir = Some(PathBuf::from(dir));
    }

    if let Some(columns) = var("COLUMNS") {
        match columns.trim().parse::<usize>() {
            Ok(n) if n > 0 => config.output.columns = n,
            _ => log::warn!("ignoring {}COLUMNS={:?}", ENV_PREFIX, columns),
        }
    }

    if let Some(mode) = var("WIDTH_MODE") {
        match WidthMode::parse(&mode) {
            Some(mode) => config.output.width_mode = mode,
            None => log::warn!("ignoring {}WIDTH_MODE={:?}", ENV_PREFIX, mode),
        }
    }

    if let Some(verbosity) = var("VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "catalog",
        "path",
        "search",
        "rankings_dir",
        "output",
        "verbosity",
        "color",
        "unicode",
        "columns",
        "width_mode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
