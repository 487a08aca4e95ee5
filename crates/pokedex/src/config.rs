//! Configuration file loading and command-line overrides
//!
//! Lookup order: `--config` / `POKEDEX_CONFIG`, then
//! `<config dir>/pokedex/config.toml` when it exists, then built-in defaults.
//! Flags given on the command line win over values from the file.

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use pokedex_core::pagination::PaginationConfig;
use serde::Deserialize;

use crate::prelude::*;

pub const DEFAULT_LIST_LIMIT: usize = 20;

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pagination: PaginationConfig,
    pub list: ListSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListSettings {
    /// Pokémon shown per page; zero is rejected when the file is parsed
    pub limit: NonZeroUsize,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            limit: NonZeroUsize::new(DEFAULT_LIST_LIMIT).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

/// Pagination flags shared by every subcommand that renders a page bar
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PaginationArgs {
    /// Pages always shown at the start
    #[arg(long, allow_negative_numbers = true)]
    pub first: Option<i64>,

    /// Pages always shown at the end
    #[arg(long, allow_negative_numbers = true)]
    pub last: Option<i64>,

    /// Pages shown on each side of the current page
    #[arg(long, allow_negative_numbers = true)]
    pub around: Option<i64>,

    /// Page count under which every page is shown
    #[arg(long, allow_negative_numbers = true)]
    pub max_visible: Option<i64>,
}

impl PaginationArgs {
    /// Apply the flags on top of `base`, validating the result
    pub fn resolve(&self, base: PaginationConfig) -> Result<PaginationConfig> {
        let config = PaginationConfig::new(
            self.first.unwrap_or(i64::from(base.first())),
            self.last.unwrap_or(i64::from(base.last())),
            self.around.unwrap_or(i64::from(base.around())),
            self.max_visible.unwrap_or(i64::from(base.max_visible())),
        )
        .map_err(Error::from)?;

        Ok(config)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|dir| dir.join("pokedex").join("config.toml"))
}

pub fn parse_settings(contents: &str) -> Result<Settings> {
    toml::from_str(contents).map_err(|e| Error::InvalidConfig(e.to_string()).into())
}

/// Load settings from `explicit`, or from the default location if present
///
/// An explicit path that cannot be read is an error; a missing default file is not.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.is_file() => path,
            _ => {
                debug!("No configuration file found, using defaults");
                return Ok(Settings::default());
            }
        },
    };

    debug!("Loading configuration from {}", path.display());

    let contents = fs::read_to_string(&path)
        .with_context(|| f!("Failed to read config file {}", path.display()))?;

    parse_settings(&contents).with_context(|| f!("Failed to parse {}", path.display()))
}
