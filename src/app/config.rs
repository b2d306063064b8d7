//! User configuration (`config.toml`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{AppError, Locations};

/// Application-wide configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub execution: ExecutionConfig,
    pub templates: TemplatesConfig,
    pub locations: LocationsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExecutionConfig {
    /// Overwrite files that already exist.
    pub overwrite: bool,
    /// Do not run external commands.
    pub skip_commands: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Directory whose `*.j2` files override the built-in templates.
    pub dir: Option<PathBuf>,
}

/// Overrides for the standard user folders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocationsConfig {
    pub desktop: Option<PathBuf>,
    pub downloads: Option<PathBuf>,
    pub documents: Option<PathBuf>,
}

impl Config {
    /// Resolve base directories, using `$HOME` for folders not overridden.
    ///
    /// Without `$HOME` the standard folders resolve under `current`, so runs
    /// that only use the current or a custom directory still work.
    pub fn locations(&self, current: PathBuf) -> Result<Locations, AppError> {
        let home = match home_dir() {
            Ok(home) => home,
            Err(_) => {
                tracing::warn!(
                    current = %current.display(),
                    "HOME is not set; standard folders resolve under the current directory"
                );
                current.clone()
            }
        };
        let mut locations = Locations::under_home(current, &home);
        if let Some(desktop) = &self.locations.desktop {
            locations.desktop = desktop.clone();
        }
        if let Some(downloads) = &self.locations.downloads {
            locations.downloads = downloads.clone();
        }
        if let Some(documents) = &self.locations.documents {
            locations.documents = documents.clone();
        }
        Ok(locations)
    }
}

/// Parse configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<Config, AppError> {
    Ok(toml::from_str(content)?)
}

/// `$HOME/.config/plinth/config.toml`.
pub fn default_config_path() -> Result<PathBuf, AppError> {
    Ok(home_dir()?.join(".config").join("plinth").join("config.toml"))
}

/// Load the explicit config file, else the default one if present, else defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => match default_config_path() {
            Ok(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        },
    };

    tracing::debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}

fn home_dir() -> Result<PathBuf, AppError> {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .ok_or_else(|| AppError::config_error("HOME environment variable not set"))
}
