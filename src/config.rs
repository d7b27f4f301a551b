//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/nodewalk/nodewalk.toml`
//! 3. Local config: `<project_dir>/.nodewalk.toml`
//! 4. Environment variables: `NODEWALK_*` prefix, `__` between nested keys

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::domain::{expand_env_vars, IslandSearch};

/// How level and digit sequences are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputStyle {
    /// One line per level, values separated by spaces
    #[default]
    Plain,
    /// Nested list notation, e.g. `[[1],[2,3]]`
    Bracketed,
}

impl std::str::FromStr for OutputStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(OutputStyle::Plain),
            "bracketed" => Ok(OutputStyle::Bracketed),
            other => Err(format!("unknown output style: {other}")),
        }
    }
}

/// Island counting settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IslandsConfig {
    /// Flood-fill strategy
    pub search: IslandSearch,
}

/// Level-order settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LevelsConfig {
    /// Render the tree before printing its levels
    pub show_tree: bool,
}

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub style: OutputStyle,
}

/// Raw settings for intermediate parsing (every field optional to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub input_dir: Option<PathBuf>,
    pub islands: RawIslandsConfig,
    pub levels: RawLevelsConfig,
    pub output: RawOutputConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawIslandsConfig {
    pub search: Option<IslandSearch>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawLevelsConfig {
    pub show_tree: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawOutputConfig {
    pub style: Option<OutputStyle>,
}

/// Unified configuration for nodewalk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Base directory for relative `--file` inputs (default: current directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_dir: Option<PathBuf>,
    pub islands: IslandsConfig,
    pub levels: LevelsConfig,
    pub output: OutputConfig,
}

/// Get the XDG config directory for nodewalk.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "nodewalk").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("nodewalk.toml"))
}

/// Get the path to the local config file in a project directory.
pub fn local_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".nodewalk.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Resolve a possibly relative input path against `input_dir`.
    pub fn resolve_input(&self, path: &Path) -> PathBuf {
        let expanded = PathBuf::from(expand_env_vars(&path.to_string_lossy()));
        match &self.input_dir {
            Some(dir) if expanded.is_relative() => dir.join(expanded),
            _ => expanded,
        }
    }

    fn expand_paths(&mut self) {
        if let Some(dir) = &self.input_dir {
            self.input_dir = Some(PathBuf::from(expand_env_vars(&dir.to_string_lossy())));
        }
    }

    /// Overlay wins wherever it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            input_dir: overlay
                .input_dir
                .clone()
                .or_else(|| self.input_dir.clone()),
            islands: IslandsConfig {
                search: overlay.islands.search.unwrap_or(self.islands.search),
            },
            levels: LevelsConfig {
                show_tree: overlay.levels.show_tree.unwrap_or(self.levels.show_tree),
            },
            output: OutputConfig {
                style: overlay.output.style.unwrap_or(self.output.style),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `project_dir` - Optional directory holding a local `.nodewalk.toml`
    #[instrument(level = "debug")]
    pub fn load(project_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(dir) = project_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("local config: {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        current = Self::apply_env_overrides(current, Self::env_source())?;
        current.expand_paths();

        Ok(current)
    }

    fn env_source() -> Environment {
        Environment::with_prefix("NODEWALK")
            .prefix_separator("_")
            .separator("__")
    }

    /// Apply NODEWALK_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("input_dir") {
            settings.input_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("islands.search") {
            settings.islands.search = val.parse().map_err(|e| ApplicationError::Config {
                message: format!("NODEWALK_ISLANDS__SEARCH: {e}"),
            })?;
        }
        if let Ok(val) = config.get_string("levels.show_tree") {
            settings.levels.show_tree = parse_flag(&val).ok_or_else(|| ApplicationError::Config {
                message: format!("NODEWALK_LEVELS__SHOW_TREE: not a boolean: {val}"),
            })?;
        }
        if let Ok(val) = config.get_string("output.style") {
            settings.output.style = val.parse().map_err(|e| ApplicationError::Config {
                message: format!("NODEWALK_OUTPUT__STYLE: {e}"),
            })?;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# nodewalk configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/nodewalk/nodewalk.toml
#   Local:  <project_dir>/.nodewalk.toml
#   Env:    NODEWALK_* environment variables, e.g. NODEWALK_ISLANDS__SEARCH=breadth-first

# Base directory for relative --file inputs (~ and $VAR are expanded)
# input_dir = "~/puzzles"

[islands]
# Flood fill used to explore an island: "depth-first" or "breadth-first"
# search = "depth-first"

[levels]
# Draw the tree before printing its levels
# show_tree = false

[output]
# "plain" (one line per level) or "bracketed" ([[1],[2,3]])
# style = "plain"
"#
        .to_string()
    }
}

fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
