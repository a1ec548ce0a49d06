use crate::error::ConfigError;
use crate::sources::scanner::DEFAULT_MAX_DEPTH;
use directories::{BaseDirs, ProjectDirs};
use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ScanConfig {
    /// Replaces the built-in launcher directories when set.
    #[serde(default)]
    pub roots: Option<Vec<PathBuf>>,
    #[serde(default)]
    pub extra_roots: Vec<PathBuf>,
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    #[serde(default)]
    pub follow_links: bool,
}

fn default_max_depth() -> usize { DEFAULT_MAX_DEPTH }

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            roots: None,
            extra_roots: Vec::new(),
            max_depth: default_max_depth(),
            follow_links: false,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Where applications usually drop their launchers, in lookup order.
pub fn default_roots(home: Option<&Path>) -> Vec<PathBuf> {
    let mut roots = Vec::new();
    match home {
        Some(home) => {
            roots.push(home.join(".local/share/applications"));
            roots.push(home.join("Desktop"));
        }
        None => warn!("Unable to resolve the home directory, skipping per-user launchers"),
    }
    roots.push(PathBuf::from("/usr/share/applications"));
    roots.push(PathBuf::from("/usr/local/share/applications"));
    roots
}

impl ScanConfig {
    /// Final list of directories to scan, with `~/` expanded against `home`.
    pub fn resolve_roots(&self, home: Option<&Path>) -> Vec<PathBuf> {
        let mut roots = match &self.roots {
            Some(roots) => roots.iter().filter_map(|p| expand_home(p, home)).collect(),
            None => default_roots(home),
        };
        roots.extend(self.extra_roots.iter().filter_map(|p| expand_home(p, home)));
        roots
    }
}

fn expand_home(path: &Path, home: Option<&Path>) -> Option<PathBuf> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Some(path.to_path_buf());
    };
    match home {
        Some(home) => Some(home.join(rest)),
        None => {
            warn!("Dropping root {:?}: home directory unknown", path);
            None
        }
    }
}

pub fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

pub fn default_config_path() -> PathBuf {
    match ProjectDirs::from("org", "appfind", "appfind") {
        Some(dirs) => dirs.config_dir().join("config.toml"),
        None => PathBuf::from("config.toml"),
    }
}

/// Loads `path`, or the default config file when `path` is `None`.
///
/// A missing default file means defaults; a missing explicit file is an error.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let p = default_config_path();
            if !p.exists() {
                return Ok(Config::default());
            }
            p
        }
    };

    let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
        path: config_path.clone(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: config_path,
        source,
    })
}
