//! Optional YAML configuration for the calculator binary.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::{Args, Verbosity};

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Configuration file structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub(crate) struct CliConfig {
    /// Default verbosity level
    #[serde(default)]
    pub verbosity: Option<Verbosity>,
    /// Where interactive history is kept
    #[serde(default)]
    pub history_file: Option<PathBuf>,
    /// Disable interactive history
    #[serde(default)]
    pub no_history: Option<bool>,
}

impl CliConfig {
    /// Default location: `<config dir>/polycalc/config.yaml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("polycalc");
            p.push("config.yaml");
            p
        })
    }

    /// Loads the configuration.
    ///
    /// An explicit path must exist. The default path is optional and a
    /// missing file there yields the default configuration.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::parse(&contents).map_err(|source| ConfigError::Parse { path, source })
    }

    fn parse(contents: &str) -> Result<Self, serde_yaml::Error> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }

    /// Merge configuration with command-line arguments
    pub fn merge_with_args(&self, args: &mut Args) {
        // Only apply config if arg is not explicitly set
        if args.verbosity == Verbosity::Normal {
            if let Some(v) = self.verbosity {
                args.verbosity = v;
            }
        }

        if args.history_file.is_none() {
            args.history_file.clone_from(&self.history_file);
        }

        if !args.no_history && self.no_history == Some(true) {
            args.no_history = true;
        }
    }
}
