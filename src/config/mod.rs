//! Configuration file support
//!
//! An optional `greeter.toml` can point the scripted approach at another
//! resource root and pick the default approach:
//!
//! ```toml
//! [resources]
//! dir = "resources"
//!
//! [output]
//! approach = "script"
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use crate::approach::Selection;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;


/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "greeter.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GreeterConfig {
    pub resources: ResourcesConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourcesConfig {
    /// Root directory for script resources
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// `method`, `bi-function`, `currying`, `script` or `all`
    pub approach: Option<String>,
}

impl GreeterConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config file that must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;
        let mut config = Self::from_toml_str(&content)?;

        if let (Some(dir), Some(base)) = (&config.resources.dir, path.parent()) {
            if dir.is_relative() {
                config.resources.dir = Some(base.join(dir));
            }
        }

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load a config file if it exists, defaults otherwise
    pub fn load_optional(path: &Path) -> Result<Self> {
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// The configured approach selection, if any
    pub fn selection(&self) -> Result<Option<Selection>> {
        self.output
            .approach
            .as_deref()
            .map(|approach| approach.parse::<Selection>())
            .transpose()
    }
}
