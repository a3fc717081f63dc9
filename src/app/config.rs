//! Application configuration
//!
//! Settings are layered: built-in defaults, then the config file, then
//! command-line flags.

use crate::approach::Selection;
use crate::config::GreeterConfig;
use crate::error::Result;
use crate::resources::ResourceLocator;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Root directory the scripted approach loads its script from;
    /// `None` uses the script compiled into the binary
    pub resource_dir: Option<PathBuf>,
    /// Approaches to run
    pub selection: Selection,
}

impl AppConfig {
    pub fn new(verbose: u8) -> Self {
        Self {
            verbose,
            resource_dir: None,
            selection: Selection::All,
        }
    }

    /// Overlay the values present in a config file
    pub fn apply_file(mut self, file: &GreeterConfig) -> Result<Self> {
        if let Some(dir) = &file.resources.dir {
            self.resource_dir = Some(dir.clone());
        }
        if let Some(selection) = file.selection()? {
            self.selection = selection;
        }
        Ok(self)
    }

    pub fn with_resource_dir(mut self, dir: PathBuf) -> Self {
        self.resource_dir = Some(dir);
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn locator(&self) -> ResourceLocator {
        match &self.resource_dir {
            Some(dir) => ResourceLocator::new(dir),
            None => ResourceLocator::bundled(),
        }
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approach::ApproachKind;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.selection, Selection::All);
        assert_eq!(config.locator(), ResourceLocator::bundled());
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(AppConfig::new(1).log_level(), "debug");
        assert_eq!(AppConfig::new(2).log_level(), "trace");
        assert_eq!(AppConfig::new(9).log_level(), "trace");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = GreeterConfig::from_toml_str(
            "[resources]\ndir = \"/srv/res\"\n[output]\napproach = \"script\"\n",
        )
        .unwrap();

        let config = AppConfig::new(0).apply_file(&file).unwrap();
        assert_eq!(config.resource_dir, Some(PathBuf::from("/srv/res")));
        assert_eq!(config.locator(), ResourceLocator::new("/srv/res"));
        assert_eq!(config.selection, Selection::Only(ApproachKind::Script));
    }

    #[test]
    fn test_flags_override_file() {
        let file = GreeterConfig::from_toml_str(
            "[resources]\ndir = \"/srv/res\"\n[output]\napproach = \"script\"\n",
        )
        .unwrap();

        let config = AppConfig::new(0)
            .apply_file(&file)
            .unwrap()
            .with_resource_dir(PathBuf::from("/tmp/other"))
            .with_selection(Selection::Only(ApproachKind::Method));

        assert_eq!(config.resource_dir, Some(PathBuf::from("/tmp/other")));
        assert_eq!(config.selection, Selection::Only(ApproachKind::Method));
    }
}
