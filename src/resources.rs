//! Resource lookup by logical name
//!
//! Resources are addressed by slash-separated names, the way a classpath
//! resource is addressed relative to its jar. The bundled resources are
//! compiled into the binary; a directory root serves resources from disk.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Resources compiled into the binary, by logical name
const BUNDLED: &[(&str, &str)] = &[(
    "scripts/create_message.tera",
    include_str!("../resources/scripts/create_message.tera"),
)];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Root {
    Bundled,
    Directory(PathBuf),
}

/// Resolves logical resource names to their content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocator {
    root: Root,
}

impl ResourceLocator {
    /// Create a locator reading files under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Root::Directory(root.into()),
        }
    }

    /// Locator for the resources compiled into the binary
    pub fn bundled() -> Self {
        Self { root: Root::Bundled }
    }

    /// Read a resource as UTF-8 text.
    ///
    /// Empty names, absolute names and names with `..` components never
    /// resolve.
    pub fn load(&self, name: &str) -> Result<String> {
        let relative = Path::new(name);
        let escapes_root = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if name.is_empty() || escapes_root {
            return Err(Error::NotFound(format!("Invalid resource name '{name}'")));
        }

        match &self.root {
            Root::Bundled => {
                debug!("Loading bundled resource '{}'", name);
                BUNDLED
                    .iter()
                    .find(|(bundled, _)| *bundled == name)
                    .map(|(_, content)| content.to_string())
                    .ok_or_else(|| Error::NotFound(format!("No bundled resource '{name}'")))
            }
            Root::Directory(dir) => {
                let path = dir.join(relative);
                debug!("Loading resource '{}' from {}", name, path.display());
                fs::read_to_string(&path).map_err(Error::Io)
            }
        }
    }
}

impl Default for ResourceLocator {
    fn default() -> Self {
        Self::bundled()
    }
}
