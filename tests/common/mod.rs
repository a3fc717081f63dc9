//! Common test utilities and helpers

#![allow(dead_code)]

use greeter::approach::script::SCRIPT_RESOURCE;
use greeter::{Approach, ApproachKind, ResourceLocator};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary resource root, removed when dropped
pub struct TestResources {
    temp_dir: TempDir,
}

impl TestResources {
    /// An empty resource root: the script resource is absent
    pub fn empty() -> Self {
        Self {
            temp_dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// A resource root holding `script` as the message script
    pub fn with_script(script: &str) -> Self {
        let resources = Self::empty();
        let path = resources.path().join(SCRIPT_RESOURCE);
        fs::create_dir_all(path.parent().expect("script has a parent dir"))
            .expect("create scripts dir");
        fs::write(path, script).expect("write script");
        resources
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn locator(&self) -> ResourceLocator {
        ResourceLocator::new(self.path())
    }
}

/// Every approach, built against the bundled resources
pub fn all_approaches() -> Vec<(ApproachKind, Box<dyn Approach>)> {
    ApproachKind::ALL
        .into_iter()
        .map(|kind| (kind, kind.build()))
        .collect()
}

/// The approaches that never touch the filesystem
pub fn in_process_approaches() -> Vec<(ApproachKind, Box<dyn Approach>)> {
    all_approaches()
        .into_iter()
        .filter(|(kind, _)| *kind != ApproachKind::Script)
        .collect()
}
