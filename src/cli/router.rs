//! Command execution
//!
//! Resolves the layered configuration and prints the message of every
//! selected approach.

use crate::app::AppConfig;
use crate::approach::Selection;
use crate::cli::args::Cli;
use crate::config::{GreeterConfig, DEFAULT_CONFIG_FILE};
use crate::resources::ResourceLocator;
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// Build the effective configuration from defaults, config file and flags
pub fn resolve_config(cli: &Cli) -> Result<AppConfig> {
    let file = match &cli.config {
        Some(path) => GreeterConfig::load(path)?,
        None => GreeterConfig::load_optional(Path::new(DEFAULT_CONFIG_FILE))?,
    };

    let mut config = AppConfig::new(cli.verbose).apply_file(&file)?;
    if let Some(dir) = &cli.resources {
        config = config.with_resource_dir(dir.clone());
    }
    if let Some(selection) = cli.approach {
        config = config.with_selection(selection);
    }

    match &config.resource_dir {
        Some(dir) => debug!(
            "Using resources from {} for {:?}",
            dir.display(),
            config.selection
        ),
        None => debug!("Using bundled resources for {:?}", config.selection),
    }
    Ok(config)
}

/// Render the output for the selected approaches.
///
/// A single approach prints its bare message; `all` prints each message
/// under a `== <approach> ==` header, separated by blank lines.
pub fn render(
    selection: Selection,
    locator: &ResourceLocator,
    name: &str,
    queue_num: i32,
) -> String {
    match selection {
        Selection::Only(kind) => kind.build_with(locator).get_message(name, queue_num),
        Selection::All => selection
            .kinds()
            .into_iter()
            .map(|kind| {
                let message = kind.build_with(locator).get_message(name, queue_num);
                format!("== {kind} ==\n{message}")
            })
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

/// Execute the CLI
pub fn execute(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let output = render(config.selection, &config.locator(), &cli.name, cli.queue_num);
    println!("{output}");
    Ok(())
}
