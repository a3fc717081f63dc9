//! Error handling utilities

use crate::error::Error;
use tracing::error;

/// Exit code for anything not caused by bad configuration
pub const GENERAL_ERROR: i32 = 1;

/// Exit code for invalid configuration files or values
pub const CONFIG_ERROR: i32 = 2;

/// Pick the process exit code for an error
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<Error>() {
        Some(Error::Config(_) | Error::Toml(_)) => CONFIG_ERROR,
        _ => GENERAL_ERROR,
    }
}

/// Report a fatal error and exit.
///
/// With `verbose >= 1` the full error chain is printed as well.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);
    eprintln!("Error: {error}");

    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(exit_code(&error))
}
