//! CLI argument parsing and execution

pub mod args;
pub mod router;

pub use args::Cli;
pub use router::{execute, render, resolve_config};
