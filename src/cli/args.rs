//! CLI argument structures

use crate::approach::Selection;
use clap::Parser;
use std::path::PathBuf;

/// Print the queue greeting using each formatting approach
#[derive(Parser, Debug)]
#[command(name = "greeter")]
#[command(about = "greeter - Format the queue greeting four equivalent ways", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Name to greet
    pub name: String,

    /// Position in the queue
    #[arg(allow_negative_numbers = true)]
    pub queue_num: i32,

    /// Approach to use: method, bi-function, currying, script or all
    #[arg(short, long, value_name = "APPROACH")]
    pub approach: Option<Selection>,

    /// Root directory for script resources
    #[arg(short, long, value_name = "DIR")]
    pub resources: Option<PathBuf>,

    /// Path to configuration file (defaults to ./greeter.toml when present)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
