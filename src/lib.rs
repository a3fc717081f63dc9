//! # Greeter
//!
//! Four interchangeable ways of formatting the same queue greeting.
//!
//! ## Usage
//!
//! ```bash
//! greeter <NAME> <QUEUE_NUM> [--approach method|bi-function|currying|script|all]
//! ```
//!
//! ## Modules
//!
//! - `approach` - The `Approach` trait and its four implementations
//! - `message` - The six-line greeting template
//! - `resources` - Lookup of script resources by logical name
//! - `config` - Optional `greeter.toml` configuration file
//! - `app` - Configuration layering, logging and fatal error reporting
//! - `cli` - Argument parsing and execution for the `greeter` binary
pub mod app;
pub mod approach;
pub mod cli;
pub mod config;
pub mod error;
pub mod message;
pub mod resources;

pub use approach::{
    Approach, ApproachKind, BiFunctionApproach, FunctionCurryingApproach, MethodApproach,
    ScriptApproach,
};
pub use resources::ResourceLocator;
