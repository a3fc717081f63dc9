//! Interchangeable ways of producing the queue greeting
//!
//! Every approach implements [`Approach`] and, for the same input, starts its
//! message with `Hello {name}, you're number {queue_num}`:
//!
//! - `method` - [`MethodApproach`], a plain function call
//! - `bi-function` - [`BiFunctionApproach`], a stored two-argument function value
//! - `currying` - [`FunctionCurryingApproach`], a function returning a function
//! - `script` - [`ScriptApproach`], an external template evaluated with named bindings

pub mod bi_function;
pub mod currying;
pub mod method;
pub mod script;

pub use bi_function::BiFunctionApproach;
pub use currying::FunctionCurryingApproach;
pub use method::MethodApproach;
pub use script::{ScriptApproach, ScriptError};

use crate::error::{Error, Result};
use crate::resources::ResourceLocator;
use std::fmt;
use std::str::FromStr;

/// A way of producing the greeting message
pub trait Approach: Send + Sync {
    /// Build the greeting for `name` holding queue number `queue_num`
    fn get_message(&self, name: &str, queue_num: i32) -> String;
}

/// The four approaches, by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApproachKind {
    Method,
    BiFunction,
    Currying,
    Script,
}

impl ApproachKind {
    pub const ALL: [ApproachKind; 4] = [
        ApproachKind::Method,
        ApproachKind::BiFunction,
        ApproachKind::Currying,
        ApproachKind::Script,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApproachKind::Method => "method",
            ApproachKind::BiFunction => "bi-function",
            ApproachKind::Currying => "currying",
            ApproachKind::Script => "script",
        }
    }

    /// Build the approach, scripts resolved from the bundled resources
    pub fn build(self) -> Box<dyn Approach> {
        self.build_with(&ResourceLocator::bundled())
    }

    /// Build the approach, scripts resolved through `locator`
    pub fn build_with(self, locator: &ResourceLocator) -> Box<dyn Approach> {
        match self {
            ApproachKind::Method => Box::new(MethodApproach),
            ApproachKind::BiFunction => Box::new(BiFunctionApproach::new()),
            ApproachKind::Currying => Box::new(FunctionCurryingApproach::new()),
            ApproachKind::Script => Box::new(ScriptApproach::with_locator(locator.clone())),
        }
    }
}

impl fmt::Display for ApproachKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApproachKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ApproachKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                Error::Config(format!(
                    "Unknown approach '{s}' (expected one of: method, bi-function, currying, script)"
                ))
            })
    }
}

/// Which approaches to run: one of them, or all four in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(ApproachKind),
}

impl Selection {
    pub fn kinds(&self) -> Vec<ApproachKind> {
        match self {
            Selection::All => ApproachKind::ALL.to_vec(),
            Selection::Only(kind) => vec![*kind],
        }
    }
}

impl FromStr for Selection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "all" {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

/// Dispatch on the kind and produce the message in one call
pub fn format(kind: ApproachKind, name: &str, queue_num: i32) -> String {
    kind.build().get_message(name, queue_num)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in ApproachKind::ALL {
            assert_eq!(kind.to_string().parse::<ApproachKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_is_config_error() {
        let err = "groovy".parse::<ApproachKind>().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("groovy"));
    }

    #[test]
    fn test_selection_parsing() {
        assert_eq!("all".parse::<Selection>().unwrap(), Selection::All);
        assert_eq!(
            "currying".parse::<Selection>().unwrap(),
            Selection::Only(ApproachKind::Currying)
        );
        assert!("ALL".parse::<Selection>().is_err());
    }

    #[test]
    fn test_selection_kinds() {
        assert_eq!(Selection::All.kinds(), ApproachKind::ALL.to_vec());
        assert_eq!(
            Selection::Only(ApproachKind::Script).kinds(),
            vec![ApproachKind::Script]
        );
    }

    #[test]
    fn test_format_dispatches_every_kind() {
        for kind in ApproachKind::ALL {
            assert!(
                format(kind, "tomer", 6).starts_with("Hello tomer, you're number 6"),
                "{kind} produced an unexpected message"
            );
        }
    }
}
