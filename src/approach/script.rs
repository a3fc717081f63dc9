//! Greeting through an external template script
//!
//! The script is looked up by a fixed logical name through a
//! [`ResourceLocator`] and evaluated with two bindings, `bindName` and
//! `bindQueueNum`. A script that cannot be loaded or evaluated does not make
//! [`Approach::get_message`] fail: the failure description is returned as the
//! message text instead. Callers that want the error should use
//! [`ScriptApproach::try_get_message`].

use super::Approach;
use crate::resources::ResourceLocator;
use tera::{Context, Tera};
use thiserror::Error;
use tracing::{trace, warn};

/// Logical name of the script producing the message
pub const SCRIPT_RESOURCE: &str = "scripts/create_message.tera";

/// Binding holding the name
pub const NAME_BINDING: &str = "bindName";

/// Binding holding the queue number
pub const QUEUE_NUM_BINDING: &str = "bindQueueNum";

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Failed to load script resource '{resource}': {source}")]
    Load {
        resource: String,
        #[source]
        source: crate::error::Error,
    },

    #[error("Failed to render script resource '{resource}': {source}")]
    Render {
        resource: String,
        #[source]
        source: crate::error::Error,
    },
}

/// Delegates the message to [`SCRIPT_RESOURCE`]
#[derive(Debug, Clone, Default)]
pub struct ScriptApproach {
    locator: ResourceLocator,
}

impl ScriptApproach {
    /// Script resolved from the bundled resources
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locator(locator: ResourceLocator) -> Self {
        Self { locator }
    }

    /// Load and evaluate the script, reporting failures as errors
    pub fn try_get_message(&self, name: &str, queue_num: i32) -> Result<String, ScriptError> {
        let script = self
            .locator
            .load(SCRIPT_RESOURCE)
            .map_err(|source| ScriptError::Load {
                resource: SCRIPT_RESOURCE.to_string(),
                source,
            })?;

        let mut context = Context::new();
        context.insert(NAME_BINDING, name);
        context.insert(QUEUE_NUM_BINDING, &queue_num);
        trace!(
            "Evaluating {} with {}={:?}, {}={}",
            SCRIPT_RESOURCE,
            NAME_BINDING,
            name,
            QUEUE_NUM_BINDING,
            queue_num
        );

        // Autoescaping off: names are rendered verbatim
        let rendered =
            Tera::one_off(&script, &context, false).map_err(|e| ScriptError::Render {
                resource: SCRIPT_RESOURCE.to_string(),
                source: e.into(),
            })?;

        // The trailing newline of the script file is not part of the message
        Ok(match rendered.strip_suffix('\n') {
            Some(message) => message.to_string(),
            None => rendered,
        })
    }
}

impl Approach for ScriptApproach {
    fn get_message(&self, name: &str, queue_num: i32) -> String {
        self.try_get_message(name, queue_num).unwrap_or_else(|err| {
            warn!("Script approach failed, returning the failure as the message: {err}");
            err.to_string()
        })
    }
}
