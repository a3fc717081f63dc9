//! Greeting through a stored two-argument function value

use super::Approach;
use crate::message;

/// A function taking the name and the queue number together
pub type BiFunction = fn(&str, i32) -> String;

/// Holds the formatter as a value instead of calling it by name
#[derive(Debug, Clone, Copy)]
pub struct BiFunctionApproach {
    create_message: BiFunction,
}

impl BiFunctionApproach {
    pub fn new() -> Self {
        Self {
            create_message: message::create_message,
        }
    }
}

impl Default for BiFunctionApproach {
    fn default() -> Self {
        Self::new()
    }
}

impl Approach for BiFunctionApproach {
    fn get_message(&self, name: &str, queue_num: i32) -> String {
        (self.create_message)(name, queue_num)
    }
}
