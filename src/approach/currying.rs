//! Greeting through curried function composition
//!
//! The formatter takes the name and returns a function of the queue number,
//! so `create_message(name)(queue_num)` yields the message.

use super::Approach;
use crate::message;

/// A function of the name returning a function of the queue number
pub type Curried = for<'a> fn(&'a str) -> Box<dyn Fn(i32) -> String + 'a>;

fn create_message(name: &str) -> Box<dyn Fn(i32) -> String + '_> {
    Box::new(move |queue_num| message::create_message(name, queue_num))
}

/// Holds the formatter as a curried function value
#[derive(Debug, Clone, Copy)]
pub struct FunctionCurryingApproach {
    create_message: Curried,
}

impl FunctionCurryingApproach {
    pub fn new() -> Self {
        Self { create_message }
    }

    /// Apply the first argument only, leaving a function of the queue number
    pub fn bind_name<'a>(&self, name: &'a str) -> Box<dyn Fn(i32) -> String + 'a> {
        (self.create_message)(name)
    }
}

impl Default for FunctionCurryingApproach {
    fn default() -> Self {
        Self::new()
    }
}

impl Approach for FunctionCurryingApproach {
    fn get_message(&self, name: &str, queue_num: i32) -> String {
        (self.create_message)(name)(queue_num)
    }
}
