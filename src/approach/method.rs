use super::Approach;
use crate::message::create_message;

/// Builds the message with a direct call
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodApproach;

impl Approach for MethodApproach {
    fn get_message(&self, name: &str, queue_num: i32) -> String {
        create_message(name, queue_num)
    }
}
