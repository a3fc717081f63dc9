//! The greeting template shared by every in-process approach.

/// The five constant lines that follow the personalised first line.
pub const INFO_LINES: [&str; 5] = [
    "Anim incididunt deserunt ex ad do aliquip.",
    "Ullamco est Lorem nisi magna duis esse laboris commodo eu.",
    "Anim laborum commodo sint est dolor veniam id non sint aliquip amet pariatur.",
    "Ex non incididunt duis aliqua qui quis eiusmod ex eiusmod irure nisi sint anim.",
    "Ipsum voluptate laboris eiusmod sint ea do.",
];

/// The part of the message every approach must start with.
pub fn greeting_prefix(name: &str, queue_num: i32) -> String {
    format!("Hello {name}, you're number {queue_num}")
}

/// Build the full six-line greeting, joined with `\n` and without a trailing newline.
pub fn create_message(name: &str, queue_num: i32) -> String {
    let mut message = format!(
        "{}, please wait patiently, here is some info:",
        greeting_prefix(name, queue_num)
    );
    for line in INFO_LINES {
        message.push('\n');
        message.push_str(line);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_message_first_line() {
        let message = create_message("tomer", 6);
        let first = message.lines().next().unwrap();
        assert_eq!(
            first,
            "Hello tomer, you're number 6, please wait patiently, here is some info:"
        );
    }

    #[test]
    fn test_create_message_has_six_lines() {
        let message = create_message("tomer", 6);
        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(&lines[1..], &INFO_LINES[..]);
        assert!(!message.ends_with('\n'));
    }

    #[test]
    fn test_create_message_boundaries() {
        assert!(create_message("", 0).starts_with("Hello , you're number 0,"));
        assert!(create_message("x", -7).starts_with("Hello x, you're number -7,"));
        assert!(create_message("x", i32::MIN).starts_with(&greeting_prefix("x", i32::MIN)));
    }

    #[test]
    fn test_name_is_not_interpreted() {
        let message = create_message("{} %s <b>", 1);
        assert!(message.starts_with("Hello {} %s <b>, you're number 1"));
    }
}
