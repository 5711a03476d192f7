use colored::Colorize;

use crate::state::{StatusLevel, StatusMessage};

/// Print a status message with its semantic level
pub fn print_status(status: &StatusMessage) {
    let text = match status.level {
        StatusLevel::Info => status.text.normal(),
        StatusLevel::Success => status.text.green(),
        StatusLevel::Warning => status.text.yellow(),
        StatusLevel::Error => status.text.red(),
    };
    println!("{}", text);
}

/// Print an error block to stderr
pub fn show_error(title: &str, message: &str, details: &str) {
    eprintln!("{} {}", title.red().bold(), message);
    if !details.is_empty() {
        for line in details.lines() {
            eprintln!("  {}", line);
        }
    }
}
