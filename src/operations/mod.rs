pub mod file_ops;
pub mod validation;

pub use file_ops::FileOperations;
pub use validation::{parse_command, split_check_target, Command, HELP_TEXT};
