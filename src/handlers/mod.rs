pub mod command_handlers;
pub mod selection_handlers;

pub use command_handlers::{handle_line, Outcome};
pub use selection_handlers::build_accordion;
