pub mod dialogs;
pub mod formatting;
pub mod updates;

pub use dialogs::show_error;
pub use updates::{flush_status, refresh_view, render_json};
