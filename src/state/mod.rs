pub mod app_state;
pub mod ui_state;

pub use app_state::AppState;
pub use ui_state::{StatusLevel, StatusMessage, UiState};
