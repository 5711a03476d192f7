/// Severity of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// UI flow state management
/// Only session-level flags, never filter or selection data
#[derive(Debug, Default)]
pub struct UiState {
    /// Last status line shown under the tree
    pub status: Option<StatusMessage>,
    /// Set by the quit command
    pub quit_requested: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
        });
    }

    /// Take and consume the status message
    pub fn take_status(&mut self) -> Option<StatusMessage> {
        self.status.take()
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }
}
