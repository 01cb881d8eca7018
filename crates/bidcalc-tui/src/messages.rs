//! Messages fed into the dashboard update loop.

use crate::keymap::KeyAction;

/// Input to [`crate::TuiApp::handle_message`], from the terminal or from
/// other threads through the channel.
#[derive(Debug, Clone, PartialEq)]
pub enum TuiMessage {
    /// Plain status line.
    Log(String),
    /// Status line shown with a `[WARN]` prefix.
    Warn(String),
    /// Status line shown with an `[ERROR]` prefix.
    Error(String),
    /// Leave the dashboard (Esc, or Ctrl-C from the signal handler).
    Quit,
    Resize { width: u16, height: u16 },
    Key(KeyAction),
}

impl TuiMessage {
    /// Text for the status log, if the message carries one.
    #[must_use]
    pub fn status_line(&self) -> Option<String> {
        match self {
            Self::Log(text) => Some(text.clone()),
            Self::Warn(text) => Some(format!("[WARN] {text}")),
            Self::Error(text) => Some(format!("[ERROR] {text}")),
            Self::Quit | Self::Resize { .. } | Self::Key(_) => None,
        }
    }
}
