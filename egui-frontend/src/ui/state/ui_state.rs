//! # UI State Module
//!
//! Transient user feedback shown by the shell, independent of any panel.
//!
//! ## Purpose:
//! Submission acknowledgments surface here as timed messages instead of a
//! blocking alert; the shell renders them and they expire on their own.

use std::time::{Duration, Instant};

/// How long feedback messages stay on screen
const MESSAGE_LIFETIME: Duration = Duration::from_secs(5);

/// Transient feedback messages for the shell to render
#[derive(Debug, Default)]
pub struct UiState {
    pub success_message: Option<String>,
    pub error_message: Option<String>,
    message_expiry: Option<Instant>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a success message for the next few seconds
    pub fn set_success(&mut self, message: String) {
        self.success_message = Some(message);
        self.message_expiry = Some(Instant::now() + MESSAGE_LIFETIME);
    }

    /// Show an error message for the next few seconds
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
        self.message_expiry = Some(Instant::now() + MESSAGE_LIFETIME);
    }

    pub fn has_messages(&self) -> bool {
        self.success_message.is_some() || self.error_message.is_some()
    }

    pub fn clear_messages(&mut self) {
        self.success_message = None;
        self.error_message = None;
        self.message_expiry = None;
    }

    /// Drop messages whose lifetime has passed
    pub fn expire_messages(&mut self, now: Instant) {
        if let Some(expiry) = self.message_expiry {
            if now >= expiry {
                self.clear_messages();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_expire_after_lifetime() {
        let mut ui = UiState::new();
        ui.set_success("Lead request sent".to_string());
        assert!(ui.has_messages());

        // Still visible immediately
        ui.expire_messages(Instant::now());
        assert!(ui.has_messages());

        // Gone once the lifetime has passed
        ui.expire_messages(Instant::now() + MESSAGE_LIFETIME + Duration::from_millis(1));
        assert!(!ui.has_messages());
    }

    #[test]
    fn test_clear_messages() {
        let mut ui = UiState::new();
        ui.set_error("boom".to_string());
        ui.clear_messages();
        assert!(!ui.has_messages());
    }
}
