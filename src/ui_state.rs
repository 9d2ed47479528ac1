//! UI state management module
//!
//! State that only matters to the presentation layer. Calendar state lives in
//! the `SelectionController`.

use crate::models::Notification;

/// Application UI state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Notification currently shown, if any
    pub notification: Option<Notification>,
}

impl UiState {
    /// Create new UI state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification, replacing any previous one.
    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub fn dismiss(&mut self) {
        self.notification = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_and_dismiss() {
        let mut state = UiState::new();
        state.notify(Notification::order_failed());
        assert!(state.notification.is_some());

        state.notify(Notification::order_placed("2024-03-10"));
        assert!(state.notification.as_ref().is_some_and(Notification::is_success));

        state.dismiss();
        assert!(state.notification.is_none());
    }
}
