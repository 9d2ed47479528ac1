// file: src/notification.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// Modal-style message shown after an order submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn order_placed(iso_date: &str) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Order placed".to_string(),
            message: format!("Your order for {} has been placed successfully!", iso_date),
        }
    }

    pub fn order_failed() -> Self {
        Self {
            kind: NotificationKind::Failure,
            title: "Order failed".to_string(),
            message: "There was an error placing your order. Please try again later.".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_placed_names_date() {
        let note = Notification::order_placed("2024-03-10");
        assert!(note.is_success());
        assert!(note.message.contains("2024-03-10"));
    }

    #[test]
    fn test_order_failed_is_static() {
        assert_eq!(Notification::order_failed(), Notification::order_failed());
        assert!(!Notification::order_failed().is_success());
    }
}
