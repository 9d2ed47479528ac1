// file: src/order.rs
use serde::{Deserialize, Serialize};

use super::day::DayCell;

/// Body of the outbound order call: `{"date": <DayCell>}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub date: DayCell,
}

impl OrderRequest {
    pub fn new(cell: DayCell) -> Self {
        Self { date: cell }
    }
}

/// The endpoint echoes the date back, either as the key or as the whole cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EchoedDate {
    Key(String),
    Cell(DayCell),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub date: EchoedDate,
}

impl OrderConfirmation {
    pub fn iso_date(&self) -> &str {
        match &self.date {
            EchoedDate::Key(key) => key,
            EchoedDate::Cell(cell) => &cell.iso_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_accepts_key() {
        let parsed: OrderConfirmation = serde_json::from_str(r#"{"date":"2024-03-10"}"#).unwrap();
        assert_eq!(parsed.iso_date(), "2024-03-10");
    }

    #[test]
    fn test_confirmation_accepts_cell() {
        let body = r#"{"date":{"day":"10","date":"2024-03-10","today":false,"offer":true,"order":false,"isCurrentMonth":true}}"#;
        let parsed: OrderConfirmation = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.iso_date(), "2024-03-10");
    }

    #[test]
    fn test_confirmation_rejects_missing_date() {
        assert!(serde_json::from_str::<OrderConfirmation>(r#"{"ok":true}"#).is_err());
    }
}
