// file: src/day.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Key format of every date exchanged with the host and the order endpoint.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// One cell of a month grid.
///
/// Serialized with the field names the order endpoint expects
/// (`day`, `date`, `today`, `offer`, `order`, `isCurrentMonth`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    #[serde(rename = "day")]
    pub day_label: String,
    #[serde(rename = "date")]
    pub iso_date: String,
    #[serde(rename = "today")]
    pub is_today: bool,
    #[serde(rename = "offer")]
    pub has_offer: bool,
    #[serde(rename = "order")]
    pub has_order: bool,
    #[serde(rename = "isCurrentMonth")]
    pub is_current_month: bool,
}

impl DayCell {
    /// A current-month cell with either an offer or an existing order.
    pub fn is_selectable(&self) -> bool {
        self.is_current_month && (self.has_offer || self.has_order)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.iso_date, DAY_FORMAT).ok()
    }

    /// Cells are identified by their date key, not by their flags.
    pub fn same_day(&self, other: &DayCell) -> bool {
        self.iso_date == other.iso_date
    }
}

pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(current: bool, offer: bool, order: bool) -> DayCell {
        DayCell {
            day_label: "10".to_string(),
            iso_date: "2024-03-10".to_string(),
            is_today: false,
            has_offer: offer,
            has_order: order,
            is_current_month: current,
        }
    }

    #[test]
    fn test_selectable_requires_current_month_and_flag() {
        assert!(cell(true, true, false).is_selectable());
        assert!(cell(true, false, true).is_selectable());
        assert!(!cell(true, false, false).is_selectable());
        assert!(!cell(false, true, true).is_selectable());
    }

    #[test]
    fn test_serializes_with_endpoint_field_names() {
        let json = serde_json::to_value(cell(true, true, false)).unwrap();
        assert_eq!(json["day"], "10");
        assert_eq!(json["date"], "2024-03-10");
        assert_eq!(json["isCurrentMonth"], true);
        assert_eq!(json["offer"], true);
        assert_eq!(json["order"], false);
        assert_eq!(json["today"], false);
    }

    #[test]
    fn test_date_parses_key() {
        let parsed = cell(true, false, false).date();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 3, 10));
        assert_eq!(day_key(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()), "2024-01-07");
    }
}
