//! Locale data used when building and labelling a month.
//!
//! Everything the widget needs to format lives in a `CalendarLocale` value
//! that is handed to whoever formats; nothing is registered globally.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarLocale {
    pub code: &'static str,
    pub week_start: Weekday,
    /// Month names as used on their own ("marzec 2024").
    pub month_names: [&'static str; 12],
    /// Month names as used after a day number ("10 marca 2024").
    pub month_names_genitive: [&'static str; 12],
    /// Short weekday names, Monday first.
    pub weekday_names: [&'static str; 7],
    /// Label of the order button.
    pub order_action: &'static str,
    /// Label of the order button while a submission is pending.
    pub order_pending: &'static str,
}

impl CalendarLocale {
    pub fn polish() -> Self {
        Self {
            code: "pl",
            week_start: Weekday::Mon,
            month_names: [
                "styczeń", "luty", "marzec", "kwiecień", "maj", "czerwiec",
                "lipiec", "sierpień", "wrzesień", "październik", "listopad", "grudzień",
            ],
            month_names_genitive: [
                "stycznia", "lutego", "marca", "kwietnia", "maja", "czerwca",
                "lipca", "sierpnia", "września", "października", "listopada", "grudnia",
            ],
            weekday_names: ["pon", "wt", "śr", "czw", "pt", "sob", "ndz"],
            order_action: "Zamów",
            order_pending: "Wysyłanie…",
        }
    }

    pub fn english() -> Self {
        let months = [
            "January", "February", "March", "April", "May", "June",
            "July", "August", "September", "October", "November", "December",
        ];
        Self {
            code: "en",
            week_start: Weekday::Mon,
            month_names: months,
            month_names_genitive: months,
            weekday_names: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            order_action: "Order",
            order_pending: "Sending…",
        }
    }

    pub fn from_code(code: &str) -> AppResult<Self> {
        match code.trim().to_lowercase().as_str() {
            "pl" | "pl-pl" => Ok(Self::polish()),
            "en" | "en-gb" | "en-us" => Ok(Self::english()),
            other => Err(AppError::config(format!("Unsupported locale '{}'", other))),
        }
    }

    /// Header labels in grid column order, one upper-case letter each.
    pub fn weekday_initials(&self) -> Vec<String> {
        let mut day = self.week_start;
        let mut labels: Vec<String> = Vec::with_capacity(7);
        for _ in 0..7 {
            let name = self.weekday_names[day.num_days_from_monday() as usize];
            labels.push(name.chars().take(1).flat_map(char::to_uppercase).collect());
            day = day.succ();
        }
        labels
    }

    /// "Marzec 2024"
    pub fn month_title(&self, date: NaiveDate) -> String {
        let name = self.month_names[date.month0() as usize];
        capitalize_first(&format!("{} {}", name, date.year()))
    }

    /// "10 marca 2024"
    pub fn long_date(&self, date: NaiveDate) -> String {
        format!(
            "{:02} {} {}",
            date.day(),
            self.month_names_genitive[date.month0() as usize],
            date.year()
        )
    }
}

impl Default for CalendarLocale {
    fn default() -> Self {
        Self::polish()
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_10() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn test_month_title_is_capitalized() {
        assert_eq!(CalendarLocale::polish().month_title(march_10()), "Marzec 2024");
        assert_eq!(CalendarLocale::english().month_title(march_10()), "March 2024");
        let october = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        assert_eq!(CalendarLocale::polish().month_title(october), "Październik 2026");
    }

    #[test]
    fn test_long_date_uses_genitive() {
        assert_eq!(CalendarLocale::polish().long_date(march_10()), "10 marca 2024");
        let first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(CalendarLocale::english().long_date(first), "01 March 2024");
    }

    #[test]
    fn test_weekday_initials_follow_week_start() {
        assert_eq!(
            CalendarLocale::english().weekday_initials(),
            vec!["M", "T", "W", "T", "F", "S", "S"]
        );
        assert_eq!(
            CalendarLocale::polish().weekday_initials(),
            vec!["P", "W", "Ś", "C", "P", "S", "N"]
        );

        let sunday_first = CalendarLocale {
            week_start: Weekday::Sun,
            ..CalendarLocale::english()
        };
        assert_eq!(sunday_first.weekday_initials()[0], "S");
        assert_eq!(sunday_first.weekday_initials()[1], "M");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(CalendarLocale::from_code("PL").unwrap().code, "pl");
        assert_eq!(CalendarLocale::from_code("en-GB").unwrap().code, "en");
        assert!(CalendarLocale::from_code("xx").is_err());
    }
}
