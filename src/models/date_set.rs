// file: src/date_set.rs
use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::day::DAY_FORMAT;

/// Offer or order dates supplied by the host screen.
///
/// Membership is exact string equality on the `YYYY-MM-DD` key, so a key
/// written any other way never matches a cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSet {
    keys: HashSet<String>,
}

impl DateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys that do not parse as a calendar date.
    pub fn malformed_keys(&self) -> Vec<&str> {
        let mut bad: Vec<&str> = self
            .keys
            .iter()
            .filter(|key| NaiveDate::parse_from_str(key, DAY_FORMAT).is_err())
            .map(String::as_str)
            .collect();
        bad.sort_unstable();
        bad
    }

    /// Parse a comma-separated list, ignoring blanks around entries.
    pub fn from_csv(raw: &str) -> Self {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for DateSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_is_exact() {
        let set: DateSet = ["2024-03-10"].into_iter().collect();
        assert!(set.contains("2024-03-10"));
        assert!(!set.contains("2024-3-10"));
        assert!(!set.contains(" 2024-03-10"));
    }

    #[test]
    fn test_from_csv() {
        let set = DateSet::from_csv(" 2024-03-10, 2024-03-12 ,,");
        assert_eq!(set.len(), 2);
        assert!(set.contains("2024-03-12"));
        assert!(DateSet::from_csv("").is_empty());
    }

    #[test]
    fn test_malformed_keys() {
        let set: DateSet = ["2024-03-10", "2024-02-30", "tomorrow"].into_iter().collect();
        assert_eq!(set.malformed_keys(), vec!["2024-02-30", "tomorrow"]);
    }
}
