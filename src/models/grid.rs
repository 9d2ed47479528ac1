// file: src/grid.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::day::DayCell;

pub type Week = [DayCell; 7];

/// A month laid out in whole weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    /// First day of the displayed month.
    pub month: NaiveDate,
    pub weeks: Vec<Week>,
}

impl MonthGrid {
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| week.iter())
    }

    pub fn cell(&self, iso_date: &str) -> Option<&DayCell> {
        self.cells().find(|cell| cell.iso_date == iso_date)
    }

    pub fn first(&self) -> Option<&DayCell> {
        self.weeks.first().map(|week| &week[0])
    }

    pub fn last(&self) -> Option<&DayCell> {
        self.weeks.last().map(|week| &week[6])
    }
}
