//! Month grid construction.
//!
//! A grid covers every whole week that overlaps the displayed month, so it
//! always starts on the week start and ends the day before the next one.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::models::{day_key, DateSet, DayCell, MonthGrid, Week};

/// Earliest and latest years a `YYYY-MM-DD` key can represent.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// Last displayable month of `MAX_YEAR`. December's trailing week would reach
/// year 10000, which has no four-digit key.
pub const MAX_MONTH: u32 = 11;

/// Whether the month containing `date` can be displayed.
pub fn is_supported(date: NaiveDate) -> bool {
    let month = (date.year(), date.month());
    ((MIN_YEAR, 1)..=(MAX_YEAR, MAX_MONTH)).contains(&month)
}

/// First day of the displayable month closest to `date`.
pub fn clamp_month(date: NaiveDate) -> NaiveDate {
    let month = (date.year(), date.month());
    let clamped = if month < (MIN_YEAR, 1) {
        NaiveDate::from_ymd_opt(MIN_YEAR, 1, 1)
    } else if month > (MAX_YEAR, MAX_MONTH) {
        NaiveDate::from_ymd_opt(MAX_YEAR, MAX_MONTH, 1)
    } else {
        None
    };
    clamped.unwrap_or_else(|| start_of_month(date))
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let first = start_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// The `week_start` day on or before `date`.
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    date.week(week_start).first_day()
}

/// The last day of the week containing `date`.
pub fn end_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    date.week(week_start).last_day()
}

/// Move to the first day of the month `delta` months away.
///
/// Returns `None` when the result would leave the supported year range.
pub fn shift_month(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let first = start_of_month(date);
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        first.checked_add_months(months)
    } else {
        first.checked_sub_months(months)
    }?;
    is_supported(shifted).then_some(shifted)
}

/// Builds month grids for a given week start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBuilder {
    week_start: Weekday,
}

impl GridBuilder {
    /// Weeks run Monday to Sunday.
    pub fn iso() -> Self {
        Self { week_start: Weekday::Mon }
    }

    pub fn with_week_start(week_start: Weekday) -> Self {
        Self { week_start }
    }

    pub fn build(
        &self,
        month_anchor: NaiveDate,
        offer_dates: &DateSet,
        order_dates: &DateSet,
        today: NaiveDate,
    ) -> MonthGrid {
        let month_start = clamp_month(month_anchor);
        if !is_supported(month_anchor) {
            log::warn!("Month of {} is out of range, showing {}", month_anchor, month_start);
        }
        let month_end = end_of_month(month_start);
        let grid_start = start_of_week(month_start, self.week_start);
        let grid_end = end_of_week(month_end, self.week_start);

        let total_days = (grid_end - grid_start).num_days() + 1;
        let week_count = (total_days / 7) as u64;

        let cell = |date: NaiveDate| {
            let key = day_key(date);
            DayCell {
                day_label: format!("{:02}", date.day()),
                is_today: date == today,
                has_offer: offer_dates.contains(&key),
                has_order: order_dates.contains(&key),
                is_current_month: date.year() == month_start.year()
                    && date.month() == month_start.month(),
                iso_date: key,
            }
        };

        let weeks: Vec<Week> = (0..week_count)
            .map(|week| {
                let first_day = grid_start + Days::new(week * 7);
                std::array::from_fn(|offset| cell(first_day + Days::new(offset as u64)))
            })
            .collect();

        log::debug!(
            "Built grid for {}-{:02}: {} weeks from {} to {}",
            month_start.year(),
            month_start.month(),
            weeks.len(),
            grid_start,
            grid_end
        );

        MonthGrid {
            month: month_start,
            weeks,
        }
    }
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::iso()
    }
}

/// Build the ISO-week grid of the month containing `month_anchor`.
pub fn build_month_grid(
    month_anchor: NaiveDate,
    offer_dates: &DateSet,
    order_dates: &DateSet,
    today: NaiveDate,
) -> MonthGrid {
    GridBuilder::iso().build(month_anchor, offer_dates, order_dates, today)
}
