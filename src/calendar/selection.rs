//! Selection controller
//!
//! Owns the displayed month, the selected day and the order submission that
//! may be in flight. The HTTP call itself runs elsewhere: the controller hands
//! out a `PendingOrder` and later receives its `OrderOutcome`.

use chrono::NaiveDate;
use log::{debug, info, warn};

use super::grid::{self, GridBuilder};
use super::locale::CalendarLocale;
use crate::models::{DateSet, DayCell, MonthGrid, Notification, OrderConfirmation};

/// A submission handed out by `begin_submission`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOrder {
    pub id: u64,
    pub cell: DayCell,
}

/// Result of one order call as reported back to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    Placed(OrderConfirmation),
    Failed(String),
    /// The call was abandoned because the widget is shutting down.
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct SelectionController {
    locale: CalendarLocale,
    builder: GridBuilder,
    offer_dates: DateSet,
    order_dates: DateSet,
    displayed_month: NaiveDate,
    selected: Option<DayCell>,
    in_flight: Option<PendingOrder>,
    next_submission_id: u64,
}

impl SelectionController {
    pub fn new(anchor: NaiveDate, offer_dates: DateSet, order_dates: DateSet, locale: CalendarLocale) -> Self {
        Self {
            builder: GridBuilder::with_week_start(locale.week_start),
            locale,
            offer_dates,
            order_dates,
            displayed_month: grid::clamp_month(anchor),
            selected: None,
            in_flight: None,
            next_submission_id: 1,
        }
    }

    pub fn displayed_month(&self) -> NaiveDate {
        self.displayed_month
    }

    pub fn selected(&self) -> Option<&DayCell> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, cell: &DayCell) -> bool {
        self.selected.as_ref().is_some_and(|s| s.same_day(cell))
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The order action is available only with a selection and nothing pending.
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && self.in_flight.is_none()
    }

    pub fn locale(&self) -> &CalendarLocale {
        &self.locale
    }

    pub fn set_offer_dates(&mut self, dates: DateSet) {
        self.offer_dates = dates;
        self.refresh_selection();
    }

    pub fn set_order_dates(&mut self, dates: DateSet) {
        self.order_dates = dates;
        self.refresh_selection();
    }

    /// Re-read the selected cell's flags from the current sets, dropping the
    /// selection once the day is no longer selectable.
    fn refresh_selection(&mut self) {
        let Some(cell) = self.selected.as_mut() else {
            return;
        };
        cell.has_offer = self.offer_dates.contains(&cell.iso_date);
        cell.has_order = self.order_dates.contains(&cell.iso_date);
        if !cell.is_selectable() {
            debug!("Selection {} withdrawn by host", cell.iso_date);
            self.selected = None;
        }
    }

    pub fn can_go_previous(&self) -> bool {
        grid::shift_month(self.displayed_month, -1).is_some()
    }

    pub fn can_go_next(&self) -> bool {
        grid::shift_month(self.displayed_month, 1).is_some()
    }

    /// Returns `false` when already at the earliest supported month.
    pub fn go_to_previous_month(&mut self) -> bool {
        self.shift(-1)
    }

    /// Returns `false` when already at the latest supported month.
    pub fn go_to_next_month(&mut self) -> bool {
        self.shift(1)
    }

    fn shift(&mut self, delta: i32) -> bool {
        match grid::shift_month(self.displayed_month, delta) {
            Some(month) => {
                debug!("Displayed month {} -> {}", self.displayed_month, month);
                self.displayed_month = month;
                true
            }
            None => {
                debug!("Cannot move {} months from {}", delta, self.displayed_month);
                false
            }
        }
    }

    /// Toggle between no selection and `cell`.
    ///
    /// Tapping the selected cell again, or any cell that is not selectable,
    /// clears the selection.
    pub fn handle_cell_tap(&mut self, cell: &DayCell) {
        if self.is_selected(cell) || !cell.is_selectable() {
            if self.selected.take().is_some() {
                debug!("Selection cleared by tap on {}", cell.iso_date);
            }
        } else {
            debug!("Selected {}", cell.iso_date);
            self.selected = Some(cell.clone());
        }
    }

    pub fn grid(&self, today: NaiveDate) -> MonthGrid {
        self.builder.build(self.displayed_month, &self.offer_dates, &self.order_dates, today)
    }

    pub fn month_title(&self) -> String {
        self.locale.month_title(self.displayed_month)
    }

    pub fn selected_title(&self) -> Option<String> {
        let date = self.selected.as_ref()?.date()?;
        Some(self.locale.long_date(date))
    }

    pub fn weekday_labels(&self) -> Vec<String> {
        self.locale.weekday_initials()
    }

    /// Start submitting the selected day.
    ///
    /// Returns `None` without side effects when nothing is selected or a
    /// previous submission has not finished yet.
    pub fn begin_submission(&mut self) -> Option<PendingOrder> {
        if let Some(pending) = &self.in_flight {
            warn!("Order for {} still pending, ignoring submit", pending.cell.iso_date);
            return None;
        }
        let cell = self.selected.clone()?;
        let pending = PendingOrder {
            id: self.next_submission_id,
            cell,
        };
        self.next_submission_id += 1;
        info!("Submitting order #{} for {}", pending.id, pending.cell.iso_date);
        self.in_flight = Some(pending.clone());
        Some(pending)
    }

    /// Apply the outcome of submission `id`.
    ///
    /// Success clears the selection; failure keeps it so the user can retry.
    /// Outcomes for a submission that is no longer pending are dropped.
    pub fn finish_submission(&mut self, id: u64, outcome: OrderOutcome) -> Option<Notification> {
        match &self.in_flight {
            Some(pending) if pending.id == id => {}
            _ => {
                debug!("Dropping outcome of stale order #{}", id);
                return None;
            }
        }
        self.in_flight = None;

        match outcome {
            OrderOutcome::Placed(confirmation) => {
                info!("Order #{} placed for {}", id, confirmation.iso_date());
                self.selected = None;
                Some(Notification::order_placed(confirmation.iso_date()))
            }
            OrderOutcome::Failed(reason) => {
                warn!("Order #{} failed: {}", id, reason);
                Some(Notification::order_failed())
            }
            OrderOutcome::Cancelled => {
                debug!("Order #{} cancelled", id);
                None
            }
        }
    }
}
