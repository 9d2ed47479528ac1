use crate::models::DayCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellTone {
    /// Leading or trailing day of a neighbouring month.
    OtherMonth,
    /// Day of the displayed month without an offer.
    Unavailable,
    Available,
}

/// Visual treatment of one grid cell. Derived on every render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellAppearance {
    pub tone: CellTone,
    pub today_border: bool,
    pub filled: bool,
    pub show_label: bool,
    pub emphasize_label: bool,
    pub order_marker: bool,
}

impl CellAppearance {
    pub fn derive(cell: &DayCell, is_selected: bool) -> Self {
        let tone = if !cell.is_current_month {
            CellTone::OtherMonth
        } else if !cell.has_offer {
            CellTone::Unavailable
        } else {
            CellTone::Available
        };

        Self {
            tone,
            today_border: cell.is_today && cell.is_current_month,
            filled: is_selected,
            show_label: cell.is_current_month,
            emphasize_label: cell.is_today,
            order_marker: cell.is_current_month && cell.has_order,
        }
    }

    pub fn is_dimmed(&self) -> bool {
        self.tone != CellTone::Available
    }
}
