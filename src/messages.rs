use crate::calendar::OrderOutcome;
use crate::models::DayCell;

/// Unified application message type
///
/// Messages are organized by where they come from.
#[derive(Debug, Clone)]
pub enum Message {
    // ===== Navigation Messages =====
    /// Show the month before the displayed one
    PreviousMonth,
    /// Show the month after the displayed one
    NextMonth,

    // ===== Selection Messages =====
    /// A day cell was pressed
    CellTapped(DayCell),

    // ===== Order Messages =====
    /// Submit an order for the selected day
    SubmitOrder,
    /// Order submission `id` completed
    OrderFinished(u64, OrderOutcome),
    /// Close the notification card
    DismissNotification,
}
