// file: src/models/mod.rs

// Declare modules
pub mod date_set;
pub mod day;
pub mod grid;
pub mod notification;
pub mod order;

// Re-export the public types so callers can write `crate::models::DayCell`.
pub use date_set::DateSet;
pub use day::{day_key, DayCell, DAY_FORMAT};
pub use grid::{MonthGrid, Week};
pub use notification::{Notification, NotificationKind};
pub use order::{EchoedDate, OrderConfirmation, OrderRequest};
