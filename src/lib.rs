// OrderCal Library
// Month grid, selection and order submission for the date-picking widget

pub mod app;
pub mod calendar;
pub mod command_handlers;
pub mod config;
pub mod error;
pub mod http_config;
pub mod messages;
pub mod models;
pub mod orders;
pub mod ui;
pub mod ui_state;
pub mod utils;

// Re-export commonly used types
pub use calendar::{build_month_grid, CalendarLocale, CellAppearance, OrderOutcome, SelectionController};
pub use error::{AppError, AppResult};
pub use models::*;
pub use orders::OrderClient;
