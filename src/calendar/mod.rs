// Calendar widget core
// Month grid construction, selection state and per-cell presentation

pub mod grid;
pub mod locale;
pub mod presentation;
pub mod selection;

pub use grid::{build_month_grid, GridBuilder};
pub use locale::CalendarLocale;
pub use presentation::{CellAppearance, CellTone};
pub use selection::{OrderOutcome, PendingOrder, SelectionController};
