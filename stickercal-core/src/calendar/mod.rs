//! Calendar view state: the displayed month, the selected day and the
//! stickers on each day.

mod month;
mod state;

pub use month::MonthCursor;
pub use state::{CalendarState, DayStickers, MAX_VISIBLE_STICKERS};
