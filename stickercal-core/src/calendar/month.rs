//! Month navigation.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};

use crate::error::StickerError;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// The month currently on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthCursor {
    year: i32,
    /// 1-12
    month: u32,
}

impl MonthCursor {
    /// Returns `None` unless `month` is in 1..=12 and the month lies within
    /// chrono's date range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(MonthCursor { year, month })
    }

    /// The month containing the local current date.
    pub fn today() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn containing(date: NaiveDate) -> Self {
        MonthCursor {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following month. Stays put at the end of chrono's date range.
    pub fn next(self) -> Self {
        let next = if self.month == 12 {
            self.year.checked_add(1).and_then(|year| MonthCursor::new(year, 1))
        } else {
            MonthCursor::new(self.year, self.month + 1)
        };
        next.unwrap_or(self)
    }

    /// The preceding month. Stays put at the start of chrono's date range.
    pub fn prev(self) -> Self {
        let prev = if self.month == 1 {
            self.year.checked_sub(1).and_then(|year| MonthCursor::new(year, 12))
        } else {
            MonthCursor::new(self.year, self.month - 1)
        };
        prev.unwrap_or(self)
    }

    pub fn first_day(&self) -> NaiveDate {
        // Checked by `new`; `containing` takes it from a real date.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn days_in_month(&self) -> u32 {
        (28..=31)
            .rev()
            .find(|&day| self.date(day).is_some())
            .unwrap_or(28)
    }

    /// Weekday of the 1st, counting from Sunday = 0.
    pub fn first_weekday(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// The date for a day of this month, if it exists.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Every date in this month, in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let cursor = *self;
        (1..=self.days_in_month()).filter_map(move |day| cursor.date(day))
    }

    /// Display title, e.g. "March 2025".
    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthCursor {
    type Err = StickerError;

    /// Parse YYYY-MM.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StickerError::Validation(format!("Invalid month '{s}'. Expected YYYY-MM"));

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;

        MonthCursor::new(year, month).ok_or_else(invalid)
    }
}
