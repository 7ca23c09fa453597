//! Client-side calendar state.

use chrono::NaiveDate;

use super::MonthCursor;
use crate::event::{Event, format_date};

/// At most this many stickers are shown on a day; the rest overflow into the
/// day's full list.
pub const MAX_VISIBLE_STICKERS: usize = 2;

/// Stickers for one day, split by the per-day cap.
#[derive(Debug, Clone, PartialEq)]
pub struct DayStickers<'a> {
    pub date: NaiveDate,
    pub visible: Vec<&'a Event>,
    pub overflow: Vec<&'a Event>,
}

impl<'a> DayStickers<'a> {
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Count shown as "+N more".
    pub fn hidden_count(&self) -> usize {
        self.overflow.len()
    }

    pub fn all(&self) -> impl Iterator<Item = &'a Event> {
        self.visible.iter().chain(self.overflow.iter()).copied()
    }
}

/// Everything the calendar view renders from.
///
/// The event collection is replaced wholesale on load and patched from server
/// responses after each add or delete.
#[derive(Debug, Clone)]
pub struct CalendarState {
    events: Vec<Event>,
    cursor: MonthCursor,
    selected_date: Option<NaiveDate>,
    loading: bool,
}

impl CalendarState {
    /// Empty state, loading, showing `cursor`.
    pub fn new(cursor: MonthCursor) -> Self {
        CalendarState {
            events: Vec::new(),
            cursor,
            selected_date: None,
            loading: true,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn replace_events(&mut self, events: Vec<Event>) {
        self.events = events;
        self.loading = false;
    }

    /// End loading without data (the fetch failed).
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
    }

    /// Append a server-returned event and jump to its month.
    pub fn apply_created(&mut self, event: Event) {
        if let Ok(day) = event.day() {
            self.cursor = MonthCursor::containing(day);
        }
        self.events.push(event);
    }

    /// Swap in a server-returned event by id and jump to its month.
    pub fn apply_updated(&mut self, event: Event) {
        if let Ok(day) = event.day() {
            self.cursor = MonthCursor::containing(day);
        }
        match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => *existing = event,
            None => self.events.push(event),
        }
    }

    pub fn apply_deleted(&mut self, id: &str) {
        self.events.retain(|e| e.id != id);
    }

    pub fn next_month(&mut self) {
        self.cursor = self.cursor.next();
    }

    pub fn prev_month(&mut self) {
        self.cursor = self.cursor.prev();
    }

    pub fn go_to(&mut self, cursor: MonthCursor) {
        self.cursor = cursor;
    }

    pub fn go_to_today(&mut self) {
        self.cursor = MonthCursor::today();
    }

    pub fn month_title(&self) -> String {
        self.cursor.title()
    }

    /// Events whose date string matches `date` exactly.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        let key = format_date(date);
        self.events.iter().filter(|e| e.date == key).collect()
    }

    pub fn stickers_on(&self, date: NaiveDate) -> DayStickers<'_> {
        let mut visible = self.events_on(date);
        let overflow = visible.split_off(visible.len().min(MAX_VISIBLE_STICKERS));

        DayStickers {
            date,
            visible,
            overflow,
        }
    }

    /// Days of the displayed month that have at least one event.
    pub fn month_stickers(&self) -> Vec<DayStickers<'_>> {
        self.cursor
            .dates()
            .map(|date| self.stickers_on(date))
            .filter(|day| !day.is_empty())
            .collect()
    }
}
