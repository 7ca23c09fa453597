//! Calendar state kept in sync with the server.
//!
//! Mirrors what the calendar view does: fetch everything once, then patch the
//! local collection from each server response. Failures are logged and leave
//! the state as it was.

use chrono::NaiveDate;
use stickercal_core::calendar::{CalendarState, MonthCursor};
use stickercal_core::event::format_date;
use stickercal_core::{Event, NewEvent};

use crate::client::Client;

pub struct CalendarSession {
    client: Client,
    state: CalendarState,
}

impl CalendarSession {
    pub fn new(client: Client, cursor: MonthCursor) -> Self {
        CalendarSession {
            client,
            state: CalendarState::new(cursor),
        }
    }

    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CalendarState {
        &mut self.state
    }

    /// Fetch the full collection. On failure the collection stays empty.
    pub async fn load(&mut self) {
        match self.client.list_events().await {
            Ok(events) => self.state.replace_events(events),
            Err(e) => {
                tracing::warn!("Error fetching events: {e:#}");
                self.state.finish_loading();
            }
        }
    }

    /// Create a sticker on `date` and jump to its month. Returns the stored
    /// event, or `None` if nothing was added.
    pub async fn add(&mut self, date: NaiveDate, title: &str) -> Option<Event> {
        let payload = match NewEvent::sticker(date, title) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Error adding event: {e}");
                return None;
            }
        };

        match self.client.create_event(&payload).await {
            Ok(event) => {
                self.state.apply_created(event.clone());
                Some(event)
            }
            Err(e) => {
                tracing::warn!("Error adding event: {e:#}");
                None
            }
        }
    }

    /// Change the title and/or date of a loaded sticker, keeping its color and
    /// tilt. Returns the stored event, or `None` if nothing changed.
    pub async fn edit(
        &mut self,
        id: &str,
        date: Option<NaiveDate>,
        title: Option<&str>,
    ) -> Option<Event> {
        let Some(existing) = self.state.events().iter().find(|e| e.id == id).cloned() else {
            tracing::warn!("Error updating event: no sticker with id {id}");
            return None;
        };

        let mut payload = NewEvent::from(existing);
        if let Some(date) = date {
            payload.date = Some(format_date(date));
        }
        if let Some(title) = title {
            let title = title.trim();
            if title.is_empty() {
                tracing::warn!("Error updating event: title must not be empty");
                return None;
            }
            payload.title = Some(title.to_string());
        }

        match self.client.update_event(id, &payload).await {
            Ok(event) => {
                self.state.apply_updated(event.clone());
                Some(event)
            }
            Err(e) => {
                tracing::warn!("Error updating event: {e:#}");
                None
            }
        }
    }

    /// Delete by id. Returns whether the server accepted the delete.
    pub async fn delete(&mut self, id: &str) -> bool {
        match self.client.delete_event(id).await {
            Ok(()) => {
                self.state.apply_deleted(id);
                true
            }
            Err(e) => {
                tracing::warn!("Error deleting event: {e:#}");
                false
            }
        }
    }
}
