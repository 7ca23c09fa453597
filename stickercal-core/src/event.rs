//! Sticker events.
//!
//! An `Event` is a short label attached to one calendar day. The server assigns
//! the id; the client picks the cosmetic fields (color and rotation) when the
//! sticker is created.

use chrono::{NaiveDate, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{StickerError, StickerResult};

/// Sticker colors the client picks from.
pub const PALETTE: [&str; 7] = [
    "#93C5FD", "#FDE047", "#F9A8D4", "#86EFAC", "#FCA5A5", "#C4B5FD", "#FDBA74",
];

/// Stickers are tilted by up to this many degrees either way.
pub const MAX_ROTATION: f64 = 3.0;

const DATE_FORMAT: &str = "%Y-%m-%d";
const ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A stored sticker event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    /// Calendar day as YYYY-MM-DD
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Tilt in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl Event {
    /// Parse the event's date, if it is a well-formed YYYY-MM-DD string.
    pub fn day(&self) -> StickerResult<NaiveDate> {
        parse_date(&self.date)
    }
}

/// Request body for creating or overwriting an event.
///
/// Every field is optional on the wire so that a missing `date` or `title`
/// reaches validation instead of failing deserialization. Any `id` in the body
/// is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl NewEvent {
    /// Build the payload the client sends when a sticker is added: a random
    /// palette color and a small random tilt.
    pub fn sticker(date: NaiveDate, title: &str) -> StickerResult<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StickerError::Validation("Title must not be empty".into()));
        }

        let mut rng = rand::thread_rng();
        let color = PALETTE.choose(&mut rng).copied().unwrap_or(PALETTE[0]);

        Ok(NewEvent {
            date: Some(format_date(date)),
            title: Some(title.to_string()),
            color: Some(color.to_string()),
            rotation: Some(rng.gen_range(-MAX_ROTATION..MAX_ROTATION)),
        })
    }

    /// Both `date` and `title` must be present and non-empty.
    pub fn validate(&self) -> StickerResult<()> {
        let present = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());

        if present(&self.date) && present(&self.title) {
            Ok(())
        } else {
            Err(StickerError::Validation("Date and title are required".into()))
        }
    }

    /// Turn the payload into a record under the given id, as-is.
    pub fn into_event(self, id: String) -> Event {
        Event {
            id,
            date: self.date.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            color: self.color,
            rotation: self.rotation,
        }
    }
}

impl From<Event> for NewEvent {
    fn from(event: Event) -> Self {
        NewEvent {
            date: Some(event.date),
            title: Some(event.title),
            color: event.color,
            rotation: event.rotation,
        }
    }
}

/// Generate a new event id: `{unix millis}-{9 base-36 chars}`.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();

    format!("{}-{}", Utc::now().timestamp_millis(), suffix)
}

/// Parse a YYYY-MM-DD string.
pub fn parse_date(s: &str) -> StickerResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| StickerError::InvalidDate(s.to_string()))
}

/// Format a date the way events store it.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
