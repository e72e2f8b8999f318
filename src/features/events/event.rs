//! Event record and creation-time validation

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Wall-clock format used for all user-facing dates: `YYYY-MM-DD HH:MM` (24h)
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Validation errors for event creation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    /// End time is at or before the start time
    #[error("end time must be after start time")]
    InvalidWindow,
    /// Date or time string does not match `YYYY-MM-DD HH:MM`
    #[error("invalid date/time `{0}` (expected YYYY-MM-DD and HH:MM, 24h)")]
    InvalidTimeFormat(String),
}

/// A campus event. Events are appended once and never mutated or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Stable identity, assigned at creation. Announcement deduplication
    /// keys off this id, so it must never change for a stored event.
    pub id: Uuid,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Event {
    /// Create a new event, enforcing `end > start`.
    pub fn new(
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        location: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, EventError> {
        if end <= start {
            return Err(EventError::InvalidWindow);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            title: title.into(),
            start,
            end,
            location: location.into(),
            description,
        })
    }

    /// Key used to deduplicate "soon"/"live" announcements for this event
    pub fn announcement_key(&self) -> String {
        self.id.to_string()
    }

    /// Start time rendered in the user-facing format
    pub fn start_display(&self) -> String {
        self.start.format(TIME_FORMAT).to_string()
    }

    /// End time rendered in the user-facing format
    pub fn end_display(&self) -> String {
        self.end.format(TIME_FORMAT).to_string()
    }
}

/// Parse a `YYYY-MM-DD` date and `HH:MM` time pair into one timestamp.
pub fn parse_datetime(date: &str, time: &str) -> Result<NaiveDateTime, EventError> {
    let combined = format!("{} {}", date.trim(), time.trim());
    NaiveDateTime::parse_from_str(&combined, TIME_FORMAT)
        .map_err(|_| EventError::InvalidTimeFormat(combined))
}

/// Events pre-seeded when no event file exists yet
pub fn seed_events() -> Vec<Event> {
    vec![
        Event::new(
            "AI Workshop",
            datetime(2026, 1, 14, 15, 0),
            datetime(2026, 1, 14, 16, 30),
            "Seminar Hall, D Block",
            None,
        ),
        Event::new(
            "Web Development Introduction",
            datetime(2026, 1, 19, 13, 0),
            datetime(2026, 1, 19, 14, 0),
            "SDPK Hall, A Block",
            None,
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn datetime(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, min, 0))
        .unwrap_or_default()
}
