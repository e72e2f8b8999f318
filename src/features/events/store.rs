//! Event store
//!
//! Owns the event list and the announcement state behind a single mutex and
//! persists both as JSON files in the data directory. Command handlers and
//! the scheduler share clones of the same store; the lock is never held
//! across an await.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;
use log::{error, info};
use serde::{Deserialize, Serialize};

use super::event::{self, Event, EventError};
use super::scheduler::{evaluate_tick, Notification};
use super::state::{load_json, write_json_atomic, AnnouncementState};

const EVENTS_FILE: &str = "events.json";
const ANNOUNCED_FILE: &str = "announced.json";

/// On-disk shape of the event list
#[derive(Debug, Default, Serialize, Deserialize)]
struct EventFile {
    #[serde(default)]
    events: Vec<Event>,
}

struct Inner {
    events: Vec<Event>,
    state: AnnouncementState,
}

/// Shared handle to the event list and announcement state.
///
/// Cloning is cheap; all clones point at the same data.
#[derive(Clone)]
pub struct EventStore {
    inner: Arc<Mutex<Inner>>,
    events_path: Arc<PathBuf>,
    state_path: Arc<PathBuf>,
}

impl EventStore {
    /// Open the store backed by `data_dir`, loading both files.
    ///
    /// A missing or corrupt event file seeds the built-in sample events; a
    /// missing or corrupt state file means nothing has been announced yet.
    pub fn open(data_dir: &Path) -> Self {
        let events_path = data_dir.join(EVENTS_FILE);
        let state_path = data_dir.join(ANNOUNCED_FILE);

        // A missing or corrupt event file both fall back to the seed list;
        // a valid file is taken as-is even when its list is empty.
        let file = load_json::<EventFile>(&events_path).unwrap_or_else(|| {
            let file = EventFile {
                events: event::seed_events(),
            };
            if let Err(e) = write_json_atomic(&events_path, &file) {
                error!("Failed to write seeded events to {}: {e}", events_path.display());
            }
            file
        });
        let state = AnnouncementState::load(&state_path);

        info!(
            "Event store opened: {} events, {} soon / {} live already announced",
            file.events.len(),
            state.soon.len(),
            state.live.len()
        );

        Self {
            inner: Arc::new(Mutex::new(Inner {
                events: file.events,
                state,
            })),
            events_path: Arc::new(events_path),
            state_path: Arc::new(state_path),
        }
    }

    /// Validate and append a new event, persisting the event list.
    ///
    /// The event becomes eligible for announcement from the next tick. A
    /// start already in the past simply means the "soon" window was missed;
    /// there is no backfill.
    pub fn add_event(
        &self,
        title: &str,
        date: &str,
        start_time: &str,
        end_time: &str,
        location: &str,
        description: Option<String>,
    ) -> Result<Event, EventError> {
        let start = event::parse_datetime(date, start_time)?;
        let end = event::parse_datetime(date, end_time)?;
        let event = Event::new(title, start, end, location, description)?;

        let mut inner = self.lock();
        inner.events.push(event.clone());
        let file = EventFile {
            events: inner.events.clone(),
        };
        // In-memory list stays authoritative if the write fails; the next
        // successful write catches up.
        if let Err(e) = write_json_atomic(&self.events_path, &file) {
            error!("Failed to persist events to {}: {e}", self.events_path.display());
        }
        Ok(event)
    }

    /// Events that have not started yet, in original sequence order
    pub fn upcoming(&self, now: NaiveDateTime) -> Vec<Event> {
        self.lock()
            .events
            .iter()
            .filter(|e| e.start > now)
            .cloned()
            .collect()
    }

    /// Events currently in progress (`start <= now <= end`), in original
    /// sequence order
    pub fn ongoing(&self, now: NaiveDateTime) -> Vec<Event> {
        self.lock()
            .events
            .iter()
            .filter(|e| e.start <= now && now <= e.end)
            .cloned()
            .collect()
    }

    /// Run one scheduler tick at `now`.
    ///
    /// Any newly fired notifications are committed to the state file before
    /// this returns, so a crash between ticks never causes a re-fire.
    /// Delivery of the returned notifications is the caller's problem.
    pub fn tick(&self, now: NaiveDateTime) -> Vec<Notification> {
        let mut inner = self.lock();
        let Inner { events, state } = &mut *inner;
        let fired = evaluate_tick(now, events, state);
        if !fired.is_empty() {
            if let Err(e) = state.save(&self.state_path) {
                error!(
                    "Failed to persist announcement state to {}: {e}",
                    self.state_path.display()
                );
            }
        }
        fired
    }

    /// Total number of stored events
    pub fn event_count(&self) -> usize {
        self.lock().events.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // Lock poisoning only happens if a holder panicked; the data is
        // still append-only consistent, so keep going.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
