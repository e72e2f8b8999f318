//! # Events Feature
//!
//! Campus event records, the reminder scheduler, and JSON-backed
//! announcement state.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Persist the event list so `/announce`d events survive restarts
//! - 1.1.0: Stable uuid announcement keys instead of list position
//! - 1.0.0: Initial scheduler with soon/live windows

pub mod event;
pub mod scheduler;
pub mod state;
pub mod store;

pub use event::{parse_datetime, Event, EventError, TIME_FORMAT};
pub use scheduler::{evaluate_tick, Notification, NotificationKind, LEAD_MINUTES};
pub use state::AnnouncementState;
pub use store::EventStore;
