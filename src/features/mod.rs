//! # Features Layer
//!
//! Feature modules for the herald bot.

pub mod events;
pub mod keep_alive;

pub use events::{Event, EventError, EventStore, Notification, NotificationKind};
