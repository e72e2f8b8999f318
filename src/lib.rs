// Core layer - shared types and configuration
pub mod core;

// Features layer - event scheduling and the keep-alive endpoint
pub mod features;

// Application layer
pub mod command_handler;
pub mod commands;

// Re-export core config
pub use core::Config;

// Re-export feature items
pub use features::{
    // Events
    Event, EventError, EventStore, Notification, NotificationKind,
    // Keep-alive
    keep_alive,
};
