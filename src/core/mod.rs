//! # Core Module
//!
//! Core domain types, configuration, and shared Discord builders for the
//! herald bot.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod config;
pub mod embeds;

// Re-export commonly used items
pub use config::Config;
pub use embeds::announcement_embed;
