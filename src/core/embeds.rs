//! Announcement embed builders for Discord responses
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Dyno-style `/announce` embed

use serenity::builder::CreateEmbed;
use serenity::model::Timestamp;
use serenity::utils::Colour;

use crate::features::events::Event;

const THUMBNAIL_URL: &str = "https://cdn-icons-png.flaticon.com/512/747/747310.png";

/// Build the Dyno-style embed posted when an event is announced: title,
/// date/time/location fields, posted-by footer, calendar thumbnail.
pub fn announcement_embed(event: &Event, posted_by: &str) -> CreateEmbed {
    let date = event.start.format("%Y-%m-%d").to_string();
    let time_range = format!(
        "{} - {}",
        event.start.format("%H:%M"),
        event.end.format("%H:%M")
    );

    let description = event
        .description
        .clone()
        .unwrap_or_else(|| "A new event has been scheduled! Check the details below.".to_string());

    let mut embed = CreateEmbed::default();
    embed
        .title(format!("📢 {}", event.title))
        .description(description)
        .colour(Colour::BLUE)
        .timestamp(Timestamp::now())
        .field("📅 Date", date, true)
        .field("🕒 Time", time_range, true)
        .field("📍 Location", &event.location, false)
        .footer(|f| f.text(format!("Posted by {posted_by}")))
        .thumbnail(THUMBNAIL_URL);
    embed
}
