//! Event query command handlers
//!
//! Handles: events, now

use anyhow::Result;
use async_trait::async_trait;
use chrono::Local;
use log::debug;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::features::events::Event;

/// Handler for the event listing commands
pub struct EventsHandler;

#[async_trait]
impl SlashCommandHandler for EventsHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["events", "now"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        if !ctx.in_announce_channel(command) {
            return respond(serenity_ctx, command, WRONG_CHANNEL, true).await;
        }

        let now = Local::now().naive_local();
        let content = match command.data.name.as_str() {
            "events" => {
                let upcoming = ctx.store.upcoming(now);
                debug!("/events: {} upcoming", upcoming.len());
                Self::format_upcoming(&upcoming)
            }
            "now" => {
                let ongoing = ctx.store.ongoing(now);
                debug!("/now: {} ongoing", ongoing.len());
                Self::format_ongoing(&ongoing)
            }
            other => anyhow::bail!("EventsHandler received unexpected command /{other}"),
        };

        respond(serenity_ctx, command, &content, false).await
    }
}

const WRONG_CHANNEL: &str = "Use this command only in the announcement channel.";

impl EventsHandler {
    /// Message body for `/events`
    fn format_upcoming(events: &[Event]) -> String {
        if events.is_empty() {
            return "📭 No upcoming events found.".to_string();
        }
        let mut msg = String::from("📅 **Upcoming Events:**\n");
        for e in events {
            msg.push_str(&format!(
                "• **{}**\n  🕒 {}\n  📍 {}\n",
                e.title,
                e.start_display(),
                e.location
            ));
        }
        msg
    }

    /// Message body for `/now`
    fn format_ongoing(events: &[Event]) -> String {
        if events.is_empty() {
            return "😴 No events are happening right now.".to_string();
        }
        let mut msg = String::from("🔴 **Happening Now:**\n");
        for e in events {
            msg.push_str(&format!("• **{}**\n  📍 {}\n", e.title, e.location));
        }
        msg
    }
}

async fn respond(
    serenity_ctx: &Context,
    command: &ApplicationCommandInteraction,
    content: &str,
    ephemeral: bool,
) -> Result<()> {
    command
        .create_interaction_response(&serenity_ctx.http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|msg| msg.content(content).ephemeral(ephemeral))
        })
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_event(title: &str) -> Event {
        let day = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
        Event::new(
            title,
            day.and_hms_opt(15, 0, 0).unwrap(),
            day.and_hms_opt(16, 30, 0).unwrap(),
            "Seminar Hall, D Block",
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_events_handler_commands() {
        // Every name here must have an explicit arm in `handle`
        let handler = EventsHandler;
        assert_eq!(handler.command_names(), &["events", "now"]);
    }

    #[test]
    fn test_format_upcoming_empty() {
        assert_eq!(
            EventsHandler::format_upcoming(&[]),
            "📭 No upcoming events found."
        );
    }

    #[test]
    fn test_format_upcoming_lists_events() {
        let msg = EventsHandler::format_upcoming(&[sample_event("AI Workshop")]);
        assert!(msg.starts_with("📅 **Upcoming Events:**"));
        assert!(msg.contains("**AI Workshop**"));
        assert!(msg.contains("2026-01-14 15:00"));
        assert!(msg.contains("Seminar Hall, D Block"));
    }

    #[test]
    fn test_format_ongoing_empty() {
        assert_eq!(
            EventsHandler::format_ongoing(&[]),
            "😴 No events are happening right now."
        );
    }

    #[test]
    fn test_format_ongoing_omits_times() {
        let msg = EventsHandler::format_ongoing(&[sample_event("AI Workshop")]);
        assert!(msg.starts_with("🔴 **Happening Now:**"));
        assert!(msg.contains("**AI Workshop**"));
        assert!(!msg.contains("15:00"));
    }
}
