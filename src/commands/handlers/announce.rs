//! Announce command handler
//!
//! Handles: announce

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::slash::{get_bool_option, get_string_option};
use crate::core::embeds::announcement_embed;
use crate::features::events::EventError;

/// Handler for creating and announcing new events
pub struct AnnounceHandler;

#[async_trait]
impl SlashCommandHandler for AnnounceHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["announce"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        if !ctx.in_announce_channel(command) {
            return respond_ephemeral(
                serenity_ctx,
                command,
                "Use this command only in the announcement channel.",
            )
            .await;
        }

        let options = &command.data.options;
        let title = get_string_option(options, "title")
            .ok_or_else(|| anyhow::anyhow!("Missing title parameter"))?;
        let date = get_string_option(options, "date")
            .ok_or_else(|| anyhow::anyhow!("Missing date parameter"))?;
        let start_time = get_string_option(options, "start_time")
            .ok_or_else(|| anyhow::anyhow!("Missing start_time parameter"))?;
        let end_time = get_string_option(options, "end_time")
            .ok_or_else(|| anyhow::anyhow!("Missing end_time parameter"))?;
        let location = get_string_option(options, "location")
            .ok_or_else(|| anyhow::anyhow!("Missing location parameter"))?;
        let description = get_string_option(options, "description");
        let ping_everyone = get_bool_option(options, "ping_everyone").unwrap_or(true);

        let event = match ctx.store.add_event(
            &title,
            &date,
            &start_time,
            &end_time,
            &location,
            description,
        ) {
            Ok(event) => event,
            Err(EventError::InvalidWindow) => {
                return respond_ephemeral(
                    serenity_ctx,
                    command,
                    "❌ End time cannot be before Start time.",
                )
                .await;
            }
            Err(EventError::InvalidTimeFormat(_)) => {
                return respond_ephemeral(
                    serenity_ctx,
                    command,
                    "❌ **Invalid format!**\nUse `YYYY-MM-DD` for date and `HH:MM` (24hr) for time.\nExample: `2026-01-20` and `14:30`",
                )
                .await;
            }
        };

        info!(
            "Event `{}` ({} - {}) announced by {}",
            event.title,
            event.start_display(),
            event.end_display(),
            command.user.name
        );

        // Acknowledge first: the announcement itself is a separate channel
        // message so it outlives the interaction.
        command.defer(&serenity_ctx.http).await?;

        let posted_by = match command.guild_id {
            Some(guild_id) => command
                .user
                .nick_in(&serenity_ctx.http, guild_id)
                .await
                .unwrap_or_else(|| command.user.name.clone()),
            None => command.user.name.clone(),
        };
        let embed = announcement_embed(&event, &posted_by);
        command
            .channel_id
            .send_message(&serenity_ctx.http, |m| {
                if ping_everyone {
                    m.content("@everyone");
                }
                m.set_embed(embed)
            })
            .await?;

        command
            .create_followup_message(&serenity_ctx.http, |m| {
                m.content("✅ Event announced successfully!").ephemeral(true)
            })
            .await?;

        Ok(())
    }
}

async fn respond_ephemeral(
    serenity_ctx: &Context,
    command: &ApplicationCommandInteraction,
    content: &str,
) -> Result<()> {
    command
        .create_interaction_response(&serenity_ctx.http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|msg| msg.content(content).ephemeral(true))
        })
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announce_handler_commands() {
        let handler = AnnounceHandler;
        assert_eq!(handler.command_names(), &["announce"]);
    }
}
