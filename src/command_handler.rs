//! Application-layer dispatch for slash command interactions
//!
//! Owns the handler registry and the shared command context; the gateway
//! event handler forwards every application command interaction here.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, warn};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;

use crate::commands::handlers::create_all_handlers;
use crate::commands::{CommandContext, CommandRegistry};

/// Dispatches slash commands to their registered handlers
pub struct CommandHandler {
    registry: CommandRegistry,
    context: Arc<CommandContext>,
}

impl CommandHandler {
    /// Build the handler with every known command registered
    pub fn new(context: CommandContext) -> Self {
        let mut registry = CommandRegistry::new();
        for handler in create_all_handlers() {
            registry.register(handler);
        }
        Self {
            registry,
            context: Arc::new(context),
        }
    }

    /// Route a slash command interaction to its handler.
    ///
    /// Unknown commands (stale registrations) get an ephemeral reply rather
    /// than a silent timeout.
    pub async fn handle_slash_command(
        &self,
        ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let name = command.data.name.as_str();
        debug!("Dispatching /{name} from {}", command.user.name);

        match self.registry.get(name) {
            Some(handler) => handler.handle(Arc::clone(&self.context), ctx, command).await,
            None => {
                warn!("No handler registered for /{name}");
                command
                    .create_interaction_response(&ctx.http, |response| {
                        response
                            .kind(InteractionResponseType::ChannelMessageWithSource)
                            .interaction_response_data(|msg| {
                                msg.content("❓ Unknown command.").ephemeral(true)
                            })
                    })
                    .await?;
                Ok(())
            }
        }
    }
}
