use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info};
use serenity::async_trait;
use serenity::model::application::interaction::Interaction;
use serenity::model::gateway::Ready;
use serenity::model::id::{ChannelId, GuildId};
use serenity::prelude::*;
use std::sync::Arc;

use herald::commands::{register_guild_commands, CommandContext};
use herald::command_handler::CommandHandler;
use herald::core::Config;
use herald::features::events::{scheduler, EventStore};
use herald::features::keep_alive;

struct Handler {
    command_handler: Arc<CommandHandler>,
    guild_id: GuildId,
}

impl Handler {
    fn new(command_handler: CommandHandler, guild_id: GuildId) -> Self {
        Handler {
            command_handler: Arc::new(command_handler),
            guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🤖 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());

        // Guild-scoped registration updates instantly for the single guild
        if let Err(e) = register_guild_commands(&ctx, self.guild_id).await {
            error!("❌ Failed to register guild slash commands: {e}");
        } else {
            info!(
                "✅ Slash commands registered for guild {} (instant update)",
                self.guild_id
            );
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::ApplicationCommand(command) = interaction {
            if let Err(e) = self
                .command_handler
                .handle_slash_command(&ctx, &command)
                .await
            {
                error!(
                    "Error handling slash command '{}': {}",
                    command.data.name, e
                );

                let error_message =
                    "❌ Sorry, I encountered an error processing your command. Please try again.";

                // Try to edit a deferred response, fall back to a fresh one
                if command
                    .edit_original_interaction_response(&ctx.http, |response| {
                        response.content(error_message)
                    })
                    .await
                    .is_err()
                {
                    let _ = command
                        .create_interaction_response(&ctx.http, |response| {
                            response
                                .kind(serenity::model::application::interaction::InteractionResponseType::ChannelMessageWithSource)
                                .interaction_response_data(|message| message.content(error_message))
                        })
                        .await;
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting Herald announcement bot...");

    let store = EventStore::open(&config.data_dir);
    let announce_channel_id = ChannelId(config.announce_channel_id);

    let command_handler =
        CommandHandler::new(CommandContext::new(store.clone(), announce_channel_id));
    let handler = Handler::new(command_handler, GuildId(config.guild_id));

    // Slash commands only, no message content needed
    let intents = GatewayIntents::GUILDS;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Bot configured successfully. Connecting to Discord gateway...");

    // Start the announcement scheduler
    let http = client.cache_and_http.http.clone();
    let scheduler_store = store.clone();
    tokio::spawn(async move {
        scheduler::run(scheduler_store, http, announce_channel_id).await;
    });

    // Start the keep-alive endpoint
    let keep_alive_addr = config.keep_alive_addr;
    tokio::spawn(async move {
        if let Err(e) = keep_alive::serve(keep_alive_addr).await {
            error!("Keep-alive endpoint failed: {e}");
        }
    });

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
